//! Proxy HTTP payload serde models and conversion helpers.

use serde::{Deserialize, Serialize};

use crate::ProviderError;

pub(crate) fn build_api_request(model: &str, prompt: &str) -> ProxyApiRequest {
    ProxyApiRequest {
        model: model.to_string(),
        messages: vec![ProxyApiMessage {
            role: "user".to_string(),
            content: prompt.to_string(),
        }],
    }
}

/// Reads `choices[0].message.content`, classifying an absent choice or
/// content as filtered when a finish reason was given and malformed otherwise.
pub(crate) fn parse_chat_response(body: &str) -> Result<String, ProviderError> {
    let parsed = serde_json::from_str::<ProxyApiResponse>(body).map_err(|err| {
        ProviderError::malformed(format!("proxy response is not valid JSON: {err}"))
    })?;

    let Some(choice) = parsed.choices.unwrap_or_default().into_iter().next() else {
        let detail = parsed
            .error
            .map(|error| format!(" ({})", error.message))
            .unwrap_or_default();
        return Err(ProviderError::malformed(format!(
            "proxy response did not include choices[0]{detail}"
        )));
    };

    match choice.message.and_then(|message| message.content) {
        Some(content) => Ok(content),
        None => match choice.finish_reason {
            Some(reason) => Err(ProviderError::filtered(format!(
                "proxy returned an empty response (finish_reason: {reason})"
            ))),
            None => Err(ProviderError::malformed(
                "proxy response choice had no message content",
            )),
        },
    }
}

pub(crate) fn parse_models_response(body: &str) -> Result<Vec<String>, ProviderError> {
    let parsed = serde_json::from_str::<ProxyApiModelList>(body).map_err(|err| {
        ProviderError::malformed(format!("model list is not valid JSON: {err}"))
    })?;

    let mut ids = parsed
        .data
        .unwrap_or_default()
        .into_iter()
        .map(|model| model.id)
        .collect::<Vec<_>>();
    ids.sort();
    Ok(ids)
}

#[derive(Debug, Serialize)]
pub(crate) struct ProxyApiRequest {
    pub model: String,
    pub messages: Vec<ProxyApiMessage>,
}

#[derive(Debug, Serialize)]
pub(crate) struct ProxyApiMessage {
    pub role: String,
    pub content: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ProxyApiResponse {
    #[serde(default)]
    pub choices: Option<Vec<ProxyApiChoice>>,
    #[serde(default)]
    pub error: Option<ProxyApiError>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ProxyApiChoice {
    #[serde(default)]
    pub message: Option<ProxyApiAssistantMessage>,
    #[serde(default)]
    pub finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ProxyApiAssistantMessage {
    #[serde(default)]
    pub content: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ProxyApiError {
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ProxyApiModelList {
    #[serde(default)]
    pub data: Option<Vec<ProxyApiModel>>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ProxyApiModel {
    pub id: String,
}
