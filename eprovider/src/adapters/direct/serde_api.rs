//! Direct provider payload serde models and conversion helpers.

use serde::{Deserialize, Serialize};

use crate::{CompletionRequest, ProviderError, ResponseFormat};

pub(crate) const JSON_MIME_TYPE: &str = "application/json";

pub(crate) fn build_api_request(request: &CompletionRequest) -> DirectApiRequest {
    let generation_config = match request.format {
        ResponseFormat::Text => None,
        ResponseFormat::Json => Some(DirectApiGenerationConfig {
            response_mime_type: JSON_MIME_TYPE.to_string(),
        }),
    };

    DirectApiRequest {
        contents: vec![DirectApiContent {
            parts: vec![DirectApiPart {
                text: request.prompt.clone(),
            }],
        }],
        generation_config,
    }
}

/// Reads `candidates[0].content.parts[0].text`.
///
/// A missing candidate or text is `Filtered` when the provider named a block or
/// finish reason and `Malformed` when it did not.
pub(crate) fn parse_generate_response(body: &str) -> Result<String, ProviderError> {
    let parsed = serde_json::from_str::<DirectApiResponse>(body).map_err(|err| {
        ProviderError::malformed(format!("direct provider response is not valid JSON: {err}"))
    })?;

    let Some(candidate) = parsed.candidates.unwrap_or_default().into_iter().next() else {
        let reason = parsed
            .prompt_feedback
            .and_then(|feedback| feedback.block_reason)
            .or(parsed.finish_reason);

        return Err(match reason {
            Some(reason) => ProviderError::filtered(format!(
                "direct provider returned no candidates (reason: {reason})"
            )),
            None => ProviderError::malformed(
                "direct provider response did not include candidates[0]",
            ),
        });
    };

    let text = candidate
        .content
        .and_then(|content| content.parts.unwrap_or_default().into_iter().next())
        .and_then(|part| part.text);

    match (text, candidate.finish_reason) {
        (Some(text), _) => Ok(text),
        (None, Some(reason)) => Err(ProviderError::filtered(format!(
            "direct provider returned an empty candidate (finishReason: {reason})"
        ))),
        (None, None) => Err(ProviderError::malformed(
            "direct provider candidate had no text part",
        )),
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct DirectApiRequest {
    pub contents: Vec<DirectApiContent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generation_config: Option<DirectApiGenerationConfig>,
}

#[derive(Debug, Serialize)]
pub(crate) struct DirectApiContent {
    pub parts: Vec<DirectApiPart>,
}

#[derive(Debug, Serialize)]
pub(crate) struct DirectApiPart {
    pub text: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct DirectApiGenerationConfig {
    pub response_mime_type: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct DirectApiResponse {
    #[serde(default)]
    pub candidates: Option<Vec<DirectApiCandidate>>,
    #[serde(default)]
    pub prompt_feedback: Option<DirectApiPromptFeedback>,
    #[serde(default)]
    pub finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct DirectApiCandidate {
    #[serde(default)]
    pub content: Option<DirectApiCandidateContent>,
    #[serde(default)]
    pub finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct DirectApiCandidateContent {
    #[serde(default)]
    pub parts: Option<Vec<DirectApiResponsePart>>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct DirectApiResponsePart {
    #[serde(default)]
    pub text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct DirectApiPromptFeedback {
    #[serde(default)]
    pub block_reason: Option<String>,
}
