use std::sync::Arc;

use crate::{
    ChatProvider, CompletionRequest, HttpRequest, NoopOperationHooks, ProviderError,
    ProviderFuture, ProviderKind, ProviderOperationHooks, ProviderTransport, SecretString,
    observe_operation,
};

use super::serde_api::{build_api_request, parse_chat_response, parse_models_response};

pub const CHAT_COMPLETIONS_PATH: &str = "/chat/completions";

/// Normalizes a relay endpoint so it ends in `/chat/completions`.
///
/// ```rust
/// use eprovider::adapters::proxy::chat_completions_url;
///
/// assert_eq!(
///     chat_completions_url("https://relay.test/v1/"),
///     "https://relay.test/v1/chat/completions"
/// );
/// assert_eq!(
///     chat_completions_url("https://relay.test/v1/chat/completions"),
///     "https://relay.test/v1/chat/completions"
/// );
/// ```
pub fn chat_completions_url(endpoint: &str) -> String {
    let trimmed = endpoint.trim().trim_end_matches('/');
    if trimmed.ends_with(CHAT_COMPLETIONS_PATH) {
        trimmed.to_string()
    } else {
        format!("{trimmed}{CHAT_COMPLETIONS_PATH}")
    }
}

/// Model discovery URL: the endpoint minus a trailing `/chat/completions`, plus `/models`.
pub fn models_url(endpoint: &str) -> String {
    let trimmed = endpoint.trim().trim_end_matches('/');
    let base = trimmed
        .strip_suffix(CHAT_COMPLETIONS_PATH)
        .unwrap_or(trimmed)
        .trim_end_matches('/');
    format!("{base}/models")
}

#[derive(Clone)]
pub struct ProxyProvider {
    transport: Arc<dyn ProviderTransport>,
    hooks: Arc<dyn ProviderOperationHooks>,
    endpoint: String,
    model: String,
    api_key: SecretString,
}

impl ProxyProvider {
    pub fn new(
        transport: Arc<dyn ProviderTransport>,
        endpoint: impl Into<String>,
        model: impl Into<String>,
        api_key: impl Into<SecretString>,
    ) -> Self {
        Self {
            transport,
            hooks: Arc::new(NoopOperationHooks),
            endpoint: endpoint.into(),
            model: model.into(),
            api_key: api_key.into(),
        }
    }

    pub fn with_hooks(mut self, hooks: Arc<dyn ProviderOperationHooks>) -> Self {
        self.hooks = hooks;
        self
    }

    pub(crate) fn build_proxy_request(
        &self,
        request: &CompletionRequest,
    ) -> Result<HttpRequest, ProviderError> {
        let body = serde_json::to_value(build_api_request(&self.model, &request.prompt))
            .map_err(|err| ProviderError::invalid_request(err.to_string()))?;

        Ok(HttpRequest::post(chat_completions_url(&self.endpoint), body)
            .with_bearer(self.api_key.clone()))
    }

    /// Lists the relay's model ids, sorted lexicographically.
    pub fn list_models(&self) -> ProviderFuture<'_, Result<Vec<String>, ProviderError>> {
        Box::pin(observe_operation(
            ProviderKind::Proxy,
            "list_models",
            self.hooks.as_ref(),
            async move {
                let request =
                    HttpRequest::get(models_url(&self.endpoint)).with_bearer(self.api_key.clone());
                let response = self.transport.execute(request).await?.error_for_status()?;
                parse_models_response(&response.body)
            },
        ))
    }
}

impl ChatProvider for ProxyProvider {
    fn kind(&self) -> ProviderKind {
        ProviderKind::Proxy
    }

    fn send_chat<'a>(
        &'a self,
        request: CompletionRequest,
    ) -> ProviderFuture<'a, Result<String, ProviderError>> {
        Box::pin(observe_operation(
            ProviderKind::Proxy,
            "chat",
            self.hooks.as_ref(),
            async move {
                request.validate()?;
                let http_request = self.build_proxy_request(&request)?;
                let response = self
                    .transport
                    .execute(http_request)
                    .await?
                    .error_for_status()?;
                parse_chat_response(&response.body)
            },
        ))
    }

    fn send_suggestions<'a>(
        &'a self,
        _request: CompletionRequest,
    ) -> ProviderFuture<'a, Result<Option<String>, ProviderError>> {
        Box::pin(async { Ok(None) })
    }
}
