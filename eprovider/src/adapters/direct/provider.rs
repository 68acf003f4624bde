use std::sync::Arc;

use crate::{
    ChatProvider, CompletionRequest, HttpRequest, NoopOperationHooks, ProviderError,
    ProviderFuture, ProviderKind, ProviderOperationHooks, ProviderTransport, ResponseFormat,
    SecretString, observe_operation,
};

use super::serde_api::{build_api_request, parse_generate_response};

/// Posts to the configured endpoint with the key as a `key` query parameter
/// and no bearer header.
#[derive(Clone)]
pub struct DirectProvider {
    transport: Arc<dyn ProviderTransport>,
    hooks: Arc<dyn ProviderOperationHooks>,
    endpoint: String,
    api_key: SecretString,
}

impl DirectProvider {
    pub fn new(
        transport: Arc<dyn ProviderTransport>,
        endpoint: impl Into<String>,
        api_key: impl Into<SecretString>,
    ) -> Self {
        Self {
            transport,
            hooks: Arc::new(NoopOperationHooks),
            endpoint: endpoint.into(),
            api_key: api_key.into(),
        }
    }

    pub fn with_hooks(mut self, hooks: Arc<dyn ProviderOperationHooks>) -> Self {
        self.hooks = hooks;
        self
    }

    pub(crate) fn build_direct_request(
        &self,
        request: &CompletionRequest,
    ) -> Result<HttpRequest, ProviderError> {
        let body = serde_json::to_value(build_api_request(request))
            .map_err(|err| ProviderError::invalid_request(err.to_string()))?;

        Ok(HttpRequest::post(self.endpoint.trim(), body).with_query_key(self.api_key.clone()))
    }

    async fn generate(&self, request: CompletionRequest) -> Result<String, ProviderError> {
        request.validate()?;
        let http_request = self.build_direct_request(&request)?;
        let response = self
            .transport
            .execute(http_request)
            .await?
            .error_for_status()?;
        parse_generate_response(&response.body)
    }
}

impl ChatProvider for DirectProvider {
    fn kind(&self) -> ProviderKind {
        ProviderKind::Direct
    }

    fn send_chat<'a>(
        &'a self,
        request: CompletionRequest,
    ) -> ProviderFuture<'a, Result<String, ProviderError>> {
        Box::pin(observe_operation(
            ProviderKind::Direct,
            "chat",
            self.hooks.as_ref(),
            self.generate(request),
        ))
    }

    fn send_suggestions<'a>(
        &'a self,
        request: CompletionRequest,
    ) -> ProviderFuture<'a, Result<Option<String>, ProviderError>> {
        let request = request.with_format(ResponseFormat::Json);
        Box::pin(async move {
            observe_operation(
                ProviderKind::Direct,
                "suggestions",
                self.hooks.as_ref(),
                self.generate(request),
            )
            .await
            .map(Some)
        })
    }
}
