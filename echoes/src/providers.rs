//! Stable provider construction surface for facade consumers.

use std::sync::Arc;

use reqwest::Client;

use crate::{
    ChatProvider, HttpProviderFactory, ProviderError, ProviderFactory, ProviderKind,
    ProviderOperationHooks, ProviderTransport, ReqwestTransport, SafeProviderHooks, Settings,
    TracingObservabilityHooks,
};

/// Shared reqwest-backed transport. No request timeout is applied.
pub fn http_transport() -> Result<Arc<dyn ProviderTransport>, ProviderError> {
    let client = Client::builder()
        .build()
        .map_err(|err| ProviderError::transport(err.to_string()))?;
    Ok(Arc::new(ReqwestTransport::new(client)))
}

/// Factory whose adapters report through panic-isolated tracing hooks.
pub fn provider_factory(transport: Arc<dyn ProviderTransport>) -> HttpProviderFactory {
    let hooks: Arc<dyn ProviderOperationHooks> =
        Arc::new(SafeProviderHooks::new(TracingObservabilityHooks));
    HttpProviderFactory::new(transport).with_hooks(hooks)
}

pub fn build_provider(settings: &Settings) -> Result<Arc<dyn ChatProvider>, ProviderError> {
    build_provider_with(settings, http_transport()?)
}

pub fn build_provider_with(
    settings: &Settings,
    transport: Arc<dyn ProviderTransport>,
) -> Result<Arc<dyn ChatProvider>, ProviderError> {
    provider_factory(transport).build(&settings.provider_config())
}

/// Model discovery, available for the proxy provider only.
pub async fn list_models(settings: &Settings) -> Result<Vec<String>, ProviderError> {
    list_models_with(settings, http_transport()?).await
}

pub async fn list_models_with(
    settings: &Settings,
    transport: Arc<dyn ProviderTransport>,
) -> Result<Vec<String>, ProviderError> {
    match settings.provider_kind {
        ProviderKind::Proxy => list_proxy_models(settings, transport).await,
        ProviderKind::Direct => Err(ProviderError::invalid_request(
            "model listing is supported for the proxy provider only",
        )),
    }
}

#[cfg(feature = "provider-proxy")]
async fn list_proxy_models(
    settings: &Settings,
    transport: Arc<dyn ProviderTransport>,
) -> Result<Vec<String>, ProviderError> {
    let endpoint = settings.endpoint.trim();
    let api_key = settings.api_key.trim();
    if endpoint.is_empty() || api_key.is_empty() {
        return Err(ProviderError::invalid_request(
            "endpoint and API key are required to list models",
        ));
    }

    // The model field may still be empty while the user is choosing one.
    eprovider::adapters::proxy::ProxyProvider::new(transport, endpoint, "", api_key)
        .with_hooks(Arc::new(SafeProviderHooks::new(TracingObservabilityHooks)))
        .list_models()
        .await
}

#[cfg(not(feature = "provider-proxy"))]
async fn list_proxy_models(
    _settings: &Settings,
    _transport: Arc<dyn ProviderTransport>,
) -> Result<Vec<String>, ProviderError> {
    Err(ProviderError::invalid_request(
        "provider-proxy feature is not enabled on echoes",
    ))
}
