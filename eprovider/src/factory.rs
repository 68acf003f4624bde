//! Per-request adapter selection from a provider kind and its connection fields.
//!
//! ```rust
//! use eprovider::{ProviderConfig, ProviderKind};
//!
//! let config = ProviderConfig::new(ProviderKind::Proxy, "https://relay.test/v1", "sk-1")
//!     .with_model("gpt-4o-mini");
//! assert_eq!(config.model, "gpt-4o-mini");
//! assert_eq!(format!("{:?}", config.api_key), "[REDACTED]");
//! ```

use std::sync::Arc;

use crate::{
    ChatProvider, NoopOperationHooks, ProviderError, ProviderKind, ProviderOperationHooks,
    ProviderTransport, ReqwestTransport, SecretString,
};

#[derive(Debug, Clone)]
pub struct ProviderConfig {
    pub kind: ProviderKind,
    pub endpoint: String,
    pub model: String,
    pub api_key: SecretString,
}

impl ProviderConfig {
    pub fn new(
        kind: ProviderKind,
        endpoint: impl Into<String>,
        api_key: impl Into<SecretString>,
    ) -> Self {
        Self {
            kind,
            endpoint: endpoint.into(),
            model: String::new(),
            api_key: api_key.into(),
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }
}

pub trait ProviderFactory: Send + Sync {
    fn build(&self, config: &ProviderConfig) -> Result<Arc<dyn ChatProvider>, ProviderError>;
}

/// Builds HTTP-backed adapters over a shared transport and hook set.
#[derive(Clone)]
pub struct HttpProviderFactory {
    transport: Arc<dyn ProviderTransport>,
    hooks: Arc<dyn ProviderOperationHooks>,
}

impl HttpProviderFactory {
    pub fn new(transport: Arc<dyn ProviderTransport>) -> Self {
        Self {
            transport,
            hooks: Arc::new(NoopOperationHooks),
        }
    }

    pub fn with_hooks(mut self, hooks: Arc<dyn ProviderOperationHooks>) -> Self {
        self.hooks = hooks;
        self
    }
}

impl Default for HttpProviderFactory {
    fn default() -> Self {
        Self::new(Arc::new(ReqwestTransport::default()))
    }
}

impl ProviderFactory for HttpProviderFactory {
    fn build(&self, config: &ProviderConfig) -> Result<Arc<dyn ChatProvider>, ProviderError> {
        if config.endpoint.trim().is_empty() {
            return Err(ProviderError::invalid_request("provider endpoint must not be empty"));
        }

        if config.api_key.is_empty() {
            return Err(ProviderError::invalid_request("provider API key must not be empty"));
        }

        match config.kind {
            ProviderKind::Proxy => build_proxy_provider(self, config),
            ProviderKind::Direct => build_direct_provider(self, config),
        }
    }
}

#[cfg(feature = "provider-proxy")]
fn build_proxy_provider(
    factory: &HttpProviderFactory,
    config: &ProviderConfig,
) -> Result<Arc<dyn ChatProvider>, ProviderError> {
    if config.model.trim().is_empty() {
        return Err(ProviderError::invalid_request(
            "proxy provider requires a model",
        ));
    }

    Ok(Arc::new(
        crate::adapters::proxy::ProxyProvider::new(
            Arc::clone(&factory.transport),
            config.endpoint.clone(),
            config.model.clone(),
            config.api_key.clone(),
        )
        .with_hooks(Arc::clone(&factory.hooks)),
    ))
}

#[cfg(not(feature = "provider-proxy"))]
fn build_proxy_provider(
    _factory: &HttpProviderFactory,
    _config: &ProviderConfig,
) -> Result<Arc<dyn ChatProvider>, ProviderError> {
    Err(ProviderError::invalid_request(
        "provider-proxy feature is not enabled on eprovider",
    ))
}

#[cfg(feature = "provider-direct")]
fn build_direct_provider(
    factory: &HttpProviderFactory,
    config: &ProviderConfig,
) -> Result<Arc<dyn ChatProvider>, ProviderError> {
    Ok(Arc::new(
        crate::adapters::direct::DirectProvider::new(
            Arc::clone(&factory.transport),
            config.endpoint.clone(),
            config.api_key.clone(),
        )
        .with_hooks(Arc::clone(&factory.hooks)),
    ))
}

#[cfg(not(feature = "provider-direct"))]
fn build_direct_provider(
    _factory: &HttpProviderFactory,
    _config: &ProviderConfig,
) -> Result<Arc<dyn ChatProvider>, ProviderError> {
    Err(ProviderError::invalid_request(
        "provider-direct feature is not enabled on eprovider",
    ))
}

#[cfg(all(test, feature = "provider-proxy", feature = "provider-direct"))]
mod tests {
    use super::*;
    use crate::{HttpRequest, HttpResponse, ProviderErrorKind, ProviderFuture};

    #[derive(Debug)]
    struct UnusedTransport;

    impl ProviderTransport for UnusedTransport {
        fn execute<'a>(
            &'a self,
            _request: HttpRequest,
        ) -> ProviderFuture<'a, Result<HttpResponse, ProviderError>> {
            Box::pin(async { Err(ProviderError::transport("not used")) })
        }
    }

    fn factory() -> HttpProviderFactory {
        HttpProviderFactory::new(Arc::new(UnusedTransport))
    }

    #[test]
    fn build_selects_adapter_by_kind() {
        let proxy = factory()
            .build(
                &ProviderConfig::new(ProviderKind::Proxy, "https://relay.test/v1", "sk-1")
                    .with_model("gpt-4o-mini"),
            )
            .expect("proxy should build");
        assert_eq!(proxy.kind(), ProviderKind::Proxy);

        let direct = factory()
            .build(&ProviderConfig::new(
                ProviderKind::Direct,
                "https://direct.test/v1beta/models/m:generateContent",
                "key-1",
            ))
            .expect("direct should build");
        assert_eq!(direct.kind(), ProviderKind::Direct);
    }

    #[test]
    fn build_rejects_missing_connection_fields() {
        let no_key = factory()
            .build(&ProviderConfig::new(ProviderKind::Direct, "https://direct.test", " "))
            .err()
            .expect("missing key must fail");
        assert_eq!(no_key.kind, ProviderErrorKind::InvalidRequest);

        let no_model = factory()
            .build(&ProviderConfig::new(
                ProviderKind::Proxy,
                "https://relay.test/v1",
                "sk-1",
            ))
            .err()
            .expect("proxy without model must fail");
        assert_eq!(no_model.message, "proxy provider requires a model");
    }
}
