use crate::{CompletionRequest, ProviderError, ProviderKind};

pub type ProviderFuture<'a, T> = ecommon::BoxFuture<'a, T>;

/// One backend protocol, translating rendered prompts into wire calls.
pub trait ChatProvider: Send + Sync {
    fn kind(&self) -> ProviderKind;

    /// Sends a prompt and returns the raw model text.
    fn send_chat<'a>(
        &'a self,
        request: CompletionRequest,
    ) -> ProviderFuture<'a, Result<String, ProviderError>>;

    /// Sends a dedicated suggestion prompt.
    ///
    /// Returns `Ok(None)` for adapters whose turn prompt already carries the
    /// suggestions, without touching the network.
    fn send_suggestions<'a>(
        &'a self,
        request: CompletionRequest,
    ) -> ProviderFuture<'a, Result<Option<String>, ProviderError>>;
}
