use std::panic::{AssertUnwindSafe, catch_unwind};
use std::time::Duration;

use echat::{ChatRuntimeHooks, ExtractionFallback};
use ecommon::SessionId;
use eprovider::{ProviderError, ProviderKind, ProviderOperationHooks};

/// Swallows panics raised by the wrapped provider hooks.
pub struct SafeProviderHooks<H> {
    inner: H,
}

impl<H> SafeProviderHooks<H> {
    pub fn new(inner: H) -> Self {
        Self { inner }
    }
}

impl<H> ProviderOperationHooks for SafeProviderHooks<H>
where
    H: ProviderOperationHooks,
{
    fn on_request_start(&self, provider: ProviderKind, operation: &str) {
        let _ = catch_unwind(AssertUnwindSafe(|| {
            self.inner.on_request_start(provider, operation)
        }));
    }

    fn on_success(&self, provider: ProviderKind, operation: &str, elapsed: Duration) {
        let _ = catch_unwind(AssertUnwindSafe(|| {
            self.inner.on_success(provider, operation, elapsed)
        }));
    }

    fn on_failure(
        &self,
        provider: ProviderKind,
        operation: &str,
        elapsed: Duration,
        error: &ProviderError,
    ) {
        let _ = catch_unwind(AssertUnwindSafe(|| {
            self.inner.on_failure(provider, operation, elapsed, error)
        }));
    }
}

/// Swallows panics raised by the wrapped chat hooks.
pub struct SafeChatHooks<H> {
    inner: H,
}

impl<H> SafeChatHooks<H> {
    pub fn new(inner: H) -> Self {
        Self { inner }
    }
}

impl<H> ChatRuntimeHooks for SafeChatHooks<H>
where
    H: ChatRuntimeHooks,
{
    fn on_turn_start(&self, session_id: &SessionId, provider: ProviderKind, context_len: usize) {
        let _ = catch_unwind(AssertUnwindSafe(|| {
            self.inner.on_turn_start(session_id, provider, context_len)
        }));
    }

    fn on_turn_complete(
        &self,
        session_id: &SessionId,
        provider: ProviderKind,
        suggestion_count: usize,
        elapsed: Duration,
    ) {
        let _ = catch_unwind(AssertUnwindSafe(|| {
            self.inner
                .on_turn_complete(session_id, provider, suggestion_count, elapsed)
        }));
    }

    fn on_turn_failed(
        &self,
        session_id: &SessionId,
        provider: ProviderKind,
        error: &ProviderError,
        elapsed: Duration,
    ) {
        let _ = catch_unwind(AssertUnwindSafe(|| {
            self.inner
                .on_turn_failed(session_id, provider, error, elapsed)
        }));
    }

    fn on_extraction_fallback(
        &self,
        session_id: &SessionId,
        provider: ProviderKind,
        fallback: ExtractionFallback,
    ) {
        let _ = catch_unwind(AssertUnwindSafe(|| {
            self.inner
                .on_extraction_fallback(session_id, provider, fallback)
        }));
    }

    fn on_suggestions_dropped(&self, session_id: &SessionId, provider: ProviderKind, reason: &str) {
        let _ = catch_unwind(AssertUnwindSafe(|| {
            self.inner
                .on_suggestions_dropped(session_id, provider, reason)
        }));
    }

    fn on_summary_complete(
        &self,
        session_id: &SessionId,
        provider: ProviderKind,
        context_len: usize,
        elapsed: Duration,
    ) {
        let _ = catch_unwind(AssertUnwindSafe(|| {
            self.inner
                .on_summary_complete(session_id, provider, context_len, elapsed)
        }));
    }

    fn on_summary_failed(
        &self,
        session_id: &SessionId,
        provider: ProviderKind,
        error: &ProviderError,
        elapsed: Duration,
    ) {
        let _ = catch_unwind(AssertUnwindSafe(|| {
            self.inner
                .on_summary_failed(session_id, provider, error, elapsed)
        }));
    }
}
