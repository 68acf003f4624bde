//! Tracing-based observability hooks for provider calls and chat turns.
//!
//! ```rust
//! use echat::ChatRuntimeHooks;
//! use eobserve::TracingObservabilityHooks;
//!
//! fn accepts_chat_hooks(_hooks: &dyn ChatRuntimeHooks) {}
//!
//! let hooks = TracingObservabilityHooks;
//! accepts_chat_hooks(&hooks);
//! ```

use std::time::Duration;

use echat::{ChatRuntimeHooks, ExtractionFallback};
use ecommon::{SessionId, truncate_chars};
use eprovider::{ProviderError, ProviderKind, ProviderOperationHooks};

/// Provider error bodies are echoed verbatim, so logs keep only a prefix.
pub const MAX_LOGGED_ERROR_CHARS: usize = 256;

#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObservabilityHooks;

fn bounded(error: &ProviderError) -> String {
    truncate_chars(&error.to_string(), MAX_LOGGED_ERROR_CHARS)
}

impl ProviderOperationHooks for TracingObservabilityHooks {
    fn on_request_start(&self, provider: ProviderKind, operation: &str) {
        tracing::info!(
            phase = "provider",
            event = "request_start",
            provider = %provider,
            operation
        );
    }

    fn on_success(&self, provider: ProviderKind, operation: &str, elapsed: Duration) {
        tracing::info!(
            phase = "provider",
            event = "success",
            provider = %provider,
            operation,
            elapsed_ms = elapsed.as_millis() as u64
        );
    }

    fn on_failure(
        &self,
        provider: ProviderKind,
        operation: &str,
        elapsed: Duration,
        error: &ProviderError,
    ) {
        tracing::error!(
            phase = "provider",
            event = "failure",
            provider = %provider,
            operation,
            elapsed_ms = elapsed.as_millis() as u64,
            error_kind = ?error.kind,
            status = error.status,
            error = %bounded(error)
        );
    }
}

impl ChatRuntimeHooks for TracingObservabilityHooks {
    fn on_turn_start(&self, session_id: &SessionId, provider: ProviderKind, context_len: usize) {
        tracing::info!(
            phase = "turn",
            event = "start",
            session_id = %session_id,
            provider = %provider,
            context_len
        );
    }

    fn on_turn_complete(
        &self,
        session_id: &SessionId,
        provider: ProviderKind,
        suggestion_count: usize,
        elapsed: Duration,
    ) {
        tracing::info!(
            phase = "turn",
            event = "complete",
            session_id = %session_id,
            provider = %provider,
            suggestion_count,
            elapsed_ms = elapsed.as_millis() as u64
        );
    }

    fn on_turn_failed(
        &self,
        session_id: &SessionId,
        provider: ProviderKind,
        error: &ProviderError,
        elapsed: Duration,
    ) {
        tracing::error!(
            phase = "turn",
            event = "failed",
            session_id = %session_id,
            provider = %provider,
            elapsed_ms = elapsed.as_millis() as u64,
            error_kind = ?error.kind,
            error = %bounded(error)
        );
    }

    fn on_extraction_fallback(
        &self,
        session_id: &SessionId,
        provider: ProviderKind,
        fallback: ExtractionFallback,
    ) {
        tracing::warn!(
            phase = "turn",
            event = "extraction_fallback",
            session_id = %session_id,
            provider = %provider,
            fallback = fallback.as_str()
        );
    }

    fn on_suggestions_dropped(&self, session_id: &SessionId, provider: ProviderKind, reason: &str) {
        tracing::warn!(
            phase = "turn",
            event = "suggestions_dropped",
            session_id = %session_id,
            provider = %provider,
            reason = %truncate_chars(reason, MAX_LOGGED_ERROR_CHARS)
        );
    }

    fn on_summary_complete(
        &self,
        session_id: &SessionId,
        provider: ProviderKind,
        context_len: usize,
        elapsed: Duration,
    ) {
        tracing::info!(
            phase = "summary",
            event = "complete",
            session_id = %session_id,
            provider = %provider,
            context_len,
            elapsed_ms = elapsed.as_millis() as u64
        );
    }

    fn on_summary_failed(
        &self,
        session_id: &SessionId,
        provider: ProviderKind,
        error: &ProviderError,
        elapsed: Duration,
    ) {
        tracing::error!(
            phase = "summary",
            event = "failed",
            session_id = %session_id,
            provider = %provider,
            elapsed_ms = elapsed.as_millis() as u64,
            error_kind = ?error.kind,
            error = %bounded(error)
        );
    }
}
