//! Runtime hook contracts for observing turns and summaries.
//!
//! ```rust
//! use echat::{ChatRuntimeHooks, NoopChatHooks};
//!
//! fn accepts_hooks(_hooks: &dyn ChatRuntimeHooks) {}
//!
//! let hooks = NoopChatHooks;
//! accepts_hooks(&hooks);
//! ```

use std::time::Duration;

use ecommon::SessionId;
use eprovider::{ProviderError, ProviderKind};

use crate::ExtractionFallback;

pub trait ChatRuntimeHooks: Send + Sync {
    fn on_turn_start(&self, _session_id: &SessionId, _provider: ProviderKind, _context_len: usize) {
    }

    fn on_turn_complete(
        &self,
        _session_id: &SessionId,
        _provider: ProviderKind,
        _suggestion_count: usize,
        _elapsed: Duration,
    ) {
    }

    /// The turn still completed; the assistant entry carries the error text.
    fn on_turn_failed(
        &self,
        _session_id: &SessionId,
        _provider: ProviderKind,
        _error: &ProviderError,
        _elapsed: Duration,
    ) {
    }

    fn on_extraction_fallback(
        &self,
        _session_id: &SessionId,
        _provider: ProviderKind,
        _fallback: ExtractionFallback,
    ) {
    }

    fn on_suggestions_dropped(&self, _session_id: &SessionId, _provider: ProviderKind, _reason: &str) {
    }

    fn on_summary_complete(
        &self,
        _session_id: &SessionId,
        _provider: ProviderKind,
        _context_len: usize,
        _elapsed: Duration,
    ) {
    }

    fn on_summary_failed(
        &self,
        _session_id: &SessionId,
        _provider: ProviderKind,
        _error: &ProviderError,
        _elapsed: Duration,
    ) {
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct NoopChatHooks;

impl ChatRuntimeHooks for NoopChatHooks {}
