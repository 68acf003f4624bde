//! Metrics-based observability hooks for provider calls and chat turns.
//!
//! ```rust
//! use eobserve::MetricsObservabilityHooks;
//! use eprovider::ProviderOperationHooks;
//!
//! fn accepts_provider_hooks(_hooks: &dyn ProviderOperationHooks) {}
//!
//! let hooks = MetricsObservabilityHooks;
//! accepts_provider_hooks(&hooks);
//! ```

use std::time::Duration;

use echat::{ChatRuntimeHooks, ExtractionFallback};
use ecommon::SessionId;
use eprovider::{ProviderError, ProviderKind, ProviderOperationHooks};

#[derive(Debug, Clone, Copy, Default)]
pub struct MetricsObservabilityHooks;

impl ProviderOperationHooks for MetricsObservabilityHooks {
    fn on_request_start(&self, provider: ProviderKind, operation: &str) {
        metrics::counter!(
            "echoes_provider_request_total",
            "provider" => provider.as_str(),
            "operation" => operation.to_string()
        )
        .increment(1);
    }

    fn on_success(&self, provider: ProviderKind, operation: &str, elapsed: Duration) {
        metrics::counter!(
            "echoes_provider_success_total",
            "provider" => provider.as_str(),
            "operation" => operation.to_string()
        )
        .increment(1);
        metrics::histogram!(
            "echoes_provider_latency_seconds",
            "provider" => provider.as_str(),
            "operation" => operation.to_string()
        )
        .record(elapsed.as_secs_f64());
    }

    fn on_failure(
        &self,
        provider: ProviderKind,
        operation: &str,
        elapsed: Duration,
        error: &ProviderError,
    ) {
        metrics::counter!(
            "echoes_provider_failure_total",
            "provider" => provider.as_str(),
            "operation" => operation.to_string(),
            "error_kind" => format!("{:?}", error.kind)
        )
        .increment(1);
        metrics::histogram!(
            "echoes_provider_latency_seconds",
            "provider" => provider.as_str(),
            "operation" => operation.to_string()
        )
        .record(elapsed.as_secs_f64());
    }
}

impl ChatRuntimeHooks for MetricsObservabilityHooks {
    fn on_turn_start(&self, _session_id: &SessionId, provider: ProviderKind, context_len: usize) {
        metrics::counter!("echoes_turn_start_total", "provider" => provider.as_str())
            .increment(1);
        metrics::histogram!("echoes_turn_context_messages", "provider" => provider.as_str())
            .record(context_len as f64);
    }

    fn on_turn_complete(
        &self,
        _session_id: &SessionId,
        provider: ProviderKind,
        suggestion_count: usize,
        elapsed: Duration,
    ) {
        metrics::counter!("echoes_turn_complete_total", "provider" => provider.as_str())
            .increment(1);
        metrics::histogram!("echoes_turn_suggestions", "provider" => provider.as_str())
            .record(suggestion_count as f64);
        metrics::histogram!("echoes_turn_duration_seconds", "provider" => provider.as_str())
            .record(elapsed.as_secs_f64());
    }

    fn on_turn_failed(
        &self,
        _session_id: &SessionId,
        provider: ProviderKind,
        error: &ProviderError,
        elapsed: Duration,
    ) {
        metrics::counter!(
            "echoes_turn_failed_total",
            "provider" => provider.as_str(),
            "error_kind" => format!("{:?}", error.kind)
        )
        .increment(1);
        metrics::histogram!("echoes_turn_duration_seconds", "provider" => provider.as_str())
            .record(elapsed.as_secs_f64());
    }

    fn on_extraction_fallback(
        &self,
        _session_id: &SessionId,
        provider: ProviderKind,
        fallback: ExtractionFallback,
    ) {
        metrics::counter!(
            "echoes_extraction_fallback_total",
            "provider" => provider.as_str(),
            "fallback" => fallback.as_str()
        )
        .increment(1);
    }

    fn on_suggestions_dropped(&self, _session_id: &SessionId, provider: ProviderKind, _reason: &str) {
        metrics::counter!("echoes_suggestions_dropped_total", "provider" => provider.as_str())
            .increment(1);
    }

    fn on_summary_complete(
        &self,
        _session_id: &SessionId,
        provider: ProviderKind,
        _context_len: usize,
        elapsed: Duration,
    ) {
        metrics::counter!("echoes_summary_complete_total", "provider" => provider.as_str())
            .increment(1);
        metrics::histogram!("echoes_summary_duration_seconds", "provider" => provider.as_str())
            .record(elapsed.as_secs_f64());
    }

    fn on_summary_failed(
        &self,
        _session_id: &SessionId,
        provider: ProviderKind,
        error: &ProviderError,
        _elapsed: Duration,
    ) {
        metrics::counter!(
            "echoes_summary_failed_total",
            "provider" => provider.as_str(),
            "error_kind" => format!("{:?}", error.kind)
        )
        .increment(1);
    }
}
