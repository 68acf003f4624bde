//! Operational hook contracts invoked around every provider call.
//!
//! Calls are never retried; the hooks observe exactly one attempt.

use std::future::Future;
use std::time::{Duration, Instant};

use crate::{ProviderError, ProviderKind};

pub trait ProviderOperationHooks: Send + Sync {
    fn on_request_start(&self, _provider: ProviderKind, _operation: &str) {}

    fn on_success(&self, _provider: ProviderKind, _operation: &str, _elapsed: Duration) {}

    fn on_failure(
        &self,
        _provider: ProviderKind,
        _operation: &str,
        _elapsed: Duration,
        _error: &ProviderError,
    ) {
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct NoopOperationHooks;

impl ProviderOperationHooks for NoopOperationHooks {}

/// Runs `operation` once, reporting start, success, or failure to `hooks`.
pub async fn observe_operation<T, F>(
    provider: ProviderKind,
    operation: &str,
    hooks: &dyn ProviderOperationHooks,
    call: F,
) -> Result<T, ProviderError>
where
    F: Future<Output = Result<T, ProviderError>>,
{
    let started = Instant::now();
    hooks.on_request_start(provider, operation);

    match call.await {
        Ok(value) => {
            hooks.on_success(provider, operation, started.elapsed());
            Ok(value)
        }
        Err(error) => {
            hooks.on_failure(provider, operation, started.elapsed(), &error);
            Err(error)
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;

    #[derive(Default)]
    struct RecordingHooks {
        events: Mutex<Vec<String>>,
    }

    impl ProviderOperationHooks for RecordingHooks {
        fn on_request_start(&self, provider: ProviderKind, operation: &str) {
            self.events
                .lock()
                .expect("events lock")
                .push(format!("start:{provider}:{operation}"));
        }

        fn on_success(&self, provider: ProviderKind, operation: &str, _elapsed: Duration) {
            self.events
                .lock()
                .expect("events lock")
                .push(format!("success:{provider}:{operation}"));
        }

        fn on_failure(
            &self,
            provider: ProviderKind,
            operation: &str,
            _elapsed: Duration,
            error: &ProviderError,
        ) {
            self.events
                .lock()
                .expect("events lock")
                .push(format!("failure:{provider}:{operation}:{:?}", error.kind));
        }
    }

    #[tokio::test]
    async fn observe_operation_reports_success_once() {
        let hooks = RecordingHooks::default();
        let value = observe_operation(ProviderKind::Proxy, "chat", &hooks, async {
            Ok::<_, ProviderError>(7)
        })
        .await
        .expect("operation should succeed");

        assert_eq!(value, 7);
        let events = hooks.events.lock().expect("events lock");
        assert_eq!(
            events.as_slice(),
            ["start:proxy:chat".to_string(), "success:proxy:chat".to_string()]
        );
    }

    #[tokio::test]
    async fn observe_operation_reports_failure_without_retrying() {
        let hooks = RecordingHooks::default();
        let error = observe_operation(ProviderKind::Direct, "suggestions", &hooks, async {
            Err::<(), _>(ProviderError::http(500, "boom"))
        })
        .await
        .expect_err("operation should fail");

        assert_eq!(error.status, Some(500));
        let events = hooks.events.lock().expect("events lock");
        assert_eq!(events.len(), 2);
        assert_eq!(events[1], "failure:direct:suggestions:Http");
    }
}
