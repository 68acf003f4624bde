#![cfg(feature = "provider-proxy")]

use std::sync::{Arc, Mutex};
use std::time::Duration;

use eprovider::adapters::proxy::ProxyProvider;
use eprovider::{
    ChatProvider, CompletionRequest, HttpMethod, HttpRequest, HttpResponse, ProviderError,
    ProviderErrorKind, ProviderFuture, ProviderKind, ProviderOperationHooks, ProviderTransport,
};

#[derive(Debug, Clone, PartialEq, Eq)]
struct CapturedRequest {
    method: HttpMethod,
    url: String,
    bearer: Option<String>,
    query_key: Option<String>,
    body: Option<serde_json::Value>,
}

#[derive(Debug)]
struct FakeTransport {
    response: HttpResponse,
    captured: Mutex<Vec<CapturedRequest>>,
}

impl FakeTransport {
    fn replying(status: u16, body: &str) -> Self {
        Self {
            response: HttpResponse::new(status, body),
            captured: Mutex::new(Vec::new()),
        }
    }
}

impl ProviderTransport for FakeTransport {
    fn execute<'a>(
        &'a self,
        request: HttpRequest,
    ) -> ProviderFuture<'a, Result<HttpResponse, ProviderError>> {
        Box::pin(async move {
            self.captured
                .lock()
                .expect("captured lock")
                .push(CapturedRequest {
                    method: request.method,
                    url: request.url,
                    bearer: request.bearer.map(|token| token.expose().to_string()),
                    query_key: request.query_key.map(|key| key.expose().to_string()),
                    body: request.body,
                });
            Ok(self.response.clone())
        })
    }
}

#[derive(Debug, Default)]
struct CountingHooks {
    starts: Mutex<u32>,
    failures: Mutex<Vec<ProviderErrorKind>>,
}

impl ProviderOperationHooks for CountingHooks {
    fn on_request_start(&self, _provider: ProviderKind, _operation: &str) {
        *self.starts.lock().expect("starts lock") += 1;
    }

    fn on_failure(
        &self,
        _provider: ProviderKind,
        _operation: &str,
        _elapsed: Duration,
        error: &ProviderError,
    ) {
        self.failures.lock().expect("failures lock").push(error.kind);
    }
}

fn provider(transport: Arc<FakeTransport>) -> ProxyProvider {
    ProxyProvider::new(transport, "https://relay.test/v1/", "gpt-4o-mini", "sk-relay")
}

#[tokio::test]
async fn send_chat_posts_normalized_endpoint_with_bearer() {
    let transport = Arc::new(FakeTransport::replying(
        200,
        r#"{"choices":[{"message":{"content":"{\"reply\":\"hi\",\"suggestions\":[]}"},"finish_reason":"stop"}]}"#,
    ));
    let raw = provider(transport.clone())
        .send_chat(CompletionRequest::new("turn prompt"))
        .await
        .expect("chat should succeed");

    assert_eq!(raw, r#"{"reply":"hi","suggestions":[]}"#);

    let captured = transport.captured.lock().expect("captured lock");
    assert_eq!(captured.len(), 1);
    let sent = &captured[0];
    assert_eq!(sent.method, HttpMethod::Post);
    assert_eq!(sent.url, "https://relay.test/v1/chat/completions");
    assert_eq!(sent.bearer.as_deref(), Some("sk-relay"));
    assert_eq!(sent.query_key, None);
    assert_eq!(
        sent.body,
        Some(serde_json::json!({
            "model": "gpt-4o-mini",
            "messages": [{"role": "user", "content": "turn prompt"}]
        }))
    );
}

#[tokio::test]
async fn non_success_status_surfaces_body_verbatim() {
    let transport = Arc::new(FakeTransport::replying(401, "invalid api key\n"));
    let hooks = Arc::new(CountingHooks::default());
    let error = provider(transport.clone())
        .with_hooks(hooks.clone())
        .send_chat(CompletionRequest::new("turn prompt"))
        .await
        .expect_err("401 should fail");

    assert_eq!(error.kind, ProviderErrorKind::Http);
    assert_eq!(error.status, Some(401));
    assert_eq!(error.message, "invalid api key\n");
    assert_eq!(transport.captured.lock().expect("captured lock").len(), 1);
    assert_eq!(*hooks.starts.lock().expect("starts lock"), 1);
    assert_eq!(
        hooks.failures.lock().expect("failures lock").as_slice(),
        [ProviderErrorKind::Http]
    );
}

#[tokio::test]
async fn send_suggestions_is_not_applicable_and_skips_network() {
    let transport = Arc::new(FakeTransport::replying(500, "unused"));
    let result = provider(transport.clone())
        .send_suggestions(CompletionRequest::json("suggest"))
        .await
        .expect("proxy suggestions never fail");

    assert_eq!(result, None);
    assert!(transport.captured.lock().expect("captured lock").is_empty());
}

#[tokio::test]
async fn list_models_gets_sorted_ids_from_models_endpoint() {
    let transport = Arc::new(FakeTransport::replying(
        200,
        r#"{"data":[{"id":"mistral"},{"id":"claude"},{"id":"gpt-4o"}]}"#,
    ));
    let models = ProxyProvider::new(
        transport.clone(),
        "https://relay.test/v1/chat/completions",
        "gpt-4o",
        "sk-relay",
    )
    .list_models()
    .await
    .expect("listing should succeed");

    assert_eq!(models, vec!["claude", "gpt-4o", "mistral"]);

    let captured = transport.captured.lock().expect("captured lock");
    assert_eq!(captured[0].method, HttpMethod::Get);
    assert_eq!(captured[0].url, "https://relay.test/v1/models");
    assert_eq!(captured[0].bearer.as_deref(), Some("sk-relay"));
    assert_eq!(captured[0].body, None);
}

#[tokio::test]
async fn blank_prompt_is_rejected_before_network() {
    let transport = Arc::new(FakeTransport::replying(200, "{}"));
    let error = provider(transport.clone())
        .send_chat(CompletionRequest::new("   "))
        .await
        .expect_err("blank prompt should fail");

    assert_eq!(error.kind, ProviderErrorKind::InvalidRequest);
    assert!(transport.captured.lock().expect("captured lock").is_empty());
}
