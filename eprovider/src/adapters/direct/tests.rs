//! Focused unit tests for direct adapter internals.

#![cfg(test)]

use std::sync::Arc;

use crate::{
    CompletionRequest, HttpRequest, HttpResponse, ProviderError, ProviderErrorKind,
    ProviderFuture, ProviderTransport,
};

use super::provider::DirectProvider;
use super::serde_api::parse_generate_response;

#[derive(Debug)]
struct NoopTransport;

impl ProviderTransport for NoopTransport {
    fn execute<'a>(
        &'a self,
        _request: HttpRequest,
    ) -> ProviderFuture<'a, Result<HttpResponse, ProviderError>> {
        Box::pin(async { Err(ProviderError::transport("not used")) })
    }
}

fn provider() -> DirectProvider {
    DirectProvider::new(
        Arc::new(NoopTransport),
        " https://direct.test/v1beta/models/flash:generateContent ",
        "direct-key",
    )
}

#[test]
fn build_direct_request_uses_query_key_without_bearer() {
    let built = provider()
        .build_direct_request(&CompletionRequest::new("hello"))
        .expect("request should build");

    assert_eq!(
        built.url,
        "https://direct.test/v1beta/models/flash:generateContent"
    );
    assert!(built.bearer.is_none());
    assert_eq!(
        built.query_key.as_ref().map(|key| key.expose()),
        Some("direct-key")
    );

    let body = built.body.expect("body should be present");
    assert_eq!(body["contents"][0]["parts"][0]["text"], "hello");
    assert!(body.get("generationConfig").is_none());
}

#[test]
fn json_format_requests_structured_output() {
    let built = provider()
        .build_direct_request(&CompletionRequest::json("list three"))
        .expect("request should build");

    let body = built.body.expect("body should be present");
    assert_eq!(
        body["generationConfig"]["responseMimeType"],
        "application/json"
    );
}

#[test]
fn parse_generate_response_reads_first_part() {
    let body = r#"{
        "candidates": [
            {"content": {"parts": [{"text": "first"}, {"text": "second"}], "role": "model"},
             "finishReason": "STOP"}
        ]
    }"#;
    assert_eq!(parse_generate_response(body).expect("should parse"), "first");
}

#[test]
fn blocked_prompt_without_candidates_is_filtered() {
    let error = parse_generate_response(r#"{"promptFeedback":{"blockReason":"SAFETY"}}"#)
        .expect_err("blocked prompt should fail");

    assert_eq!(error.kind, ProviderErrorKind::Filtered);
    assert!(error.message.contains("SAFETY"));
}

#[test]
fn candidate_without_parts_but_with_reason_is_filtered() {
    let error = parse_generate_response(
        r#"{"candidates":[{"content":{"role":"model"},"finishReason":"RECITATION"}]}"#,
    )
    .expect_err("empty candidate should fail");

    assert_eq!(error.kind, ProviderErrorKind::Filtered);
    assert!(error.message.contains("RECITATION"));
}

#[test]
fn missing_candidates_without_reason_is_malformed() {
    let error = parse_generate_response(r#"{"usageMetadata":{}}"#)
        .expect_err("missing candidates should fail");
    assert_eq!(error.kind, ProviderErrorKind::Malformed);

    let error = parse_generate_response(r#"{"candidates":[{}]}"#)
        .expect_err("bare candidate should fail");
    assert_eq!(error.kind, ProviderErrorKind::Malformed);
}
