//! HTTP transport seam shared by both adapters and its reqwest implementation.

use reqwest::Client;
use serde_json::Value;

use crate::{ProviderError, ProviderFuture, SecretString};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
}

/// Wire request as built by an adapter.
///
/// Credentials stay out of `url`; `query_key` is appended as `?key=` only when
/// the request is sent, so the request can be logged or captured safely.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub bearer: Option<SecretString>,
    pub query_key: Option<SecretString>,
    pub body: Option<Value>,
}

impl HttpRequest {
    pub fn get(url: impl Into<String>) -> Self {
        Self {
            method: HttpMethod::Get,
            url: url.into(),
            bearer: None,
            query_key: None,
            body: None,
        }
    }

    pub fn post(url: impl Into<String>, body: Value) -> Self {
        Self {
            method: HttpMethod::Post,
            url: url.into(),
            bearer: None,
            query_key: None,
            body: Some(body),
        }
    }

    pub fn with_bearer(mut self, token: SecretString) -> Self {
        self.bearer = Some(token);
        self
    }

    pub fn with_query_key(mut self, key: SecretString) -> Self {
        self.query_key = Some(key);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Converts a non-2xx response into an `Http` error carrying the body verbatim.
    pub fn error_for_status(self) -> Result<Self, ProviderError> {
        if self.is_success() {
            Ok(self)
        } else {
            Err(ProviderError::http(self.status, self.body))
        }
    }
}

pub trait ProviderTransport: Send + Sync + std::fmt::Debug {
    fn execute<'a>(
        &'a self,
        request: HttpRequest,
    ) -> ProviderFuture<'a, Result<HttpResponse, ProviderError>>;
}

/// Reqwest-backed transport. The client carries no timeout: a hung call
/// stays pending until the connection resolves.
#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

impl ProviderTransport for ReqwestTransport {
    fn execute<'a>(
        &'a self,
        request: HttpRequest,
    ) -> ProviderFuture<'a, Result<HttpResponse, ProviderError>> {
        Box::pin(async move {
            let HttpRequest {
                method,
                url,
                bearer,
                query_key,
                body,
            } = request;

            let mut builder = match method {
                HttpMethod::Get => self.client.get(url),
                HttpMethod::Post => self.client.post(url),
            };

            if let Some(key) = &query_key {
                builder = builder.query(&[("key", key.expose())]);
            }

            if let Some(token) = &bearer {
                builder = builder.bearer_auth(token.expose());
            }

            if let Some(body) = &body {
                builder = builder.json(body);
            }

            let response = builder
                .send()
                .await
                .map_err(|err| ProviderError::transport(err.to_string()))?;

            let status = response.status().as_u16();
            let body = response
                .text()
                .await
                .map_err(|err| ProviderError::transport(err.to_string()))?;

            Ok(HttpResponse { status, body })
        })
    }
}
