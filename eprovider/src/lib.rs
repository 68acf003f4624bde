//! Provider-agnostic chat types plus the proxy and direct provider adapters.
//!
//! ```rust
//! use eprovider::{CompletionRequest, Message, ProviderKind, ResponseFormat, Role};
//!
//! let message = Message::user("hello");
//! assert_eq!(message.role, Role::User);
//!
//! let request = CompletionRequest::json("reply with an array");
//! assert_eq!(request.format, ResponseFormat::Json);
//! assert_eq!(ProviderKind::default(), ProviderKind::Direct);
//! ```

mod credentials;
mod error;
mod factory;
mod hooks;
mod provider;
mod transport;

pub mod adapters;
pub mod prelude;

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

pub use credentials::SecretString;
pub use error::{ProviderError, ProviderErrorKind};
pub use factory::{HttpProviderFactory, ProviderConfig, ProviderFactory};
pub use hooks::{NoopOperationHooks, ProviderOperationHooks, observe_operation};
pub use provider::{ChatProvider, ProviderFuture};
pub use transport::{HttpMethod, HttpRequest, HttpResponse, ProviderTransport, ReqwestTransport};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    #[default]
    Direct,
    Proxy,
}

impl ProviderKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Direct => "direct",
            Self::Proxy => "proxy",
        }
    }
}

impl Display for ProviderKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    User,
    Assistant,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Assistant => "assistant",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new(Role::User, content)
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(Role::Assistant, content)
    }
}

/// Output shape a completion should be produced in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResponseFormat {
    #[default]
    Text,
    /// Ask for the provider's structured JSON output mode where it has one.
    Json,
}

/// A fully rendered prompt ready to be sent through a [`ChatProvider`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionRequest {
    pub prompt: String,
    pub format: ResponseFormat,
}

impl CompletionRequest {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            format: ResponseFormat::Text,
        }
    }

    pub fn json(prompt: impl Into<String>) -> Self {
        Self::new(prompt).with_format(ResponseFormat::Json)
    }

    pub fn with_format(mut self, format: ResponseFormat) -> Self {
        self.format = format;
        self
    }

    pub fn validate(&self) -> Result<(), ProviderError> {
        if self.prompt.trim().is_empty() {
            return Err(ProviderError::invalid_request("prompt must not be empty"));
        }

        Ok(())
    }
}
