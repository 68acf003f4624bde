//! Shared provider error kinds and error value helpers.
//!
//! ```rust
//! use eprovider::{ProviderError, ProviderErrorKind};
//!
//! let error = ProviderError::http(502, "bad gateway");
//! assert_eq!(error.kind, ProviderErrorKind::Http);
//! assert_eq!(error.status, Some(502));
//! assert_eq!(error.message, "bad gateway");
//! ```

use std::error::Error;
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderErrorKind {
    /// Non-2xx status; the message is the response body verbatim.
    Http,
    /// The provider answered without content and named a finish/stop/block reason.
    Filtered,
    /// The expected fields were absent and no reason was given.
    Malformed,
    Transport,
    InvalidRequest,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderError {
    pub kind: ProviderErrorKind,
    pub message: String,
    pub status: Option<u16>,
}

impl ProviderError {
    pub fn new(kind: ProviderErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            status: None,
        }
    }

    pub fn http(status: u16, body: impl Into<String>) -> Self {
        Self {
            kind: ProviderErrorKind::Http,
            message: body.into(),
            status: Some(status),
        }
    }

    pub fn filtered(message: impl Into<String>) -> Self {
        Self::new(ProviderErrorKind::Filtered, message)
    }

    pub fn malformed(message: impl Into<String>) -> Self {
        Self::new(ProviderErrorKind::Malformed, message)
    }

    pub fn transport(message: impl Into<String>) -> Self {
        Self::new(ProviderErrorKind::Transport, message)
    }

    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::new(ProviderErrorKind::InvalidRequest, message)
    }
}

impl Display for ProviderError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.status {
            Some(status) => write!(f, "{:?} {}: {}", self.kind, status, self.message),
            None => write!(f, "{:?}: {}", self.kind, self.message),
        }
    }
}

impl Error for ProviderError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_error_keeps_body_verbatim() {
        let body = "{\"error\":{\"message\":\"quota exceeded\"}}";
        let error = ProviderError::http(429, body);

        assert_eq!(error.message, body);
        assert_eq!(error.to_string(), format!("Http 429: {body}"));
    }

    #[test]
    fn filtered_and_malformed_are_distinct_kinds() {
        let filtered = ProviderError::filtered("finish reason SAFETY");
        let malformed = ProviderError::malformed("candidates missing");

        assert_eq!(filtered.kind, ProviderErrorKind::Filtered);
        assert_eq!(malformed.kind, ProviderErrorKind::Malformed);
        assert_eq!(filtered.status, None);
        assert_eq!(malformed.to_string(), "Malformed: candidates missing");
    }
}
