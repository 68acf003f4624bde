//! Shared utilities and strongly-typed common values for workspace crates.
//!
//! ```rust
//! use ecommon::{SessionId, truncate_chars};
//!
//! let session = SessionId::from("session-1");
//! assert_eq!(session.as_str(), "session-1");
//! assert_eq!(truncate_chars("hello world", 5), "hello...");
//! ```

pub mod future {
    //! Shared async future aliases.
    //!
    //! ```rust
    //! use ecommon::BoxFuture;
    //!
    //! fn str_len<'a>(value: &'a str) -> BoxFuture<'a, usize> {
    //!     Box::pin(async move { value.len() })
    //! }
    //!
    //! let _future = str_len("hello");
    //! ```

    use std::future::Future;
    use std::pin::Pin;

    pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;
}

pub mod context {
    //! Identifier newtypes shared across crates.
    //!
    //! ```rust
    //! use ecommon::SessionId;
    //!
    //! let session = SessionId::new("session-42");
    //! assert_eq!(session.to_string(), "session-42");
    //! ```

    use std::fmt::{Display, Formatter};

    #[derive(Debug, Clone, PartialEq, Eq, Hash)]
    pub struct SessionId(String);

    impl SessionId {
        pub fn new(value: impl Into<String>) -> Self {
            Self(value.into())
        }

        pub fn as_str(&self) -> &str {
            self.0.as_str()
        }
    }

    impl Default for SessionId {
        fn default() -> Self {
            Self::new("default")
        }
    }

    impl Display for SessionId {
        fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
            f.write_str(&self.0)
        }
    }

    impl From<String> for SessionId {
        fn from(value: String) -> Self {
            Self(value)
        }
    }

    impl From<&str> for SessionId {
        fn from(value: &str) -> Self {
            Self(value.to_string())
        }
    }
}

pub mod text {
    //! Text helpers for bounding untrusted strings in logs.

    /// Returns at most `max` characters of `input`, with `...` appended when cut.
    ///
    /// Counts `char`s rather than bytes so multi-byte text never splits.
    pub fn truncate_chars(input: &str, max: usize) -> String {
        match input.char_indices().nth(max) {
            None => input.to_string(),
            Some((cut, _)) => {
                let mut output = input[..cut].to_string();
                output.push_str("...");
                output
            }
        }
    }
}

pub use context::SessionId;
pub use future::BoxFuture;
pub use text::truncate_chars;

#[cfg(test)]
mod tests {
    use super::{SessionId, truncate_chars};

    #[test]
    fn session_id_round_trips_strings() {
        let session = SessionId::new("session-1");

        assert_eq!(session.as_str(), "session-1");
        assert_eq!(session.to_string(), "session-1");
        assert_eq!(SessionId::default().as_str(), "default");
    }

    #[test]
    fn truncate_chars_respects_char_boundaries() {
        assert_eq!(truncate_chars("short", 10), "short");
        assert_eq!(truncate_chars("exact", 5), "exact");
        assert_eq!(truncate_chars("こんにちは世界", 5), "こんにちは...");
        assert_eq!(truncate_chars("", 0), "");
    }
}
