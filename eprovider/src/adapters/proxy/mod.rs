//! OpenAI-compatible relay adapter.

mod provider;
mod serde_api;

pub use provider::{CHAT_COMPLETIONS_PATH, ProxyProvider, chat_completions_url, models_url};
