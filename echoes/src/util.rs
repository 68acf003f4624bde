//! Small convenience constructors for common types.

use crate::{Message, ProviderKind, Role, Settings};

pub fn user_message(content: impl Into<String>) -> Message {
    Message::new(Role::User, content)
}

pub fn assistant_message(content: impl Into<String>) -> Message {
    Message::new(Role::Assistant, content)
}

pub fn proxy_settings(
    endpoint: impl Into<String>,
    model: impl Into<String>,
    api_key: impl Into<String>,
) -> Settings {
    Settings::new(ProviderKind::Proxy, endpoint, api_key).with_model(model)
}

pub fn direct_settings(endpoint: impl Into<String>, api_key: impl Into<String>) -> Settings {
    Settings::new(ProviderKind::Direct, endpoint, api_key)
}

pub fn parse_provider_kind(value: &str) -> Option<ProviderKind> {
    match value.trim().to_ascii_lowercase().as_str() {
        "proxy" | "relay" | "openai" | "openai-compatible" | "openai_compatible" => {
            Some(ProviderKind::Proxy)
        }
        "direct" | "gemini" | "google" => Some(ProviderKind::Direct),
        _ => None,
    }
}
