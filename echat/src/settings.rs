//! User-configured connection, persona, and window settings.
//!
//! ```rust
//! use echat::Settings;
//! use eprovider::ProviderKind;
//!
//! let settings = Settings::default();
//! assert_eq!(settings.provider_kind, ProviderKind::Direct);
//! assert_eq!(settings.context_window_turns, 10);
//! assert!(settings.suggestions_enabled);
//! assert_eq!(settings.missing_connection_fields(), vec!["endpoint", "API key"]);
//! ```

use eprovider::{ProviderConfig, ProviderKind};
use serde::{Deserialize, Serialize};

pub const DEFAULT_CONTEXT_WINDOW_TURNS: usize = 10;

pub const DEFAULT_AI_PERSONA: &str =
    "A friendly, attentive companion who answers naturally and keeps the conversation going.";

pub const DEFAULT_USER_PERSONA: &str =
    "An ordinary person chatting casually, curious and a little playful.";

#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    pub provider_kind: ProviderKind,
    pub endpoint: String,
    pub model: String,
    pub api_key: String,
    pub context_window_turns: usize,
    pub suggestions_enabled: bool,
    pub ai_persona: String,
    pub user_persona: String,
    pub world_knowledge: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            provider_kind: ProviderKind::default(),
            endpoint: String::new(),
            model: String::new(),
            api_key: String::new(),
            context_window_turns: DEFAULT_CONTEXT_WINDOW_TURNS,
            suggestions_enabled: true,
            ai_persona: String::new(),
            user_persona: String::new(),
            world_knowledge: String::new(),
        }
    }
}

impl Settings {
    pub fn new(kind: ProviderKind, endpoint: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            provider_kind: kind,
            endpoint: endpoint.into(),
            api_key: api_key.into(),
            ..Self::default()
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_context_window_turns(mut self, turns: usize) -> Self {
        self.context_window_turns = turns;
        self
    }

    pub fn with_suggestions(mut self, enabled: bool) -> Self {
        self.suggestions_enabled = enabled;
        self
    }

    pub fn with_personas(mut self, ai: impl Into<String>, user: impl Into<String>) -> Self {
        self.ai_persona = ai.into();
        self.user_persona = user.into();
        self
    }

    pub fn with_world_knowledge(mut self, knowledge: impl Into<String>) -> Self {
        self.world_knowledge = knowledge.into();
        self
    }

    pub fn effective_ai_persona(&self) -> &str {
        non_blank_or(&self.ai_persona, DEFAULT_AI_PERSONA)
    }

    pub fn effective_user_persona(&self) -> &str {
        non_blank_or(&self.user_persona, DEFAULT_USER_PERSONA)
    }

    /// Names of the connection fields that must be filled before a call.
    pub fn missing_connection_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.endpoint.trim().is_empty() {
            missing.push("endpoint");
        }

        if self.api_key.trim().is_empty() {
            missing.push("API key");
        }

        if self.provider_kind == ProviderKind::Proxy && self.model.trim().is_empty() {
            missing.push("model");
        }

        missing
    }

    pub fn provider_config(&self) -> ProviderConfig {
        ProviderConfig::new(
            self.provider_kind,
            self.endpoint.trim(),
            self.api_key.trim(),
        )
        .with_model(self.model.trim())
    }

    /// Appends text to the world knowledge, separated by a blank line.
    pub fn append_world_knowledge(&mut self, text: &str) {
        let text = text.trim();
        if text.is_empty() {
            return;
        }

        if self.world_knowledge.trim().is_empty() {
            self.world_knowledge = text.to_string();
        } else {
            self.world_knowledge.push_str("\n\n");
            self.world_knowledge.push_str(text);
        }
    }
}

impl std::fmt::Debug for Settings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Settings")
            .field("provider_kind", &self.provider_kind)
            .field("endpoint", &self.endpoint)
            .field("model", &self.model)
            .field("api_key", &"[REDACTED]")
            .field("context_window_turns", &self.context_window_turns)
            .field("suggestions_enabled", &self.suggestions_enabled)
            .field("ai_persona", &self.ai_persona)
            .field("user_persona", &self.user_persona)
            .field("world_knowledge", &self.world_knowledge)
            .finish()
    }
}

fn non_blank_or<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    if value.trim().is_empty() {
        fallback
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn proxy_requires_model_in_addition_to_endpoint_and_key() {
        let settings = Settings::new(ProviderKind::Proxy, "https://relay.test/v1", "sk-1");
        assert_eq!(settings.missing_connection_fields(), vec!["model"]);

        let settings = settings.with_model("gpt-4o-mini");
        assert!(settings.missing_connection_fields().is_empty());

        let direct = Settings::new(ProviderKind::Direct, "https://direct.test", "key");
        assert!(direct.missing_connection_fields().is_empty());
    }

    #[test]
    fn blank_personas_fall_back_to_defaults() {
        let settings = Settings::default().with_personas("  ", "");
        assert_eq!(settings.effective_ai_persona(), DEFAULT_AI_PERSONA);
        assert_eq!(settings.effective_user_persona(), DEFAULT_USER_PERSONA);

        let settings = Settings::default().with_personas("A pirate", "A sailor");
        assert_eq!(settings.effective_ai_persona(), "A pirate");
        assert_eq!(settings.effective_user_persona(), "A sailor");
    }

    #[test]
    fn deserialize_fills_missing_fields_with_defaults() {
        let settings: Settings = serde_json::from_str(
            r#"{"providerKind":"proxy","endpoint":"https://relay.test/v1","apiKey":"sk-1"}"#,
        )
        .expect("settings should parse");

        assert_eq!(settings.provider_kind, ProviderKind::Proxy);
        assert_eq!(settings.api_key, "sk-1");
        assert_eq!(settings.context_window_turns, DEFAULT_CONTEXT_WINDOW_TURNS);
        assert!(settings.suggestions_enabled);
        assert!(settings.world_knowledge.is_empty());
    }

    #[test]
    fn append_world_knowledge_separates_entries() {
        let mut settings = Settings::default();
        settings.append_world_knowledge("  first fact ");
        settings.append_world_knowledge("");
        settings.append_world_knowledge("second fact");

        assert_eq!(settings.world_knowledge, "first fact\n\nsecond fact");
    }

    #[test]
    fn debug_output_redacts_api_key() {
        let settings = Settings::new(ProviderKind::Direct, "https://direct.test", "top-secret");
        assert!(!format!("{settings:?}").contains("top-secret"));
    }

    #[test]
    fn provider_config_trims_connection_fields() {
        let config = Settings::new(ProviderKind::Proxy, " https://relay.test/v1 ", " sk-1 ")
            .with_model(" gpt-4o ")
            .provider_config();

        assert_eq!(config.kind, ProviderKind::Proxy);
        assert_eq!(config.endpoint, "https://relay.test/v1");
        assert_eq!(config.model, "gpt-4o");
        assert_eq!(config.api_key.expose(), "sk-1");
    }
}
