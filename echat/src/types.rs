//! Provider-agnostic request and result types for one turn or summary.

use eprovider::{Message, ProviderError, ProviderKind};

use crate::{ExtractionFallback, Settings};

/// What to ask the model, independent of the wire protocol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChatRequest<'a> {
    pub provider_kind: ProviderKind,
    pub context: &'a [Message],
    pub ai_persona: &'a str,
    pub user_persona: &'a str,
    pub world_knowledge: &'a str,
}

impl<'a> ChatRequest<'a> {
    /// Blank personas are replaced by their default text.
    pub fn from_settings(settings: &'a Settings, context: &'a [Message]) -> Self {
        Self {
            provider_kind: settings.provider_kind,
            context,
            ai_persona: settings.effective_ai_persona(),
            user_persona: settings.effective_user_persona(),
            world_knowledge: settings.world_knowledge.trim(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ChatResult {
    pub reply_text: String,
    pub suggestions: Vec<String>,
}

impl ChatResult {
    pub fn new(reply_text: impl Into<String>, suggestions: Vec<String>) -> Self {
        Self {
            reply_text: reply_text.into(),
            suggestions,
        }
    }

    pub fn reply_only(reply_text: impl Into<String>) -> Self {
        Self::new(reply_text, Vec::new())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryResult {
    pub summary_text: String,
}

impl SummaryResult {
    pub fn new(summary_text: impl Into<String>) -> Self {
        Self {
            summary_text: summary_text.into(),
        }
    }

    /// Writes the summary into the world knowledge; history is untouched.
    pub fn append_to(&self, settings: &mut Settings) {
        settings.append_world_knowledge(&self.summary_text);
    }
}

/// What one send produced. `reply` is always the assistant entry that was
/// appended, including the error text when the provider failed.
#[derive(Debug, Clone, PartialEq)]
pub struct TurnOutcome {
    pub reply: String,
    pub suggestions: Vec<String>,
    pub failure: Option<ProviderError>,
    pub fallback: Option<ExtractionFallback>,
}

impl TurnOutcome {
    pub fn is_success(&self) -> bool {
        self.failure.is_none()
    }
}
