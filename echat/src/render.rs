use eprovider::Role;

/// Receives transcript entries and suggestion chips as they are produced.
pub trait ChatRenderer: Send + Sync {
    fn append_message(&self, _role: Role, _text: &str) {}

    /// Chips that, when chosen, are sent back through
    /// [`ChatOrchestrator::send_suggestion`](crate::ChatOrchestrator::send_suggestion).
    fn show_suggestions(&self, _suggestions: &[String]) {}
}

#[derive(Debug, Default, Clone, Copy)]
pub struct NoopRenderer;

impl ChatRenderer for NoopRenderer {}
