use eprovider::{Message, Role};

/// Append-only transcript owned by the orchestrator.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConversationHistory {
    messages: Vec<Message>,
}

impl ConversationHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Number of user entries, which equals the number of turns once idle.
    pub fn turn_count(&self) -> usize {
        self.messages
            .iter()
            .filter(|message| message.role == Role::User)
            .count()
    }

    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }

    pub(crate) fn push(&mut self, message: Message) {
        self.messages.push(message);
    }

    pub(crate) fn clear(&mut self) {
        self.messages.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_turns_by_user_entries() {
        let mut history = ConversationHistory::new();
        assert!(history.is_empty());

        history.push(Message::user("hello"));
        history.push(Message::assistant("hi"));
        history.push(Message::user("again"));

        assert_eq!(history.len(), 3);
        assert_eq!(history.turn_count(), 2);
        assert_eq!(history.last().map(|m| m.role), Some(Role::User));

        history.clear();
        assert_eq!(history.turn_count(), 0);
    }
}
