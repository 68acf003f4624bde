//! Conversation orchestration over the proxy and direct chat providers.
//!
//! ```rust
//! use echat::{ChatResult, extract_turn, window};
//! use eprovider::{Message, ProviderKind};
//!
//! let history = vec![Message::user("hi"), Message::assistant("hello")];
//! assert_eq!(window(&history, 1).len(), 2);
//!
//! let result = extract_turn(r#"{"reply":"hi","suggestions":["a","b","c"]}"#, ProviderKind::Proxy);
//! assert_eq!(result, ChatResult::new("hi", vec!["a".into(), "b".into(), "c".into()]));
//! ```

mod error;
mod extract;
mod history;
mod hooks;
mod orchestrator;
mod prompt;
mod render;
mod settings;
mod store;
mod types;
mod window;

pub mod prelude {
    pub use crate::{
        ChatError, ChatErrorKind, ChatOrchestrator, ChatRenderer, ChatResult, ChatRuntimeHooks,
        ConversationHistory, ExtractionFallback, FileSettingsStore, InMemorySettingsStore,
        NoopChatHooks, NoopRenderer, Settings, SettingsStore, SummaryResult, TurnOutcome,
        TurnState, TurnStateHandle,
    };
    pub use ecommon::SessionId;
}

pub use ecommon::SessionId;
pub use error::{ChatError, ChatErrorKind};
pub use extract::{
    ExtractionFallback, TurnExtraction, decode_turn_payload, extract_suggestions,
    extract_summary, extract_turn, extract_turn_detailed, locate_json_object,
};
pub use history::ConversationHistory;
pub use hooks::{ChatRuntimeHooks, NoopChatHooks};
pub use orchestrator::{ChatOrchestrator, TurnState, TurnStateHandle};
pub use prompt::{
    SUGGESTION_COUNT, SUMMARY_LOCATION, SUMMARY_TIMESTAMP_FORMAT, TurnPrompt,
    build_suggestion_prompt, build_summary_prompt, build_turn_prompt,
};
pub use render::{ChatRenderer, NoopRenderer};
pub use settings::{DEFAULT_AI_PERSONA, DEFAULT_CONTEXT_WINDOW_TURNS, DEFAULT_USER_PERSONA, Settings};
pub use store::{ChatFuture, FileSettingsStore, InMemorySettingsStore, SettingsStore};
pub use types::{ChatRequest, ChatResult, SummaryResult, TurnOutcome};
pub use window::window;
