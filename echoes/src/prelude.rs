//! Common imports for most echoes applications.

pub use crate::{
    RuntimeBundle, assistant_message, build_provider, build_runtime, build_runtime_with,
    direct_settings, list_models, orchestrator, parse_provider_kind, proxy_settings, user_message,
};
pub use crate::{ec_messages, ec_msg};
pub use crate::{
    BoxFuture, ChatError, ChatErrorKind, ChatOrchestrator, ChatRenderer, ChatResult,
    ChatRuntimeHooks, ConversationHistory, FileSettingsStore, InMemorySettingsStore, Message,
    ProviderError, ProviderKind, Role, SessionId, Settings, SettingsStore, SummaryResult,
    TurnOutcome, TurnState,
};
