//! Unified facade over the echoes workspace crates.
//!
//! This crate is designed to be the single dependency for a chat front end.
//! It re-exports the conversation core, the provider adapters, and the
//! observability hooks, and adds wiring helpers for common setups.
//!
//! ```rust
//! use echoes::{ProviderKind, extract_turn, parse_provider_kind};
//!
//! assert_eq!(parse_provider_kind("relay"), Some(ProviderKind::Proxy));
//! let result = extract_turn("I think the answer is hi.", ProviderKind::Proxy);
//! assert_eq!(result.reply_text, "I think the answer is hi.");
//! ```

mod macros;

pub mod prelude;
pub mod providers;
pub mod runtime;
pub mod util;

pub use echat;
pub use ecommon;
pub use eobserve;
pub use eprovider;

pub use echat::{
    ChatError, ChatErrorKind, ChatOrchestrator, ChatRenderer, ChatRequest, ChatResult,
    ChatRuntimeHooks, ConversationHistory, ExtractionFallback, FileSettingsStore,
    InMemorySettingsStore, NoopChatHooks, NoopRenderer, Settings, SettingsStore, SummaryResult,
    TurnOutcome, TurnPrompt, TurnState, TurnStateHandle, build_suggestion_prompt,
    build_summary_prompt, build_turn_prompt, extract_suggestions, extract_summary, extract_turn,
    extract_turn_detailed, window,
};
pub use ecommon::{BoxFuture, SessionId};
pub use eobserve::{
    MetricsObservabilityHooks, SafeChatHooks, SafeProviderHooks, TracingObservabilityHooks,
};
pub use eprovider::{
    ChatProvider, CompletionRequest, HttpProviderFactory, HttpRequest, HttpResponse, Message,
    NoopOperationHooks, ProviderConfig, ProviderError, ProviderErrorKind, ProviderFactory,
    ProviderFuture, ProviderKind, ProviderOperationHooks, ProviderTransport, ReqwestTransport,
    ResponseFormat, Role, SecretString,
};

pub use providers::{
    build_provider, build_provider_with, http_transport, list_models, list_models_with,
    provider_factory,
};
pub use runtime::{RuntimeBundle, build_runtime, build_runtime_with, chat_hooks, orchestrator};
pub use util::{
    assistant_message, direct_settings, parse_provider_kind, proxy_settings, user_message,
};
