//! Per-turn sequencing of windowing, prompting, provider calls, and extraction.
//!
//! Every accepted send appends exactly one user entry followed by exactly one
//! assistant entry. Provider failures become the assistant entry's text.

use std::sync::Arc;
use std::sync::atomic::{AtomicU8, Ordering};
use std::time::Instant;

use chrono::Local;
use ecommon::SessionId;
use eprovider::{ChatProvider, Message, ProviderError, ProviderFactory};

use crate::prompt::{SUMMARY_TIMESTAMP_FORMAT, TurnPrompt};
use crate::{
    ChatError, ChatRenderer, ChatRequest, ChatRuntimeHooks, ConversationHistory, NoopChatHooks,
    NoopRenderer, Settings, SummaryResult, TurnExtraction, TurnOutcome, build_suggestion_prompt,
    build_summary_prompt, build_turn_prompt, extract_suggestions, extract_summary,
    extract_turn_detailed, window,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum TurnState {
    Idle = 0,
    AwaitingReply = 1,
    AwaitingSuggestions = 2,
    Summarizing = 3,
}

impl TurnState {
    fn from_u8(value: u8) -> Self {
        match value {
            1 => Self::AwaitingReply,
            2 => Self::AwaitingSuggestions,
            3 => Self::Summarizing,
            _ => Self::Idle,
        }
    }
}

/// Shared view of the orchestrator's state for an embedding UI.
#[derive(Debug, Clone, Default)]
pub struct TurnStateHandle {
    state: Arc<AtomicU8>,
}

impl TurnStateHandle {
    pub fn state(&self) -> TurnState {
        TurnState::from_u8(self.state.load(Ordering::Acquire))
    }

    pub fn is_busy(&self) -> bool {
        self.state() != TurnState::Idle
    }

    pub(crate) fn begin(&self, state: TurnState) -> Result<StateGuard, ChatError> {
        self.state
            .compare_exchange(
                TurnState::Idle as u8,
                state as u8,
                Ordering::AcqRel,
                Ordering::Acquire,
            )
            .map_err(|current| {
                ChatError::busy(format!(
                    "a request is still pending ({:?})",
                    TurnState::from_u8(current)
                ))
            })?;

        Ok(StateGuard {
            handle: self.clone(),
        })
    }
}

/// Returns the handle to `Idle` when dropped.
pub(crate) struct StateGuard {
    handle: TurnStateHandle,
}

impl StateGuard {
    fn advance(&self, state: TurnState) {
        self.handle.state.store(state as u8, Ordering::Release);
    }
}

impl Drop for StateGuard {
    fn drop(&mut self) {
        self.handle
            .state
            .store(TurnState::Idle as u8, Ordering::Release);
    }
}

pub struct ChatOrchestrator {
    session_id: SessionId,
    providers: Arc<dyn ProviderFactory>,
    hooks: Arc<dyn ChatRuntimeHooks>,
    renderer: Arc<dyn ChatRenderer>,
    history: ConversationHistory,
    last_suggestions: Vec<String>,
    state: TurnStateHandle,
}

impl ChatOrchestrator {
    pub fn new(providers: Arc<dyn ProviderFactory>) -> Self {
        Self {
            session_id: SessionId::default(),
            providers,
            hooks: Arc::new(NoopChatHooks),
            renderer: Arc::new(NoopRenderer),
            history: ConversationHistory::new(),
            last_suggestions: Vec::new(),
            state: TurnStateHandle::default(),
        }
    }

    pub fn with_session_id(mut self, session_id: impl Into<SessionId>) -> Self {
        self.session_id = session_id.into();
        self
    }

    pub fn with_hooks(mut self, hooks: Arc<dyn ChatRuntimeHooks>) -> Self {
        self.hooks = hooks;
        self
    }

    pub fn with_renderer(mut self, renderer: Arc<dyn ChatRenderer>) -> Self {
        self.renderer = renderer;
        self
    }

    pub fn session_id(&self) -> &SessionId {
        &self.session_id
    }

    pub fn history(&self) -> &ConversationHistory {
        &self.history
    }

    pub fn state(&self) -> TurnState {
        self.state.state()
    }

    pub fn state_handle(&self) -> TurnStateHandle {
        self.state.clone()
    }

    pub fn is_busy(&self) -> bool {
        self.state.is_busy()
    }

    pub fn last_suggestions(&self) -> &[String] {
        &self.last_suggestions
    }

    /// Clears the transcript and any pending suggestion chips.
    pub fn reset(&mut self) {
        self.history.clear();
        self.clear_suggestions();
    }

    /// Sends one user turn.
    ///
    /// Returns `Err` only when the send is refused before anything is
    /// appended. Provider failures produce `Ok` with
    /// [`TurnOutcome::failure`] set.
    pub async fn send_turn(
        &mut self,
        settings: &Settings,
        input: &str,
    ) -> Result<TurnOutcome, ChatError> {
        if input.trim().is_empty() {
            return Err(ChatError::invalid_request("message must not be empty"));
        }

        check_connection(settings, "sending")?;
        if settings.context_window_turns == 0 {
            return Err(ChatError::precondition(
                "Set the context window to at least 1 turn in settings before sending.",
            ));
        }

        let guard = self.state.begin(TurnState::AwaitingReply)?;
        let started = Instant::now();
        let kind = settings.provider_kind;

        self.clear_suggestions();
        self.append(Message::user(input));

        let context = window(self.history.messages(), settings.context_window_turns).to_vec();
        self.hooks.on_turn_start(&self.session_id, kind, context.len());

        let request = ChatRequest::from_settings(settings, &context);
        let reply = match self.providers.build(&settings.provider_config()) {
            Ok(provider) => self
                .request_reply(provider.as_ref(), &request)
                .await
                .map(|reply| (provider, reply)),
            Err(error) => Err(error),
        };

        let (provider, prompt, extraction) = match reply {
            Ok((provider, (prompt, extraction))) => (provider, prompt, extraction),
            Err(error) => {
                let text = format!("[Error] The reply could not be generated: {error}");
                self.append(Message::assistant(text.clone()));
                self.hooks
                    .on_turn_failed(&self.session_id, kind, &error, started.elapsed());
                return Ok(TurnOutcome {
                    reply: text,
                    suggestions: Vec::new(),
                    failure: Some(error),
                    fallback: None,
                });
            }
        };

        let reply_text = extraction.result.reply_text;
        self.append(Message::assistant(reply_text.clone()));
        if let Some(fallback) = extraction.fallback {
            self.hooks
                .on_extraction_fallback(&self.session_id, kind, fallback);
        }

        let suggestions = if settings.suggestions_enabled {
            match prompt {
                TurnPrompt::Combined(_) => {
                    let inline = extraction.result.suggestions;
                    if inline.is_empty() {
                        self.hooks.on_suggestions_dropped(
                            &self.session_id,
                            kind,
                            "missing from reply",
                        );
                    }
                    inline
                }
                TurnPrompt::ReplyOnly(_) => {
                    guard.advance(TurnState::AwaitingSuggestions);
                    self.request_suggestions(provider.as_ref(), &request, &reply_text)
                        .await
                }
            }
        } else {
            Vec::new()
        };

        if !suggestions.is_empty() {
            self.renderer.show_suggestions(&suggestions);
            self.last_suggestions = suggestions.clone();
        }

        self.hooks.on_turn_complete(
            &self.session_id,
            kind,
            suggestions.len(),
            started.elapsed(),
        );
        drop(guard);

        Ok(TurnOutcome {
            reply: reply_text,
            suggestions,
            failure: None,
            fallback: extraction.fallback,
        })
    }

    /// Sends the chosen suggestion chip as if the user had typed it.
    pub async fn send_suggestion(
        &mut self,
        settings: &Settings,
        index: usize,
    ) -> Result<TurnOutcome, ChatError> {
        let text = self.last_suggestions.get(index).cloned().ok_or_else(|| {
            ChatError::invalid_request(format!("no suggestion at index {index}"))
        })?;
        self.send_turn(settings, &text).await
    }

    /// Summarizes the last `turns` turns, stamped with the local time.
    pub async fn summarize(
        &self,
        settings: &Settings,
        turns: usize,
    ) -> Result<SummaryResult, ChatError> {
        let recorded_at = Local::now().format(SUMMARY_TIMESTAMP_FORMAT).to_string();
        self.summarize_at(settings, turns, &recorded_at).await
    }

    pub async fn summarize_at(
        &self,
        settings: &Settings,
        turns: usize,
        recorded_at: &str,
    ) -> Result<SummaryResult, ChatError> {
        check_connection(settings, "summarizing")?;

        let context = window(self.history.messages(), turns);
        if context.is_empty() {
            return Err(ChatError::precondition(
                "There is no conversation to summarize yet. Chat first or widen the summary window.",
            ));
        }

        let _guard = self.state.begin(TurnState::Summarizing)?;
        let started = Instant::now();
        let kind = settings.provider_kind;

        let result = match self.providers.build(&settings.provider_config()) {
            Ok(provider) => {
                provider
                    .send_chat(build_summary_prompt(context, recorded_at))
                    .await
            }
            Err(error) => Err(error),
        };

        match result {
            Ok(raw) => {
                self.hooks.on_summary_complete(
                    &self.session_id,
                    kind,
                    context.len(),
                    started.elapsed(),
                );
                Ok(SummaryResult::new(extract_summary(&raw)))
            }
            Err(error) => {
                self.hooks
                    .on_summary_failed(&self.session_id, kind, &error, started.elapsed());
                Err(ChatError::from(error))
            }
        }
    }

    async fn request_reply(
        &self,
        provider: &dyn ChatProvider,
        request: &ChatRequest<'_>,
    ) -> Result<(TurnPrompt, TurnExtraction), ProviderError> {
        let prompt = build_turn_prompt(request);
        let raw = provider.send_chat(prompt.request().clone()).await?;
        let extraction = extract_turn_detailed(&raw, request.provider_kind);
        Ok((prompt, extraction))
    }

    async fn request_suggestions(
        &self,
        provider: &dyn ChatProvider,
        request: &ChatRequest<'_>,
        reply_text: &str,
    ) -> Vec<String> {
        let kind = request.provider_kind;
        match provider
            .send_suggestions(build_suggestion_prompt(request, reply_text))
            .await
        {
            Ok(Some(raw)) => {
                let suggestions = extract_suggestions(&raw);
                if suggestions.is_empty() {
                    self.hooks
                        .on_suggestions_dropped(&self.session_id, kind, "not a string array");
                }
                suggestions
            }
            Ok(None) => Vec::new(),
            Err(error) => {
                self.hooks.on_suggestions_dropped(
                    &self.session_id,
                    kind,
                    &format!("provider error: {error}"),
                );
                Vec::new()
            }
        }
    }

    fn append(&mut self, message: Message) {
        self.renderer.append_message(message.role, &message.content);
        self.history.push(message);
    }

    fn clear_suggestions(&mut self) {
        if !self.last_suggestions.is_empty() {
            self.last_suggestions.clear();
            self.renderer.show_suggestions(&[]);
        }
    }
}

fn check_connection(settings: &Settings, action: &str) -> Result<(), ChatError> {
    let missing = settings.missing_connection_fields();
    if missing.is_empty() {
        return Ok(());
    }

    Err(ChatError::precondition(format!(
        "Set the {} in settings before {action}.",
        missing.join(", ")
    )))
}

#[cfg(test)]
mod tests {
    use eprovider::ProviderKind;

    use super::*;
    use crate::ChatErrorKind;

    #[test]
    fn guard_resets_state_on_drop() {
        let handle = TurnStateHandle::default();
        {
            let guard = handle.begin(TurnState::AwaitingReply).expect("idle handle");
            assert!(handle.is_busy());
            guard.advance(TurnState::AwaitingSuggestions);
            assert_eq!(handle.state(), TurnState::AwaitingSuggestions);
        }
        assert_eq!(handle.state(), TurnState::Idle);
    }

    #[test]
    fn second_begin_is_rejected_while_busy() {
        let handle = TurnStateHandle::default();
        let _guard = handle.begin(TurnState::Summarizing).expect("idle handle");

        let error = handle
            .begin(TurnState::AwaitingReply)
            .err()
            .expect("busy handle should refuse");
        assert_eq!(error.kind, ChatErrorKind::Busy);
        assert!(error.message.contains("Summarizing"));
    }

    #[test]
    fn precondition_message_lists_missing_fields() {
        let settings = Settings::new(ProviderKind::Proxy, "", "");
        let error = check_connection(&settings, "sending").expect_err("should refuse");

        assert_eq!(error.kind, ChatErrorKind::Precondition);
        assert_eq!(
            error.message,
            "Set the endpoint, API key, model in settings before sending."
        );
    }

    #[tokio::test]
    async fn send_is_refused_while_summary_is_pending() {
        let factory = Arc::new(eprovider::HttpProviderFactory::default());
        let mut orchestrator = ChatOrchestrator::new(factory);
        let settings = Settings::new(ProviderKind::Direct, "https://direct.test", "key");

        let _guard = orchestrator
            .state_handle()
            .begin(TurnState::Summarizing)
            .expect("idle handle");
        let error = orchestrator
            .send_turn(&settings, "hello")
            .await
            .expect_err("busy orchestrator should refuse");

        assert_eq!(error.kind, ChatErrorKind::Busy);
        assert!(orchestrator.history().is_empty());
    }
}
