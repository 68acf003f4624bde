//! Prompt templates for turns, suggestions, and summaries.
//!
//! All builders are pure: identical inputs render identical text, and message
//! content is embedded without modification.

use std::fmt::Write as _;

use eprovider::{CompletionRequest, Message, ProviderKind, Role};

use crate::ChatRequest;

pub const SUGGESTION_COUNT: usize = 3;
pub const SUMMARY_LOCATION: &str = "Online chat";
pub const SUMMARY_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M";

const NO_WORLD_KNOWLEDGE: &str = "(none)";

/// The prompt to send for a user turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnPrompt {
    /// Reply and suggestions requested together as one JSON object.
    Combined(CompletionRequest),
    /// Reply only; suggestions need a separate call.
    ReplyOnly(CompletionRequest),
}

impl TurnPrompt {
    pub fn request(&self) -> &CompletionRequest {
        match self {
            Self::Combined(request) | Self::ReplyOnly(request) => request,
        }
    }
}

pub fn build_turn_prompt(request: &ChatRequest<'_>) -> TurnPrompt {
    let mut prompt = render_background(request);
    match request.provider_kind {
        ProviderKind::Proxy => {
            let _ = write!(
                prompt,
                "\n[Task]\n\
                 1. Write the assistant's next reply, staying in character as the assistant \
                 persona and using the world knowledge and conversation history.\n\
                 2. Write exactly {SUGGESTION_COUNT} short suggestions for what the user might \
                 say next, in the user persona's voice.\n\
                 \n[Output format]\n\
                 Respond with a single JSON object of the shape \
                 {{\"reply\": string, \"suggestions\": [string, string, string]}} and nothing \
                 else. Do not add commentary or code fences.\n"
            );
            TurnPrompt::Combined(CompletionRequest::new(prompt))
        }
        ProviderKind::Direct => {
            prompt.push_str(
                "\n[Task]\n\
                 Write the assistant's next reply, staying in character as the assistant \
                 persona and using the world knowledge and conversation history. Respond with \
                 the reply text only.\n",
            );
            TurnPrompt::ReplyOnly(CompletionRequest::new(prompt))
        }
    }
}

/// Second call for adapters whose turn prompt carries only the reply.
pub fn build_suggestion_prompt(request: &ChatRequest<'_>, reply_text: &str) -> CompletionRequest {
    let mut prompt = render_background(request);
    let _ = write!(
        prompt,
        "\n[Latest assistant reply]\n{reply_text}\n\
         \n[Task]\n\
         Write exactly {SUGGESTION_COUNT} short replies the user might send next, in the user \
         persona's voice, responding to the latest assistant reply.\n\
         \n[Output format]\n\
         Respond with a bare JSON array of exactly {SUGGESTION_COUNT} strings and nothing else.\n"
    );
    CompletionRequest::json(prompt)
}

/// `recorded_at` is rendered verbatim into the time line; callers format it
/// with [`SUMMARY_TIMESTAMP_FORMAT`].
pub fn build_summary_prompt(context: &[Message], recorded_at: &str) -> CompletionRequest {
    let mut prompt = String::from(
        "You are a neutral record keeper. Summarize the conversation below as an objective \
         event record.\n\n[Conversation]\n",
    );
    render_transcript(&mut prompt, context);
    let _ = write!(
        prompt,
        "\n[Rules]\n\
         - State only what was said or happened. Do not add opinions, judgements, or \
         commentary.\n\
         - Preserve sensitive or conflictual content exactly as it occurred. Do not soften, \
         omit, or sanitize it.\n\
         - Use the exact schema below and nothing else.\n\
         \n[Schema]\n\
         [Time] {recorded_at}\n\
         [Location] {SUMMARY_LOCATION}\n\
         [Content]\n\
         - <one factual bullet per event>\n"
    );
    CompletionRequest::new(prompt)
}

fn render_background(request: &ChatRequest<'_>) -> String {
    let world_knowledge = if request.world_knowledge.trim().is_empty() {
        NO_WORLD_KNOWLEDGE
    } else {
        request.world_knowledge
    };

    let mut prompt = String::new();
    let _ = write!(
        prompt,
        "[Assistant persona]\n{}\n\n[User persona]\n{}\n\n[World knowledge]\n{}\n\n\
         [Conversation history]\n",
        request.ai_persona, request.user_persona, world_knowledge
    );
    render_transcript(&mut prompt, request.context);
    prompt
}

fn render_transcript(prompt: &mut String, context: &[Message]) {
    for message in context {
        let speaker = match message.role {
            Role::User => "User",
            Role::Assistant => "Assistant",
        };
        let _ = writeln!(prompt, "{speaker}: {}", message.content);
    }
}
