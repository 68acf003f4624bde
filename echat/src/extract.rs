//! Recovery of reply text and suggestions from raw model output.
//!
//! Proxy output is decoded in two separate steps: [`locate_json_object`] finds
//! a greedy `{ ... }` span and [`decode_turn_payload`] decodes it strictly. If
//! either step fails, the whole raw text becomes the reply.
//!
//! ```rust
//! use echat::extract_turn;
//! use eprovider::ProviderKind;
//!
//! let result = extract_turn(r#"Sure! {"reply":"ok","suggestions":[]} Hope that helps."#, ProviderKind::Proxy);
//! assert_eq!(result.reply_text, "ok");
//! assert!(result.suggestions.is_empty());
//! ```

use eprovider::ProviderKind;
use serde_json::Value;

use crate::ChatResult;

/// Why structured decoding was skipped in favour of the raw text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExtractionFallback {
    NoJsonObject,
    UndecodableJson,
    MissingReply,
}

impl ExtractionFallback {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::NoJsonObject => "no_json_object",
            Self::UndecodableJson => "undecodable_json",
            Self::MissingReply => "missing_reply",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnExtraction {
    pub result: ChatResult,
    pub fallback: Option<ExtractionFallback>,
}

/// Span from the first `{` to the last `}`, if the last follows the first.
pub fn locate_json_object(raw: &str) -> Option<&str> {
    let start = raw.find('{')?;
    let end = raw.rfind('}')?;
    (end > start).then(|| &raw[start..=end])
}

pub fn decode_turn_payload(span: &str) -> Result<ChatResult, ExtractionFallback> {
    let payload: Value =
        serde_json::from_str(span).map_err(|_| ExtractionFallback::UndecodableJson)?;

    let reply = payload
        .get("reply")
        .and_then(Value::as_str)
        .ok_or(ExtractionFallback::MissingReply)?;

    let suggestions = payload
        .get("suggestions")
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default();

    Ok(ChatResult::new(reply, suggestions))
}

pub fn extract_turn_detailed(raw: &str, kind: ProviderKind) -> TurnExtraction {
    if kind == ProviderKind::Direct {
        return TurnExtraction {
            result: ChatResult::reply_only(raw),
            fallback: None,
        };
    }

    let decoded = locate_json_object(raw)
        .ok_or(ExtractionFallback::NoJsonObject)
        .and_then(decode_turn_payload);

    match decoded {
        Ok(result) => TurnExtraction {
            result,
            fallback: None,
        },
        Err(fallback) => TurnExtraction {
            result: ChatResult::reply_only(raw),
            fallback: Some(fallback),
        },
    }
}

pub fn extract_turn(raw: &str, kind: ProviderKind) -> ChatResult {
    extract_turn_detailed(raw, kind).result
}

/// Strict array decode; anything else yields no suggestions.
pub fn extract_suggestions(raw: &str) -> Vec<String> {
    serde_json::from_str::<Vec<String>>(raw.trim()).unwrap_or_default()
}

pub fn extract_summary(raw: &str) -> String {
    raw.to_string()
}
