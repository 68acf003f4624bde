//! Trailing-slice selection of conversation history.
//!
//! ```rust
//! use echat::window;
//! use eprovider::Message;
//!
//! let history = vec![
//!     Message::user("a"),
//!     Message::assistant("b"),
//!     Message::user("c"),
//!     Message::assistant("d"),
//! ];
//! assert_eq!(window(&history, 1), &history[2..]);
//! assert!(window(&history, 0).is_empty());
//! ```

use eprovider::Message;

/// Returns the last `turns` user/assistant pairs, i.e. the trailing
/// `min(2 * turns, history.len())` messages in order.
pub fn window(history: &[Message], turns: usize) -> &[Message] {
    let depth = turns.saturating_mul(2).min(history.len());
    &history[history.len() - depth..]
}
