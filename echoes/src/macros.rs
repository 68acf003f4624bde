/// Creates a single transcript [`Message`](crate::Message) from a role shorthand.
///
/// ```rust
/// use echoes::{Role, ec_msg};
///
/// let message = ec_msg!(assistant => "Welcome back.");
/// assert_eq!(message.role, Role::Assistant);
/// assert_eq!(message.content, "Welcome back.");
/// ```
#[macro_export]
macro_rules! ec_msg {
    (user => $content:expr $(,)?) => {
        $crate::Message::new($crate::Role::User, $content)
    };
    (assistant => $content:expr $(,)?) => {
        $crate::Message::new($crate::Role::Assistant, $content)
    };
    ($role:ident => $content:expr $(,)?) => {
        compile_error!("unsupported role: use user or assistant");
    };
}

/// Creates a `Vec<Message>` transcript from role/content pairs.
///
/// ```rust
/// use echoes::{Role, ec_messages, window};
///
/// let history = ec_messages![
///     user => "Is the inn open?",
///     assistant => "Always.",
///     user => "A room, then.",
/// ];
///
/// assert_eq!(history.len(), 3);
/// assert_eq!(window(&history, 1)[0].role, Role::Assistant);
/// ```
#[macro_export]
macro_rules! ec_messages {
    () => {
        Vec::<$crate::Message>::new()
    };
    ($($role:ident => $content:expr),+ $(,)?) => {
        vec![$($crate::ec_msg!($role => $content)),+]
    };
}
