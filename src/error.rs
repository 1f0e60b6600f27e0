use thiserror::Error;

/// Reply sent when something unexpected fails while handling an event.
pub const INTERNAL_ERROR_REPLY: &str = "An internal error occurred. Please try again.";

/// Non-fatal conditions answered directly to the user. `Display` is the reply text.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BotError {
    #[error("Please provide a search keyword, e.g. `/files search movie`.")]
    MissingSearchQuery,
    #[error("I received a message, but it didn't contain a file I know how to process.")]
    UnsupportedAttachment,
}

/// Text to show the user for a failed command or event.
/// Unexpected errors get the generic reply; their details stay in the logs.
pub fn user_reply(error: &anyhow::Error) -> String {
    match error.downcast_ref::<BotError>() {
        Some(e) => e.to_string(),
        None => INTERNAL_ERROR_REPLY.to_string(),
    }
}
