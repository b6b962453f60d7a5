use thiserror::Error;

/// Centralized error types for the application
///
/// All errors in the application are converted to this enum for consistent
/// error handling. Uses `thiserror` for automatic error conversion and
/// display formatting.
///
/// Invalid user input is not an error: the flow answers it with a re-prompt.
/// This enum covers the failures that abort an operation.
#[derive(Error, Debug)]
pub enum AppError {
    /// IO errors from the user records file
    #[error("Store error: {0}")]
    Store(#[from] std::io::Error),

    /// Malformed JSON in the user records file
    #[error("Malformed user data: {0}")]
    Malformed(#[from] serde_json::Error),

    /// Telegram API errors
    #[error("Telegram error: {0}")]
    Telegram(#[from] teloxide::RequestError),
}

/// Type alias for Result with AppError
pub type AppResult<T> = Result<T, AppError>;
