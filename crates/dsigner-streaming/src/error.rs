//! Streaming errors.

use thiserror::Error;

/// Error type for page delivery.
#[derive(Debug, Error)]
pub enum WorkloadError {
    #[error("Shell not sent before sections")]
    ShellNotSent,

    #[error("Shell already sent")]
    ShellAlreadySent,

    #[error("Sink already completed")]
    Completed,

    #[error("Streaming error: {0}")]
    StreamError(String),
}
