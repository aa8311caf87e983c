//! Validation errors raised while constructing messages and channels

use thiserror::Error;

/// Construction-time validation failure
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Message text was empty or whitespace-only
    #[error("text required")]
    TextRequired,

    /// Recipient did not match the channel's accepted format
    #[error("invalid {channel} recipient '{recipient}': expected {expected}")]
    InvalidRecipient {
        /// Channel display name
        channel: &'static str,
        /// Human-readable description of the accepted format
        expected: &'static str,
        /// The rejected input
        recipient: String,
    },

    /// Unknown channel name
    #[error("invalid channel: {0}")]
    InvalidChannel(String),
}

/// Convenient Result type alias
pub type Result<T> = std::result::Result<T, ValidationError>;
