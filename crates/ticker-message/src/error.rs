//! Error types for message dispatch

use thiserror::Error;

/// Result type alias for messaging operations
pub type Result<T> = std::result::Result<T, MessageError>;

/// Error type for message dispatch operations
///
/// An unknown alias during expansion is not represented here; that case has
/// a defined pass-through behavior and never fails. The only failure mode in
/// this layer is the external channel sender refusing a message.
#[derive(Error, Debug)]
pub enum MessageError {
    /// The channel-sender capability failed to deliver a message
    #[error("channel send failed: {0}")]
    SendFailed(String),

    /// The target channel was rejected by the channel sender
    #[error("unknown channel: {0}")]
    UnknownChannel(String),
}
