//! Channel-sender capability and dispatch wrapper
//!
//! The chat transport lives outside this crate; it is consumed through the
//! [`ChannelSender`] trait object. [`Dispatcher`] is the thin layer in front
//! of it: tag plain text with the test-mode prefix, forward, and swallow
//! delivery failures after logging them. There is no retry.

use crate::config::TestMode;
use crate::error::Result;
use crate::message::{RichMessage, SentMessage};
use async_trait::async_trait;
use std::sync::Arc;

/// Capability for delivering messages to a chat channel
///
/// Implemented by the external chat-session transport; tests substitute
/// their own implementations.
#[async_trait]
pub trait ChannelSender: Send + Sync {
    /// Deliver a plain-text message to a channel
    async fn send_text(&self, channel_id: &str, text: &str) -> Result<SentMessage>;

    /// Deliver a rich message to a channel
    async fn send_rich(&self, channel_id: &str, message: &RichMessage) -> Result<SentMessage>;
}

/// Dispatch wrapper over the channel-sender capability
///
/// Send failures are logged and surfaced to the caller only as `None`; they
/// never propagate as errors.
pub struct Dispatcher {
    sender: Arc<dyn ChannelSender>,
    mode: TestMode,
}

impl Dispatcher {
    /// Create a dispatcher over the given sender
    pub fn new(sender: Arc<dyn ChannelSender>, mode: TestMode) -> Self {
        Self { sender, mode }
    }

    /// Send a plain-text message, tagged with the test-mode prefix
    pub async fn send_text(&self, channel_id: &str, text: &str) -> Option<SentMessage> {
        let text = format!("{}{}", self.mode.message_prefix(), text);
        match self.sender.send_text(channel_id, &text).await {
            Ok(message) => Some(message),
            Err(e) => {
                tracing::error!(
                    "failed to send message {:?} to channel {}: {}",
                    text,
                    channel_id,
                    e
                );
                None
            }
        }
    }

    /// Send a rich message
    ///
    /// Rich messages are forwarded as built; test-mode tagging for them is
    /// the formatter's footer, not a content prefix.
    pub async fn send_rich(&self, channel_id: &str, message: &RichMessage) -> Option<SentMessage> {
        match self.sender.send_rich(channel_id, message).await {
            Ok(sent) => Some(sent),
            Err(e) => {
                tracing::error!(
                    "failed to send rich message {:?} to channel {}: {}",
                    message.title,
                    channel_id,
                    e
                );
                None
            }
        }
    }

    /// The test mode this dispatcher tags traffic with
    pub fn mode(&self) -> &TestMode {
        &self.mode
    }
}
