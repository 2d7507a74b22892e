//! Message types for chat dispatch

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Rich structured message, as opposed to plain text
///
/// Maps onto the embed-style message shape chat platforms render with a
/// linked title, a body, optional per-ticker fields, and a footer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RichMessage {
    /// Message title, typically a ticker symbol
    pub title: String,

    /// Link attached to the title
    pub url: Option<String>,

    /// Message body
    pub description: String,

    /// Per-ticker fields for multi-ticker messages
    pub fields: Vec<MessageField>,

    /// Footer text; empty outside test mode
    pub footer: String,
}

/// One field of a multi-ticker rich message
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageField {
    /// Field name, typically a ticker symbol
    pub name: String,

    /// Field body
    pub value: String,

    /// Whether the platform may render this field inline with its neighbors
    pub inline: bool,
}

impl RichMessage {
    /// Create a rich message with a title and body
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            ..Self::default()
        }
    }

    /// Attach a URL to the title
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Append a field
    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.push(MessageField {
            name: name.into(),
            value: value.into(),
            inline: false,
        });
        self
    }

    /// Set the footer text
    pub fn with_footer(mut self, footer: impl Into<String>) -> Self {
        self.footer = footer.into();
        self
    }
}

/// Record of a message accepted by the channel sender
///
/// Returned by a successful dispatch so callers can correlate follow-ups
/// with what was actually delivered.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SentMessage {
    /// Unique id assigned to the outgoing message
    pub id: String,

    /// Channel the message was delivered to
    pub channel_id: String,

    /// Text content as delivered, including any test-mode prefix
    pub content: String,

    /// Delivery timestamp
    pub timestamp: DateTime<Utc>,
}

impl SentMessage {
    /// Create a delivery record for a message accepted just now
    pub fn new(channel_id: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            channel_id: channel_id.into(),
            content: content.into(),
            timestamp: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rich_message_builder() {
        let message = RichMessage::new("GOOG", "Latest Quote: $134.56")
            .with_url("https://www.google.com/search?q=GOOG")
            .with_footer("TEST");

        assert_eq!(message.title, "GOOG");
        assert_eq!(message.url.as_deref(), Some("https://www.google.com/search?q=GOOG"));
        assert_eq!(message.footer, "TEST");
        assert!(message.fields.is_empty());
    }

    #[test]
    fn test_rich_message_fields_keep_order() {
        let message = RichMessage::default()
            .with_field("AAPL", "$190.00")
            .with_field("MSFT", "$420.00");

        assert_eq!(message.fields.len(), 2);
        assert_eq!(message.fields[0].name, "AAPL");
        assert_eq!(message.fields[1].name, "MSFT");
        assert!(!message.fields[0].inline);
    }

    #[test]
    fn test_rich_message_serializes_to_json() {
        let message = RichMessage::new("GOOG", "body").with_field("GOOG", "$134.56");
        let json = serde_json::to_value(&message).unwrap();

        assert_eq!(json["title"], "GOOG");
        assert_eq!(json["fields"][0]["value"], "$134.56");
    }

    #[test]
    fn test_sent_message_ids_are_unique() {
        let a = SentMessage::new("chan", "hello");
        let b = SentMessage::new("chan", "hello");
        assert_ne!(a.id, b.id);
        assert_eq!(a.channel_id, "chan");
    }
}
