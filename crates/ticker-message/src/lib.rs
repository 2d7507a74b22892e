//! Ticker quote chat messaging
//!
//! This crate turns user-supplied symbol lists into formatted chat messages:
//!
//! - Token pipeline: mention stripping, canonicalization, alias expansion,
//!   deduplication
//! - Quote formatting into rich single- and multi-ticker messages
//! - Dispatch through an injected channel-sender capability, with test-mode
//!   tagging for traffic from a test server
//!
//! The chat transport, command parsing, and quote data source are external
//! collaborators; this crate only consumes the [`ChannelSender`] seam and
//! the [`TickerValue`] records a data source produces.
//!
//! # Example
//!
//! ```
//! use ticker_message::{QuoteFormatter, TestMode, TickerValue, text};
//! use ticker_registry::AliasRegistry;
//!
//! let registry = AliasRegistry::with_defaults();
//! let tokens: Vec<String> = ["@quotebot", "?crypto", "goog"]
//!     .iter()
//!     .map(ToString::to_string)
//!     .collect();
//!
//! // "?crypto" expands to the crypto tickers; the mention is dropped.
//! let symbols = text::normalize_tokens(&tokens, &registry);
//! assert_eq!(symbols.last().map(String::as_str), Some("GOOG"));
//!
//! let quote = TickerValue::new("GOOG", Some(134.56), Some(1.23));
//! let message = QuoteFormatter::new(TestMode::live()).single(&quote);
//! assert_eq!(message.description, "Latest Quote: $134.56 (1.23%)");
//! ```

pub mod config;
pub mod error;
pub mod format;
pub mod message;
pub mod quote;
pub mod sender;
pub mod text;

// Re-export main types for convenience
pub use config::TestMode;
pub use error::{MessageError, Result};
pub use format::QuoteFormatter;
pub use message::{MessageField, RichMessage, SentMessage};
pub use quote::TickerValue;
pub use sender::{ChannelSender, Dispatcher};
