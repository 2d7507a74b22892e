//! Test-mode configuration for outgoing messages

use serde::{Deserialize, Serialize};

/// Whether outgoing traffic is tagged as coming from a test server
///
/// Threaded explicitly into the formatter and dispatcher rather than held as
/// process-wide state, so behavior is testable without global setup.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TestMode {
    /// Production traffic, no tagging
    #[default]
    Live,

    /// Test-server traffic, tagged with an identifying prefix
    Test {
        /// Prefix used to mark plain messages and rich-message footers
        prefix: String,
    },
}

impl TestMode {
    /// Live (production) mode
    pub fn live() -> Self {
        Self::Live
    }

    /// Enter test mode with an identifying prefix
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        let prefix = prefix.into();
        tracing::info!("running in test mode with prefix: {:?}", prefix);
        Self::Test { prefix }
    }

    /// Prefix prepended to plain-text messages, empty in live mode
    pub fn message_prefix(&self) -> String {
        match self {
            Self::Live => String::new(),
            Self::Test { prefix } => format!("{prefix}: "),
        }
    }

    /// Footer text for rich messages, empty in live mode
    pub fn footer(&self) -> &str {
        match self {
            Self::Live => "",
            Self::Test { prefix } => prefix,
        }
    }

    /// Whether test-mode tagging is active
    pub fn is_test(&self) -> bool {
        matches!(self, Self::Test { .. })
    }
}
