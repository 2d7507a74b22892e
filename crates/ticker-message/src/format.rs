//! Quote display formatting
//!
//! Builds the rich-message representations of single- and multi-ticker
//! quotes. The formatter is constructed with an explicit [`TestMode`] so
//! test-server traffic gets its footer tag without any ambient state.

use crate::config::TestMode;
use crate::message::RichMessage;
use crate::quote::TickerValue;
use url::Url;

/// Base URL for the search link attached to a quote title
const SEARCH_URL: &str = "https://www.google.com/search";

/// Fallback body for tickers the data source could not resolve
const NO_DATA: &str = "No Data";

/// Formatter for quote display messages
#[derive(Debug, Clone, Default)]
pub struct QuoteFormatter {
    mode: TestMode,
}

impl QuoteFormatter {
    /// Create a formatter for the given test mode
    pub fn new(mode: TestMode) -> Self {
        Self { mode }
    }

    /// Build the rich message for a single ticker quote
    ///
    /// The title is the ticker symbol, linked to a search for it. The body
    /// carries the price to two decimals, a percent-change suffix when the
    /// change is present and non-zero, and a trailing line of supplementary
    /// text when there is any.
    pub fn single(&self, quote: &TickerValue) -> RichMessage {
        let description = match quote.value {
            Some(value) => format!("Latest Quote: {}", priced_body(value, quote)),
            None => no_data_body(quote),
        };

        let mut message =
            RichMessage::new(&quote.ticker, description).with_footer(self.mode.footer());
        if let Some(url) = search_url(&quote.ticker) {
            message = message.with_url(url);
        }
        message
    }

    /// Build the rich message for a list of ticker quotes
    ///
    /// One field per ticker, in input order. Tickers without data get the
    /// literal fallback body instead of a price line; their field name is
    /// still the ticker symbol.
    pub fn multiple(&self, quotes: &[TickerValue]) -> RichMessage {
        let mut message = RichMessage::default().with_footer(self.mode.footer());
        for quote in quotes {
            message = message.with_field(&quote.ticker, self.field_body(quote));
        }
        message
    }

    fn field_body(&self, quote: &TickerValue) -> String {
        match quote.value {
            Some(value) if quote.has_data() => priced_body(value, quote),
            _ => no_data_body(quote),
        }
    }
}

/// Price body shared by the single and multi views: `$<price> (<change>%)`
/// plus the supplementary line
fn priced_body(value: f64, quote: &TickerValue) -> String {
    let mut body = format!("${value:.2}");
    if let Some(change) = quote.change {
        if change != 0.0 {
            body.push_str(&format!(" ({change:.2}%)"));
        }
    }
    if !quote.misc_text.is_empty() {
        body.push('\n');
        body.push_str(&quote.misc_text);
    }
    body
}

fn no_data_body(quote: &TickerValue) -> String {
    format!("{NO_DATA} - {}", quote.misc_text)
}

/// Search link for a ticker symbol, with the symbol query-encoded
fn search_url(ticker: &str) -> Option<String> {
    Url::parse_with_params(SEARCH_URL, [("q", ticker)])
        .map(String::from)
        .ok()
}
