//! Ticker value data model

use serde::{Deserialize, Serialize};

/// Latest quote data for a single ticker symbol
///
/// `value` and `change` are absent (`None`) when the data source had nothing
/// to report. Data sources that encode "no data" as a floating-point NaN
/// should come in through [`TickerValue::from_raw`], which folds the sentinel
/// into the `Option`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TickerValue {
    /// Ticker symbol identifying the instrument
    pub ticker: String,

    /// Latest quote price, absent when the source had no data
    pub value: Option<f64>,

    /// Percent change, absent when the source had no change data
    pub change: Option<f64>,

    /// Free-form supplementary text appended to the quote display
    pub misc_text: String,
}

impl TickerValue {
    /// Create a new ticker value
    pub fn new(ticker: impl Into<String>, value: Option<f64>, change: Option<f64>) -> Self {
        Self {
            ticker: ticker.into(),
            value,
            change,
            misc_text: String::new(),
        }
    }

    /// Create a ticker value carrying no quote data, only supplementary text
    pub fn no_data(ticker: impl Into<String>, misc_text: impl Into<String>) -> Self {
        Self {
            ticker: ticker.into(),
            value: None,
            change: None,
            misc_text: misc_text.into(),
        }
    }

    /// Create a ticker value from raw floats, treating NaN as absent
    ///
    /// This is the bridge for data sources that signal missing data with a
    /// NaN sentinel instead of an optional field.
    pub fn from_raw(
        ticker: impl Into<String>,
        value: f64,
        change: f64,
        misc_text: impl Into<String>,
    ) -> Self {
        Self {
            ticker: ticker.into(),
            value: (!value.is_nan()).then_some(value),
            change: (!change.is_nan()).then_some(change),
            misc_text: misc_text.into(),
        }
    }

    /// Attach supplementary text
    pub fn with_misc_text(mut self, misc_text: impl Into<String>) -> Self {
        self.misc_text = misc_text.into();
        self
    }

    /// Whether this value carries displayable quote data
    ///
    /// A price of exactly zero counts as "no data", matching the upstream
    /// feed contract where zero marks an unresolved symbol.
    pub fn has_data(&self) -> bool {
        matches!(self.value, Some(v) if v != 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_raw_keeps_real_values() {
        let value = TickerValue::from_raw("GOOG", 134.56, 1.23, "");
        assert_eq!(value.value, Some(134.56));
        assert_eq!(value.change, Some(1.23));
    }

    #[test]
    fn test_from_raw_maps_nan_to_none() {
        let value = TickerValue::from_raw("X", f64::NAN, f64::NAN, "halted");
        assert_eq!(value.value, None);
        assert_eq!(value.change, None);
        assert_eq!(value.misc_text, "halted");
    }

    #[test]
    fn test_has_data() {
        assert!(TickerValue::new("GOOG", Some(134.56), None).has_data());
        assert!(!TickerValue::new("X", None, None).has_data());
        // Zero is treated as missing data, not a free instrument.
        assert!(!TickerValue::new("X", Some(0.0), None).has_data());
    }

    #[test]
    fn test_with_misc_text() {
        let value = TickerValue::new("AAPL", Some(190.0), Some(0.5)).with_misc_text("after hours");
        assert_eq!(value.misc_text, "after hours");
    }

    #[test]
    fn test_no_data_constructor() {
        let value = TickerValue::no_data("X", "delisted");
        assert!(!value.has_data());
        assert_eq!(value.ticker, "X");
        assert_eq!(value.misc_text, "delisted");
    }
}
