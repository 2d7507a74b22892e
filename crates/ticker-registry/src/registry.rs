//! Alias-to-ticker lookup tables

use crate::error::{RegistryError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Immutable mapping from alias name to an ordered list of ticker symbols
///
/// Names are matched exactly and case-sensitively, without the `?` prefix
/// used in chat input. Expansion lists keep their declaration order because
/// that order is also the display order; the registry does not enforce
/// uniqueness within a list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AliasRegistry {
    aliases: HashMap<String, Vec<String>>,
}

impl AliasRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry builder
    pub fn builder() -> AliasRegistryBuilder {
        AliasRegistryBuilder::default()
    }

    /// Create a registry pre-populated with the built-in alias table
    pub fn with_defaults() -> Self {
        Self::builder()
            .alias("CRYPTO", ["$BTC", "$ETH", "$LTC", "$LINK", "$BCH", "$ZEC"])
            .alias("MEMES", ["THCX", "PLUG", "FCEL", "BLDP", "NVDA"])
            .alias("FAANG", ["FB", "AMZN", "AAPL", "NFLX", "GOOG"])
            .alias(
                "DEFI",
                ["$UNI", "$YFI", "$COMP", "$MKR", "$AAVE", "$CRV", "$SUSHI"],
            )
            .build()
    }

    /// Load a registry from a JSON object mapping alias names to ticker lists
    ///
    /// ```
    /// use ticker_registry::AliasRegistry;
    ///
    /// let registry = AliasRegistry::from_json_str(
    ///     r#"{"INDEX": ["SPY", "QQQ", "DIA"]}"#,
    /// ).unwrap();
    /// assert_eq!(registry.lookup("INDEX").unwrap().len(), 3);
    /// ```
    pub fn from_json_str(json: &str) -> Result<Self> {
        let registry: Self = serde_json::from_str(json)?;
        registry.validate()?;
        Ok(registry)
    }

    /// Load a registry from a JSON reader (e.g. a config file)
    pub fn from_json_reader<R: std::io::Read>(reader: R) -> Result<Self> {
        let registry: Self = serde_json::from_reader(reader)?;
        registry.validate()?;
        Ok(registry)
    }

    /// Look up an alias by its bare name
    ///
    /// The name must match a registry key exactly, case-sensitively, and
    /// without the `?` prefix. `None` is the normal "no such alias" outcome,
    /// not a failure.
    pub fn lookup(&self, name: &str) -> Option<&[String]> {
        self.aliases.get(name).map(Vec::as_slice)
    }

    /// Expand a chat token of the form `?ALIAS` (or a bare alias name)
    ///
    /// Strips a single leading `?` if present, then looks the name up.
    pub fn expand(&self, token: &str) -> Option<&[String]> {
        self.lookup(token.strip_prefix('?').unwrap_or(token))
    }

    /// Iterate over the registered alias names
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.aliases.keys().map(String::as_str)
    }

    /// Get the number of registered aliases
    pub fn len(&self) -> usize {
        self.aliases.len()
    }

    /// Check whether the registry has no aliases
    pub fn is_empty(&self) -> bool {
        self.aliases.is_empty()
    }

    fn validate(&self) -> Result<()> {
        for (name, tickers) in &self.aliases {
            if tickers.is_empty() {
                return Err(RegistryError::EmptyExpansion(name.clone()));
            }
        }
        Ok(())
    }
}

/// Builder for `AliasRegistry`
#[derive(Debug, Default)]
pub struct AliasRegistryBuilder {
    aliases: HashMap<String, Vec<String>>,
}

impl AliasRegistryBuilder {
    /// Register an alias with its ordered expansion
    pub fn alias<I, S>(mut self, name: impl Into<String>, tickers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.aliases
            .insert(name.into(), tickers.into_iter().map(Into::into).collect());
        self
    }

    /// Build the registry
    pub fn build(self) -> AliasRegistry {
        AliasRegistry {
            aliases: self.aliases,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_known_alias() {
        let registry = AliasRegistry::with_defaults();
        let tickers = registry.lookup("CRYPTO").unwrap();
        assert_eq!(
            tickers,
            ["$BTC", "$ETH", "$LTC", "$LINK", "$BCH", "$ZEC"]
        );
    }

    #[test]
    fn test_lookup_preserves_declaration_order() {
        let registry = AliasRegistry::with_defaults();
        let tickers = registry.lookup("FAANG").unwrap();
        assert_eq!(tickers, ["FB", "AMZN", "AAPL", "NFLX", "GOOG"]);
    }

    #[test]
    fn test_lookup_unknown_alias() {
        let registry = AliasRegistry::with_defaults();
        assert!(registry.lookup("UNKNOWN").is_none());
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        let registry = AliasRegistry::with_defaults();
        assert!(registry.lookup("crypto").is_none());
        assert!(registry.lookup("CRYPTO").is_some());
    }

    #[test]
    fn test_expand_strips_question_mark() {
        let registry = AliasRegistry::with_defaults();
        assert_eq!(registry.expand("?MEMES"), registry.lookup("MEMES"));
    }

    #[test]
    fn test_expand_accepts_bare_name() {
        let registry = AliasRegistry::with_defaults();
        assert_eq!(registry.expand("DEFI"), registry.lookup("DEFI"));
    }

    #[test]
    fn test_expand_strips_single_prefix_only() {
        // A second `?` is part of the name, and no such name exists.
        let registry = AliasRegistry::with_defaults();
        assert!(registry.expand("??CRYPTO").is_none());
    }

    #[test]
    fn test_builder() {
        let registry = AliasRegistry::builder()
            .alias("INDEX", ["SPY", "QQQ"])
            .alias("SOLO", ["AAPL"])
            .build();

        assert_eq!(registry.len(), 2);
        assert_eq!(registry.lookup("INDEX").unwrap(), ["SPY", "QQQ"]);
        assert_eq!(registry.lookup("SOLO").unwrap(), ["AAPL"]);
    }

    #[test]
    fn test_empty_registry() {
        let registry = AliasRegistry::new();
        assert!(registry.is_empty());
        assert!(registry.lookup("CRYPTO").is_none());
    }

    #[test]
    fn test_from_json_str() {
        let registry = AliasRegistry::from_json_str(
            r#"{"CRYPTO": ["$BTC", "$ETH"], "INDEX": ["SPY"]}"#,
        )
        .unwrap();

        assert_eq!(registry.lookup("CRYPTO").unwrap(), ["$BTC", "$ETH"]);
        assert_eq!(registry.lookup("INDEX").unwrap(), ["SPY"]);
    }

    #[test]
    fn test_from_json_rejects_empty_expansion() {
        let result = AliasRegistry::from_json_str(r#"{"EMPTY": []}"#);
        assert!(matches!(
            result,
            Err(RegistryError::EmptyExpansion(name)) if name == "EMPTY"
        ));
    }

    #[test]
    fn test_from_json_rejects_malformed_input() {
        let result = AliasRegistry::from_json_str("not json");
        assert!(matches!(result, Err(RegistryError::Json(_))));
    }

    #[test]
    fn test_names_cover_default_table() {
        let registry = AliasRegistry::with_defaults();
        let mut names: Vec<&str> = registry.names().collect();
        names.sort_unstable();
        assert_eq!(names, ["CRYPTO", "DEFI", "FAANG", "MEMES"]);
    }
}
