//! Alias registry for ticker symbols
//!
//! This crate provides the lookup table that maps short alias names
//! (e.g. `CRYPTO`) to ordered lists of ticker symbols. A registry is built
//! once at startup and handed by reference to whatever expands user input,
//! so tests can substitute their own tables.
//!
//! # Example
//!
//! ```
//! use ticker_registry::AliasRegistry;
//!
//! let registry = AliasRegistry::with_defaults();
//! let tickers = registry.lookup("FAANG").unwrap();
//! assert_eq!(tickers[0], "FB");
//!
//! // `expand` accepts the wire-level `?ALIAS` form as well
//! assert!(registry.expand("?CRYPTO").is_some());
//! ```

pub mod error;
pub mod registry;

pub use error::{RegistryError, Result};
pub use registry::{AliasRegistry, AliasRegistryBuilder};
