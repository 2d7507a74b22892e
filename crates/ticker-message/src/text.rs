//! Token pipeline utilities for user-supplied symbol lists
//!
//! Each function is pure and total: every input slice, including the empty
//! one, produces a defined output. Chat input arrives as whitespace-split
//! tokens and flows through [`normalize_tokens`] before symbols are looked
//! up against the quote source.

use std::collections::HashSet;

use ticker_registry::AliasRegistry;

/// Drop every token that starts with `@`, preserving the order of the rest
pub fn remove_mentions(tokens: &[String]) -> Vec<String> {
    tokens
        .iter()
        .filter(|token| !token.starts_with('@'))
        .cloned()
        .collect()
}

/// Uppercase every token
pub fn canonicalize(tokens: &[String]) -> Vec<String> {
    tokens.iter().map(|token| token.to_uppercase()).collect()
}

/// Replace `?ALIAS` tokens with their registry expansion, in place
///
/// A recognized alias contributes its full expansion at the token's position;
/// an unrecognized one passes through unchanged, `?` and all. This is a
/// single pass: expansion output is never re-scanned for further aliases.
pub fn expand_aliases(tokens: &[String], registry: &AliasRegistry) -> Vec<String> {
    let mut expanded = Vec::with_capacity(tokens.len());
    for token in tokens {
        if token.starts_with('?') {
            match registry.expand(token) {
                Some(tickers) => expanded.extend(tickers.iter().cloned()),
                None => expanded.push(token.clone()),
            }
        } else {
            expanded.push(token.clone());
        }
    }
    expanded
}

/// Keep the first occurrence of each token, dropping later duplicates
pub fn dedupe(tokens: &[String]) -> Vec<String> {
    let mut seen = HashSet::new();
    tokens
        .iter()
        .filter(|token| seen.insert(token.as_str()))
        .cloned()
        .collect()
}

/// Full normalization pipeline for raw chat tokens
///
/// Mentions are stripped, tokens are canonicalized, aliases are expanded,
/// and duplicates are collapsed, in that order. Canonicalization runs before
/// expansion so a lowercased `?crypto` still matches the uppercase registry
/// key.
pub fn normalize_tokens(tokens: &[String], registry: &AliasRegistry) -> Vec<String> {
    let tokens = remove_mentions(tokens);
    let tokens = canonicalize(&tokens);
    let tokens = expand_aliases(&tokens, registry);
    dedupe(&tokens)
}
