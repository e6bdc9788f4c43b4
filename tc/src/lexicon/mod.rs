//! Localization tables
//!
//! Language strings are looked up only when the render context does not carry
//! the key itself.
//!
//! Locale loading chain (later layers override earlier keys):
//! 1. Embedded table compiled into the binary
//! 2. `lang/{locale}.yml` (repo default)
//! 3. `.tplcache/lang/{locale}.yml` (user override)

pub mod embedded;
mod loader;

use std::collections::HashMap;

use eyre::{Result, WrapErr};
use serde::Deserialize;

pub use loader::LexiconLoader;

/// Label key to display string
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct Lexicon {
    entries: HashMap<String, String>,
}

impl Lexicon {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a flat `KEY: text` YAML mapping
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        serde_yaml::from_str(content).wrap_err("Failed to parse language table")
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn insert(&mut self, key: impl Into<String>, text: impl Into<String>) -> Option<String> {
        self.entries.insert(key.into(), text.into())
    }

    /// Layer `other` on top; its keys win
    pub fn merge(&mut self, other: Lexicon) {
        self.entries.extend(other.entries);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Lexicon {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_yaml() {
        let lex = Lexicon::from_yaml_str("FAQ: Frequently Asked Questions\nLOGIN: Login\n").unwrap();
        assert_eq!(lex.len(), 2);
        assert_eq!(lex.get("FAQ"), Some("Frequently Asked Questions"));
        assert_eq!(lex.get("MISSING"), None);
    }

    #[test]
    fn test_merge_overrides() {
        let mut base: Lexicon = [("A", "one"), ("B", "two")].into_iter().collect();
        let over: Lexicon = [("B", "deux")].into_iter().collect();
        base.merge(over);
        assert_eq!(base.get("A"), Some("one"));
        assert_eq!(base.get("B"), Some("deux"));
    }

    #[test]
    fn test_invalid_yaml_is_error() {
        assert!(Lexicon::from_yaml_str("- not\n- a map\n").is_err());
    }
}
