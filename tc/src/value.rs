//! Scalar values carried by a render context

use std::borrow::Cow;
use std::fmt;

use serde::Deserialize;

/// A single value assigned to a context or row field
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "RawScalar")]
pub enum Value {
    /// Plain text, emitted verbatim
    Text(String),
    /// Boolean switch, usually an `S_*` field driving a conditional block
    Flag(bool),
    /// Pre-rendered markup fragment, emitted verbatim
    Markup(String),
}

impl Value {
    /// Text as it appears in the output stream
    ///
    /// Flags render as `1` / empty string.
    pub fn as_output(&self) -> Cow<'_, str> {
        match self {
            Self::Text(s) | Self::Markup(s) => Cow::Borrowed(s.as_str()),
            Self::Flag(true) => Cow::Borrowed("1"),
            Self::Flag(false) => Cow::Borrowed(""),
        }
    }

    /// Truthiness used by conditional blocks
    ///
    /// Empty strings and `"0"` are false, everything else follows the flag.
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Flag(b) => *b,
            Self::Text(s) | Self::Markup(s) => !s.is_empty() && s != "0",
        }
    }

    /// Wrap an already rendered fragment
    pub fn markup(html: impl Into<String>) -> Self {
        Self::Markup(html.into())
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_output())
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Flag(b)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Self::Text(n.to_string())
    }
}

impl From<u64> for Value {
    fn from(n: u64) -> Self {
        Self::Text(n.to_string())
    }
}

impl From<usize> for Value {
    fn from(n: usize) -> Self {
        Self::Text(n.to_string())
    }
}

/// Scalar shapes accepted from YAML/JSON context files
///
/// Integers keep every digit. Unquoted decimals go through `f64` and come
/// out in shortest form (`3.10` becomes `3.1`), so quote them when the
/// written form matters.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawScalar {
    Flag(bool),
    Int(i64),
    Unsigned(u64),
    Float(f64),
    Text(String),
    Null(()),
}

impl From<RawScalar> for Value {
    fn from(raw: RawScalar) -> Self {
        match raw {
            RawScalar::Flag(b) => Self::Flag(b),
            RawScalar::Int(n) => Self::Text(n.to_string()),
            RawScalar::Unsigned(n) => Self::Text(n.to_string()),
            RawScalar::Float(n) => Self::Text(n.to_string()),
            RawScalar::Text(s) => Self::Text(s),
            RawScalar::Null(()) => Self::Text(String::new()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_output() {
        assert_eq!(Value::Flag(true).as_output(), "1");
        assert_eq!(Value::Flag(false).as_output(), "");
    }

    #[test]
    fn test_text_and_markup_verbatim() {
        assert_eq!(Value::from("a < b").as_output(), "a < b");
        assert_eq!(Value::markup("<b>bold</b>").as_output(), "<b>bold</b>");
    }

    #[test]
    fn test_truthiness() {
        assert!(Value::Flag(true).is_truthy());
        assert!(!Value::Flag(false).is_truthy());
        assert!(!Value::from("").is_truthy());
        assert!(!Value::from("0").is_truthy());
        assert!(Value::from("00").is_truthy());
        assert!(Value::from("yes").is_truthy());
    }

    #[test]
    fn test_deserialize_scalars() {
        let v: Value = serde_yaml::from_str("true").unwrap();
        assert_eq!(v, Value::Flag(true));
        let v: Value = serde_yaml::from_str("42").unwrap();
        assert_eq!(v, Value::Text("42".to_string()));
        let v: Value = serde_yaml::from_str("hello").unwrap();
        assert_eq!(v, Value::Text("hello".to_string()));
        let v: Value = serde_yaml::from_str("~").unwrap();
        assert_eq!(v, Value::Text(String::new()));
    }

    #[test]
    fn test_deserialize_large_integers_keep_digits() {
        let v: Value = serde_yaml::from_str("18446744073709551615").unwrap();
        assert_eq!(v, Value::from(u64::MAX));
        let v: Value = serde_json::from_str("18446744073709551615").unwrap();
        assert_eq!(v.as_output(), "18446744073709551615");
        let v: Value = serde_yaml::from_str("-9223372036854775808").unwrap();
        assert_eq!(v.as_output(), "-9223372036854775808");
    }

    #[test]
    fn test_deserialize_decimals() {
        // quoted decimals keep their written form
        let v: Value = serde_yaml::from_str("'3.10'").unwrap();
        assert_eq!(v.as_output(), "3.10");
        let v: Value = serde_json::from_str(r#""1.50""#).unwrap();
        assert_eq!(v.as_output(), "1.50");
        // unquoted ones are normalized
        let v: Value = serde_yaml::from_str("3.10").unwrap();
        assert_eq!(v.as_output(), "3.1");
    }
}
