//! Field resolution: context value, then language string, then placeholder
//!
//! Keys prefixed `L_` name a language string whose table key drops the
//! prefix. Keys prefixed `LA_` are the same string escaped for use inside a
//! JavaScript string literal.

use std::borrow::Cow;
use std::fmt;

use crate::context::Record;
use crate::lexicon::Lexicon;

/// Which tier of the chain produced a value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    Context,
    Lexicon,
    Placeholder,
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Context => "context",
            Self::Lexicon => "lexicon",
            Self::Placeholder => "placeholder",
        };
        f.write_str(s)
    }
}

/// A resolved field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolved<'a> {
    pub text: Cow<'a, str>,
    pub source: Source,
}

impl Resolved<'_> {
    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for Resolved<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Visible stand-in for a key nobody supplied
pub fn placeholder(key: &str) -> String {
    format!("{{ {} }}", key)
}

/// Backslash-escape `\`, `'` and `"`
pub fn js_escape(text: &str) -> Cow<'_, str> {
    if !text.contains(['\\', '\'', '"']) {
        return Cow::Borrowed(text);
    }
    let mut out = String::with_capacity(text.len() + 8);
    for c in text.chars() {
        if matches!(c, '\\' | '\'' | '"') {
            out.push('\\');
        }
        out.push(c);
    }
    Cow::Owned(out)
}

fn escaped(text: Cow<'_, str>) -> Cow<'_, str> {
    match text {
        Cow::Borrowed(s) => js_escape(s),
        Cow::Owned(s) => Cow::Owned(js_escape(&s).into_owned()),
    }
}

/// Resolve `key` against a record scope and a language table
///
/// Never fails: the last tier always produces `{ KEY }`.
pub fn resolve<'a>(scope: &'a Record, key: &str, lexicon: &'a Lexicon) -> Resolved<'a> {
    if let Some(value) = scope.get(key) {
        return Resolved {
            text: value.as_output(),
            source: Source::Context,
        };
    }

    if let Some(lang_key) = key.strip_prefix("LA_") {
        if let Some(value) = scope.get(&format!("L_{}", lang_key)) {
            return Resolved {
                text: escaped(value.as_output()),
                source: Source::Context,
            };
        }
        return match lexicon.get(lang_key) {
            Some(text) => Resolved {
                text: js_escape(text),
                source: Source::Lexicon,
            },
            None => Resolved {
                text: Cow::Owned(placeholder(lang_key)),
                source: Source::Placeholder,
            },
        };
    }

    let lang_key = key.strip_prefix("L_").unwrap_or(key);
    match lexicon.get(lang_key) {
        Some(text) => Resolved {
            text: Cow::Borrowed(text),
            source: Source::Lexicon,
        },
        None => Resolved {
            text: Cow::Owned(placeholder(lang_key)),
            source: Source::Placeholder,
        },
    }
}
