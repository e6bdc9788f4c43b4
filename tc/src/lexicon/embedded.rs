//! Embedded language tables
//!
//! These are compiled into the binary from the YAML files under `lang/`.

use tracing::debug;

/// English (default board language)
pub const EN: &str = include_str!("../../lang/en.yml");

/// Get the embedded table source for a locale
pub fn get_embedded(locale: &str) -> Option<&'static str> {
    debug!(%locale, "get_embedded: called");
    match locale {
        "en" => Some(EN),
        _ => {
            debug!("get_embedded: no match found");
            None
        }
    }
}

/// Locales that ship inside the binary
pub fn locales() -> &'static [&'static str] {
    &["en"]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::Lexicon;

    #[test]
    fn test_get_embedded_en() {
        let src = get_embedded("en").unwrap();
        let lex = Lexicon::from_yaml_str(src).unwrap();
        assert_eq!(lex.get("FAQ"), Some("FAQ"));
        assert!(lex.get("POWERED_BY").is_some());
    }

    #[test]
    fn test_get_embedded_unknown() {
        assert!(get_embedded("xx").is_none());
    }

    #[test]
    fn test_every_listed_locale_parses() {
        for locale in locales() {
            let src = get_embedded(locale).unwrap();
            assert!(!Lexicon::from_yaml_str(src).unwrap().is_empty());
        }
    }
}
