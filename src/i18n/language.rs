//! Language token: the resolved-language value a session carries.
//!
//! Unlike registry metadata, a `Language` is an owned code string. Codes come
//! from storage, cookies, or caller configuration and are accepted as-is
//! (arbitrary strings are valid); the registry is only consulted for display
//! forms.

use crate::i18n::LanguageRegistry;
use std::fmt;

/// An owned language code.
///
/// Once resolved, this is the single source of truth for both rendering and
/// redirect decisions within a page load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Language {
    code: String,
}

impl Language {
    /// Create a language token from a code string.
    ///
    /// Surrounding whitespace is trimmed; no other normalization is applied,
    /// so comparisons against configured codes stay exact.
    pub fn new(code: impl AsRef<str>) -> Language {
        Language {
            code: code.as_ref().trim().to_string(),
        }
    }

    /// The language code.
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Short display label for switcher buttons.
    ///
    /// Known codes use their registry label ("UA", "RU"); unknown codes fall
    /// back to the uppercased code.
    pub fn label(&self) -> String {
        match LanguageRegistry::get().get_by_code(&self.code) {
            Some(config) => config.label.to_string(),
            None => self.code.to_uppercase(),
        }
    }

    /// Whether the registry knows this code.
    pub fn is_known(&self) -> bool {
        LanguageRegistry::get().get_by_code(&self.code).is_some()
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.code)
    }
}

impl From<&str> for Language {
    fn from(code: &str) -> Language {
        Language::new(code)
    }
}

impl PartialEq<str> for Language {
    fn eq(&self, other: &str) -> bool {
        self.code == other
    }
}

impl PartialEq<&str> for Language {
    fn eq(&self, other: &&str) -> bool {
        self.code == *other
    }
}
