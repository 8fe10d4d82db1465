//! Language registry: single source of truth for the languages the switcher
//! knows how to display.
//!
//! The registry is metadata only. Session state and configuration accept
//! arbitrary code strings; the registry supplies display labels and names for
//! the codes it recognizes.

use std::sync::OnceLock;

/// Metadata for a known language.
#[derive(Debug, Clone)]
pub struct LanguageConfig {
    /// ISO 639-1 style language code (e.g., "ua", "ru")
    pub code: &'static str,

    /// English name of the language
    pub name: &'static str,

    /// Native name of the language
    pub native_name: &'static str,

    /// Short label rendered on switcher buttons
    pub label: &'static str,

    /// Whether this is the default (allowed) language
    pub is_default: bool,

    /// Whether this language is enabled for use
    pub enabled: bool,
}

/// Global language registry.
///
/// Initialized once on first access and immutable thereafter. Unlike session
/// state, which is explicitly constructed per page load, this is shared
/// metadata and safe to keep process-wide.
pub struct LanguageRegistry {
    languages: Vec<LanguageConfig>,
}

static REGISTRY: OnceLock<LanguageRegistry> = OnceLock::new();

impl LanguageRegistry {
    /// Get the global registry instance.
    pub fn get() -> &'static LanguageRegistry {
        REGISTRY.get_or_init(|| LanguageRegistry {
            languages: default_languages(),
        })
    }

    /// Look up a language by its code.
    ///
    /// Returns `None` for codes the registry does not know; callers fall back
    /// to code-derived display forms in that case.
    pub fn get_by_code(&self, code: &str) -> Option<&LanguageConfig> {
        self.languages.iter().find(|lang| lang.code == code)
    }

    /// All enabled languages, in declaration order.
    pub fn list_enabled(&self) -> Vec<&LanguageConfig> {
        self.languages.iter().filter(|lang| lang.enabled).collect()
    }

    /// The default (allowed) language.
    ///
    /// # Panics
    /// Panics if no default language is declared or if more than one is
    /// (either indicates a registry definition error).
    pub fn default_language(&self) -> &LanguageConfig {
        let defaults: Vec<_> = self
            .languages
            .iter()
            .filter(|lang| lang.is_default)
            .collect();

        match defaults.len() {
            0 => panic!("No default language found in registry"),
            1 => defaults[0],
            _ => panic!("Multiple default languages found in registry"),
        }
    }

    /// Check whether a code is known and enabled.
    pub fn is_enabled(&self, code: &str) -> bool {
        self.get_by_code(code)
            .map(|lang| lang.enabled)
            .unwrap_or(false)
    }
}

/// The built-in language set: Ukrainian (default) and Russian (the code the
/// default policy blocks).
fn default_languages() -> Vec<LanguageConfig> {
    vec![
        LanguageConfig {
            code: "ua",
            name: "Ukrainian",
            native_name: "Українська",
            label: "UA",
            is_default: true,
            enabled: true,
        },
        LanguageConfig {
            code: "ru",
            name: "Russian",
            native_name: "Русский",
            label: "RU",
            is_default: false,
            enabled: true,
        },
    ]
}
