//! Preference resolver: determines the active language for a page load.
//!
//! Priority order: durable storage → cookie → locale heuristic → configured
//! default. Degraded reads (storage errors, absent entries) fall through to
//! the next source.

use crate::browser::{CookieJar, Storage};
use crate::config::Config;
use crate::cookie;
use crate::i18n::Language;
use tracing::{debug, warn};

/// Where the resolved language came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    Storage,
    Cookie,
    LocaleHeuristic,
    Default,
}

/// The outcome of preference resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub language: Language,
    pub source: Source,
}

impl Resolution {
    /// True when this page view detected the blocked language from the
    /// visitor's locale rather than a stored preference. The session reacts
    /// by persisting the blocked code and short-circuiting initialization.
    pub fn is_auto_blocked(&self) -> bool {
        self.source == Source::LocaleHeuristic
    }
}

/// Resolve the active language.
///
/// When storage is empty but the cookie holds a value, the cookie is
/// authoritative for this load and is immediately backfilled into storage —
/// with no navigation side effect.
pub fn resolve(
    config: &Config,
    storage: &mut dyn Storage,
    cookies: &dyn CookieJar,
    locale: Option<&str>,
) -> Resolution {
    let saved = read_storage(storage, &config.storage_key);
    let from_cookie =
        cookie::read(&cookies.header(), &config.storage_key).filter(|v| !v.is_empty());

    if let Some(value) = saved {
        debug!(language = %value, "Resolved from durable storage");
        return Resolution {
            language: Language::new(value),
            source: Source::Storage,
        };
    }

    if let Some(value) = from_cookie {
        // Storage lost the preference but the cookie kept it; restore the
        // redundant copy before anything else runs.
        if let Err(e) = storage.set(&config.storage_key, &value) {
            warn!("Failed to backfill storage from cookie: {e:#}");
        }
        debug!(language = %value, "Resolved from cookie");
        return Resolution {
            language: Language::new(value),
            source: Source::Cookie,
        };
    }

    if let Some(locale) = locale {
        if locale_matches_blocked(locale, &config.blocked_language) {
            debug!(locale, "Locale heuristic matched the blocked language");
            return Resolution {
                language: Language::new(&config.blocked_language),
                source: Source::LocaleHeuristic,
            };
        }
    }

    Resolution {
        language: Language::new(&config.default_language),
        source: Source::Default,
    }
}

fn read_storage(storage: &dyn Storage, key: &str) -> Option<String> {
    match storage.get(key) {
        Ok(value) => value.filter(|v| !v.is_empty()),
        Err(e) => {
            warn!("Storage read failed, treating as no preference: {e:#}");
            None
        }
    }
}

/// Case-insensitive check for the blocked language's locale family: the
/// blocked code appearing anywhere in the locale string (`"ru-RU"`,
/// `"ru"`, `"ru_UA"` all match a blocked `"ru"`).
fn locale_matches_blocked(locale: &str, blocked: &str) -> bool {
    !blocked.is_empty() && locale.to_lowercase().contains(&blocked.to_lowercase())
}
