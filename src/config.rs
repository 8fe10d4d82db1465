use serde::Deserialize;

/// CSS selectors for the page elements the library populates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selectors {
    /// Placeholder elements that receive the rendered language switcher
    pub switcher: String,
}

/// Runtime configuration for a session.
///
/// Values are accepted as-is; nothing here is validated. A malformed
/// `redirect_url` degrades to a best-effort path match downstream, never an
/// error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Language code whose detection triggers the mandatory redirect
    pub blocked_language: String,

    /// Navigation target for blocked visitors, also the source of the
    /// path-match filename in the redirect guard
    pub redirect_url: String,

    /// Key used for both the durable store entry and the cookie
    pub storage_key: String,

    /// Code resolution falls back to when no preference is found
    pub default_language: String,

    /// Element selectors
    pub selectors: Selectors,
}

/// Caller-supplied overrides, shallow-merged onto [`Config::default`].
///
/// Every field is optional; unset fields keep their defaults. Deserializable
/// so hosts can feed overrides from JSON config documents.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ConfigOverrides {
    pub blocked_language: Option<String>,
    pub redirect_url: Option<String>,
    pub storage_key: Option<String>,
    pub default_language: Option<String>,
    pub switcher_selector: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            blocked_language: "ru".to_string(),
            redirect_url: "./goaway.html".to_string(),
            storage_key: "language".to_string(),
            default_language: "ua".to_string(),
            selectors: Selectors {
                switcher: ".lrb-element-switcher".to_string(),
            },
        }
    }
}

impl Config {
    /// Build a config by shallow-merging `overrides` onto the defaults.
    pub fn with_overrides(overrides: ConfigOverrides) -> Self {
        let mut config = Self::default();

        if let Some(blocked) = overrides.blocked_language {
            config.blocked_language = blocked;
        }
        if let Some(url) = overrides.redirect_url {
            config.redirect_url = url;
        }
        if let Some(key) = overrides.storage_key {
            config.storage_key = key;
        }
        if let Some(default) = overrides.default_language {
            config.default_language = default;
        }
        if let Some(selector) = overrides.switcher_selector {
            config.selectors.switcher = selector;
        }

        config
    }

    /// Set the blocked language code
    pub fn with_blocked_language(mut self, code: impl Into<String>) -> Self {
        self.blocked_language = code.into();
        self
    }

    /// Set the redirect target
    pub fn with_redirect_url(mut self, url: impl Into<String>) -> Self {
        self.redirect_url = url.into();
        self
    }

    /// Set the storage/cookie key
    pub fn with_storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = key.into();
        self
    }

    /// Set the default (allowed) language code
    pub fn with_default_language(mut self, code: impl Into<String>) -> Self {
        self.default_language = code.into();
        self
    }

    /// Set the switcher placeholder selector
    pub fn with_switcher_selector(mut self, selector: impl Into<String>) -> Self {
        self.selectors.switcher = selector.into();
        self
    }

    /// Load configuration from `LRB_*` environment variables.
    ///
    /// Every variable is optional; unset variables keep their defaults.
    pub fn from_env() -> Self {
        Self::with_overrides(ConfigOverrides {
            blocked_language: std::env::var("LRB_BLOCKED_LANGUAGE").ok(),
            redirect_url: std::env::var("LRB_REDIRECT_URL").ok(),
            storage_key: std::env::var("LRB_STORAGE_KEY").ok(),
            default_language: std::env::var("LRB_DEFAULT_LANGUAGE").ok(),
            switcher_selector: std::env::var("LRB_SWITCHER_SELECTOR").ok(),
        })
    }
}
