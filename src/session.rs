//! Session: one page load's worth of state and the pipeline that drives it.
//!
//! A session owns its configuration and capabilities; nothing lives in
//! process-wide state, so independent sessions can run side by side in one
//! test process.

use crate::browser::{
    CookieJar, MemoryCookieJar, MemoryNavigator, MemoryStorage, Navigator, Page, Storage,
};
use crate::config::Config;
use crate::cookie;
use crate::i18n::Language;
use crate::redirect;
use crate::render;
use crate::resolve;
use std::fmt;
use tracing::{debug, info, warn};

/// Document navigated to when the visitor switches off the blocked language
/// while sitting on the redirect page.
const ROOT_DOCUMENT: &str = "./index.html";

/// Named steps of the page-load pipeline, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitStep {
    Resolve,
    RenderSwitchers,
    CheckRedirect,
    InitGlitch,
}

impl fmt::Display for InitStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            InitStep::Resolve => "resolve",
            InitStep::RenderSwitchers => "render-switchers",
            InitStep::CheckRedirect => "check-redirect",
            InitStep::InitGlitch => "init-glitch",
        };
        f.write_str(name)
    }
}

/// The page-load sequence. One early exit: when resolution auto-detects the
/// blocked language, the setter runs and everything after `Resolve` is
/// skipped.
pub const PIPELINE: [InitStep; 4] = [
    InitStep::Resolve,
    InitStep::RenderSwitchers,
    InitStep::CheckRedirect,
    InitStep::InitGlitch,
];

/// How a pipeline run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitOutcome {
    /// The locale heuristic detected the blocked language; the setter
    /// persisted it and navigated, and the remaining steps were skipped.
    AutoBlocked,
    /// Every pipeline step ran (navigation may still have been recorded by
    /// the redirect check).
    Completed,
}

/// One page load: configuration, capabilities, and the resolved language.
pub struct Session<S, C, N> {
    config: Config,
    storage: S,
    cookies: C,
    navigator: N,
    page: Page,
    current: Option<Language>,
}

impl Session<MemoryStorage, MemoryCookieJar, MemoryNavigator> {
    /// Session over fully in-memory capabilities, positioned at the root
    /// document.
    pub fn in_memory(config: Config, page: Page) -> Self {
        Session::new(
            config,
            MemoryStorage::new(),
            MemoryCookieJar::new(),
            MemoryNavigator::at(ROOT_DOCUMENT),
            page,
        )
    }
}

impl<S, C, N> Session<S, C, N>
where
    S: Storage,
    C: CookieJar,
    N: Navigator,
{
    pub fn new(config: Config, storage: S, cookies: C, navigator: N, page: Page) -> Self {
        Session {
            config,
            storage,
            cookies,
            navigator,
            page,
            current: None,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn cookies(&self) -> &C {
        &self.cookies
    }

    pub fn navigator(&self) -> &N {
        &self.navigator
    }

    pub fn page(&self) -> &Page {
        &self.page
    }

    /// The resolved language, once `init` (or `set_language`) has run.
    pub fn current_language(&self) -> Option<&Language> {
        self.current.as_ref()
    }

    /// Run the page-load pipeline.
    pub fn init(&mut self) -> InitOutcome {
        for step in PIPELINE {
            debug!(step = %step, "Running init step");
            match step {
                InitStep::Resolve => {
                    let locale = self.navigator.locale();
                    let resolution = resolve::resolve(
                        &self.config,
                        &mut self.storage,
                        &self.cookies,
                        locale.as_deref(),
                    );
                    info!(
                        language = %resolution.language,
                        source = ?resolution.source,
                        "Language resolved"
                    );

                    let auto_blocked = resolution.is_auto_blocked();
                    self.current = Some(resolution.language);

                    if auto_blocked {
                        // Persist the detection so the visitor stays blocked
                        // until they switch manually; the setter navigates.
                        let blocked = self.config.blocked_language.clone();
                        self.set_language(&blocked);
                        debug!("Auto-block short-circuited initialization");
                        return InitOutcome::AutoBlocked;
                    }
                }
                InitStep::RenderSwitchers => {
                    let rendered = self.render_switchers();
                    debug!(rendered, "Switcher mounts populated");
                }
                InitStep::CheckRedirect => {
                    self.check_redirect();
                }
                InitStep::InitGlitch => {
                    self.init_glitch();
                }
            }
        }

        InitOutcome::Completed
    }

    /// Set the active language: update state, persist to both stores, then
    /// navigate.
    ///
    /// Three-way branch: blocked code → redirect target; unblocked while on
    /// the redirect page → root document; unblocked elsewhere → reload.
    pub fn set_language(&mut self, code: &str) {
        let language = Language::new(code);
        info!(language = %language, "Setting language");

        if let Err(e) = self.storage.set(&self.config.storage_key, language.code()) {
            warn!("Failed to persist language to storage: {e:#}");
        }
        self.cookies.apply(&cookie::set_cookie_value(
            &self.config.storage_key,
            language.code(),
        ));

        let blocked = language.code() == self.config.blocked_language;
        self.current = Some(language);

        if blocked {
            self.navigator.navigate(&self.config.redirect_url);
        } else if self
            .navigator
            .href()
            .contains(redirect::redirect_path(&self.config.redirect_url))
        {
            self.navigator.navigate(ROOT_DOCUMENT);
        } else {
            self.navigator.reload();
        }
    }

    /// Populate every switcher mount for the current language. Falls back to
    /// the configured default when resolution has not run.
    pub fn render_switchers(&mut self) -> usize {
        let current = self
            .current
            .clone()
            .unwrap_or_else(|| Language::new(&self.config.default_language));
        render::render_switchers(&mut self.page, &self.config, &current)
    }

    /// Navigate to the redirect target when the resolved language is blocked
    /// and the current path is not already there. Returns whether navigation
    /// was triggered.
    pub fn check_redirect(&mut self) -> bool {
        let current = match &self.current {
            Some(current) => current,
            None => return false,
        };

        if redirect::should_redirect(&self.navigator.path(), current, &self.config) {
            info!(redirect_url = %self.config.redirect_url, "Blocked language off the redirect page, navigating");
            self.navigator.navigate(&self.config.redirect_url);
            return true;
        }

        false
    }

    /// Apply the glitch effect when the page carries the landing-page marker.
    pub fn init_glitch(&mut self) -> bool {
        render::init_glitch(&mut self.page)
    }
}
