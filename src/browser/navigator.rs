//! Navigation capability (the `window.location` analog).

/// One navigation side effect, recorded for inspection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigation {
    /// Full navigation to a target address
    Goto(String),
    /// In-place reload of the current page
    Reload,
}

/// Current location plus the navigation actions. Navigations are terminal in
/// a real browser; here they are recorded so callers can assert on them.
pub trait Navigator {
    /// Full current address
    fn href(&self) -> String;

    /// Path component of the current address (no query, no fragment)
    fn path(&self) -> String;

    /// The visitor's reported locale (e.g. `"ru-RU"`), if known
    fn locale(&self) -> Option<String> {
        None
    }

    fn navigate(&mut self, url: &str);

    fn reload(&mut self);
}

/// In-memory navigator that tracks its location and records every action.
#[derive(Debug, Clone)]
pub struct MemoryNavigator {
    href: String,
    path: String,
    locale: Option<String>,
    events: Vec<Navigation>,
}

impl MemoryNavigator {
    /// Navigator positioned at `href`. The path component is derived from the
    /// address.
    pub fn at(href: impl Into<String>) -> MemoryNavigator {
        let href = href.into();
        let path = path_of(&href);
        MemoryNavigator {
            href,
            path,
            locale: None,
            events: Vec::new(),
        }
    }

    /// Set the visitor's reported locale.
    pub fn with_locale(mut self, locale: impl Into<String>) -> MemoryNavigator {
        self.locale = Some(locale.into());
        self
    }

    /// Every navigation recorded so far, oldest first.
    pub fn events(&self) -> &[Navigation] {
        &self.events
    }

    pub fn last_event(&self) -> Option<&Navigation> {
        self.events.last()
    }
}

impl Navigator for MemoryNavigator {
    fn href(&self) -> String {
        self.href.clone()
    }

    fn path(&self) -> String {
        self.path.clone()
    }

    fn locale(&self) -> Option<String> {
        self.locale.clone()
    }

    fn navigate(&mut self, url: &str) {
        self.events.push(Navigation::Goto(url.to_string()));
        self.href = url.to_string();
        self.path = path_of(url);
    }

    fn reload(&mut self) {
        self.events.push(Navigation::Reload);
    }
}

/// Best-effort path extraction: strip scheme and host if present, then the
/// query and fragment.
fn path_of(href: &str) -> String {
    let after_host = match href.find("://") {
        Some(scheme_end) => {
            let rest = &href[scheme_end + 3..];
            match rest.find('/') {
                Some(slash) => &rest[slash..],
                None => "/",
            }
        }
        None => href,
    };

    let no_fragment = after_host.split('#').next().unwrap_or("");
    no_fragment.split('?').next().unwrap_or("").to_string()
}
