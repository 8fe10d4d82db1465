//! Redirect guard: decides whether a page load must navigate away.

use crate::config::Config;
use crate::i18n::Language;

/// Filename component of the redirect target: the last `/` segment, query
/// string stripped.
pub fn redirect_filename(redirect_url: &str) -> &str {
    let last_segment = redirect_url.rsplit('/').next().unwrap_or(redirect_url);
    last_segment.split('?').next().unwrap_or(last_segment)
}

/// Redirect target with any leading `./` removed, for "already on the
/// redirect page" address checks.
pub fn redirect_path(redirect_url: &str) -> &str {
    redirect_url.strip_prefix("./").unwrap_or(redirect_url)
}

/// True when the resolved language is blocked and the current path does not
/// already contain the redirect target's filename.
///
/// The containment check is a substring heuristic, not an exact path match:
/// a path that merely contains the filename text suppresses the redirect. A
/// malformed `redirect_url` yields a best-effort filename, never an error.
pub fn should_redirect(current_path: &str, resolved: &Language, config: &Config) -> bool {
    if resolved.code() != config.blocked_language {
        return false;
    }

    let filename = redirect_filename(&config.redirect_url);
    !current_path.contains(filename)
}
