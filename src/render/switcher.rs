//! Language switcher rendering.

use crate::browser::{Element, Page, Selector};
use crate::config::Config;
use crate::i18n::Language;
use crate::render::{ACTIVE_CLASS, BUTTON_CLASS, LANG_ATTR, SWITCHER_CLASS};
use tracing::debug;

/// Build the two-button switcher fragment for the current resolved language.
///
/// The first button carries the default (allowed) code, the second the
/// blocked code. The button whose code equals the resolved language is marked
/// active.
pub fn switcher_fragment(config: &Config, current: &Language) -> Element {
    let mut switcher = Element::new("div").with_class(SWITCHER_CLASS);

    for code in [&config.default_language, &config.blocked_language] {
        let lang = Language::new(code);
        let mut button = Element::new("button").with_class(BUTTON_CLASS);
        if *current == lang {
            button = button.with_class(ACTIVE_CLASS);
        }
        switcher = switcher.with_child(
            button
                .with_attr(LANG_ATTR, lang.code())
                .with_text(lang.label()),
        );
    }

    switcher
}

/// Mount the switcher into every placeholder matching the configured
/// selector, returning the number populated.
///
/// Idempotent: each mount's children are fully replaced, so repeated calls
/// never accumulate duplicate controls. An unusable selector renders nothing.
pub fn render_switchers(page: &mut Page, config: &Config, current: &Language) -> usize {
    let selector = match Selector::parse(&config.selectors.switcher) {
        Ok(selector) => selector,
        Err(e) => {
            debug!("Switcher selector matches nothing: {e}");
            return 0;
        }
    };

    let fragment = switcher_fragment(config, current);
    page.for_each_match(&selector, &mut |mount| {
        mount.clear_children();
        mount.children.push(fragment.clone());
    })
}
