//! Markup production: the switcher fragment and the glitch layers.
//!
//! Class and attribute names here are the produced half of the DOM contract;
//! hosting pages style against them.

mod glitch;
mod switcher;

pub use glitch::init_glitch;
pub use switcher::{render_switchers, switcher_fragment};

/// Wrapper element around the two switcher buttons
pub const SWITCHER_CLASS: &str = "lrb-switcher";

/// Switcher button class
pub const BUTTON_CLASS: &str = "lrb-btn";

/// Marker class on the button matching the resolved language
pub const ACTIVE_CLASS: &str = "active";

/// Attribute carrying each button's language code; activation maps the value
/// to `Session::set_language`
pub const LANG_ATTR: &str = "data-lang";

/// Container marking the redirect-landing page (consumed)
pub const ART_CONTAINER_CLASS: &str = "lrb-ascii-container";

/// The ASCII-art element inside the container (consumed)
pub const ART_CLASS: &str = "lrb-ascii-art";

/// Class shared by both glitch clones
pub const GLITCH_LAYER_CLASS: &str = "lrb-glitch-layer";

/// Per-layer classes; external styling keys animation offsets off these
pub const GLITCH_LAYER_1_CLASS: &str = "lrb-glitch-1";
pub const GLITCH_LAYER_2_CLASS: &str = "lrb-glitch-2";

#[cfg(test)]
pub(crate) mod tests_support {
    use crate::browser::{Element, Page};

    /// A page with `count` empty switcher mounts.
    pub fn page_with_mounts(count: usize) -> Page {
        let mut body = Element::new("body");
        for _ in 0..count {
            body = body.with_child(Element::new("div").with_class("lrb-element-switcher"));
        }
        Page::new(body)
    }
}
