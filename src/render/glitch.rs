//! Glitch decorator: layered clones of the landing page's ASCII-art block.

use crate::browser::{Page, Selector};
use crate::render::{
    ART_CLASS, ART_CONTAINER_CLASS, GLITCH_LAYER_1_CLASS, GLITCH_LAYER_2_CLASS,
    GLITCH_LAYER_CLASS,
};
use tracing::debug;

/// Clone the art element twice into distinctly classed, assistive-technology
/// hidden layers appended inside the container. Returns whether the effect
/// was applied.
///
/// Pages without the container (anything but the redirect landing page) or
/// without the art element are left untouched. Not idempotent: a second call
/// appends two more layers, so run it once per page load.
pub fn init_glitch(page: &mut Page) -> bool {
    let container = match page.find_first_mut(&Selector::for_class(ART_CONTAINER_CLASS)) {
        Some(container) => container,
        None => {
            debug!("No art container on this page, skipping glitch effect");
            return false;
        }
    };

    let art = match container.find_descendant(ART_CLASS) {
        Some(art) => art.clone(),
        None => {
            debug!("Art container has no art element, skipping glitch effect");
            return false;
        }
    };

    for layer_class in [GLITCH_LAYER_1_CLASS, GLITCH_LAYER_2_CLASS] {
        let mut layer = art.clone();
        layer.set_classes(&format!(
            "{} {} {}",
            ART_CLASS, GLITCH_LAYER_CLASS, layer_class
        ));
        layer.set_attr("aria-hidden", "true");
        container.children.push(layer);
    }

    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::browser::Element;

    fn landing_page() -> Page {
        Page::new(
            Element::new("body").with_child(
                Element::new("div").with_class(ART_CONTAINER_CLASS).with_child(
                    Element::new("pre")
                        .with_class(ART_CLASS)
                        .with_text("  ____\n /    \\"),
                ),
            ),
        )
    }

    fn container(page: &Page) -> &Element {
        page.query_all(&Selector::for_class(ART_CONTAINER_CLASS))[0]
    }

    #[test]
    fn test_appends_two_layers() {
        let mut page = landing_page();
        assert!(init_glitch(&mut page));

        let container = container(&page);
        assert_eq!(container.children.len(), 3);
    }

    #[test]
    fn test_layer_classes_and_order() {
        let mut page = landing_page();
        init_glitch(&mut page);

        let container = container(&page);
        let layer1 = &container.children[1];
        let layer2 = &container.children[2];

        assert_eq!(
            layer1.classes,
            vec![ART_CLASS, GLITCH_LAYER_CLASS, GLITCH_LAYER_1_CLASS]
        );
        assert_eq!(
            layer2.classes,
            vec![ART_CLASS, GLITCH_LAYER_CLASS, GLITCH_LAYER_2_CLASS]
        );
    }

    #[test]
    fn test_layers_hidden_from_assistive_technology() {
        let mut page = landing_page();
        init_glitch(&mut page);

        let container = container(&page);
        for layer in &container.children[1..] {
            assert_eq!(
                layer.attrs.get("aria-hidden").map(String::as_str),
                Some("true")
            );
        }
    }

    #[test]
    fn test_layers_copy_art_content() {
        let mut page = landing_page();
        init_glitch(&mut page);

        let container = container(&page);
        assert_eq!(container.children[1].text, container.children[0].text);
        assert_eq!(container.children[1].tag, "pre");
    }

    #[test]
    fn test_original_art_untouched() {
        let mut page = landing_page();
        init_glitch(&mut page);

        let container = container(&page);
        let original = &container.children[0];
        assert_eq!(original.classes, vec![ART_CLASS]);
        assert!(original.attrs.get("aria-hidden").is_none());
    }

    #[test]
    fn test_no_container_is_noop() {
        let mut page = Page::empty();
        assert!(!init_glitch(&mut page));
        assert_eq!(page, Page::empty());
    }

    #[test]
    fn test_container_without_art_is_noop() {
        let mut page = Page::new(
            Element::new("body")
                .with_child(Element::new("div").with_class(ART_CONTAINER_CLASS)),
        );
        assert!(!init_glitch(&mut page));
        assert!(container(&page).children.is_empty());
    }

    #[test]
    fn test_not_idempotent_by_design() {
        let mut page = landing_page();
        init_glitch(&mut page);
        init_glitch(&mut page);

        // Each invocation appends two more layers
        assert_eq!(container(&page).children.len(), 5);
    }
}
