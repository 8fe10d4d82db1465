//! Minimal page model: the slice of a DOM this system actually touches.
//!
//! The model supports exactly the operations the pipeline needs — class
//! selector queries, child replacement, sibling append, cloning — plus a
//! deterministic HTML serialization for previews and assertions. It is not a
//! general DOM.

use std::collections::BTreeMap;
use thiserror::Error;

/// Error for selector strings the page model cannot evaluate.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SelectorError {
    /// Anything other than a single class selector (".foo")
    #[error("unsupported selector: {0:?}")]
    Unsupported(String),
}

/// A parsed selector. Only single class selectors are supported; callers
/// treat a parse failure as "matches nothing".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selector {
    class: String,
}

impl Selector {
    /// Parse a selector string of the form `.class-name`.
    pub fn parse(input: &str) -> Result<Selector, SelectorError> {
        let trimmed = input.trim();
        match trimmed.strip_prefix('.') {
            Some(class)
                if !class.is_empty()
                    && class
                        .chars()
                        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_') =>
            {
                Ok(Selector {
                    class: class.to_string(),
                })
            }
            _ => Err(SelectorError::Unsupported(input.to_string())),
        }
    }

    /// Selector for a class name already known to be plain (no leading dot).
    pub fn for_class(class: impl Into<String>) -> Selector {
        Selector {
            class: class.into(),
        }
    }

    /// The class name this selector matches.
    pub fn class(&self) -> &str {
        &self.class
    }
}

/// An element node: tag, classes, attributes, text, children.
///
/// Text renders before children on serialization, which is all the fidelity
/// the switcher and glitch markup need.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Element {
    pub tag: String,
    pub classes: Vec<String>,
    pub attrs: BTreeMap<String, String>,
    pub text: String,
    pub children: Vec<Element>,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Element {
        Element {
            tag: tag.into(),
            ..Element::default()
        }
    }

    pub fn with_class(mut self, class: impl Into<String>) -> Element {
        self.classes.push(class.into());
        self
    }

    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Element {
        self.attrs.insert(name.into(), value.into());
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Element {
        self.text = text.into();
        self
    }

    pub fn with_child(mut self, child: Element) -> Element {
        self.children.push(child);
        self
    }

    /// Exact-match check against the element's class list.
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Replace the whole class list from a space-separated string (the
    /// `className = "..."` analog).
    pub fn set_classes(&mut self, classes: &str) {
        self.classes = classes
            .split_whitespace()
            .map(|c| c.to_string())
            .collect();
    }

    /// Set an attribute, replacing any prior value.
    pub fn set_attr(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.attrs.insert(name.into(), value.into());
    }

    /// Drop all children (the `innerHTML = ''` analog).
    pub fn clear_children(&mut self) {
        self.children.clear();
    }

    /// First descendant (not self) carrying `class`, depth-first.
    pub fn find_descendant(&self, class: &str) -> Option<&Element> {
        for child in &self.children {
            if child.has_class(class) {
                return Some(child);
            }
            if let Some(found) = child.find_descendant(class) {
                return Some(found);
            }
        }
        None
    }

    /// Serialize to HTML. Attributes render sorted by name after the class
    /// attribute; text and attribute values are escaped.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    fn write_html(&self, out: &mut String) {
        out.push('<');
        out.push_str(&self.tag);

        if !self.classes.is_empty() {
            out.push_str(" class=\"");
            out.push_str(&escape_html(&self.classes.join(" ")));
            out.push('"');
        }

        for (name, value) in &self.attrs {
            out.push(' ');
            out.push_str(name);
            out.push_str("=\"");
            out.push_str(&escape_html(value));
            out.push('"');
        }

        out.push('>');
        out.push_str(&escape_html(&self.text));
        for child in &self.children {
            child.write_html(out);
        }
        out.push_str("</");
        out.push_str(&self.tag);
        out.push('>');
    }
}

/// Escape text for embedding in HTML content or attribute values.
pub fn escape_html(text: &str) -> String {
    let mut result = String::with_capacity(text.len());

    for c in text.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#39;"),
            _ => result.push(c),
        }
    }

    result
}

/// A page: one root element plus the queries the pipeline runs against it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    root: Element,
}

impl Page {
    pub fn new(root: Element) -> Page {
        Page { root }
    }

    /// An empty page (bare body), for hosts that only need the storage and
    /// navigation behavior.
    pub fn empty() -> Page {
        Page {
            root: Element::new("body"),
        }
    }

    pub fn root(&self) -> &Element {
        &self.root
    }

    /// All elements matching `selector`, in document order.
    pub fn query_all(&self, selector: &Selector) -> Vec<&Element> {
        let mut matches = Vec::new();
        collect_matches(&self.root, selector.class(), &mut matches);
        matches
    }

    /// Apply `apply` to every element matching `selector`, returning how many
    /// were visited. Matched subtrees are not descended into, so a mount
    /// cannot re-match content it just received.
    pub fn for_each_match(
        &mut self,
        selector: &Selector,
        apply: &mut dyn FnMut(&mut Element),
    ) -> usize {
        visit_matches(&mut self.root, selector.class(), apply)
    }

    /// First element matching `selector`, depth-first, mutable.
    pub fn find_first_mut(&mut self, selector: &Selector) -> Option<&mut Element> {
        find_match_mut(&mut self.root, selector.class())
    }

    pub fn to_html(&self) -> String {
        self.root.to_html()
    }
}

fn collect_matches<'a>(element: &'a Element, class: &str, matches: &mut Vec<&'a Element>) {
    if element.has_class(class) {
        matches.push(element);
    }
    for child in &element.children {
        collect_matches(child, class, matches);
    }
}

fn visit_matches(
    element: &mut Element,
    class: &str,
    apply: &mut dyn FnMut(&mut Element),
) -> usize {
    if element.has_class(class) {
        apply(element);
        return 1;
    }
    let mut count = 0;
    for child in &mut element.children {
        count += visit_matches(child, class, apply);
    }
    count
}

fn find_match_mut<'a>(element: &'a mut Element, class: &str) -> Option<&'a mut Element> {
    if element.has_class(class) {
        return Some(element);
    }
    for child in &mut element.children {
        if let Some(found) = find_match_mut(child, class) {
            return Some(found);
        }
    }
    None
}
