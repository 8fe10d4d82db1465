//! Language types for preference resolution and switcher rendering.
//!
//! - `registry`: immutable metadata for the languages the switcher knows
//!   (codes, names, button labels)
//! - `language`: the owned language token a session carries as resolved state
//!
//! Codes outside the registry are still valid session state; the registry
//! only improves their display forms.

mod language;
mod registry;

pub use language::Language;
pub use registry::{LanguageConfig, LanguageRegistry};
