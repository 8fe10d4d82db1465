//! Language redirect blocker.
//!
//! Models a client-side language-policy utility: resolve the visitor's
//! language preference (durable storage → cookie → locale heuristic →
//! default), persist choices redundantly, redirect blocked-language visitors
//! to a landing page, render a two-button language switcher, and decorate the
//! landing page's ASCII art with glitch layers.
//!
//! All state lives in an explicitly constructed [`Session`]; the environment
//! is reached only through the capability traits in [`browser`], so the
//! decision logic runs and tests without a real browser.
//!
//! # Example
//!
//! ```rust,ignore
//! use lrb::{Config, Session};
//! use lrb::browser::Page;
//!
//! let mut session = Session::in_memory(Config::default(), Page::empty());
//! session.init();
//! session.set_language("ua");
//! ```

pub mod browser;
pub mod config;
pub mod cookie;
pub mod i18n;
pub mod redirect;
pub mod render;
pub mod resolve;
pub mod session;

pub use config::{Config, ConfigOverrides, Selectors};
pub use i18n::Language;
pub use session::{InitOutcome, InitStep, Session, PIPELINE};
