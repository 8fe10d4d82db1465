//! Preview binary - renders the redirect landing page markup to stdout
//! without touching any durable storage.
//!
//! Usage:
//!   cargo run --bin preview              # Landing page as a blocked visitor sees it
//!   LRB_PREVIEW_LANG=ua cargo run --bin preview
//!
//! Optional environment variables: the LRB_* configuration set, plus
//! LRB_PREVIEW_LANG (defaults to the blocked language).

use anyhow::Result;
use lrb::browser::{Element, Page};
use lrb::i18n::{Language, LanguageRegistry};
use lrb::render::{self, ART_CLASS, ART_CONTAINER_CLASS};
use lrb::Config;

fn landing_page(config: &Config) -> Page {
    let mount_class = config
        .selectors
        .switcher
        .trim_start_matches('.')
        .to_string();

    Page::new(
        Element::new("body")
            .with_child(Element::new("div").with_class(mount_class))
            .with_child(
                Element::new("div").with_class(ART_CONTAINER_CLASS).with_child(
                    Element::new("pre")
                        .with_class(ART_CLASS)
                        .with_text(" ________ \n< GO AWAY >\n --------"),
                ),
            ),
    )
}

fn main() -> Result<()> {
    let _ = dotenvy::dotenv();

    let config = Config::from_env();
    let language = std::env::var("LRB_PREVIEW_LANG")
        .map(|code| Language::new(code))
        .unwrap_or_else(|_| Language::new(&config.blocked_language));

    let mut page = landing_page(&config);
    let mounts = render::render_switchers(&mut page, &config, &language);
    let glitched = render::init_glitch(&mut page);

    println!("--- Landing page preview ---");
    println!("language: {}", language);
    for known in LanguageRegistry::get().list_enabled() {
        println!("  known: {} ({}, {})", known.code, known.name, known.native_name);
    }
    println!("switcher mounts populated: {}", mounts);
    println!("glitch layers applied: {}", glitched);
    println!();
    println!("{}", page.to_html());

    Ok(())
}
