use anyhow::Result;
use lrb::browser::{Element, FileStorage, MemoryCookieJar, MemoryNavigator, Page};
use lrb::render::{ART_CLASS, ART_CONTAINER_CLASS};
use lrb::{Config, Session};
use tracing::info;

/// Build the simulated page: one switcher mount in the header, one in the
/// footer, and the landing-page art block.
fn demo_page(config: &Config) -> Page {
    let mount_class = config
        .selectors
        .switcher
        .trim_start_matches('.')
        .to_string();

    Page::new(
        Element::new("body")
            .with_child(
                Element::new("header")
                    .with_child(Element::new("div").with_class(mount_class.clone())),
            )
            .with_child(
                Element::new("main").with_child(
                    Element::new("div").with_class(ART_CONTAINER_CLASS).with_child(
                        Element::new("pre")
                            .with_class(ART_CLASS)
                            .with_text("  ____  ___      ___  _      ___  __ __\n / __ )/ _ \\    / _ \\| | /| / (_)/ //_/\n/ /_/ / // /   / // /| |/ |/ / / / ,<\n\\____/\\___/   /____/ |__/|__/_/ /_/|_|"),
                    ),
                ),
            )
            .with_child(
                Element::new("footer").with_child(Element::new("div").with_class(mount_class)),
            ),
    )
}

/// The visitor's locale: explicit override first, then the platform's LANG.
fn visitor_locale() -> Option<String> {
    std::env::var("LRB_LOCALE")
        .or_else(|_| std::env::var("LANG"))
        .ok()
        .filter(|v| !v.is_empty())
}

fn main() -> Result<()> {
    // Load .env file (ignored when absent)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("lrb=info".parse()?),
        )
        .init();

    info!("Starting simulated page load");

    // Load configuration from environment
    let config = Config::from_env();

    let href = std::env::var("LRB_PAGE_URL")
        .unwrap_or_else(|_| "https://example.org/index.html".to_string());
    let storage_path =
        std::env::var("LRB_STORAGE_PATH").unwrap_or_else(|_| "lrb-storage.json".to_string());

    let mut navigator = MemoryNavigator::at(href.as_str());
    if let Some(locale) = visitor_locale() {
        info!(locale = %locale, "Using visitor locale");
        navigator = navigator.with_locale(locale);
    }

    let page = demo_page(&config);
    let mut session = Session::new(
        config,
        FileStorage::new(&storage_path),
        MemoryCookieJar::new(),
        navigator,
        page,
    );

    // Run the page-load pipeline
    let outcome = session.init();

    info!(?outcome, "Pipeline finished");
    match session.current_language() {
        Some(language) => info!(language = %language, "Resolved language"),
        None => info!("No language resolved"),
    }
    for event in session.navigator().events() {
        info!(?event, "Navigation");
    }

    println!("{}", session.page().to_html());

    Ok(())
}
