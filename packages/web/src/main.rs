use dioxus::prelude::*;

use api::ChatClient;
use store::SiteConfig;
use ui::{Footer, MainContent, Navbar, RouteProvider, ThemeSignal};

const MAIN_CSS: Asset = asset!("/assets/main.css");

const SITE_TOML: &str = include_str!("../site.toml");

fn main() {
    dioxus::logger::init(tracing::Level::INFO).ok();
    dioxus::launch(App);
}

/// Embedded `site.toml`, with the API key optionally supplied at build time.
fn load_config() -> SiteConfig {
    let config = SiteConfig::from_toml(SITE_TOML).unwrap_or_else(|e| {
        tracing::error!("Invalid {}: {e}; using defaults", SiteConfig::filename());
        SiteConfig::default()
    });
    let config = config.with_api_key_override(option_env!("GEMINI_API_KEY"));
    if !config.chat.has_api_key() {
        tracing::warn!("No Gemini API key configured; chat replies will ask for one");
    }
    config
}

#[component]
fn App() -> Element {
    let config = use_context_provider(load_config);
    let records = use_context_provider(ui::make_records);
    use_context_provider(|| ChatClient::new(config.chat.clone()));
    let theme: ThemeSignal = use_context_provider(|| Signal::new(records.theme()));

    use_effect(move || ui::apply_theme(theme()));

    rsx! {
        document::Stylesheet { href: MAIN_CSS }

        RouteProvider {
            div {
                id: "main",
                Navbar {}
                main {
                    id: "main-content",
                    MainContent {}
                }
                Footer {}
            }
        }
    }
}
