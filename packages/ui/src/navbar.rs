use dioxus::prelude::*;

use crate::route::use_route;
use crate::theme::{SiteLogo, ThemeToggle};

const LAYOUT_CSS: Asset = asset!("/assets/styling/layout.css");

/// Site header: logo, one link per page with the current one highlighted, and the theme toggle.
#[component]
pub fn Navbar() -> Element {
    let route = use_route();

    rsx! {
        document::Stylesheet { href: LAYOUT_CSS }

        header {
            class: "site-header",
            a {
                href: "#home",
                class: "brand",
                SiteLogo { id: "site-logo" }
                span { class: "brand-name", "AI Chatbot" }
            }
            nav {
                class: "site-nav",
                for link in route().nav_links() {
                    a {
                        key: "{link.route.href()}",
                        href: link.route.href(),
                        class: if link.active { "nav-link active" } else { "nav-link" },
                        "{link.route.label()}"
                    }
                }
            }
            ThemeToggle {}
        }
    }
}

#[component]
pub fn Footer() -> Element {
    rsx! {
        footer {
            class: "site-footer",
            SiteLogo { id: "footer-logo", class: "footer-logo" }
            p { "© 2025 AI Chatbot Website. All rights reserved." }
        }
    }
}
