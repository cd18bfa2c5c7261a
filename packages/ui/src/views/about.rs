use dioxus::prelude::*;

const VIEWS_CSS: Asset = asset!("/assets/styling/views.css");

const FEATURES: &[&str] = &[
    "User feedback system with persistent storage",
    "Client-side authentication (Login/Register) using localStorage",
    "Dark and light themes with logo swap",
    "Fully responsive layout for all devices",
];

#[component]
pub fn AboutView() -> Element {
    rsx! {
        document::Stylesheet { href: VIEWS_CSS }

        section {
            class: "about-section",
            h2 { "About AI Chatbot Website" }
            p {
                "This website showcases a fully functional AI chatbot built in Rust with Dioxus and \
                 compiled to WebAssembly. The chatbot leverages the Google Gemini API to provide \
                 real-time, intelligent responses to your queries."
            }
            p {
                strong { "Features:" }
            }
            ul {
                for feature in FEATURES {
                    li { "{feature}" }
                }
            }
            p {
                "Developed by "
                a {
                    href: "https://your-personal-website.com",
                    target: "_blank",
                    rel: "noopener",
                    "Your Name"
                }
                "."
            }
        }
    }
}
