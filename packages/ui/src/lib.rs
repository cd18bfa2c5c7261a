//! This crate contains all shared UI for the chatbot site.

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

pub mod chat;
pub mod platform;
pub mod views;

mod repo;
pub use repo::{make_records, use_records};

mod route;
pub use route::{use_route, NavLink, Route, RouteProvider};

mod theme;
pub use theme::{
    apply_theme, toggle_theme, use_theme, LogoVariant, SiteLogo, ThemeAppearance, ThemeSignal,
    ThemeToggle, ToggleIcon,
};

mod view;
pub use view::{render_view, AuthSurface, FeedbackListing, View};

mod navbar;
pub use navbar::{Footer, Navbar};

pub use views::MainContent;

pub use api::ChatClient;
