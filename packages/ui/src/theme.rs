//! Light/dark theme: the persisted [`Theme`], how it looks, and the toggle button.

use dioxus::prelude::*;
use store::{Records, Theme};

use crate::icons::{FaMoon, FaSun};
use crate::Icon;

const LOGO_LIGHT: Asset = asset!("/assets/logo-light.svg");
const LOGO_DARK: Asset = asset!("/assets/logo-dark.svg");

/// Theme context: the page's current colour scheme.
pub type ThemeSignal = Signal<Theme>;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogoVariant {
    Light,
    Dark,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToggleIcon {
    /// Shown in light mode: "switch to dark".
    Moon,
    /// Shown in dark mode: "switch to light".
    Sun,
}

/// Everything on the page that depends on the theme.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ThemeAppearance {
    /// Whether `<body>` carries the `dark` class.
    pub body_dark: bool,
    /// Logo used in both header and footer.
    pub logo: LogoVariant,
    pub icon: ToggleIcon,
}

impl From<Theme> for ThemeAppearance {
    fn from(theme: Theme) -> Self {
        match theme {
            Theme::Light => Self {
                body_dark: false,
                logo: LogoVariant::Light,
                icon: ToggleIcon::Moon,
            },
            Theme::Dark => Self {
                body_dark: true,
                logo: LogoVariant::Dark,
                icon: ToggleIcon::Sun,
            },
        }
    }
}

impl LogoVariant {
    pub fn asset(self) -> Asset {
        match self {
            LogoVariant::Light => LOGO_LIGHT,
            LogoVariant::Dark => LOGO_DARK,
        }
    }
}

pub fn use_theme() -> ThemeSignal {
    use_context::<ThemeSignal>()
}

/// Flip the theme, persist it, and update the signal.
pub fn toggle_theme(records: &Records, theme: &mut ThemeSignal) {
    let next = theme().toggled();
    records.set_theme(next);
    theme.set(next);
    tracing::info!("Theme set to {}", next.as_str());
}

/// Apply the page-level style flag for `theme`.
#[cfg(target_arch = "wasm32")]
pub fn apply_theme(theme: Theme) {
    let appearance = ThemeAppearance::from(theme);
    let Some(body) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body())
    else {
        tracing::warn!("No document body, cannot apply {} theme", theme.as_str());
        return;
    };
    if let Err(e) = body
        .class_list()
        .toggle_with_force("dark", appearance.body_dark)
    {
        tracing::warn!("Failed to set dark class on body: {e:?}");
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn apply_theme(_theme: Theme) {}

/// Header/footer logo that follows the current theme.
#[component]
pub fn SiteLogo(id: String, #[props(default = "logo".to_string())] class: String) -> Element {
    let theme = use_theme();
    let logo = ThemeAppearance::from(theme()).logo.asset();

    rsx! {
        img {
            id: "{id}",
            class: "{class}",
            src: logo,
            alt: "AI Chatbot logo",
        }
    }
}

/// Button that switches between light and dark.
#[component]
pub fn ThemeToggle() -> Element {
    let records = use_context::<Records>();
    let mut theme = use_theme();
    let appearance = ThemeAppearance::from(theme());

    rsx! {
        button {
            id: "theme-toggle",
            class: "theme-toggle",
            title: "Toggle theme",
            aria_label: "Toggle theme",
            onclick: move |_| toggle_theme(&records, &mut theme),
            {match appearance.icon {
                ToggleIcon::Moon => rsx! { Icon { icon: FaMoon, width: 18, height: 18 } },
                ToggleIcon::Sun => rsx! { Icon { icon: FaSun, width: 18, height: 18 } },
            }}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use store::{KeyValueStore, MemoryStore};

    #[test]
    fn test_appearance_per_theme() {
        let light = ThemeAppearance::from(Theme::Light);
        assert!(!light.body_dark);
        assert_eq!(light.logo, LogoVariant::Light);
        assert_eq!(light.icon, ToggleIcon::Moon);

        let dark = ThemeAppearance::from(Theme::Dark);
        assert!(dark.body_dark);
        assert_eq!(dark.logo, LogoVariant::Dark);
        assert_eq!(dark.icon, ToggleIcon::Sun);
    }

    /// Provides the theme context from the root `Records` and toggles once on mount.
    #[component]
    fn ToggleOnMount() -> Element {
        let records = use_context::<Records>();
        let mut theme: ThemeSignal = use_context_provider(|| Signal::new(records.theme()));
        use_hook(|| toggle_theme(&records, &mut theme));
        let appearance = ThemeAppearance::from(theme());

        rsx! {
            div {
                "data-theme": theme().as_str(),
                "data-body-dark": "{appearance.body_dark}",
            }
        }
    }

    fn mount_and_toggle(records: &Records) -> String {
        let mut dom = VirtualDom::new(ToggleOnMount).with_root_context(records.clone());
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    #[test]
    fn test_toggle_then_reload_restores_appearance() {
        let storage = MemoryStore::new();
        let records = Records::new(storage.clone());
        assert_eq!(records.theme(), Theme::Light);

        let html = mount_and_toggle(&records);
        assert!(html.contains(r#"data-theme="dark""#));
        assert!(html.contains(r#"data-body-dark="true""#));
        assert_eq!(storage.get(store::records::THEME_KEY).as_deref(), Some("dark"));

        // A fresh page load reads the persisted value back
        let reloaded = Records::new(storage.clone());
        assert_eq!(
            ThemeAppearance::from(reloaded.theme()),
            ThemeAppearance::from(Theme::Dark)
        );

        let html = mount_and_toggle(&reloaded);
        assert!(html.contains(r#"data-theme="light""#));
        assert_eq!(Records::new(storage).theme(), Theme::Light);
    }
}
