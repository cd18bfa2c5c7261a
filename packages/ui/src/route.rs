//! Fragment router: `#feedback` → [`Route::Feedback`], anything unknown → [`Route::Home`].
//!
//! The site is served as static files, so routing lives entirely in the location
//! fragment. [`RouteProvider`] seeds a `Signal<Route>` from the current fragment and
//! updates it on every `hashchange`; views read it through [`use_route`].

use dioxus::prelude::*;

/// One of the four pages.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Route {
    #[default]
    Home,
    Feedback,
    About,
    Auth,
}

/// A navigation link and whether it is highlighted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub route: Route,
    pub active: bool,
}

impl Route {
    /// Navigation order.
    pub const ALL: [Route; 4] = [Route::Home, Route::Feedback, Route::About, Route::Auth];

    /// Resolve a location fragment, with or without the leading `#`.
    pub fn from_fragment(fragment: &str) -> Self {
        let token = fragment.strip_prefix('#').unwrap_or(fragment);
        match token {
            "feedback" => Route::Feedback,
            "about" => Route::About,
            "auth" => Route::Auth,
            _ => Route::Home,
        }
    }

    pub fn href(self) -> &'static str {
        match self {
            Route::Home => "#home",
            Route::Feedback => "#feedback",
            Route::About => "#about",
            Route::Auth => "#auth",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::Feedback => "Feedback",
            Route::About => "About",
            Route::Auth => "Login",
        }
    }

    /// All links with the one for `self` marked active.
    pub fn nav_links(self) -> [NavLink; 4] {
        Route::ALL.map(|route| NavLink {
            route,
            active: route == self,
        })
    }
}

pub fn use_route() -> Signal<Route> {
    use_context::<Signal<Route>>()
}

/// Provides the current [`Route`] to its children and follows fragment changes.
#[component]
pub fn RouteProvider(children: Element) -> Element {
    let mut route = use_context_provider(|| Signal::new(Route::from_fragment(&current_fragment())));

    use_hook(move || {
        spawn(async move {
            let mut listener = document::eval(
                r#"
                window.addEventListener("hashchange", () => dioxus.send(window.location.hash));
                dioxus.send(window.location.hash);
                "#,
            );
            while let Ok(fragment) = listener.recv::<String>().await {
                let next = Route::from_fragment(&fragment);
                if route() != next {
                    tracing::debug!("Route changed to {next:?} ({fragment})");
                    route.set(next);
                }
            }
        });
    });

    rsx! {
        {children}
    }
}

#[cfg(target_arch = "wasm32")]
fn current_fragment() -> String {
    web_sys::window()
        .and_then(|w| w.location().hash().ok())
        .unwrap_or_default()
}

#[cfg(not(target_arch = "wasm32"))]
fn current_fragment() -> String {
    String::new()
}
