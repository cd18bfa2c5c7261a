use dioxus::prelude::*;

use super::{AboutView, AuthView, FeedbackView, HomeView};
use crate::repo::use_records;
use crate::route::use_route;
use crate::view::{render_view, View};

/// The `#main-content` region: renders whichever view the current route selects.
///
/// Views that change stored records call back here, which bumps `revision` so the
/// view is rebuilt from storage.
#[component]
pub fn MainContent() -> Element {
    let records = use_records();
    let route = use_route();
    let mut revision = use_signal(|| 0u64);

    // Subscribe so a bump re-runs render_view
    let _ = revision();
    let view = render_view(route(), &records);
    let refresh = move |_: ()| revision += 1;

    match view {
        View::Home => rsx! { HomeView {} },
        View::Feedback(listing) => rsx! {
            FeedbackView { listing, on_submitted: refresh }
        },
        View::About => rsx! { AboutView {} },
        View::Auth(surface) => rsx! {
            AuthView { surface, on_change: refresh }
        },
    }
}
