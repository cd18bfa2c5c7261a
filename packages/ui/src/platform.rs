//! Small browser helpers with native fallbacks, so the crate builds and tests off-wasm.

use std::time::Duration;

use chrono::{DateTime, Local, TimeZone};

/// Feedback timestamp in the browser's local time, e.g. "3/14/2025, 9:26:53 AM".
pub fn local_timestamp() -> String {
    format_timestamp(&Local::now())
}

pub fn format_timestamp<Tz: TimeZone>(at: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    at.format("%-m/%-d/%Y, %-I:%M:%S %p").to_string()
}

pub async fn sleep(duration: Duration) {
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::sleep(duration).await;
    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(duration).await;
}

/// Scroll the element with `id` to its last line.
#[cfg(target_arch = "wasm32")]
pub fn scroll_to_bottom(id: &str) {
    if let Some(el) = element_by_id(id) {
        el.set_scroll_top(el.scroll_height());
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn scroll_to_bottom(_id: &str) {}

/// Grow a textarea to fit its content, or shrink it back when emptied.
#[cfg(target_arch = "wasm32")]
pub fn autosize(id: &str) {
    use wasm_bindgen::JsCast;

    let Some(el) = element_by_id(id) else {
        return;
    };
    let Ok(el) = el.dyn_into::<web_sys::HtmlElement>() else {
        return;
    };
    let style = el.style();
    let _ = style.set_property("height", "auto");
    let _ = style.set_property("height", &format!("{}px", el.scroll_height()));
}

#[cfg(not(target_arch = "wasm32"))]
pub fn autosize(_id: &str) {}

/// Drop any height set by [`autosize`].
#[cfg(target_arch = "wasm32")]
pub fn reset_height(id: &str) {
    use wasm_bindgen::JsCast;

    if let Some(el) = element_by_id(id).and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok()) {
        let _ = el.style().set_property("height", "auto");
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn reset_height(_id: &str) {}

#[cfg(target_arch = "wasm32")]
fn element_by_id(id: &str) -> Option<web_sys::Element> {
    web_sys::window()?.document()?.get_element_by_id(id)
}
