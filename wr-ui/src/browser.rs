//! Thin wrappers over the `window` APIs the pages need.
//!
//! All functions degrade to no-ops (with a warning) when no window is
//! available, so they are safe to call during tests of the components.

use chrono::{DateTime, Utc};
use wasm_bindgen::JsValue;

/// Current `location.search`, including the leading `?` when non-empty.
pub fn query_string() -> String {
    web_sys::window()
        .and_then(|window| window.location().search().ok())
        .unwrap_or_default()
}

/// Replace the current history entry with `url` without reloading.
pub fn replace_url(url: &str) {
    let Some(window) = web_sys::window() else {
        log::warn!("No window; cannot replace URL with {}", url);
        return;
    };
    let result = window
        .history()
        .and_then(|history| history.replace_state_with_url(&JsValue::NULL, "", Some(url)));
    if let Err(e) = result {
        log::warn!("Failed to replace URL with {}: {:?}", url, e);
    }
}

/// Load another page.
pub fn navigate(url: &str) {
    let Some(window) = web_sys::window() else {
        log::warn!("No window; cannot navigate to {}", url);
        return;
    };
    if let Err(e) = window.location().set_href(url) {
        log::warn!("Failed to navigate to {}: {:?}", url, e);
    }
}

/// Format an instant in the browser's locale and time zone.
pub fn format_local(instant: &DateTime<Utc>) -> String {
    let millis = JsValue::from_f64(instant.timestamp_millis() as f64);
    let date = js_sys::Date::new(&millis);
    date.to_locale_string("default", &JsValue::UNDEFINED).into()
}
