//! `web_sys` implementations of the `pagefx` capability traits.
//!
//! Every function carries an inert non-`web` path so the crate builds on
//! the host. On the host the store reads nothing, the color scheme never
//! prefers light, and the clock sits at the epoch — the components render
//! their static fallbacks and do no work, which is exactly the "element
//! absent" degradation the page script uses everywhere.

use pagefx::consts::COUNTDOWN_TARGET;
use pagefx::env::{Clock, ColorScheme, PreferenceStore};
use pagefx::theme::{self, Theme};

/// Wall clock backed by the JS `Date` object.
pub struct BrowserClock;

impl Clock for BrowserClock {
    fn now_ms(&self) -> f64 {
        #[cfg(feature = "web")]
        {
            js_sys::Date::now()
        }
        #[cfg(not(feature = "web"))]
        {
            0.0
        }
    }

    fn year(&self) -> i32 {
        #[cfg(feature = "web")]
        {
            i32::try_from(js_sys::Date::new_0().get_full_year()).unwrap_or(0)
        }
        #[cfg(not(feature = "web"))]
        {
            0
        }
    }
}

/// Preference store backed by `localStorage`.
///
/// Storage failures (disabled storage, quota) degrade to "no preference":
/// reads return `None`, writes are dropped.
pub struct BrowserStore;

impl PreferenceStore for BrowserStore {
    fn get(&self, key: &str) -> Option<String> {
        #[cfg(feature = "web")]
        {
            let storage = web_sys::window()?.local_storage().ok().flatten()?;
            storage.get_item(key).ok().flatten()
        }
        #[cfg(not(feature = "web"))]
        {
            let _ = key;
            None
        }
    }

    fn set(&mut self, key: &str, value: &str) {
        #[cfg(feature = "web")]
        {
            if let Some(window) = web_sys::window() {
                if let Ok(Some(storage)) = window.local_storage() {
                    let _ = storage.set_item(key, value);
                }
            }
        }
        #[cfg(not(feature = "web"))]
        {
            let _ = (key, value);
        }
    }
}

/// Color-scheme query backed by `matchMedia`.
pub struct BrowserScheme;

impl ColorScheme for BrowserScheme {
    fn prefers_light(&self) -> bool {
        #[cfg(feature = "web")]
        {
            web_sys::window()
                .and_then(|w| w.match_media("(prefers-color-scheme: light)").ok().flatten())
                .is_some_and(|mq| mq.matches())
        }
        #[cfg(not(feature = "web"))]
        {
            false
        }
    }
}

/// Resolve the theme from the persisted preference and system scheme.
#[must_use]
pub fn resolve_theme() -> Theme {
    theme::resolve(&BrowserStore, &BrowserScheme)
}

/// Swap the marker class on `<html>` so exactly one theme is applied.
pub fn apply_theme(theme: Theme) {
    #[cfg(feature = "web")]
    {
        if let Some(root) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
        {
            let class_list = root.class_list();
            let _ = class_list.remove_1(theme.toggled().class());
            let _ = class_list.add_1(theme.class());
        }
        log::debug!("theme applied: {}", theme.class());
    }
    #[cfg(not(feature = "web"))]
    {
        let _ = theme;
    }
}

/// Full-page navigation, replacing the current document.
pub fn navigate(url: &str) {
    #[cfg(feature = "web")]
    {
        log::debug!("navigating to {url}");
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(url);
        }
    }
    #[cfg(not(feature = "web"))]
    {
        let _ = url;
    }
}

/// Countdown target in epoch milliseconds, parsed as local time.
#[must_use]
pub fn countdown_target_ms() -> f64 {
    #[cfg(feature = "web")]
    {
        js_sys::Date::new(&wasm_bindgen::JsValue::from_str(COUNTDOWN_TARGET)).get_time()
    }
    #[cfg(not(feature = "web"))]
    {
        let _ = COUNTDOWN_TARGET;
        0.0
    }
}
