//! Light/dark theme toggle button.

use leptos::prelude::*;

use pagefx::theme::Theme;

use crate::app::use_theme;
use crate::util::browser::{self, BrowserStore};

/// Toggle button flipping between the two theme markers.
///
/// Activation inverts the root marker class and persists the new choice;
/// the resolved-but-untoggled default is never written back.
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let theme = use_theme();

    let on_toggle = move |_| {
        let mut store = BrowserStore;
        let next = pagefx::theme::toggle(&mut store, theme.get());
        browser::apply_theme(next);
        theme.set(next);
    };

    let label = move || match theme.get() {
        Theme::Light => "Dark mode",
        Theme::Dark => "Light mode",
    };

    view! {
        <button class="btn theme-toggle" on:click=on_toggle title="Toggle theme">
            {label}
        </button>
    }
}
