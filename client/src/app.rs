//! Root application component and page-lifecycle controller.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};

use pagefx::theme::Theme;

use crate::pages::home::HomePage;

/// Root component.
///
/// Owns the theme signal shared by the toggle control and constructs the
/// single page. Every periodic component below this point owns its own
/// interval handle and releases it on cleanup, so tearing down `App`
/// tears down all pending work.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // The marker class was already applied before mount; the signal just
    // tracks it for the toggle control.
    let theme = RwSignal::new(crate::util::browser::resolve_theme());
    provide_context(theme);

    view! {
        <Title text="Alejandro Ines — Photography"/>
        <HomePage/>
    }
}

/// Context handle for the current theme, provided by [`App`].
#[must_use]
pub fn use_theme() -> RwSignal<Theme> {
    expect_context::<RwSignal<Theme>>()
}
