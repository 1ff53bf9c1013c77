//! Page footer with the one-shot year stamp.

use leptos::prelude::*;

use pagefx::env::Clock;

use crate::util::browser::BrowserClock;

/// Footer stamping the current local year once at mount.
///
/// No periodic refresh: the page is reloaded across year boundaries.
#[component]
pub fn SiteFooter() -> impl IntoView {
    let year = BrowserClock.year();

    view! {
        <footer class="site-footer">
            <p class="site-footer__copy">
                {format!("© {year} Alejandro Ines. All photographs are original work.")}
            </p>
        </footer>
    }
}
