//! The single portfolio page, composing every interactive component.

use leptos::prelude::*;

use crate::components::countdown_clock::CountdownClock;
use crate::components::gallery::Gallery;
use crate::components::quote_box::QuoteBox;
use crate::components::search_bar::SearchBar;
use crate::components::site_footer::SiteFooter;
use crate::components::theme_toggle::ThemeToggle;

/// Home page: header with theme toggle and search, hero image, gallery,
/// quote box, countdown, footer.
///
/// The components never call one another; they are composed only by
/// sharing this page's lifecycle.
#[component]
pub fn HomePage() -> impl IntoView {
    // Fade-in binds against the rendered DOM, so it runs in an effect
    // after this view is mounted.
    Effect::new(move || {
        crate::util::fade::bind_document();
    });

    view! {
        <div class="home-page">
            <header class="home-page__header">
                <span class="home-page__brand">"Alejandro Ines"</span>
                <SearchBar/>
                <ThemeToggle/>
            </header>

            <main class="home-page__main">
                <img
                    class="home-page__hero"
                    src="/static/gallery/hero.jpg"
                    alt="Lone tree on a misty hillside"
                />
                <QuoteBox/>
                <Gallery/>
                <CountdownClock/>
            </main>

            <SiteFooter/>
        </div>
    }
}
