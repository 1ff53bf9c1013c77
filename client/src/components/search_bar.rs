//! Site search input with full-page redirect.

use leptos::prelude::*;

use pagefx::search::redirect_url;

use crate::util::browser;

/// Search field plus button. Button click or Enter navigates to the
/// search results path with the trimmed, percent-encoded query; an empty
/// query navigates to the bare path.
#[component]
pub fn SearchBar() -> impl IntoView {
    let query = RwSignal::new(String::new());

    let do_search = move || {
        browser::navigate(&redirect_url(&query.get()));
    };

    let on_click = move |_| do_search();

    // Suppress the default action so an implicit form submit never races
    // the manual navigation.
    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" {
            ev.prevent_default();
            do_search();
        }
    };

    view! {
        <div class="search-bar">
            <input
                class="search-bar__input"
                type="text"
                placeholder="Search posts and photos..."
                prop:value=move || query.get()
                on:input=move |ev| query.set(event_target_value(&ev))
                on:keydown=on_keydown
            />
            <button class="btn search-bar__button" on:click=on_click>
                "Search"
            </button>
        </div>
    }
}
