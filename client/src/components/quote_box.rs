//! Rotating "food for thought" quote box.

use leptos::prelude::*;

use pagefx::quotes::{self, Quote};

/// Displays one randomly chosen quote, refreshed every 10 seconds.
///
/// Selection is memoryless: repeats are possible and fine. The first
/// quote renders immediately; the interval is cleared when the component
/// is cleaned up.
#[component]
pub fn QuoteBox() -> impl IntoView {
    let quote = RwSignal::new(random_quote());

    crate::util::ticker::start(pagefx::consts::QUOTE_ROTATE_MS, move || {
        quote.set(random_quote());
    });

    view! {
        <section class="quote-box">
            <p class="quote-box__text" style:font-style="italic">
                {move || quote.get().display_text()}
            </p>
            <p class="quote-box__author">{move || quote.get().author}</p>
        </section>
    }
}

/// Uniform random pick over the fixed list.
fn random_quote() -> &'static Quote {
    #[cfg(feature = "web")]
    {
        quotes::pick(js_sys::Math::random())
    }
    #[cfg(not(feature = "web"))]
    {
        quotes::pick(0.0)
    }
}
