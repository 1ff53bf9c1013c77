//! Static gallery strip demonstrating the fade-in effect.

use leptos::prelude::*;

/// Fixed set of gallery entries shown on the home page.
const GALLERY: [(&str, &str); 4] = [
    ("/static/gallery/dunes.jpg", "Dunes at golden hour"),
    ("/static/gallery/pines.jpg", "Pines in morning fog"),
    ("/static/gallery/harbor.jpg", "Harbor lights at dusk"),
    ("/static/gallery/ridge.jpg", "Ridge line after the storm"),
];

/// Gallery of images that fade in as they finish loading.
///
/// The `<img>` elements and the `bg-fade` panel are picked up by the
/// document-wide bindings in [`crate::util::fade`]; this component only
/// renders the markup.
#[component]
pub fn Gallery() -> impl IntoView {
    view! {
        <section class="gallery">
            <h2 class="gallery__title">"Recent work"</h2>
            <div class="gallery__grid">
                {GALLERY
                    .into_iter()
                    .map(|(src, alt)| {
                        view! { <img class="gallery__photo" src=src alt=alt/> }
                    })
                    .collect::<Vec<_>>()}
            </div>
            <div
                class="gallery__banner bg-fade"
                style:background-image="url(\"/static/gallery/banner.jpg\")"
            >
                <span class="gallery__banner-text">"Prints available on request"</span>
            </div>
        </section>
    }
}
