//! Fade-in bindings for images and background-image elements.
//!
//! Mirrors the classic pattern: `<img>` elements get a `loaded` class once
//! pixel data is ready, `bg-fade` elements get `bg-loaded` once their
//! computed background image has been preloaded off-screen. Load failures
//! are absorbed — the marker simply never appears and the element keeps
//! its un-faded styling.

/// Bind the fade-in effect to every eligible element in the document.
///
/// Call once after the page content is in the DOM. Elements added later
/// are not picked up; the page is static.
pub fn bind_document() {
    #[cfg(feature = "web")]
    {
        bind_images();
        bind_backgrounds();
    }
}

#[cfg(feature = "web")]
fn bind_images() {
    use pagefx::consts::IMG_LOADED_CLASS;
    use pagefx::fade::{ImageBind, image_bind};
    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;

    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let Ok(images) = document.query_selector_all("img") else {
        return;
    };

    for i in 0..images.length() {
        let Some(img) = images
            .item(i)
            .and_then(|node| node.dyn_into::<web_sys::HtmlImageElement>().ok())
        else {
            continue;
        };

        match image_bind(img.complete()) {
            ImageBind::MarkNow => {
                let _ = img.class_list().add_1(IMG_LOADED_CLASS);
            }
            ImageBind::AwaitLoad => {
                let target = img.clone();
                let on_load = Closure::<dyn FnMut()>::new(move || {
                    let _ = target.class_list().add_1(IMG_LOADED_CLASS);
                });
                // addEventListener, not the onload property: other load
                // handlers on the same element must survive.
                let _ = img
                    .add_event_listener_with_callback("load", on_load.as_ref().unchecked_ref());
                // Leak the closure: it must outlive this scope and the
                // page teardown reclaims it.
                on_load.forget();
            }
        }
    }
}

#[cfg(feature = "web")]
fn bind_backgrounds() {
    use pagefx::consts::{BG_FADE_CLASS, BG_LOADED_CLASS};
    use pagefx::fade::css_url;
    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;

    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(document) = window.document() else {
        return;
    };
    let Ok(elements) = document.query_selector_all(&format!(".{BG_FADE_CLASS}")) else {
        return;
    };

    for i in 0..elements.length() {
        let Some(el) = elements
            .item(i)
            .and_then(|node| node.dyn_into::<web_sys::Element>().ok())
        else {
            continue;
        };

        let Ok(Some(style)) = window.get_computed_style(&el) else {
            continue;
        };
        let Ok(background) = style.get_property_value("background-image") else {
            continue;
        };
        let Some(url) = css_url(&background) else {
            // `none` or malformed: no preload, no marker, by contract.
            continue;
        };

        let Ok(preload) = web_sys::HtmlImageElement::new() else {
            continue;
        };
        let on_load = Closure::<dyn FnMut()>::new(move || {
            let _ = el.class_list().add_1(BG_LOADED_CLASS);
        });
        let _ = preload
            .add_event_listener_with_callback("load", on_load.as_ref().unchecked_ref());
        on_load.forget();
        preload.set_src(url);
    }
}
