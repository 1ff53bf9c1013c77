#[cfg(test)]
#[path = "fade_test.rs"]
mod fade_test;

/// How to attach the fade-in marker to an `<img>` element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageBind {
    /// Pixel data was already complete at bind time (cache hit):
    /// add the marker synchronously.
    MarkNow,
    /// Still loading: add the marker from the `load` event.
    AwaitLoad,
}

/// Decide the bind path for an image from its reported `complete` flag.
#[must_use]
pub const fn image_bind(complete: bool) -> ImageBind {
    if complete { ImageBind::MarkNow } else { ImageBind::AwaitLoad }
}

/// Extract the URL from a computed `background-image` value.
///
/// Accepts `url(...)` with double, single, or no quotes. The literal
/// `none` (an element flagged fade-able but styled without a background)
/// and anything that is not a single `url(...)` term yield `None`, which
/// skips the preload entirely.
#[must_use]
pub fn css_url(background_image: &str) -> Option<&str> {
    let value = background_image.trim();
    if value.eq_ignore_ascii_case("none") {
        return None;
    }
    let inner = value.strip_prefix("url(")?.strip_suffix(')')?.trim();
    let url = inner
        .strip_prefix('"')
        .and_then(|rest| rest.strip_suffix('"'))
        .or_else(|| inner.strip_prefix('\'').and_then(|rest| rest.strip_suffix('\'')))
        .unwrap_or(inner);
    if url.is_empty() { None } else { Some(url) }
}
