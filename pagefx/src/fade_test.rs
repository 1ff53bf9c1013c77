use super::*;

// =============================================================
// image_bind
// =============================================================

#[test]
fn complete_image_is_marked_synchronously() {
    assert_eq!(image_bind(true), ImageBind::MarkNow);
}

#[test]
fn incomplete_image_waits_for_load_event() {
    assert_eq!(image_bind(false), ImageBind::AwaitLoad);
}

// =============================================================
// css_url
// =============================================================

#[test]
fn extracts_double_quoted_url() {
    assert_eq!(
        css_url("url(\"https://example.com/hero.jpg\")"),
        Some("https://example.com/hero.jpg")
    );
}

#[test]
fn extracts_single_quoted_url() {
    assert_eq!(css_url("url('/static/gallery/dunes.webp')"), Some("/static/gallery/dunes.webp"));
}

#[test]
fn extracts_unquoted_url() {
    assert_eq!(css_url("url(/img/bg.png)"), Some("/img/bg.png"));
}

#[test]
fn none_is_skipped() {
    assert_eq!(css_url("none"), None);
    assert_eq!(css_url("NONE"), None);
    assert_eq!(css_url("  none  "), None);
}

#[test]
fn empty_and_malformed_values_are_skipped() {
    assert_eq!(css_url(""), None);
    assert_eq!(css_url("url()"), None);
    assert_eq!(css_url("url(\"\")"), None);
    assert_eq!(css_url("linear-gradient(red, blue)"), None);
    assert_eq!(css_url("url(\"unterminated"), None);
}

#[test]
fn surrounding_whitespace_is_tolerated() {
    assert_eq!(css_url("  url( \"/a.jpg\" )  "), Some("/a.jpg"));
}
