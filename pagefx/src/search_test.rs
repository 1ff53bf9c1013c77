use super::*;

#[test]
fn plain_word_passes_through() {
    assert_eq!(redirect_url("mountains"), "/search?q=mountains");
}

#[test]
fn surrounding_whitespace_is_trimmed() {
    assert_eq!(redirect_url("  hello world  "), "/search?q=hello%20world");
}

#[test]
fn empty_input_drops_the_query_parameter() {
    assert_eq!(redirect_url(""), "/search");
}

#[test]
fn whitespace_only_input_drops_the_query_parameter() {
    assert_eq!(redirect_url("   "), "/search");
    assert_eq!(redirect_url("\t\n"), "/search");
}

#[test]
fn reserved_characters_are_escaped() {
    assert_eq!(redirect_url("a&b=c"), "/search?q=a%26b%3Dc");
    assert_eq!(redirect_url("50%"), "/search?q=50%25");
    assert_eq!(redirect_url("what?"), "/search?q=what%3F");
    assert_eq!(redirect_url("a+b"), "/search?q=a%2Bb");
    assert_eq!(redirect_url("path/to"), "/search?q=path%2Fto");
}

#[test]
fn unreserved_punctuation_is_kept() {
    // encodeURIComponent leaves these nine marks alone.
    assert_eq!(redirect_url("a-b_c.d!e~f*g'h(i)j"), "/search?q=a-b_c.d!e~f*g'h(i)j");
}

#[test]
fn non_ascii_is_utf8_percent_encoded() {
    assert_eq!(redirect_url("café"), "/search?q=caf%C3%A9");
}

#[test]
fn interior_whitespace_survives_as_percent_20() {
    assert_eq!(redirect_url("golden  hour"), "/search?q=golden%20%20hour");
}
