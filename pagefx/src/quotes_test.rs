use super::*;
use rand::Rng;

#[test]
fn list_holds_seven_entries() {
    assert_eq!(QUOTES.len(), 7);
}

#[test]
fn display_text_wraps_in_quotation_marks() {
    let quote = Quote { text: "Freedom lies in being bold.", author: "Robert Frost" };
    assert_eq!(quote.display_text(), "\"Freedom lies in being bold.\"");
}

#[test]
fn pick_zero_is_first_entry() {
    assert_eq!(pick(0.0), &QUOTES[0]);
}

#[test]
fn pick_just_below_one_is_last_entry() {
    assert_eq!(pick(0.999_999), &QUOTES[6]);
}

#[test]
fn pick_clamps_out_of_range_samples() {
    assert_eq!(pick(1.0), &QUOTES[6]);
    assert_eq!(pick(2.5), &QUOTES[6]);
}

#[test]
fn pick_maps_band_boundaries_correctly() {
    // Each quote owns a band of width 1/7.
    let band = 1.0 / 7.0;
    for (i, quote) in QUOTES.iter().enumerate() {
        #[allow(clippy::cast_precision_loss)]
        let sample = i as f64 * band + band / 2.0;
        assert_eq!(pick(sample), quote, "band {i}");
    }
}

#[test]
fn every_quote_appears_over_many_random_picks() {
    let mut rng = rand::rng();
    let mut seen = [false; 7];
    for _ in 0..1000 {
        let quote = pick(rng.random::<f64>());
        let index = QUOTES.iter().position(|q| q == quote).unwrap();
        seen[index] = true;
    }
    assert!(seen.iter().all(|&s| s), "unselected quote after 1000 picks: {seen:?}");
}
