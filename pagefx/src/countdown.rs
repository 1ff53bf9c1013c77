#[cfg(test)]
#[path = "countdown_test.rs"]
mod countdown_test;

const MS_PER_SECOND: f64 = 1000.0;
const MS_PER_MINUTE: f64 = MS_PER_SECOND * 60.0;
const MS_PER_HOUR: f64 = MS_PER_MINUTE * 60.0;
const MS_PER_DAY: f64 = MS_PER_HOUR * 24.0;

/// Remaining time until the countdown target, split into display units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Remaining {
    pub days: u32,
    pub hours: u32,
    pub minutes: u32,
    pub seconds: u32,
}

impl Remaining {
    /// The four display strings (days, hours, minutes, seconds), each
    /// zero-padded to at least two digits.
    #[must_use]
    pub fn fields(&self) -> [String; 4] {
        [
            pad2(self.days),
            pad2(self.hours),
            pad2(self.minutes),
            pad2(self.seconds),
        ]
    }
}

/// Decompose a positive millisecond difference into whole display units.
///
/// Returns `None` when `diff_ms` is zero or negative: a tick past the
/// target performs no update, so the display freezes at its last
/// rendered value instead of showing zeros or negatives. That freeze is
/// deliberate product behavior, not a missing clamp.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn decompose(diff_ms: f64) -> Option<Remaining> {
    if diff_ms <= 0.0 {
        return None;
    }
    Some(Remaining {
        days: (diff_ms / MS_PER_DAY).floor() as u32,
        hours: ((diff_ms / MS_PER_HOUR) % 24.0).floor() as u32,
        minutes: ((diff_ms / MS_PER_MINUTE) % 60.0).floor() as u32,
        seconds: ((diff_ms / MS_PER_SECOND) % 60.0).floor() as u32,
    })
}

/// Remaining time from `now_ms` to `target_ms`, both in epoch milliseconds.
#[must_use]
pub fn remaining(now_ms: f64, target_ms: f64) -> Option<Remaining> {
    decompose(target_ms - now_ms)
}

/// Zero-pad a number to at least two digits.
#[must_use]
pub fn pad2(n: u32) -> String {
    format!("{n:02}")
}
