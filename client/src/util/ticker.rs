//! Periodic tick driver shared by the quote box and countdown clock.
//!
//! Uses leptos's own interval helper rather than a hand-rolled timer:
//! its `IntervalHandle` is `Copy + Send`, so the clearing closure meets
//! the `Send + Sync` bounds `on_cleanup` puts on reactive-owner cleanup.

#[cfg(test)]
#[path = "ticker_test.rs"]
mod ticker_test;

/// Run `tick` every `period_ms`, clearing the interval when the calling
/// component's reactive owner is cleaned up.
pub fn start(period_ms: u32, tick: impl Fn() + 'static) {
    #[cfg(feature = "web")]
    {
        use std::time::Duration;

        use leptos::leptos_dom::helpers::set_interval_with_handle;
        use leptos::prelude::on_cleanup;

        if let Ok(handle) =
            set_interval_with_handle(tick, Duration::from_millis(u64::from(period_ms)))
        {
            on_cleanup(move || handle.clear());
        }
    }
    #[cfg(not(feature = "web"))]
    {
        let _ = (period_ms, tick);
    }
}
