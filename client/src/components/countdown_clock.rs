//! Countdown clock to the fixed target date.

use leptos::prelude::*;

/// Four-field countdown (days / hours / minutes / seconds), ticking once
/// a second from mount.
///
/// A tick past the target updates nothing, so the display freezes at the
/// last rendered value instead of going negative — deliberate behavior,
/// preserved from the original page. All four fields come from one
/// signal, so they always change together.
#[component]
pub fn CountdownClock() -> impl IntoView {
    let placeholder = || ["--".to_owned(), "--".to_owned(), "--".to_owned(), "--".to_owned()];
    let fields = RwSignal::new(placeholder());

    #[cfg(feature = "web")]
    {
        use pagefx::consts::COUNTDOWN_TICK_MS;
        use pagefx::countdown::remaining;
        use pagefx::env::Clock;

        use crate::util::browser::{BrowserClock, countdown_target_ms};

        let target_ms = countdown_target_ms();
        let tick = move || {
            if let Some(parts) = remaining(BrowserClock.now_ms(), target_ms) {
                fields.set(parts.fields());
            }
        };

        tick();
        crate::util::ticker::start(COUNTDOWN_TICK_MS, tick);
    }

    let unit = |label: &'static str, index: usize| {
        view! {
            <div class="countdown__unit">
                <span class="countdown__value">{move || fields.get()[index].clone()}</span>
                <span class="countdown__label">{label}</span>
            </div>
        }
    };

    view! {
        <section class="countdown">
            <h2 class="countdown__title">"New year countdown"</h2>
            <div class="countdown__units">
                {unit("Days", 0)}
                {unit("Hours", 1)}
                {unit("Minutes", 2)}
                {unit("Seconds", 3)}
            </div>
        </section>
    }
}
