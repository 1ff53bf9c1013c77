//! Shared constants for the page interaction components.

// ── Theme ───────────────────────────────────────────────────────

/// `localStorage` key holding the persisted theme marker literal.
pub const THEME_STORAGE_KEY: &str = "theme";

/// Marker class applied to the document root for the light theme.
pub const THEME_LIGHT_CLASS: &str = "theme-light";

/// Marker class applied to the document root for the dark theme.
pub const THEME_DARK_CLASS: &str = "theme-dark";

// ── Timers ──────────────────────────────────────────────────────

/// Quote rotation period in milliseconds.
pub const QUOTE_ROTATE_MS: u32 = 10_000;

/// Countdown clock tick period in milliseconds.
pub const COUNTDOWN_TICK_MS: u32 = 1_000;

// ── Countdown ───────────────────────────────────────────────────

/// Countdown target, interpreted as local time by the browser clock.
pub const COUNTDOWN_TARGET: &str = "2026-01-01T00:00:00";

// ── Search ──────────────────────────────────────────────────────

/// Path the search bar navigates to.
pub const SEARCH_PATH: &str = "/search";

// ── Fade-in ─────────────────────────────────────────────────────

/// Class flagging an element for the background-image preload effect.
pub const BG_FADE_CLASS: &str = "bg-fade";

/// Marker class added to an `<img>` once its pixel data is ready.
pub const IMG_LOADED_CLASS: &str = "loaded";

/// Marker class added to a `bg-fade` element once its background loaded.
pub const BG_LOADED_CLASS: &str = "bg-loaded";
