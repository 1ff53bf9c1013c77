//! Capability traits abstracting the browser environment.
//!
//! DESIGN
//! ======
//! The page logic never touches `window` directly. Each implicit
//! environment query — wall clock, persistent preference storage, the
//! system color-scheme preference — is a small trait. The `client` crate
//! provides `web_sys`-backed implementations; unit tests provide fakes.

/// Wall-clock access.
pub trait Clock {
    /// Current time in milliseconds since the Unix epoch.
    fn now_ms(&self) -> f64;

    /// Current local calendar year (e.g. `2026`).
    fn year(&self) -> i32;
}

/// Persistent string key-value storage surviving page loads.
pub trait PreferenceStore {
    /// Read the value stored under `key`, if any.
    fn get(&self, key: &str) -> Option<String>;

    /// Write `value` under `key`, overwriting any previous value.
    fn set(&mut self, key: &str, value: &str);
}

/// The environment's reported color-scheme preference.
pub trait ColorScheme {
    /// `true` only when the environment explicitly prefers a light scheme.
    fn prefers_light(&self) -> bool;
}
