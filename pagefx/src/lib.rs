//! Pure interaction logic for the portfolio page frontend.
//!
//! Everything the page script decides — which theme to apply, which quote
//! to show, how much time remains on the countdown, where a search should
//! navigate — lives here as plain functions and small types with no browser
//! dependency. The `client` crate binds these decisions to real DOM APIs;
//! unit tests drive them through the capability traits in [`env`] instead.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`theme`] | Light/dark theme resolution, toggling, persistence |
//! | [`quotes`] | Fixed quotation list and memoryless random selection |
//! | [`countdown`] | Remaining-time decomposition for the countdown clock |
//! | [`search`] | Search query trimming and redirect URL construction |
//! | [`fade`] | CSS `url(...)` extraction and fade-bind decisions |
//! | [`env`] | Capability traits: clock, preference store, color scheme |
//! | [`consts`] | Shared constants (storage key, intervals, class names) |

pub mod consts;
pub mod countdown;
pub mod env;
pub mod fade;
pub mod quotes;
pub mod search;
pub mod theme;
