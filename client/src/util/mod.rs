//! Browser-facing glue: capability trait implementations and DOM bindings.

pub mod browser;
pub mod fade;
pub mod ticker;
