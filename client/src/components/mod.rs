//! Page components.
//!
//! DESIGN
//! ======
//! Each component is independent: none reads another's output, they share
//! only the page lifecycle. The periodic ones (quote box, countdown) drive
//! themselves through [`crate::util::ticker`], which clears the interval
//! on reactive-owner cleanup.

pub mod countdown_clock;
pub mod gallery;
pub mod quote_box;
pub mod search_bar;
pub mod site_footer;
pub mod theme_toggle;
