//! Page-level components. The site is a single static page.

pub mod home;
