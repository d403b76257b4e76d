//! Framework-free model of the tab widget set.
//!
//! Everything here runs natively; the Leptos layer lives in the `frontend` crate.

pub mod tabs;
