//! incilog - Terminal health & safety incident log
//!
//! Captures structured incident reports, keeps them in a local JSON store,
//! and renders filterable list, detail and HTML views.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod logging;

pub use error::IncilogError;
