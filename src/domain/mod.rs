//! Domain layer - Incident records and their presentation rules

pub mod filter;
pub mod format;
pub mod id;
pub mod incident;
pub mod severity;
pub mod template;

pub use filter::SeverityFilter;
pub use id::generate_id;
pub use incident::{Incident, NewIncident};
pub use severity::{InjuryType, Severity};
pub use template::{load_template, HtmlRenderer, Template};
