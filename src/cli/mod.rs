//! CLI layer - Command-line interface

pub mod commands;
pub mod output;
pub mod prompt;

pub use commands::{requested_filter, Cli, Commands};
pub use output::{format_incident_detail, format_incident_list};
pub use prompt::TerminalPrompt;
