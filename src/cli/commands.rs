//! CLI command definitions

use crate::domain::incident::{parse_date, parse_time};
use crate::domain::{InjuryType, Severity, SeverityFilter};
use chrono::{NaiveDate, NaiveTime};
use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "incilog")]
#[command(about = "Health & safety incident log", long_about = None)]
#[command(version)]
pub struct Cli {
    /// More diagnostics on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only report errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new incident log
    Init {
        /// Directory to initialize (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,
    },

    /// Log a new incident
    #[command(visible_alias = "add")]
    Log {
        /// Where it happened
        #[arg(short, long)]
        location: String,

        /// What happened
        #[arg(short, long)]
        description: String,

        /// minor, moderate, serious, critical, near-miss
        #[arg(short, long)]
        severity: Severity,

        /// Person involved
        #[arg(short, long)]
        person: String,

        /// none, cut, bruise, sprain, fracture, burn, chemical, eye,
        /// respiratory, electric, other
        #[arg(short = 't', long)]
        injury_type: Option<InjuryType>,

        /// Witnesses, if any
        #[arg(short, long)]
        witnesses: Option<String>,

        /// Date of the incident, YYYY-MM-DD (default: today)
        #[arg(long, value_parser = parse_date)]
        date: Option<NaiveDate>,

        /// Time of the incident, HH:MM 24-hour (default: now)
        #[arg(long, value_parser = parse_time)]
        time: Option<NaiveTime>,
    },

    /// List incidents, newest first
    List {
        /// Only show this severity ("all" for every severity)
        #[arg(short, long, conflicts_with = "all")]
        severity: Option<SeverityFilter>,

        /// Ignore the configured default filter
        #[arg(short, long)]
        all: bool,

        /// Show at most N incidents
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },

    /// Show full details of one incident
    Show {
        /// Incident id or a unique prefix of it
        id: String,
    },

    /// Delete one incident
    Delete {
        /// Incident id or a unique prefix of it
        id: String,

        /// Do not ask for confirmation
        #[arg(short, long)]
        yes: bool,
    },

    /// Delete all incidents
    Clear {
        /// Do not ask for confirmation
        #[arg(short, long)]
        yes: bool,
    },

    /// Render incidents as an HTML page
    Export {
        /// Only export this severity ("all" for every severity)
        #[arg(short, long, conflicts_with = "all")]
        severity: Option<SeverityFilter>,

        /// Ignore the configured default filter
        #[arg(short, long)]
        all: bool,

        /// Write to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// View or modify configuration
    Config {
        /// Config key to get or set
        key: Option<String>,

        /// Value to set (if provided, sets the key)
        value: Option<String>,

        /// List all configuration
        #[arg(short, long)]
        list: bool,
    },
}

/// Resolve `--severity` / `--all` into an explicit filter, if any was given
pub fn requested_filter(severity: Option<SeverityFilter>, all: bool) -> Option<SeverityFilter> {
    if all {
        Some(SeverityFilter::All)
    } else {
        severity
    }
}
