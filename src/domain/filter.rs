//! Severity filter for the incident list

use crate::domain::{Incident, Severity};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which incidents a list or export shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum SeverityFilter {
    #[default]
    All,
    Only(Severity),
}

impl SeverityFilter {
    pub fn matches(&self, incident: &Incident) -> bool {
        match self {
            SeverityFilter::All => true,
            SeverityFilter::Only(severity) => incident.severity == *severity,
        }
    }

    /// Matching incidents, in their original order
    pub fn apply<'a>(&self, incidents: &'a [Incident]) -> Vec<&'a Incident> {
        incidents.iter().filter(|i| self.matches(i)).collect()
    }
}

impl fmt::Display for SeverityFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SeverityFilter::All => f.write_str("all"),
            SeverityFilter::Only(severity) => write!(f, "{}", severity),
        }
    }
}

impl FromStr for SeverityFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("all") {
            return Ok(SeverityFilter::All);
        }
        Severity::from_str(trimmed).map(SeverityFilter::Only)
    }
}

impl TryFrom<String> for SeverityFilter {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<SeverityFilter> for String {
    fn from(filter: SeverityFilter) -> Self {
        filter.to_string()
    }
}

impl From<Option<Severity>> for SeverityFilter {
    fn from(severity: Option<Severity>) -> Self {
        severity.map_or(SeverityFilter::All, SeverityFilter::Only)
    }
}
