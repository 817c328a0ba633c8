//! Severity and injury type enumerations

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Criticality label attached to every incident
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Severity {
    Minor,
    Moderate,
    Serious,
    Critical,
    /// No harm occurred, but could have
    NearMiss,
}

impl Severity {
    pub const ALL: [Severity; 5] = [
        Severity::Minor,
        Severity::Moderate,
        Severity::Serious,
        Severity::Critical,
        Severity::NearMiss,
    ];

    /// Name used in storage and on the command line
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Minor => "minor",
            Severity::Moderate => "moderate",
            Severity::Serious => "serious",
            Severity::Critical => "critical",
            Severity::NearMiss => "near-miss",
        }
    }

    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            Severity::Minor => "Minor",
            Severity::Moderate => "Moderate",
            Severity::Serious => "Serious",
            Severity::Critical => "Critical",
            Severity::NearMiss => "Near Miss",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Severity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Severity::ALL
            .into_iter()
            .find(|severity| severity.as_str() == wanted)
            .ok_or_else(|| {
                format!(
                    "Invalid severity: '{}'. Valid severities are: minor, moderate, serious, critical, near-miss",
                    s
                )
            })
    }
}

/// Category of physical harm
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum InjuryType {
    #[default]
    None,
    Cut,
    Bruise,
    Sprain,
    Fracture,
    Burn,
    Chemical,
    Eye,
    Respiratory,
    Electric,
    Other,
}

impl InjuryType {
    pub const ALL: [InjuryType; 11] = [
        InjuryType::None,
        InjuryType::Cut,
        InjuryType::Bruise,
        InjuryType::Sprain,
        InjuryType::Fracture,
        InjuryType::Burn,
        InjuryType::Chemical,
        InjuryType::Eye,
        InjuryType::Respiratory,
        InjuryType::Electric,
        InjuryType::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            InjuryType::None => "none",
            InjuryType::Cut => "cut",
            InjuryType::Bruise => "bruise",
            InjuryType::Sprain => "sprain",
            InjuryType::Fracture => "fracture",
            InjuryType::Burn => "burn",
            InjuryType::Chemical => "chemical",
            InjuryType::Eye => "eye",
            InjuryType::Respiratory => "respiratory",
            InjuryType::Electric => "electric",
            InjuryType::Other => "other",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            InjuryType::None => "No Injury",
            InjuryType::Cut => "Cut / Laceration",
            InjuryType::Bruise => "Bruise / Contusion",
            InjuryType::Sprain => "Sprain / Strain",
            InjuryType::Fracture => "Fracture",
            InjuryType::Burn => "Burn",
            InjuryType::Chemical => "Chemical Exposure",
            InjuryType::Eye => "Eye Injury",
            InjuryType::Respiratory => "Respiratory Issue",
            InjuryType::Electric => "Electric Shock",
            InjuryType::Other => "Other",
        }
    }
}

impl fmt::Display for InjuryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InjuryType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        InjuryType::ALL
            .into_iter()
            .find(|kind| kind.as_str() == wanted)
            .ok_or_else(|| {
                format!(
                    "Invalid injury type: '{}'. Valid injury types are: none, cut, bruise, sprain, \
                    fracture, burn, chemical, eye, respiratory, electric, other",
                    s
                )
            })
    }
}
