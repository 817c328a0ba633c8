//! Incident record and submission validation

use crate::domain::{InjuryType, Severity};
use crate::error::{IncilogError, Result};
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{de, Deserialize, Deserializer, Serialize};

/// One logged health & safety event.
///
/// Records are never edited after creation; they are only deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Incident {
    pub id: String,
    pub date: NaiveDate,
    #[serde(with = "hour_minute")]
    pub time: NaiveTime,
    pub location: String,
    pub description: String,
    /// `None` when the report left it unspecified
    #[serde(
        default,
        deserialize_with = "blank_injury_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub injury_type: Option<InjuryType>,
    pub severity: Severity,
    pub person_involved: String,
    #[serde(
        default,
        deserialize_with = "blank_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub witnesses: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Incident {
    /// Build a record from a validated submission
    pub fn from_submission(new: NewIncident, id: String, created_at: DateTime<Utc>) -> Self {
        Incident {
            id,
            date: new.date,
            time: new.time,
            location: new.location,
            description: new.description,
            injury_type: new.injury_type,
            severity: new.severity,
            person_involved: new.person_involved,
            witnesses: new.witnesses,
            created_at,
        }
    }

    /// Display label for the injury type
    pub fn injury_label(&self) -> &'static str {
        self.injury_type
            .as_ref()
            .map_or("Not specified", InjuryType::label)
    }
}

/// A submitted incident report, before it is assigned an id
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewIncident {
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub location: String,
    pub description: String,
    pub injury_type: Option<InjuryType>,
    pub severity: Severity,
    pub person_involved: String,
    pub witnesses: Option<String>,
}

impl NewIncident {
    /// Trim free-text fields and reject blank required ones
    pub fn validate(self) -> Result<Self> {
        let location = required("location", self.location)?;
        let description = required("description", self.description)?;
        let person_involved = required("person involved", self.person_involved)?;
        let witnesses = self
            .witnesses
            .map(|w| w.trim().to_string())
            .filter(|w| !w.is_empty());

        Ok(NewIncident {
            location,
            description,
            person_involved,
            witnesses,
            ..self
        })
    }
}

fn required(field: &str, value: String) -> Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(IncilogError::Validation(format!(
            "{} must not be blank",
            field
        )));
    }
    Ok(trimmed.to_string())
}

fn blank_as_none<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.trim().is_empty()))
}

fn blank_injury_as_none<'de, D>(
    deserializer: D,
) -> std::result::Result<Option<InjuryType>, D::Error>
where
    D: Deserializer<'de>,
{
    match blank_as_none(deserializer)? {
        Some(raw) => raw.parse().map(Some).map_err(de::Error::custom),
        None => Ok(None),
    }
}

/// `HH:MM` on the wire; seconds are accepted when reading
mod hour_minute {
    use chrono::NaiveTime;
    use serde::{de, Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%H:%M";

    pub fn serialize<S: Serializer>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&time.format(FORMAT).to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        super::parse_time(&raw).map_err(de::Error::custom)
    }
}

/// Parse a time of day given as `HH:MM` or `HH:MM:SS`
pub fn parse_time(value: &str) -> std::result::Result<NaiveTime, String> {
    let value = value.trim();
    NaiveTime::parse_from_str(value, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(value, "%H:%M:%S"))
        .map_err(|_| format!("Invalid time: '{}'. Expected HH:MM (24-hour)", value))
}

/// Parse a calendar date given as `YYYY-MM-DD`
pub fn parse_date(value: &str) -> std::result::Result<NaiveDate, String> {
    let value = value.trim();
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|_| format!("Invalid date: '{}'. Expected YYYY-MM-DD", value))
}
