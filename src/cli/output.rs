//! Output formatting utilities

use crate::domain::format::{format_datetime, format_logged_on};
use crate::domain::Incident;

pub const EMPTY_LIST: &str = "No incidents logged yet.";

const LABEL_WIDTH: usize = 17;

/// Format a list of incidents as cards, separated by blank lines
pub fn format_incident_list(incidents: &[Incident]) -> String {
    if incidents.is_empty() {
        return EMPTY_LIST.to_string();
    }

    incidents
        .iter()
        .map(format_card)
        .collect::<Vec<_>>()
        .join("\n")
}

fn format_card(incident: &Incident) -> String {
    let mut card = format!(
        "{}  [{}]  {}\n",
        format_datetime(incident.date, incident.time),
        incident.severity.label(),
        incident.id
    );
    card.push_str(&format!("  Location: {}\n", incident.location));
    card.push_str(&format!("  Person Involved: {}\n", incident.person_involved));
    for line in incident.description.lines() {
        card.push_str(&format!("  {}\n", line));
    }
    card
}

/// Format every field of one incident
pub fn format_incident_detail(incident: &Incident) -> String {
    let witnesses = incident.witnesses.as_deref().unwrap_or("None listed");
    let rows = [
        ("ID", incident.id.clone()),
        ("Date & Time", format_datetime(incident.date, incident.time)),
        ("Location", incident.location.clone()),
        ("Person Involved", incident.person_involved.clone()),
        ("Severity", incident.severity.label().to_string()),
        ("Injury Type", incident.injury_label().to_string()),
        ("Description", incident.description.clone()),
        ("Witnesses", witnesses.to_string()),
        ("Logged On", format_logged_on(&incident.created_at)),
    ];

    let mut output = String::new();
    for (label, value) in rows {
        output.push_str(&detail_row(label, &value));
    }
    output
}

/// `Label:` padded to a column; continuation lines are indented to match
fn detail_row(label: &str, value: &str) -> String {
    let mut lines = value.lines();
    let first = lines.next().unwrap_or("");
    let mut row = format!("{:<width$}{}\n", format!("{}:", label), first, width = LABEL_WIDTH);
    for line in lines {
        row.push_str(&format!("{:width$}{}\n", "", line, width = LABEL_WIDTH));
    }
    row
}
