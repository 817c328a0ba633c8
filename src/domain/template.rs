//! HTML templates for exported incident views

use crate::domain::format::{escape_html, format_datetime, format_logged_on};
use crate::domain::{Incident, SeverityFilter};
use crate::error::{IncilogError, Result};
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

// Built-in template constants
const PAGE_TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{TITLE}</title>
</head>
<body>
<h1>{TITLE}</h1>
<p class="summary">{COUNT} incident(s), filter: {FILTER}. Generated {GENERATED}.</p>
<div id="incident-list">
{CARDS}
</div>
</body>
</html>
"#;
const CARD_TEMPLATE: &str = r#"<div class="incident-card severity-{SEVERITY}" data-id="{ID}">
    <div class="incident-header">
        <span class="incident-datetime">{DATETIME}</span>
        <span class="severity-badge {SEVERITY}">{SEVERITY_LABEL}</span>
    </div>
    <div class="incident-location"><strong>Location:</strong> {LOCATION}</div>
    <div class="incident-person"><strong>Person Involved:</strong> {PERSON}</div>
    <div class="incident-description">{DESCRIPTION}</div>
    <details class="incident-details">
        <summary>Details</summary>
{DETAILS}
    </details>
</div>
"#;
const DETAIL_TEMPLATE: &str = r#"        <div class="detail-row"><div class="detail-label">Date &amp; Time</div><div class="detail-value">{DATETIME}</div></div>
        <div class="detail-row"><div class="detail-label">Location</div><div class="detail-value">{LOCATION}</div></div>
        <div class="detail-row"><div class="detail-label">Person Involved</div><div class="detail-value">{PERSON}</div></div>
        <div class="detail-row"><div class="detail-label">Severity</div><div class="detail-value"><span class="severity-badge {SEVERITY}">{SEVERITY_LABEL}</span></div></div>
        <div class="detail-row"><div class="detail-label">Injury Type</div><div class="detail-value">{INJURY_TYPE}</div></div>
        <div class="detail-row"><div class="detail-label">Description</div><div class="detail-value">{DESCRIPTION}</div></div>
        <div class="detail-row"><div class="detail-label">Witnesses</div><div class="detail-value">{WITNESSES}</div></div>
        <div class="detail-row"><div class="detail-label">Logged On</div><div class="detail-value">{LOGGED_ON}</div></div>
"#;
const EMPTY_LIST: &str = r#"<p class="no-incidents">No incidents logged yet.</p>"#;

/// Template with `{NAME}` placeholders
#[derive(Debug)]
pub struct Template {
    content: String,
}

impl Template {
    /// Create template from built-in template name
    pub fn from_builtin(template_name: &str) -> Result<Self> {
        let content = match template_name {
            "page.html" => PAGE_TEMPLATE,
            "card.html" => CARD_TEMPLATE,
            "detail.html" => DETAIL_TEMPLATE,
            _ => {
                return Err(IncilogError::Config(format!(
                    "Unknown template: {}",
                    template_name
                )))
            }
        };

        Ok(Template {
            content: content.to_string(),
        })
    }

    /// Create template from custom template file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            IncilogError::Config(format!("Failed to read template {}: {}", path.display(), e))
        })?;

        Ok(Template { content })
    }

    /// Substitute placeholders in one pass, so substituted values are never
    /// themselves expanded. Unknown placeholders are left unchanged.
    pub fn render(&self, vars: &HashMap<&str, String>) -> String {
        let mut result = String::with_capacity(self.content.len());
        let mut rest = self.content.as_str();

        while let Some(open) = rest.find('{') {
            result.push_str(&rest[..open]);
            let after = &rest[open + 1..];

            match after.find('}') {
                Some(close) if is_placeholder_name(&after[..close]) => {
                    let name = &after[..close];
                    match vars.get(name) {
                        Some(value) => result.push_str(value),
                        None => {
                            result.push('{');
                            result.push_str(name);
                            result.push('}');
                        }
                    }
                    rest = &after[close + 1..];
                }
                _ => {
                    result.push('{');
                    rest = after;
                }
            }
        }

        result.push_str(rest);
        result
    }
}

fn is_placeholder_name(name: &str) -> bool {
    !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '_')
}

/// Load template from .incilog/templates or fall back to built-in
pub fn load_template(repo_root: &Path, template_name: &str) -> Result<Template> {
    let custom_path = repo_root
        .join(".incilog")
        .join("templates")
        .join(template_name);

    if custom_path.exists() {
        Template::from_file(&custom_path)
    } else {
        Template::from_builtin(template_name)
    }
}

/// Placeholder values for one incident. Free text is HTML-escaped.
fn incident_vars(incident: &Incident) -> HashMap<&'static str, String> {
    let mut vars = HashMap::new();
    vars.insert("ID", escape_html(&incident.id));
    vars.insert("DATETIME", format_datetime(incident.date, incident.time));
    vars.insert("SEVERITY", incident.severity.as_str().to_string());
    vars.insert("SEVERITY_LABEL", incident.severity.label().to_string());
    vars.insert("INJURY_TYPE", incident.injury_label().to_string());
    vars.insert("LOCATION", escape_html(&incident.location));
    vars.insert("PERSON", escape_html(&incident.person_involved));
    vars.insert("DESCRIPTION", escape_html(&incident.description));
    vars.insert(
        "WITNESSES",
        incident
            .witnesses
            .as_deref()
            .map(escape_html)
            .unwrap_or_else(|| "None listed".to_string()),
    );
    vars.insert("LOGGED_ON", format_logged_on(&incident.created_at));
    vars
}

/// Renders incidents as an HTML page using a set of templates
#[derive(Debug)]
pub struct HtmlRenderer {
    page: Template,
    card: Template,
    detail: Template,
}

impl HtmlRenderer {
    /// Built-in templates only
    pub fn builtin() -> Result<Self> {
        Ok(HtmlRenderer {
            page: Template::from_builtin("page.html")?,
            card: Template::from_builtin("card.html")?,
            detail: Template::from_builtin("detail.html")?,
        })
    }

    /// Templates from the repository, falling back to built-ins
    pub fn load(repo_root: &Path) -> Result<Self> {
        Ok(HtmlRenderer {
            page: load_template(repo_root, "page.html")?,
            card: load_template(repo_root, "card.html")?,
            detail: load_template(repo_root, "detail.html")?,
        })
    }

    pub fn render_detail(&self, incident: &Incident) -> String {
        self.detail.render(&incident_vars(incident))
    }

    pub fn render_card(&self, incident: &Incident) -> String {
        let mut vars = incident_vars(incident);
        vars.insert("DETAILS", self.render_detail(incident));
        self.card.render(&vars)
    }

    pub fn render_page(
        &self,
        incidents: &[&Incident],
        filter: SeverityFilter,
        generated_at: DateTime<Utc>,
    ) -> String {
        let cards = if incidents.is_empty() {
            EMPTY_LIST.to_string()
        } else {
            incidents
                .iter()
                .map(|incident| self.render_card(incident))
                .collect::<String>()
        };

        let filter_label = match filter {
            SeverityFilter::All => "All severities".to_string(),
            SeverityFilter::Only(severity) => severity.label().to_string(),
        };

        let mut vars = HashMap::new();
        vars.insert("TITLE", "Health &amp; Safety Incident Log".to_string());
        vars.insert("COUNT", incidents.len().to_string());
        vars.insert("FILTER", filter_label);
        vars.insert("GENERATED", format_logged_on(&generated_at));
        vars.insert("CARDS", cards);
        self.page.render(&vars)
    }
}
