//! Export incidents as an HTML page

use crate::domain::{HtmlRenderer, SeverityFilter};
use crate::error::Result;
use crate::infrastructure::{FileSystemRepository, LogRepository};
use chrono::Utc;
use std::fs;
use std::path::Path;
use tracing::info;

/// Service rendering the incident card view to HTML
pub struct ExportService {
    repository: FileSystemRepository,
}

impl ExportService {
    pub fn new(repository: FileSystemRepository) -> Self {
        ExportService { repository }
    }

    /// Render the filtered incidents. When `output` is given the page is
    /// also written there.
    pub fn execute(&self, filter: SeverityFilter, output: Option<&Path>) -> Result<String> {
        let log = self.repository.open_log()?;
        let renderer = HtmlRenderer::load(self.repository.root())?;

        let incidents = log.filtered(filter);
        let html = renderer.render_page(&incidents, filter, Utc::now());

        if let Some(path) = output {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() && !parent.exists() {
                    fs::create_dir_all(parent)?;
                }
            }
            fs::write(path, &html)?;
            info!(path = %path.display(), count = incidents.len(), "exported incidents");
        }

        Ok(html)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::init::init;
    use crate::domain::{InjuryType, NewIncident, Severity};
    use chrono::{NaiveDate, NaiveTime};
    use tempfile::TempDir;

    fn seeded() -> (TempDir, FileSystemRepository) {
        let temp = TempDir::new().unwrap();
        let repo = init(temp.path()).unwrap();
        let mut log = repo.open_log().unwrap();
        for (location, severity) in [
            ("Yard <north>", Severity::Critical),
            ("Office", Severity::Minor),
        ] {
            log.add(NewIncident {
                date: NaiveDate::from_ymd_opt(2025, 7, 4).unwrap(),
                time: NaiveTime::from_hms_opt(13, 30, 0).unwrap(),
                location: location.to_string(),
                description: "Forklift & pedestrian".to_string(),
                injury_type: Some(InjuryType::None),
                severity,
                person_involved: "D. Kim".to_string(),
                witnesses: None,
            })
            .unwrap();
        }
        (temp, repo)
    }

    #[test]
    fn test_export_escapes_and_filters() {
        let (_temp, repo) = seeded();
        let service = ExportService::new(repo);

        let html = service
            .execute(SeverityFilter::Only(Severity::Critical), None)
            .unwrap();

        assert!(html.contains("Yard &lt;north&gt;"));
        assert!(html.contains("Forklift &amp; pedestrian"));
        assert!(!html.contains("Office"));
        assert!(html.contains("1 incident(s)"));
    }

    #[test]
    fn test_export_writes_file() {
        let (temp, repo) = seeded();
        let service = ExportService::new(repo);
        let out = temp.path().join("reports").join("incidents.html");

        let html = service.execute(SeverityFilter::All, Some(&out)).unwrap();

        assert_eq!(fs::read_to_string(&out).unwrap(), html);
        assert!(html.contains("2 incident(s)"));
    }
}
