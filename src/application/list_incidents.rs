//! List and show use cases

use crate::domain::{Incident, SeverityFilter};
use crate::error::Result;
use crate::infrastructure::{FileSystemRepository, LogRepository};

/// Read-only queries over the incident log
pub struct ListIncidentsService {
    repository: FileSystemRepository,
}

impl ListIncidentsService {
    pub fn new(repository: FileSystemRepository) -> Self {
        ListIncidentsService { repository }
    }

    /// The filter to use when the caller gave none
    pub fn effective_filter(&self, filter: Option<SeverityFilter>) -> Result<SeverityFilter> {
        match filter {
            Some(filter) => Ok(filter),
            None => Ok(self.repository.load_config()?.default_filter),
        }
    }

    /// Incidents matching the filter, most recent first
    pub fn list(&self, filter: SeverityFilter, limit: Option<usize>) -> Result<Vec<Incident>> {
        let log = self.repository.open_log()?;
        let mut incidents: Vec<Incident> = log.filtered(filter).into_iter().cloned().collect();

        if let Some(n) = limit {
            incidents.truncate(n);
        }

        Ok(incidents)
    }

    /// One incident by id or unique id prefix
    pub fn show(&self, id_or_prefix: &str) -> Result<Incident> {
        let log = self.repository.open_log()?;
        log.resolve(id_or_prefix).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::init::init;
    use crate::domain::{InjuryType, NewIncident, Severity};
    use crate::error::IncilogError;
    use chrono::{NaiveDate, NaiveTime};
    use tempfile::TempDir;

    fn seeded(entries: &[(&str, Severity)]) -> (TempDir, FileSystemRepository) {
        let temp = TempDir::new().unwrap();
        let repo = init(temp.path()).unwrap();
        let mut log = repo.open_log().unwrap();
        for (location, severity) in entries {
            let new = NewIncident {
                date: NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
                time: NaiveTime::from_hms_opt(8, 0, 0).unwrap(),
                location: location.to_string(),
                description: "Strained back lifting boxes".to_string(),
                injury_type: Some(InjuryType::Sprain),
                severity: *severity,
                person_involved: "L. Novak".to_string(),
                witnesses: None,
            };
            log.add(new).unwrap();
        }
        (temp, repo)
    }

    fn locations(incidents: &[Incident]) -> Vec<&str> {
        incidents.iter().map(|i| i.location.as_str()).collect()
    }

    #[test]
    fn test_list_newest_first() {
        let (_temp, repo) = seeded(&[("A", Severity::Minor), ("B", Severity::Critical)]);
        let service = ListIncidentsService::new(repo);

        let all = service.list(SeverityFilter::All, None).unwrap();
        assert_eq!(locations(&all), vec!["B", "A"]);
    }

    #[test]
    fn test_list_with_filter_and_limit() {
        let (_temp, repo) = seeded(&[
            ("A", Severity::Minor),
            ("B", Severity::Critical),
            ("C", Severity::Minor),
            ("D", Severity::Minor),
        ]);
        let service = ListIncidentsService::new(repo);

        let minor = service
            .list(SeverityFilter::Only(Severity::Minor), None)
            .unwrap();
        assert_eq!(locations(&minor), vec!["D", "C", "A"]);

        let limited = service
            .list(SeverityFilter::Only(Severity::Minor), Some(2))
            .unwrap();
        assert_eq!(locations(&limited), vec!["D", "C"]);
    }

    #[test]
    fn test_effective_filter_uses_config_default() {
        let (_temp, repo) = seeded(&[]);
        let mut config = repo.load_config().unwrap();
        config.default_filter = SeverityFilter::Only(Severity::Critical);
        repo.save_config(&config).unwrap();

        let service = ListIncidentsService::new(repo);
        assert_eq!(
            service.effective_filter(None).unwrap(),
            SeverityFilter::Only(Severity::Critical)
        );
        assert_eq!(
            service.effective_filter(Some(SeverityFilter::All)).unwrap(),
            SeverityFilter::All
        );
    }

    #[test]
    fn test_show() {
        let (_temp, repo) = seeded(&[("A", Severity::Minor)]);
        let id = repo.open_log().unwrap().incidents()[0].id.clone();
        let service = ListIncidentsService::new(repo);

        assert_eq!(service.show(&id).unwrap().location, "A");
        assert!(matches!(
            service.show("missing"),
            Err(IncilogError::IncidentNotFound(_))
        ));
    }
}
