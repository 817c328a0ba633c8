//! Delete and clear use cases

use crate::application::confirm::{Confirm, CLEAR_PROMPT, DELETE_PROMPT};
use crate::domain::Incident;
use crate::error::{IncilogError, Result};
use crate::infrastructure::{FileSystemRepository, LogRepository};
use tracing::debug;

/// Service for destructive operations on the incident log
pub struct RemoveIncidentsService {
    repository: FileSystemRepository,
}

impl RemoveIncidentsService {
    pub fn new(repository: FileSystemRepository) -> Self {
        RemoveIncidentsService { repository }
    }

    /// Delete one incident by id or unique id prefix.
    /// Nothing changes unless the confirmation is accepted.
    pub fn delete(&self, id_or_prefix: &str, confirm: &mut dyn Confirm) -> Result<Incident> {
        let config = self.repository.load_config()?;
        let mut log = self.repository.open_log()?;
        let id = log.resolve(id_or_prefix)?.id.clone();

        if config.confirm_destructive && !confirm.confirm(DELETE_PROMPT)? {
            debug!(id = %id, "delete declined");
            return Err(IncilogError::Aborted);
        }

        log.delete(&id)
    }

    /// Delete every incident, returning how many were removed.
    /// An empty log is left alone without asking.
    pub fn clear(&self, confirm: &mut dyn Confirm) -> Result<usize> {
        let config = self.repository.load_config()?;
        let mut log = self.repository.open_log()?;

        if log.is_empty() {
            return Ok(0);
        }

        if config.confirm_destructive && !confirm.confirm(CLEAR_PROMPT)? {
            debug!("clear declined");
            return Err(IncilogError::Aborted);
        }

        log.clear()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::confirm::testing::Answers;
    use crate::application::confirm::AssumeYes;
    use crate::application::init::init;
    use crate::domain::{InjuryType, NewIncident, Severity};
    use chrono::{NaiveDate, NaiveTime};
    use tempfile::TempDir;

    fn seeded(locations: &[&str]) -> (TempDir, FileSystemRepository, Vec<String>) {
        let temp = TempDir::new().unwrap();
        let repo = init(temp.path()).unwrap();
        let mut log = repo.open_log().unwrap();
        let mut ids = Vec::new();
        for location in locations {
            let new = NewIncident {
                date: NaiveDate::from_ymd_opt(2025, 5, 9).unwrap(),
                time: NaiveTime::from_hms_opt(11, 0, 0).unwrap(),
                location: location.to_string(),
                description: "Ladder slipped".to_string(),
                injury_type: Some(InjuryType::Fracture),
                severity: Severity::Serious,
                person_involved: "T. Berg".to_string(),
                witnesses: None,
            };
            ids.push(log.add(new).unwrap().id.clone());
        }
        (temp, repo, ids)
    }

    #[test]
    fn test_delete_confirmed() {
        let (_temp, repo, ids) = seeded(&["A", "B"]);
        let service = RemoveIncidentsService::new(repo.clone());
        let mut answers = Answers::always(true);

        let removed = service.delete(&ids[0], &mut answers).unwrap();

        assert_eq!(removed.location, "A");
        assert_eq!(answers.asked, vec![DELETE_PROMPT.to_string()]);
        let log = repo.open_log().unwrap();
        assert_eq!(log.len(), 1);
        assert!(log.find(&ids[1]).is_some());
    }

    #[test]
    fn test_delete_declined_changes_nothing() {
        let (_temp, repo, ids) = seeded(&["A", "B"]);
        let service = RemoveIncidentsService::new(repo.clone());

        let err = service.delete(&ids[0], &mut Answers::always(false)).unwrap_err();

        assert!(matches!(err, IncilogError::Aborted));
        assert_eq!(repo.open_log().unwrap().len(), 2);
    }

    #[test]
    fn test_delete_unknown_id_does_not_prompt() {
        let (_temp, repo, _ids) = seeded(&["A"]);
        let service = RemoveIncidentsService::new(repo);
        let mut answers = Answers::always(true);

        let err = service.delete("doesnotexist", &mut answers).unwrap_err();

        assert!(matches!(err, IncilogError::IncidentNotFound(_)));
        assert!(answers.asked.is_empty());
    }

    #[test]
    fn test_delete_without_confirmation_when_disabled() {
        let (_temp, repo, ids) = seeded(&["A"]);
        let mut config = repo.load_config().unwrap();
        config.confirm_destructive = false;
        repo.save_config(&config).unwrap();

        let service = RemoveIncidentsService::new(repo.clone());
        let mut answers = Answers::always(false);
        service.delete(&ids[0], &mut answers).unwrap();

        assert!(answers.asked.is_empty());
        assert!(repo.open_log().unwrap().is_empty());
    }

    #[test]
    fn test_clear() {
        let (_temp, repo, _ids) = seeded(&["A", "B", "C"]);
        let service = RemoveIncidentsService::new(repo.clone());

        assert_eq!(service.clear(&mut AssumeYes).unwrap(), 3);
        assert!(repo.open_log().unwrap().is_empty());
    }

    #[test]
    fn test_clear_declined() {
        let (_temp, repo, _ids) = seeded(&["A", "B"]);
        let service = RemoveIncidentsService::new(repo.clone());
        let mut answers = Answers::always(false);

        assert!(matches!(
            service.clear(&mut answers),
            Err(IncilogError::Aborted)
        ));
        assert_eq!(answers.asked, vec![CLEAR_PROMPT.to_string()]);
        assert_eq!(repo.open_log().unwrap().len(), 2);
    }

    #[test]
    fn test_clear_empty_log_does_not_prompt() {
        let (_temp, repo, _ids) = seeded(&[]);
        let service = RemoveIncidentsService::new(repo);
        let mut answers = Answers::always(false);

        assert_eq!(service.clear(&mut answers).unwrap(), 0);
        assert!(answers.asked.is_empty());
    }
}
