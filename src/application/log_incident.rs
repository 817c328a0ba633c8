//! Log incident use case

use crate::domain::{Incident, NewIncident};
use crate::error::Result;
use crate::infrastructure::FileSystemRepository;

/// Service for recording a submitted incident
pub struct LogIncidentService {
    repository: FileSystemRepository,
}

impl LogIncidentService {
    pub fn new(repository: FileSystemRepository) -> Self {
        LogIncidentService { repository }
    }

    /// Validate and store the submission, returning the created record
    pub fn execute(&self, new: NewIncident) -> Result<Incident> {
        let mut log = self.repository.open_log()?;
        let incident = log.add(new)?;
        Ok(incident.clone())
    }
}
