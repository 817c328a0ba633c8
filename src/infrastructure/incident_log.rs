//! The incident collection, kept in sync with its persisted copy

use crate::domain::{generate_id, Incident, NewIncident, SeverityFilter};
use crate::error::{IncilogError, Result};
use crate::infrastructure::store::KeyValueStore;
use chrono::{DateTime, SubsecRound, Utc};
use rand::Rng;
use std::collections::HashSet;
use tracing::{debug, info, warn};

/// Storage key holding the JSON array of incidents
pub const INCIDENTS_KEY: &str = "incidents";

/// Ordered incident collection, most recent first.
///
/// Every mutation rewrites the whole collection to the store before
/// returning, so the in-memory list and the persisted copy never diverge.
#[derive(Debug)]
pub struct IncidentLog<S: KeyValueStore> {
    store: S,
    incidents: Vec<Incident>,
}

impl<S: KeyValueStore> IncidentLog<S> {
    /// Load the collection from the store.
    ///
    /// A missing or empty value starts an empty collection. So does a value
    /// that cannot be parsed; it is moved aside first so the next write
    /// does not destroy it.
    pub fn load(mut store: S) -> Result<Self> {
        let incidents = match store.get(INCIDENTS_KEY)? {
            None => Vec::new(),
            Some(raw) if raw.trim().is_empty() => Vec::new(),
            Some(raw) => match serde_json::from_str::<Vec<Incident>>(&raw) {
                Ok(incidents) => dedup_ids(incidents),
                Err(e) => {
                    let backup = store.backup(INCIDENTS_KEY)?;
                    warn!(
                        error = %e,
                        backup = backup.as_deref().unwrap_or("<none>"),
                        "stored incidents are unreadable, starting with an empty log"
                    );
                    Vec::new()
                }
            },
        };

        debug!(count = incidents.len(), "loaded incidents");
        Ok(IncidentLog { store, incidents })
    }

    pub fn incidents(&self) -> &[Incident] {
        &self.incidents
    }

    pub fn len(&self) -> usize {
        self.incidents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.incidents.is_empty()
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Record a submission at the head of the collection
    pub fn add(&mut self, new: NewIncident) -> Result<&Incident> {
        let now = Utc::now().trunc_subsecs(3);
        self.add_at(new, now, &mut rand::thread_rng())
    }

    /// Like [`IncidentLog::add`] with an explicit clock and id source
    pub fn add_at<R: Rng + ?Sized>(
        &mut self,
        new: NewIncident,
        created_at: DateTime<Utc>,
        rng: &mut R,
    ) -> Result<&Incident> {
        let new = new.validate()?;

        let mut id = generate_id(created_at, rng);
        while self.find(&id).is_some() {
            id = generate_id(created_at, rng);
        }

        let incident = Incident::from_submission(new, id, created_at);
        self.incidents.insert(0, incident);
        if let Err(e) = self.persist() {
            self.incidents.remove(0);
            return Err(e);
        }

        let logged = &self.incidents[0];
        info!(id = %logged.id, severity = %logged.severity, "logged incident");
        Ok(logged)
    }

    /// Remove exactly the incident with `id`
    pub fn delete(&mut self, id: &str) -> Result<Incident> {
        let index = self
            .incidents
            .iter()
            .position(|i| i.id == id)
            .ok_or_else(|| IncilogError::IncidentNotFound(id.to_string()))?;

        let removed = self.incidents.remove(index);
        if let Err(e) = self.persist() {
            self.incidents.insert(index, removed);
            return Err(e);
        }

        info!(id = %removed.id, "deleted incident");
        Ok(removed)
    }

    /// Remove every incident, returning how many were removed
    pub fn clear(&mut self) -> Result<usize> {
        let removed = std::mem::take(&mut self.incidents);
        if let Err(e) = self.persist() {
            self.incidents = removed;
            return Err(e);
        }

        info!(count = removed.len(), "cleared all incidents");
        Ok(removed.len())
    }

    pub fn filtered(&self, filter: SeverityFilter) -> Vec<&Incident> {
        filter.apply(&self.incidents)
    }

    pub fn find(&self, id: &str) -> Option<&Incident> {
        self.incidents.iter().find(|i| i.id == id)
    }

    /// Look up by exact id, falling back to a unique id prefix
    pub fn resolve(&self, id_or_prefix: &str) -> Result<&Incident> {
        let wanted = id_or_prefix.trim();
        if let Some(incident) = self.find(wanted) {
            return Ok(incident);
        }
        if wanted.is_empty() {
            return Err(IncilogError::IncidentNotFound(wanted.to_string()));
        }

        let mut matches = self.incidents.iter().filter(|i| i.id.starts_with(wanted));
        match (matches.next(), matches.count()) {
            (Some(incident), 0) => Ok(incident),
            (Some(_), rest) => Err(IncilogError::AmbiguousId {
                prefix: wanted.to_string(),
                matches: rest + 1,
            }),
            (None, _) => Err(IncilogError::IncidentNotFound(wanted.to_string())),
        }
    }

    /// Serialized form of the collection, as written to the store
    pub fn to_json(&self) -> Result<String> {
        let mut json = serde_json::to_string_pretty(&self.incidents)?;
        json.push('\n');
        Ok(json)
    }

    fn persist(&mut self) -> Result<()> {
        let json = self.to_json()?;
        self.store.set(INCIDENTS_KEY, &json)
    }
}

fn dedup_ids(incidents: Vec<Incident>) -> Vec<Incident> {
    let mut seen = HashSet::new();
    let before = incidents.len();
    let unique: Vec<Incident> = incidents
        .into_iter()
        .filter(|i| seen.insert(i.id.clone()))
        .collect();

    if unique.len() != before {
        warn!(
            dropped = before - unique.len(),
            "stored incidents contained duplicate ids, keeping the first of each"
        );
    }
    unique
}
