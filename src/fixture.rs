use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::types::{
    aqi::DBAqiCreate, error::SeedError, event::EventSeed, ngo::DBNgoCreate,
    plantation::DBPlantationCreate, user::UserSeed,
};

// dataset bundled into the binary; SEED_FIXTURE points at a replacement
const BUILTIN: &str = include_str!("../fixtures/ecosphere.json");

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Fixture {
    pub password: String,
    pub users: Vec<UserSeed>,
    #[serde(default)]
    pub ngos: Vec<DBNgoCreate>,
    #[serde(default)]
    pub events: Vec<EventSeed>,
    #[serde(default)]
    pub plantations: Vec<DBPlantationCreate>,
    #[serde(default)]
    pub aqi_records: Vec<DBAqiCreate>,
}

impl Fixture {
    pub fn builtin() -> Result<Self, SeedError> {
        Self::from_json(BUILTIN)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, SeedError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .map_err(|e| SeedError::Fixture(format!("{}: {e}", path.display())))?;
        Self::from_json(&raw)
    }

    pub fn from_json(raw: &str) -> Result<Self, SeedError> {
        let fixture: Fixture = serde_json::from_str(raw)?;
        fixture.validate()?;
        Ok(fixture)
    }

    /// Checks the cross-row invariants serde can't: unique emails, resolvable
    /// hosts, counters within their limits, centroids inside their boundary.
    pub fn validate(&self) -> Result<(), SeedError> {
        if self.password.is_empty() {
            return Err(SeedError::Fixture("password must not be empty".into()));
        }

        let mut emails = HashSet::new();
        for u in &self.users {
            if !emails.insert(u.email.as_str()) {
                return Err(SeedError::Fixture(format!("duplicate user email {}", u.email)));
            }
        }

        for e in &self.events {
            if !emails.contains(e.host_email.as_str()) {
                return Err(SeedError::UnknownHost(e.host_email.clone()));
            }
            if e.participants < 0 || e.participants > e.max_participants {
                return Err(SeedError::Fixture(format!(
                    "event {:?}: participants {} outside 0..={}",
                    e.title, e.participants, e.max_participants
                )));
            }
        }

        for p in &self.plantations {
            if p.trees_planted < 0 || p.trees_planted > p.trees_goal {
                return Err(SeedError::Fixture(format!(
                    "plantation {:?}: trees planted {} outside 0..={}",
                    p.title, p.trees_planted, p.trees_goal
                )));
            }
            if !p.boundary.contains_in_bounds(&p.centroid) {
                return Err(SeedError::Geometry(format!(
                    "plantation {:?}: centroid lies outside its boundary",
                    p.title
                )));
            }
        }

        Ok(())
    }

    /// Emails of the users that host at least one event, in first-seen order.
    pub fn host_emails(&self) -> Vec<&str> {
        let mut seen = Vec::new();
        for e in &self.events {
            if !seen.contains(&e.host_email.as_str()) {
                seen.push(e.host_email.as_str());
            }
        }
        seen
    }

    pub fn row_count(&self) -> usize {
        self.users.len()
            + self.ngos.len()
            + self.events.len()
            + self.plantations.len()
            + self.aqi_records.len()
    }
}
