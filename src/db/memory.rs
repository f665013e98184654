use std::collections::HashSet;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use sea_orm::{DbErr, RuntimeErr};
use uuid::Uuid;

use crate::db::store::{RowCounts, SeedStore};
use crate::types::{
    aqi::DBAqiCreate, error::SeedError, event::DBEventCreate, ngo::DBNgoCreate,
    plantation::DBPlantationCreate, user::DBUserCreate,
};

#[derive(Debug, Clone)]
pub struct Stored<T> {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub row: T,
}

impl<T> Stored<T> {
    fn new(row: T) -> Self {
        Self { id: Uuid::new_v4(), created_at: Utc::now(), row }
    }
}

#[derive(Debug, Default)]
pub struct MemoryState {
    pub users: Vec<Stored<DBUserCreate>>,
    pub ngos: Vec<Stored<DBNgoCreate>>,
    pub events: Vec<Stored<DBEventCreate>>,
    pub plantations: Vec<Stored<DBPlantationCreate>>,
    pub aqi_records: Vec<Stored<DBAqiCreate>>,
    pub closed: bool,
    pub close_calls: u32,
    failing: HashSet<&'static str>,
    fail_close: bool,
}

/// In-process store with the Postgres conflict keys. Clones share state.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    state: Arc<Mutex<MemoryState>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every later write to `table` fail, as a broken statement would.
    /// `"counts"` makes the row count query fail instead.
    pub fn fail_on(&self, table: &'static str) {
        self.state.lock().failing.insert(table);
    }

    /// `close` still marks the store closed but reports a connection error.
    pub fn fail_on_close(&self) {
        self.state.lock().fail_close = true;
    }

    pub fn clear_failures(&self) {
        let mut state = self.state.lock();
        state.failing.clear();
        state.fail_close = false;
    }

    pub fn with_state<R>(&self, f: impl FnOnce(&mut MemoryState) -> R) -> R {
        f(&mut self.state.lock())
    }

    pub fn user_by_email(&self, email: &str) -> Option<Stored<DBUserCreate>> {
        self.state.lock().users.iter().find(|u| u.row.email == email).cloned()
    }

    fn check(state: &MemoryState, table: &'static str) -> Result<(), SeedError> {
        if state.closed {
            return Err(DbErr::Conn(RuntimeErr::Internal("store is closed".into())).into());
        }
        if state.failing.contains(table) {
            return Err(DbErr::Custom(format!("injected failure writing {table}")).into());
        }
        Ok(())
    }
}

#[async_trait]
impl SeedStore for MemoryStore {
    async fn upsert_user(&self, user: &DBUserCreate) -> Result<Uuid, SeedError> {
        let mut state = self.state.lock();
        Self::check(&state, "users")?;
        if let Some(existing) = state.users.iter().find(|u| u.row.email == user.email) {
            return Ok(existing.id);
        }
        let stored = Stored::new(user.clone());
        let id = stored.id;
        state.users.push(stored);
        Ok(id)
    }

    async fn insert_ngos(&self, ngos: &[DBNgoCreate]) -> Result<u64, SeedError> {
        if ngos.is_empty() {
            return Ok(0);
        }
        let mut state = self.state.lock();
        Self::check(&state, "ngos")?;
        let mut inserted = 0;
        for n in ngos {
            if state.ngos.iter().any(|s| s.row.name == n.name) {
                continue;
            }
            state.ngos.push(Stored::new(n.clone()));
            inserted += 1;
        }
        Ok(inserted)
    }

    async fn insert_events(&self, events: &[DBEventCreate]) -> Result<u64, SeedError> {
        if events.is_empty() {
            return Ok(0);
        }
        let mut state = self.state.lock();
        Self::check(&state, "events")?;

        // whole statement fails on a dangling host, like the FK would
        if let Some(bad) = events.iter().find(|e| !state.users.iter().any(|u| u.id == e.host_id)) {
            return Err(DbErr::Custom(format!(
                "insert on events violates foreign key fk_events_host: host {} not found",
                bad.host_id
            ))
            .into());
        }

        let mut inserted = 0;
        for e in events {
            if state
                .events
                .iter()
                .any(|s| s.row.title == e.title && s.row.starts_at == e.starts_at)
            {
                continue;
            }
            state.events.push(Stored::new(e.clone()));
            inserted += 1;
        }
        Ok(inserted)
    }

    async fn insert_plantation_event(&self, plantation: &DBPlantationCreate) -> Result<bool, SeedError> {
        let mut state = self.state.lock();
        Self::check(&state, "plantation_events")?;
        if state.plantations.iter().any(|s| s.row.title == plantation.title) {
            return Ok(false);
        }
        state.plantations.push(Stored::new(plantation.clone()));
        Ok(true)
    }

    async fn insert_aqi_records(&self, records: &[DBAqiCreate]) -> Result<u64, SeedError> {
        if records.is_empty() {
            return Ok(0);
        }
        let mut state = self.state.lock();
        Self::check(&state, "aqi_records")?;
        let mut inserted = 0;
        for r in records {
            if state
                .aqi_records
                .iter()
                .any(|s| s.row.location_name == r.location_name && s.row.recorded_at == r.recorded_at)
            {
                continue;
            }
            state.aqi_records.push(Stored::new(r.clone()));
            inserted += 1;
        }
        Ok(inserted)
    }

    async fn counts(&self) -> Result<RowCounts, SeedError> {
        let state = self.state.lock();
        if state.failing.contains("counts") {
            return Err(DbErr::Custom("injected failure counting rows".into()).into());
        }
        Ok(RowCounts {
            users: state.users.len() as u64,
            ngos: state.ngos.len() as u64,
            events: state.events.len() as u64,
            plantations: state.plantations.len() as u64,
            aqi_records: state.aqi_records.len() as u64,
        })
    }

    async fn close(self) -> Result<(), SeedError> {
        let mut state = self.state.lock();
        state.close_calls += 1;
        state.closed = true;
        if state.fail_close {
            return Err(DbErr::Conn(RuntimeErr::Internal("connection reset while closing".into())).into());
        }
        Ok(())
    }
}
