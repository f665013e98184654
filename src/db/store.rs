//! Repository seam between the seeder and a concrete database.

use async_trait::async_trait;
use uuid::Uuid;

use crate::types::{
    aqi::DBAqiCreate, error::SeedError, event::DBEventCreate, ngo::DBNgoCreate,
    plantation::DBPlantationCreate, user::DBUserCreate,
};

/// Row totals per seeded table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RowCounts {
    pub users: u64,
    pub ngos: u64,
    pub events: u64,
    pub plantations: u64,
    pub aqi_records: u64,
}

impl RowCounts {
    pub fn total(&self) -> u64 {
        self.users + self.ngos + self.events + self.plantations + self.aqi_records
    }
}

/// Typed insert-if-absent operations, one per table.
///
/// Every insert tolerates rows that already exist: duplicates are skipped
/// by the store, never reported as errors. Counts returned are rows actually
/// written.
#[async_trait]
pub trait SeedStore: Send + Sync {
    /// Inserts the user unless one with the same email exists, in which case
    /// the stored row is left untouched. Returns the stored row's id either way.
    async fn upsert_user(&self, user: &DBUserCreate) -> Result<Uuid, SeedError>;

    /// One batched insert; conflict target is the NGO name.
    async fn insert_ngos(&self, ngos: &[DBNgoCreate]) -> Result<u64, SeedError>;

    /// One batched insert; conflict target is (title, starts_at).
    async fn insert_events(&self, events: &[DBEventCreate]) -> Result<u64, SeedError>;

    /// Single-row insert; conflict target is the title.
    async fn insert_plantation_event(&self, plantation: &DBPlantationCreate) -> Result<bool, SeedError>;

    /// One batched insert; conflict target is (location_name, recorded_at).
    async fn insert_aqi_records(&self, records: &[DBAqiCreate]) -> Result<u64, SeedError>;

    async fn counts(&self) -> Result<RowCounts, SeedError>;

    /// Releases the underlying connection.
    async fn close(self) -> Result<(), SeedError>;
}
