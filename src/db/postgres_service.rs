use async_trait::async_trait;
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection, EntityTrait, PaginatorTrait};
use tracing::info;
use uuid::Uuid;

use crate::config::EnvConfig;
use crate::db::store::{RowCounts, SeedStore};
use crate::types::{
    aqi::DBAqiCreate, error::SeedError, event::DBEventCreate, ngo::DBNgoCreate,
    plantation::DBPlantationCreate, user::DBUserCreate,
};

pub struct PostgresService {
    pub(crate) db: DatabaseConnection,
}

impl PostgresService {
    /// Connects with default options and runs pending migrations.
    pub async fn new(uri: &str) -> Result<Self, SeedError> {
        Self::connect(&EnvConfig::new(uri)).await
    }

    pub async fn connect(config: &EnvConfig) -> Result<Self, SeedError> {
        info!("Connecting to PostgreSQL...");
        let mut opts = ConnectOptions::new(config.db_url.clone());
        opts.connect_timeout(config.connect_timeout)
            .acquire_timeout(config.connect_timeout)
            .max_connections(2)
            .sqlx_logging(false);
        let service = Self { db: Database::connect(opts).await? };
        info!("Connected to PostgreSQL.");

        if config.run_migrations {
            info!("Running migrations...");
            Migrator::up(service.connection(), None).await?;
            info!("Migrations finished.");
        }

        Ok(service)
    }

    pub fn connection(&self) -> &DatabaseConnection {
        &self.db
    }
}

#[async_trait]
impl SeedStore for PostgresService {
    async fn upsert_user(&self, user: &DBUserCreate) -> Result<Uuid, SeedError> {
        self.upsert_user_by_email(user).await
    }

    async fn insert_ngos(&self, ngos: &[DBNgoCreate]) -> Result<u64, SeedError> {
        self.insert_ngos_or_skip(ngos).await
    }

    async fn insert_events(&self, events: &[DBEventCreate]) -> Result<u64, SeedError> {
        self.insert_events_or_skip(events).await
    }

    async fn insert_plantation_event(&self, plantation: &DBPlantationCreate) -> Result<bool, SeedError> {
        self.insert_plantation_or_skip(plantation).await
    }

    async fn insert_aqi_records(&self, records: &[DBAqiCreate]) -> Result<u64, SeedError> {
        self.insert_aqi_records_or_skip(records).await
    }

    async fn counts(&self) -> Result<RowCounts, SeedError> {
        Ok(RowCounts {
            users: entity::user::Entity::find().count(&self.db).await?,
            ngos: entity::ngo::Entity::find().count(&self.db).await?,
            events: entity::event::Entity::find().count(&self.db).await?,
            plantations: entity::plantation_event::Entity::find().count(&self.db).await?,
            aqi_records: entity::aqi_record::Entity::find().count(&self.db).await?,
        })
    }

    async fn close(self) -> Result<(), SeedError> {
        info!("Closing PostgreSQL connection.");
        self.db.close().await?;
        Ok(())
    }
}
