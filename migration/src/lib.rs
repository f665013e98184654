pub use sea_orm_migration::prelude::*;

mod m20250301_000001_enable_postgis;
mod m20250301_000002_create_users_table;
mod m20250301_000003_create_ngos_table;
mod m20250301_000004_create_events_table;
mod m20250301_000005_create_plantation_events_table;
mod m20250301_000006_create_aqi_records_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250301_000001_enable_postgis::Migration),
            Box::new(m20250301_000002_create_users_table::Migration),
            Box::new(m20250301_000003_create_ngos_table::Migration),
            Box::new(m20250301_000004_create_events_table::Migration),
            Box::new(m20250301_000005_create_plantation_events_table::Migration),
            Box::new(m20250301_000006_create_aqi_records_table::Migration),
        ]
    }
}
