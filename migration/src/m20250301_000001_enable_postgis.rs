use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, m: &SchemaManager) -> Result<(), DbErr> {
        // gen_random_uuid() for server-side ids
        m.get_connection()
            .execute_unprepared(r#"CREATE EXTENSION IF NOT EXISTS "pgcrypto";"#)
            .await?;
        m.get_connection()
            .execute_unprepared(r#"CREATE EXTENSION IF NOT EXISTS "postgis";"#)
            .await?;
        Ok(())
    }

    async fn down(&self, _m: &SchemaManager) -> Result<(), DbErr> {
        // Extensions may be shared with other schemas; leave them installed.
        Ok(())
    }
}
