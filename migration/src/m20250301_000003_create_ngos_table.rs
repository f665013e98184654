use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, m: &SchemaManager) -> Result<(), DbErr> {
        m.create_table(
            Table::create()
                .table(Ngos::Table)
                .if_not_exists()
                .col(
                    ColumnDef::new(Ngos::Id)
                        .uuid()
                        .not_null()
                        .primary_key()
                        .default(Expr::cust("gen_random_uuid()")),
                )
                .col(ColumnDef::new(Ngos::Name).string().not_null())
                .col(ColumnDef::new(Ngos::Description).text().not_null())
                .col(ColumnDef::new(Ngos::Address).string().not_null())
                .col(ColumnDef::new(Ngos::Website).string().not_null())
                .col(
                    ColumnDef::new(Ngos::Location)
                        .custom(Alias::new("geometry(Point, 4326)"))
                        .not_null(),
                )
                .col(
                    ColumnDef::new(Ngos::CreatedAt)
                        .timestamp_with_time_zone()
                        .not_null()
                        .default(Expr::current_timestamp()),
                )
                .to_owned(),
        )
        .await?;

        // conflict target for insert-or-skip
        m.create_index(
            Index::create()
                .name("uk_ngos_name")
                .table(Ngos::Table)
                .col(Ngos::Name)
                .unique()
                .to_owned(),
        )
        .await?;

        m.get_connection()
            .execute_unprepared(
                r#"CREATE INDEX IF NOT EXISTS idx_ngos_location ON ngos USING GIST (location);"#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, m: &SchemaManager) -> Result<(), DbErr> {
        m.drop_table(Table::drop().table(Ngos::Table).if_exists().to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Ngos {
    Table,
    Id,
    Name,
    Description,
    Address,
    Website,
    Location,
    CreatedAt,
}
