use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, m: &SchemaManager) -> Result<(), DbErr> {
        m.create_table(
            Table::create()
                .table(AqiRecords::Table)
                .if_not_exists()
                .col(
                    ColumnDef::new(AqiRecords::Id)
                        .uuid()
                        .not_null()
                        .primary_key()
                        .default(Expr::cust("gen_random_uuid()")),
                )
                .col(ColumnDef::new(AqiRecords::Aqi).integer().not_null())
                .col(ColumnDef::new(AqiRecords::LocationName).string().not_null())
                .col(
                    ColumnDef::new(AqiRecords::Location)
                        .custom(Alias::new("geometry(Point, 4326)"))
                        .not_null(),
                )
                .col(
                    ColumnDef::new(AqiRecords::RecordedAt)
                        .timestamp_with_time_zone()
                        .not_null()
                        .default(Expr::current_timestamp()),
                )
                .to_owned(),
        )
        .await?;

        // one snapshot per location per instant
        m.create_index(
            Index::create()
                .name("uk_aqi_records_location_recorded_at")
                .table(AqiRecords::Table)
                .col(AqiRecords::LocationName)
                .col(AqiRecords::RecordedAt)
                .unique()
                .to_owned(),
        )
        .await?;

        Ok(())
    }

    async fn down(&self, m: &SchemaManager) -> Result<(), DbErr> {
        m.drop_table(Table::drop().table(AqiRecords::Table).if_exists().to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum AqiRecords {
    Table,
    Id,
    Aqi,
    LocationName,
    Location,
    RecordedAt,
}
