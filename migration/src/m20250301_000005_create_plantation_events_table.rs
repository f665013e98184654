use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_query::extension::postgres::Type;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(DeriveIden)]
enum PlantationStatus {
    #[sea_orm(iden = "plantation_status")]
    Enum,
    Upcoming,
    Active,
    Completed,
}

#[derive(DeriveIden)]
enum PlantationEvents {
    Table,
    Id,
    Title,
    Description,
    Organizer,
    Date,
    LocationName,
    Boundary,
    Centroid,
    TreesGoal,
    TreesPlanted,
    Status,
    CreatedAt,
    UpdatedAt,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, m: &SchemaManager) -> Result<(), DbErr> {
        m.create_type(
            Type::create()
                .as_enum(PlantationStatus::Enum)
                .values([
                    PlantationStatus::Upcoming,
                    PlantationStatus::Active,
                    PlantationStatus::Completed,
                ])
                .to_owned(),
        )
        .await?;

        m.create_table(
            Table::create()
                .table(PlantationEvents::Table)
                .if_not_exists()
                .col(
                    ColumnDef::new(PlantationEvents::Id)
                        .uuid()
                        .not_null()
                        .primary_key()
                        .default(Expr::cust("gen_random_uuid()")),
                )
                .col(ColumnDef::new(PlantationEvents::Title).string().not_null())
                .col(ColumnDef::new(PlantationEvents::Description).text().not_null())
                .col(ColumnDef::new(PlantationEvents::Organizer).string().not_null())
                .col(ColumnDef::new(PlantationEvents::Date).date().not_null())
                .col(ColumnDef::new(PlantationEvents::LocationName).string().not_null())
                .col(
                    ColumnDef::new(PlantationEvents::Boundary)
                        .custom(Alias::new("geometry(Polygon, 4326)"))
                        .not_null(),
                )
                .col(
                    ColumnDef::new(PlantationEvents::Centroid)
                        .custom(Alias::new("geometry(Point, 4326)"))
                        .not_null(),
                )
                .col(ColumnDef::new(PlantationEvents::TreesGoal).integer().not_null())
                .col(ColumnDef::new(PlantationEvents::TreesPlanted).integer().not_null().default(0))
                .col(
                    ColumnDef::new(PlantationEvents::Status)
                        .custom(PlantationStatus::Enum)
                        .not_null()
                        .default(Expr::cust("'upcoming'::plantation_status")),
                )
                .col(
                    ColumnDef::new(PlantationEvents::CreatedAt)
                        .timestamp_with_time_zone()
                        .not_null()
                        .default(Expr::current_timestamp()),
                )
                .col(
                    ColumnDef::new(PlantationEvents::UpdatedAt)
                        .timestamp_with_time_zone()
                        .not_null()
                        .default(Expr::current_timestamp()),
                )
                .to_owned(),
        )
        .await?;

        m.create_index(
            Index::create()
                .name("uk_plantation_events_title")
                .table(PlantationEvents::Table)
                .col(PlantationEvents::Title)
                .unique()
                .to_owned(),
        )
        .await?;

        Ok(())
    }

    async fn down(&self, m: &SchemaManager) -> Result<(), DbErr> {
        m.drop_table(
            Table::drop()
                .table(PlantationEvents::Table)
                .if_exists()
                .to_owned(),
        )
        .await?;
        m.drop_type(Type::drop().if_exists().name(PlantationStatus::Enum).to_owned())
            .await?;
        Ok(())
    }
}
