use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Events {
    Table,
    Id,
    Title,
    Description,
    Organizer,
    StartsAt,
    LocationName,
    Location,
    Participants,
    MaxParticipants,
    HostId,
    CreatedAt,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, m: &SchemaManager) -> Result<(), DbErr> {
        m.create_table(
            Table::create()
                .table(Events::Table)
                .if_not_exists()
                .col(
                    ColumnDef::new(Events::Id)
                        .uuid()
                        .not_null()
                        .primary_key()
                        .default(Expr::cust("gen_random_uuid()")),
                )
                .col(ColumnDef::new(Events::Title).string().not_null())
                .col(ColumnDef::new(Events::Description).text().not_null())
                .col(ColumnDef::new(Events::Organizer).string().not_null())
                .col(ColumnDef::new(Events::StartsAt).timestamp_with_time_zone().not_null())
                .col(ColumnDef::new(Events::LocationName).string().not_null())
                .col(
                    ColumnDef::new(Events::Location)
                        .custom(Alias::new("geometry(Point, 4326)"))
                        .not_null(),
                )
                .col(ColumnDef::new(Events::Participants).integer().not_null().default(0))
                .col(ColumnDef::new(Events::MaxParticipants).integer().not_null())
                .col(ColumnDef::new(Events::HostId).uuid().not_null())
                .col(
                    ColumnDef::new(Events::CreatedAt)
                        .timestamp_with_time_zone()
                        .not_null()
                        .default(Expr::current_timestamp()),
                )
                .foreign_key(
                    ForeignKey::create()
                        .name("fk_events_host")
                        .from(Events::Table, Events::HostId)
                        .to(Users::Table, Users::Id)
                        .on_delete(ForeignKeyAction::Cascade)
                        .on_update(ForeignKeyAction::Cascade),
                )
                .to_owned(),
        )
        .await?;

        m.create_index(
            Index::create()
                .name("uk_events_title_starts_at")
                .table(Events::Table)
                .col(Events::Title)
                .col(Events::StartsAt)
                .unique()
                .to_owned(),
        )
        .await?;

        m.create_index(
            Index::create()
                .name("idx_events_host")
                .table(Events::Table)
                .col(Events::HostId)
                .to_owned(),
        )
        .await?;

        Ok(())
    }

    async fn down(&self, m: &SchemaManager) -> Result<(), DbErr> {
        m.drop_table(Table::drop().table(Events::Table).if_exists().to_owned())
            .await?;
        Ok(())
    }
}
