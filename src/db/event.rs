use crate::db::{geometry, postgres_service::PostgresService, server_id};
use crate::types::{error::SeedError, event::DBEventCreate};
use entity::event::{Column, Entity as Event};
use sea_orm::sea_query::{Alias, Expr, IntoIden, OnConflict, Query};
use sea_orm::ConnectionTrait;

impl PostgresService {
    pub async fn insert_events_or_skip(&self, events: &[DBEventCreate]) -> Result<u64, SeedError> {
        if events.is_empty() {
            return Ok(0);
        }

        let mut insert = Query::insert();
        insert.into_table(Event).columns([
            Column::Id.into_iden(),
            Column::Title.into_iden(),
            Column::Description.into_iden(),
            Column::Organizer.into_iden(),
            Column::StartsAt.into_iden(),
            Column::LocationName.into_iden(),
            Alias::new("location").into_iden(),
            Column::Participants.into_iden(),
            Column::MaxParticipants.into_iden(),
            Column::HostId.into_iden(),
            Column::CreatedAt.into_iden(),
        ]);
        for e in events {
            insert.values([
                server_id(),
                e.title.clone().into(),
                e.description.clone().into(),
                e.organizer.clone().into(),
                e.starts_at.into(),
                e.location_name.clone().into(),
                geometry(e.location.to_ewkt()),
                e.participants.into(),
                e.max_participants.into(),
                e.host_id.into(),
                Expr::current_timestamp().into(),
            ])?;
        }
        insert.on_conflict(
            OnConflict::columns([Column::Title, Column::StartsAt])
                .do_nothing()
                .to_owned(),
        );

        let stmt = self.db.get_database_backend().build(&insert);
        Ok(self.db.execute(stmt).await?.rows_affected())
    }
}
