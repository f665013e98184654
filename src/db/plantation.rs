use crate::db::{geometry, postgres_service::PostgresService, server_id};
use crate::types::{error::SeedError, plantation::DBPlantationCreate};
use entity::plantation_event::{Column, Entity as PlantationEvent};
use sea_orm::sea_query::{Alias, Expr, IntoIden, OnConflict, Query};
use sea_orm::ConnectionTrait;

impl PostgresService {
    /// Writes one plantation event. Returns false if the title was already taken.
    pub async fn insert_plantation_or_skip(&self, p: &DBPlantationCreate) -> Result<bool, SeedError> {
        let mut insert = Query::insert();
        insert
            .into_table(PlantationEvent)
            .columns([
                Column::Id.into_iden(),
                Column::Title.into_iden(),
                Column::Description.into_iden(),
                Column::Organizer.into_iden(),
                Column::Date.into_iden(),
                Column::LocationName.into_iden(),
                Alias::new("boundary").into_iden(),
                Alias::new("centroid").into_iden(),
                Column::TreesGoal.into_iden(),
                Column::TreesPlanted.into_iden(),
                Column::Status.into_iden(),
                Column::CreatedAt.into_iden(),
                Column::UpdatedAt.into_iden(),
            ])
            .values([
                server_id(),
                p.title.clone().into(),
                p.description.clone().into(),
                p.organizer.clone().into(),
                p.date.into(),
                p.location_name.clone().into(),
                geometry(p.boundary.to_ewkt()),
                geometry(p.centroid.to_ewkt()),
                p.trees_goal.into(),
                p.trees_planted.into(),
                Expr::val(p.status.as_str()).as_enum(Alias::new("plantation_status")),
                Expr::current_timestamp().into(),
                Expr::current_timestamp().into(),
            ])?
            .on_conflict(OnConflict::column(Column::Title).do_nothing().to_owned());

        let stmt = self.db.get_database_backend().build(&insert);
        Ok(self.db.execute(stmt).await?.rows_affected() > 0)
    }
}
