use crate::db::{geometry, postgres_service::PostgresService, server_id};
use crate::types::{error::SeedError, ngo::DBNgoCreate};
use entity::ngo::{Column, Entity as Ngo};
use sea_orm::sea_query::{Alias, Expr, IntoIden, OnConflict, Query};
use sea_orm::ConnectionTrait;

impl PostgresService {
    pub async fn insert_ngos_or_skip(&self, ngos: &[DBNgoCreate]) -> Result<u64, SeedError> {
        if ngos.is_empty() {
            return Ok(0);
        }

        let mut insert = Query::insert();
        insert.into_table(Ngo).columns([
            Column::Id.into_iden(),
            Column::Name.into_iden(),
            Column::Description.into_iden(),
            Column::Address.into_iden(),
            Column::Website.into_iden(),
            Alias::new("location").into_iden(),
            Column::CreatedAt.into_iden(),
        ]);
        for n in ngos {
            insert.values([
                server_id(),
                n.name.clone().into(),
                n.description.clone().into(),
                n.address.clone().into(),
                n.website.clone().into(),
                geometry(n.location.to_ewkt()),
                Expr::current_timestamp().into(),
            ])?;
        }
        insert.on_conflict(OnConflict::column(Column::Name).do_nothing().to_owned());

        let stmt = self.db.get_database_backend().build(&insert);
        Ok(self.db.execute(stmt).await?.rows_affected())
    }
}
