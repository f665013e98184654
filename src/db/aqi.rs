use crate::db::{geometry, postgres_service::PostgresService, server_id};
use crate::types::{aqi::DBAqiCreate, error::SeedError};
use entity::aqi_record::{Column, Entity as AqiRecord};
use sea_orm::sea_query::{Alias, IntoIden, OnConflict, Query};
use sea_orm::ConnectionTrait;

impl PostgresService {
    pub async fn insert_aqi_records_or_skip(&self, records: &[DBAqiCreate]) -> Result<u64, SeedError> {
        if records.is_empty() {
            return Ok(0);
        }

        let mut insert = Query::insert();
        insert.into_table(AqiRecord).columns([
            Column::Id.into_iden(),
            Column::Aqi.into_iden(),
            Column::LocationName.into_iden(),
            Alias::new("location").into_iden(),
            Column::RecordedAt.into_iden(),
        ]);
        for r in records {
            insert.values([
                server_id(),
                r.aqi.into(),
                r.location_name.clone().into(),
                geometry(r.location.to_ewkt()),
                r.recorded_at.into(),
            ])?;
        }
        insert.on_conflict(
            OnConflict::columns([Column::LocationName, Column::RecordedAt])
                .do_nothing()
                .to_owned(),
        );

        let stmt = self.db.get_database_backend().build(&insert);
        Ok(self.db.execute(stmt).await?.rows_affected())
    }
}

#[cfg(test)]
mod tests {
    use crate::db::test_support::{bound, logged_statements, mock_service};
    use crate::fixture::Fixture;
    use sea_orm::Value;

    #[tokio::test]
    async fn test_aqi_records_keyed_on_location_and_time() {
        let fixture = Fixture::builtin().unwrap();
        let records = &fixture.aqi_records;
        let service = mock_service(&[records.len() as u64]);

        assert_eq!(service.insert_aqi_records_or_skip(records).await.unwrap(), records.len() as u64);

        let stmts = logged_statements(service);
        assert_eq!(stmts.len(), 1);
        let sql = &stmts[0].sql;
        assert!(sql.starts_with(r#"INSERT INTO "aqi_records""#), "{sql}");
        assert!(sql.contains("(gen_random_uuid(), $1, $2, ST_GeomFromEWKT($3), $4)"), "{sql}");
        assert!(sql.ends_with(r#"ON CONFLICT ("location_name", "recorded_at") DO NOTHING"#), "{sql}");

        let values = bound(&stmts[0]);
        assert_eq!(values.len(), 4 * records.len());
        assert_eq!(values[0], Value::from(records[0].aqi));
        assert_eq!(values[1], Value::from(records[0].location_name.clone()));
        assert_eq!(values[2], Value::from(records[0].location.to_ewkt()));
        assert_eq!(values[3], Value::from(records[0].recorded_at));
    }

    #[tokio::test]
    async fn test_empty_aqi_batch_sends_nothing() {
        let service = mock_service(&[]);
        assert_eq!(service.insert_aqi_records_or_skip(&[]).await.unwrap(), 0);
        assert!(service.db.into_transaction_log().is_empty());
    }
}
