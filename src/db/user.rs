use crate::db::postgres_service::PostgresService;
use crate::types::{error::SeedError, user::DBUserCreate};
use entity::user::{ActiveModel as UserActive, Column, Entity as User, Model as UserModel};
use sea_orm::{sea_query::OnConflict, ColumnTrait, DbErr, EntityTrait, QueryFilter, Set};
use uuid::Uuid;

impl PostgresService {
    pub async fn get_user_by_email(&self, email: &str) -> Result<Option<UserModel>, SeedError> {
        Ok(User::find()
            .filter(Column::Email.eq(email))
            .one(&self.db)
            .await?)
    }

    /// `INSERT ... ON CONFLICT (email) DO NOTHING`, then read the id back.
    pub async fn upsert_user_by_email(&self, payload: &DBUserCreate) -> Result<Uuid, SeedError> {
        let m = &payload.metrics;
        let am = UserActive {
            email: Set(payload.email.clone()),
            name: Set(payload.name.clone()),
            password: Set(payload.password.clone()),
            level: Set(m.level),
            eco_score: Set(m.eco_score),
            carbon_debt: Set(m.carbon_debt),
            total_trees_planted: Set(m.total_trees_planted),
            oxygen_contribution: Set(m.oxygen_contribution),
            lifetime_carbon: Set(m.lifetime_carbon),
            trees_to_offset: Set(m.trees_to_offset),
            ..Default::default()
        };

        User::insert(am)
            .on_conflict(OnConflict::column(Column::Email).do_nothing().to_owned())
            .exec_without_returning(&self.db)
            .await?;

        let user = self
            .get_user_by_email(&payload.email)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound(format!("user {} after upsert", payload.email)))?;
        Ok(user.id)
    }
}
