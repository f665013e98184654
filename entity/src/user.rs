use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub email: String,
    pub name: String,
    pub password: String,               // argon2 PHC string
    pub level: i32,
    pub eco_score: i32,
    pub carbon_debt: f64,               // kg CO2 outstanding
    pub total_trees_planted: i32,
    pub oxygen_contribution: f64,
    pub lifetime_carbon: f64,
    pub trees_to_offset: i32,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::event::Entity")]
    HostedEvents,
}

impl Related<super::event::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::HostedEvents.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
