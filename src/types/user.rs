use serde::{Deserialize, Serialize};

/// Gamification counters carried on a user row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UserMetrics {
    pub level: i32,
    pub eco_score: i32,
    pub carbon_debt: f64,
    pub total_trees_planted: i32,
    pub oxygen_contribution: f64,
    pub lifetime_carbon: f64,
    pub trees_to_offset: i32,
}

impl Default for UserMetrics {
    fn default() -> Self {
        Self {
            level: 1,
            eco_score: 0,
            carbon_debt: 0.0,
            total_trees_planted: 0,
            oxygen_contribution: 0.0,
            lifetime_carbon: 0.0,
            trees_to_offset: 0,
        }
    }
}

/// A user as listed in a fixture. Credentials come from the fixture's shared password.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserSeed {
    pub email: String,
    pub name: String,
    #[serde(flatten)]
    pub metrics: UserMetrics,
}

#[derive(Debug, Clone)]
pub struct DBUserCreate {
    pub email: String,
    pub name: String,
    pub password: String,
    pub metrics: UserMetrics,
}

impl UserSeed {
    pub fn with_password(&self, password_hash: &str) -> DBUserCreate {
        DBUserCreate {
            email: self.email.clone(),
            name: self.name.clone(),
            password: password_hash.to_owned(),
            metrics: self.metrics.clone(),
        }
    }
}
