use sea_orm::DbErr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SeedError {
    // input things
    #[error("config error: {0}")]
    Config(String),
    #[error("fixture error: {0}")]
    Fixture(String),
    #[error("invalid geometry: {0}")]
    Geometry(String),
    #[error("event host {0} is not a seeded user")]
    UnknownHost(String),

    // infra things
    #[error(transparent)]
    Db(DbErr),
    #[error("password hashing failed: {0}")]
    Hash(String),
    #[error("background task failed: {0}")]
    Task(String),
}

impl From<DbErr> for SeedError {
    fn from(e: DbErr) -> Self {
        SeedError::Db(e)
    }
}

impl From<sea_orm::sea_query::error::Error> for SeedError {
    fn from(e: sea_orm::sea_query::error::Error) -> Self {
        SeedError::Db(DbErr::Custom(e.to_string()))
    }
}

impl From<serde_json::Error> for SeedError {
    fn from(e: serde_json::Error) -> Self {
        SeedError::Fixture(e.to_string())
    }
}

impl From<argon2::password_hash::Error> for SeedError {
    fn from(e: argon2::password_hash::Error) -> Self {
        SeedError::Hash(e.to_string())
    }
}

impl From<argon2::Error> for SeedError {
    fn from(e: argon2::Error) -> Self {
        SeedError::Hash(e.to_string())
    }
}

impl From<tokio::task::JoinError> for SeedError {
    fn from(e: tokio::task::JoinError) -> Self {
        SeedError::Task(e.to_string())
    }
}

impl SeedError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Config(_) => "CONFIG_ERROR",
            Self::Fixture(_) => "FIXTURE_ERROR",
            Self::Geometry(_) => "GEOMETRY_ERROR",
            Self::UnknownHost(_) => "UNKNOWN_HOST",
            Self::Db(_) => "DB_ERROR",
            Self::Hash(_) => "HASH_ERROR",
            Self::Task(_) => "TASK_ERROR",
        }
    }
}
