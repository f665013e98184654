use std::env;
use std::path::PathBuf;
use std::time::Duration;

use crate::types::error::SeedError;
use crate::utils::password::HashCost;

#[derive(Clone, Debug)]
pub struct EnvConfig {
    pub db_url: String,
    pub run_migrations: bool,
    pub connect_timeout: Duration,
    pub fixture_path: Option<PathBuf>,
    pub hash_cost: HashCost,
}

impl EnvConfig {
    fn get_env(key: &str) -> Option<String> {
        env::var(key).ok().filter(|v| !v.trim().is_empty())
    }

    fn parse_env<T: std::str::FromStr>(key: &str, default: T) -> Result<T, SeedError> {
        match Self::get_env(key) {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|_| SeedError::Config(format!("{key} has an invalid value: {raw:?}"))),
            None => Ok(default),
        }
    }

    fn parse_bool(key: &str, default: bool) -> Result<bool, SeedError> {
        match Self::get_env(key).map(|v| v.trim().to_ascii_lowercase()) {
            None => Ok(default),
            Some(v) => match v.as_str() {
                "1" | "true" | "yes" | "on" => Ok(true),
                "0" | "false" | "no" | "off" => Ok(false),
                _ => Err(SeedError::Config(format!("{key} must be a boolean, got {v:?}"))),
            },
        }
    }

    /// Reads `.env` (if any) and the process environment.
    pub fn from_env() -> Result<Self, SeedError> {
        dotenv::dotenv().ok();

        let db_url = Self::get_env("DATABASE_URL")
            .or_else(|| Self::get_env("POSTGRES_URI"))
            .ok_or_else(|| SeedError::Config("DATABASE_URL (or POSTGRES_URI) is not set".into()))?;

        Ok(EnvConfig {
            db_url,
            run_migrations: Self::parse_bool("SEED_RUN_MIGRATIONS", true)?,
            connect_timeout: Duration::from_secs(Self::parse_env("DB_CONNECT_TIMEOUT_SECS", 5u64)?),
            fixture_path: Self::get_env("SEED_FIXTURE").map(PathBuf::from),
            hash_cost: Self::hash_cost()?,
        })
    }

    fn hash_cost() -> Result<HashCost, SeedError> {
        let defaults = HashCost::default();
        let cost = HashCost {
            memory_kib: Self::parse_env("SEED_HASH_MEMORY_KIB", defaults.memory_kib)?,
            iterations: Self::parse_env("SEED_HASH_ITERATIONS", defaults.iterations)?,
            parallelism: Self::parse_env("SEED_HASH_PARALLELISM", defaults.parallelism)?,
        };
        cost.validate()
            .map_err(|e| SeedError::Config(format!("SEED_HASH_* cost {cost:?} rejected: {e}")))?;
        Ok(cost)
    }

    pub fn new(db_url: impl Into<String>) -> Self {
        EnvConfig {
            db_url: db_url.into(),
            run_migrations: true,
            connect_timeout: Duration::from_secs(5),
            fixture_path: None,
            hash_cost: HashCost::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // env is process-global; each test uses its own keys
    #[test]
    fn bool_parsing() {
        env::set_var("SEED_TEST_BOOL_A", "off");
        env::set_var("SEED_TEST_BOOL_B", "maybe");
        assert!(!EnvConfig::parse_bool("SEED_TEST_BOOL_A", true).unwrap());
        assert!(EnvConfig::parse_bool("SEED_TEST_BOOL_MISSING", true).unwrap());
        assert!(matches!(
            EnvConfig::parse_bool("SEED_TEST_BOOL_B", true),
            Err(SeedError::Config(_))
        ));
    }

    #[test]
    fn numeric_parsing() {
        env::set_var("SEED_TEST_NUM_A", " 12 ");
        env::set_var("SEED_TEST_NUM_B", "twelve");
        assert_eq!(EnvConfig::parse_env("SEED_TEST_NUM_A", 5u64).unwrap(), 12);
        assert_eq!(EnvConfig::parse_env("SEED_TEST_NUM_MISSING", 5u64).unwrap(), 5);
        assert!(EnvConfig::parse_env("SEED_TEST_NUM_B", 5u64).is_err());
    }

    // only test touching SEED_HASH_*
    #[test]
    fn hash_cost_is_checked_up_front() {
        env::set_var("SEED_HASH_MEMORY_KIB", "1024");
        env::set_var("SEED_HASH_PARALLELISM", "1");
        env::set_var("SEED_HASH_ITERATIONS", "0");
        assert!(matches!(EnvConfig::hash_cost(), Err(SeedError::Config(_))));

        env::set_var("SEED_HASH_ITERATIONS", "1");
        assert_eq!(
            EnvConfig::hash_cost().unwrap(),
            HashCost { memory_kib: 1024, iterations: 1, parallelism: 1 }
        );

        // below argon2's 8 KiB-per-lane floor
        env::set_var("SEED_HASH_MEMORY_KIB", "4");
        assert!(matches!(EnvConfig::hash_cost(), Err(SeedError::Config(_))));

        for key in ["SEED_HASH_MEMORY_KIB", "SEED_HASH_ITERATIONS", "SEED_HASH_PARALLELISM"] {
            env::remove_var(key);
        }
    }

    #[test]
    fn blank_values_count_as_unset() {
        env::set_var("SEED_TEST_BLANK", "   ");
        assert!(EnvConfig::get_env("SEED_TEST_BLANK").is_none());
    }
}
