#![allow(dead_code)]

use testcontainers::{runners::AsyncRunner, ContainerAsync, ImageExt};
use testcontainers_modules::postgres::Postgres;

use ecosphere_seed::db::postgres_service::PostgresService;
use ecosphere_seed::fixture::Fixture;
use ecosphere_seed::utils::password::HashCost;

/// Keeps the seeded-credential tests fast. Production runs use the default cost.
pub const TEST_COST: HashCost = HashCost { memory_kib: 1024, iterations: 1, parallelism: 1 };

pub const ORGANIZERS: [&str; 2] = ["aarav.sharma@ecosphere.dev", "meera.nair@ecosphere.dev"];

pub fn builtin() -> Fixture {
    Fixture::builtin().expect("built-in fixture should parse")
}

pub struct TestContext {
    pub db_url: String,
    pub _container: ContainerAsync<Postgres>,
}

impl TestContext {
    /// Starts a PostGIS container. The schema is created by the first `connect`.
    pub async fn new() -> TestContext {
        let container = Postgres::default()
            .with_name("postgis/postgis")
            .with_tag("16-3.4")
            .start()
            .await
            .expect("Failed to start postgis container");

        let host = container.get_host().await.expect("Failed to get host");
        let port = container.get_host_port_ipv4(5432).await.expect("Failed to get port");

        TestContext {
            db_url: format!("postgresql://postgres:postgres@{}:{}/postgres", host, port),
            _container: container,
        }
    }

    pub async fn connect(&self) -> PostgresService {
        PostgresService::new(&self.db_url)
            .await
            .expect("Failed to initialize PostgresService")
    }
}
