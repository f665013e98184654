use std::process::ExitCode;

use ecosphere_seed::config::EnvConfig;
use ecosphere_seed::db::postgres_service::PostgresService;
use ecosphere_seed::fixture::Fixture;
use ecosphere_seed::seed::{self, SeedReport};
use ecosphere_seed::types::error::SeedError;
use tracing::{error, info};

async fn app() -> Result<SeedReport, SeedError> {
    let config = EnvConfig::from_env()?;

    let fixture = match &config.fixture_path {
        Some(path) => {
            info!("Loading fixture from {}", path.display());
            Fixture::from_path(path)?
        }
        None => Fixture::builtin()?,
    };

    let store = PostgresService::connect(&config).await?;
    seed::run(store, &fixture, config.hash_cost).await
}

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match app().await {
        Ok(report) => {
            info!(
                "Seed finished: {} users, {} new NGOs, {} new events, {} new plantation events, {} new AQI records.",
                report.users.len(),
                report.ngos,
                report.events,
                report.plantations,
                report.aqi_records
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("Seeding failed ({}): {}", e.kind(), e);
            ExitCode::FAILURE
        }
    }
}
