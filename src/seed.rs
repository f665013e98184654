use tracing::{info, warn};
use uuid::Uuid;

use crate::db::store::SeedStore;
use crate::fixture::Fixture;
use crate::types::{error::SeedError, event::DBEventCreate};
use crate::utils::password::{hash_password_async, HashCost};

/// What a run actually wrote. On a re-run against a seeded store every
/// count is zero and `users` still lists every seeded id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub users: Vec<(String, Uuid)>,
    pub ngos: u64,
    pub events: u64,
    pub plantations: u64,
    pub aqi_records: u64,
}

impl SeedReport {
    pub fn user_id(&self, email: &str) -> Option<Uuid> {
        self.users.iter().find(|(e, _)| e == email).map(|(_, id)| *id)
    }

    /// Geo rows written by this run. Users are upserted and not counted here.
    pub fn geo_rows_inserted(&self) -> u64 {
        self.ngos + self.events + self.plantations + self.aqi_records
    }
}

fn resolve_hosts(fixture: &Fixture, users: &[(String, Uuid)]) -> Result<Vec<DBEventCreate>, SeedError> {
    fixture
        .events
        .iter()
        .map(|e| {
            users
                .iter()
                .find(|(email, _)| *email == e.host_email)
                .map(|(_, id)| e.with_host(*id))
                .ok_or_else(|| SeedError::UnknownHost(e.host_email.clone()))
        })
        .collect()
}

/// Applies `fixture` to `store`. Leaves the store open.
///
/// No transaction wraps the run: rows written before a failing statement
/// stay, and a re-run fills in the rest.
pub async fn seed<S: SeedStore>(store: &S, fixture: &Fixture, cost: HashCost) -> Result<SeedReport, SeedError> {
    fixture.validate()?;
    info!(
        hosts = fixture.host_emails().len(),
        "Seeding {} fixture rows...",
        fixture.row_count()
    );
    let mut report = SeedReport::default();

    info!("Hashing placeholder password...");
    let password = hash_password_async(&fixture.password, cost).await?;

    info!("Seeding {} users...", fixture.users.len());
    for u in &fixture.users {
        let id = store.upsert_user(&u.with_password(&password)).await?;
        info!(email = %u.email, %id, "user ready");
        report.users.push((u.email.clone(), id));
    }

    info!("Seeding {} NGOs...", fixture.ngos.len());
    report.ngos = store.insert_ngos(&fixture.ngos).await?;
    info!("{} NGOs inserted.", report.ngos);

    let events = resolve_hosts(fixture, &report.users)?;
    info!("Seeding {} community events...", events.len());
    report.events = store.insert_events(&events).await?;
    info!("{} community events inserted.", report.events);

    info!("Seeding {} plantation events...", fixture.plantations.len());
    for p in &fixture.plantations {
        if store.insert_plantation_event(p).await? {
            report.plantations += 1;
            info!(title = %p.title, status = p.status.as_str(), "plantation event inserted");
        } else {
            info!(title = %p.title, "plantation event already present, skipped");
        }
    }

    info!("Seeding {} AQI records...", fixture.aqi_records.len());
    report.aqi_records = store.insert_aqi_records(&fixture.aqi_records).await?;
    info!("{} AQI records inserted.", report.aqi_records);

    match store.counts().await {
        Ok(counts) => info!(
            users = counts.users,
            ngos = counts.ngos,
            events = counts.events,
            plantations = counts.plantations,
            aqi_records = counts.aqi_records,
            "store now holds {} seeded-table rows",
            counts.total()
        ),
        Err(e) => warn!(error = %e, "could not count seeded rows"),
    }

    Ok(report)
}

/// [`seed`], then close the store on every path.
///
/// If both seeding and closing fail, the seeding error wins and the close
/// error is logged.
pub async fn run<S: SeedStore>(store: S, fixture: &Fixture, cost: HashCost) -> Result<SeedReport, SeedError> {
    let outcome = seed(&store, fixture, cost).await;
    let closed = store.close().await;

    match (outcome, closed) {
        (Ok(report), Ok(())) => {
            info!("Seeding completed successfully.");
            Ok(report)
        }
        (Ok(_), Err(e)) => Err(e),
        (Err(e), Ok(())) => Err(e),
        (Err(e), Err(close_err)) => {
            warn!(error = %close_err, "failed to release store connection");
            Err(e)
        }
    }
}
