// Seeding properties checked against the in-memory store.

mod common;

use std::collections::HashSet;

use common::{builtin, ORGANIZERS, TEST_COST};
use ecosphere_seed::db::memory::MemoryStore;
use ecosphere_seed::db::store::{RowCounts, SeedStore};
use ecosphere_seed::fixture::Fixture;
use ecosphere_seed::seed::{run, seed};
use ecosphere_seed::types::error::SeedError;
use ecosphere_seed::utils::password::verify_password;
use sea_orm::DbErr;

const FULL: RowCounts = RowCounts { users: 4, ngos: 4, events: 4, plantations: 4, aqi_records: 4 };

#[tokio::test]
async fn test_single_run_writes_twenty_rows() {
    let store = MemoryStore::new();
    let report = run(store.clone(), &builtin(), TEST_COST).await.unwrap();

    assert_eq!(report.users.len(), 4);
    assert_eq!(report.ngos, 4);
    assert_eq!(report.events, 4);
    assert_eq!(report.plantations, 4);
    assert_eq!(report.aqi_records, 4);
    assert_eq!(store.counts().await.unwrap(), FULL);
    assert_eq!(FULL.total(), 20);
}

#[tokio::test]
async fn test_second_run_is_a_no_op() {
    let store = MemoryStore::new();
    let fixture = builtin();

    let first = seed(&store, &fixture, TEST_COST).await.unwrap();
    let second = seed(&store, &fixture, TEST_COST).await.unwrap();

    assert_eq!(store.counts().await.unwrap(), FULL);
    assert_eq!(second.geo_rows_inserted(), 0);
    // upsert hands back the original ids
    assert_eq!(first.users, second.users);

    println!("✅ Idempotent re-run test passed!");
}

#[tokio::test]
async fn test_rerun_preserves_modified_user() {
    let store = MemoryStore::new();
    let fixture = builtin();
    seed(&store, &fixture, TEST_COST).await.unwrap();

    let email = &fixture.users[2].email;
    let original_hash = store.user_by_email(email).unwrap().row.password;
    store.with_state(|s| {
        let u = s.users.iter_mut().find(|u| &u.row.email == email).unwrap();
        u.row.metrics.eco_score = 9999;
        u.row.name = "Renamed".to_string();
    });

    seed(&store, &fixture, TEST_COST).await.unwrap();

    let after = store.user_by_email(email).unwrap();
    assert_eq!(after.row.metrics.eco_score, 9999);
    assert_eq!(after.row.name, "Renamed");
    // fresh salt on the second run must not overwrite the stored hash
    assert_eq!(after.row.password, original_hash);
}

#[tokio::test]
async fn test_events_reference_the_two_organizers() {
    let store = MemoryStore::new();
    let report = run(store.clone(), &builtin(), TEST_COST).await.unwrap();

    let organizer_ids: HashSet<_> = ORGANIZERS
        .iter()
        .map(|e| report.user_id(e).expect("organizer seeded"))
        .collect();
    assert_eq!(organizer_ids.len(), 2);

    let hosts: HashSet<_> = store.with_state(|s| s.events.iter().map(|e| e.row.host_id).collect());
    assert_eq!(hosts, organizer_ids);
}

#[tokio::test]
async fn test_seeded_credentials_verify() {
    let store = MemoryStore::new();
    let fixture = builtin();
    run(store.clone(), &fixture, TEST_COST).await.unwrap();

    let users = store.with_state(|s| s.users.clone());
    assert_eq!(users.len(), 4);
    for u in users {
        assert!(verify_password(&fixture.password, &u.row.password).unwrap(), "{}", u.row.email);
        assert!(!verify_password("wrong-password", &u.row.password).unwrap());
    }
}

#[tokio::test]
async fn test_stored_boundaries_are_valid_rings() {
    let store = MemoryStore::new();
    run(store.clone(), &builtin(), TEST_COST).await.unwrap();

    let plantations = store.with_state(|s| s.plantations.clone());
    for p in plantations {
        let ring = p.row.boundary.ring();
        assert_eq!(ring.first(), ring.last(), "{} not closed", p.row.title);
        let mut distinct = Vec::new();
        for v in &ring[..ring.len() - 1] {
            if !distinct.contains(v) {
                distinct.push(*v);
            }
        }
        assert!(distinct.len() >= 4);
        assert!(p.row.boundary.bounding_box().contains(&p.row.centroid));
        assert!(p.row.trees_planted <= p.row.trees_goal);
    }
}

#[tokio::test]
async fn test_store_closed_after_success() {
    let store = MemoryStore::new();
    run(store.clone(), &builtin(), TEST_COST).await.unwrap();

    store.with_state(|s| {
        assert!(s.closed);
        assert_eq!(s.close_calls, 1);
    });
}

#[tokio::test]
async fn test_failure_aborts_later_steps_and_still_closes() {
    let store = MemoryStore::new();
    store.fail_on("plantation_events");

    let result = run(store.clone(), &builtin(), TEST_COST).await;
    assert!(matches!(result, Err(SeedError::Db(_))));

    store.with_state(|s| {
        // earlier statements stay applied, nothing after the failure runs
        assert_eq!(s.users.len(), 4);
        assert_eq!(s.ngos.len(), 4);
        assert_eq!(s.events.len(), 4);
        assert!(s.plantations.is_empty());
        assert!(s.aqi_records.is_empty());
        assert!(s.closed);
        assert_eq!(s.close_calls, 1);
    });
}

#[tokio::test]
async fn test_seed_error_wins_when_close_also_fails() {
    let store = MemoryStore::new();
    store.fail_on("ngos");
    store.fail_on_close();

    let result = run(store.clone(), &builtin(), TEST_COST).await;
    assert!(
        matches!(result, Err(SeedError::Db(DbErr::Custom(ref msg))) if msg.contains("ngos")),
        "{result:?}"
    );
    store.with_state(|s| {
        assert!(s.closed);
        assert_eq!(s.close_calls, 1);
    });
}

#[tokio::test]
async fn test_close_failure_after_clean_seed_is_an_error() {
    let store = MemoryStore::new();
    store.fail_on_close();

    let result = run(store.clone(), &builtin(), TEST_COST).await;
    assert!(matches!(result, Err(SeedError::Db(DbErr::Conn(_)))), "{result:?}");

    // the rows themselves were written
    store.with_state(|s| {
        assert_eq!(s.users.len(), 4);
        assert_eq!(s.aqi_records.len(), 4);
        assert_eq!(s.close_calls, 1);
    });
}

#[tokio::test]
async fn test_failed_row_count_does_not_fail_the_seed() {
    let store = MemoryStore::new();
    store.fail_on("counts");

    let report = run(store.clone(), &builtin(), TEST_COST).await.unwrap();
    assert_eq!(report.geo_rows_inserted(), 16);
    store.with_state(|s| {
        assert_eq!(s.plantations.len(), 4);
        assert!(s.closed);
    });
}

#[tokio::test]
async fn test_rerun_after_failure_fills_in_the_rest() {
    let store = MemoryStore::new();
    let fixture = builtin();
    store.fail_on("aqi_records");
    assert!(seed(&store, &fixture, TEST_COST).await.is_err());

    store.clear_failures();

    let report = seed(&store, &fixture, TEST_COST).await.unwrap();
    assert_eq!(report.ngos, 0);
    assert_eq!(report.events, 0);
    assert_eq!(report.plantations, 0);
    assert_eq!(report.aqi_records, 4);
    assert_eq!(store.counts().await.unwrap(), FULL);
}

#[tokio::test]
async fn test_unknown_host_writes_no_events() {
    let store = MemoryStore::new();
    let mut fixture = builtin();
    fixture.events[0].host_email = "ghost@ecosphere.dev".to_string();

    let result = run(store.clone(), &fixture, TEST_COST).await;
    assert!(matches!(result, Err(SeedError::UnknownHost(ref e)) if e == "ghost@ecosphere.dev"));
    store.with_state(|s| {
        assert!(s.events.is_empty());
        assert!(s.closed);
    });
}

#[tokio::test]
async fn test_alternate_fixture_is_injected() {
    let raw = r#"{
        "password": "demo-pass",
        "users": [{ "email": "demo@ecosphere.dev", "name": "Demo", "ecoScore": 5 }],
        "aqiRecords": [{
            "aqi": 42, "locationName": "Demo Park", "location": [10.0, 20.0],
            "recordedAt": "2025-01-01T00:00:00Z"
        }]
    }"#;
    let fixture = Fixture::from_json(raw).unwrap();
    let store = MemoryStore::new();

    let report = run(store.clone(), &fixture, TEST_COST).await.unwrap();

    assert_eq!(report.users.len(), 1);
    assert_eq!(report.aqi_records, 1);
    assert_eq!(report.ngos + report.events + report.plantations, 0);
    let demo = store.user_by_email("demo@ecosphere.dev").unwrap();
    assert_eq!(demo.row.metrics.eco_score, 5);
    assert!(verify_password("demo-pass", &demo.row.password).unwrap());
}
