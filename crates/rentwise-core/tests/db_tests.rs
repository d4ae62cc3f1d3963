mod common;

use std::time::{Duration, Instant};

use rentwise_core::{
    config::PricingConfig, pricing, Database, RentalError, ReservationFilter, ReservationStatus,
};
use tempfile::NamedTempFile;

use common::sample_request;

/// Helper function to create a temporary database for testing
fn create_test_db() -> (NamedTempFile, Database) {
    let temp_file = NamedTempFile::new().expect("Failed to create temporary file");
    let db = Database::new(temp_file.path()).expect("Failed to create test database");
    (temp_file, db)
}

fn insert_sample(db: &mut Database) -> rentwise_core::Reservation {
    let request = sample_request();
    let quote = pricing::quote(&request, &PricingConfig::default()).expect("Failed to quote");
    db.create_reservation(&request, &quote)
        .expect("Failed to create reservation")
}

#[test]
fn test_create_and_get_reservation() {
    let (_temp_file, mut db) = create_test_db();

    let created = insert_sample(&mut db);
    assert!(created.id > 0);
    assert_eq!(created.status, ReservationStatus::Pending);
    assert_eq!(created.progress, 0);

    let retrieved = db
        .get_reservation(created.id)
        .expect("Failed to get reservation")
        .expect("Reservation should exist");

    // Every request field and the frozen breakdown survive the round trip
    assert_eq!(retrieved, created);
    assert!((retrieved.total_price - 531.0).abs() < 1e-9);
}

#[test]
fn test_get_missing_reservation() {
    let (_temp_file, db) = create_test_db();
    assert!(db.get_reservation(999).expect("Query failed").is_none());
}

#[test]
fn test_list_newest_first_with_filter() {
    let (_temp_file, mut db) = create_test_db();

    let first = insert_sample(&mut db);
    let second = insert_sample(&mut db);
    db.transition_status(first.id, ReservationStatus::Pending, ReservationStatus::Cancelled)
        .expect("Transition failed")
        .expect("Transition should apply");

    let all = db
        .list_reservations(&ReservationFilter::default())
        .expect("Failed to list");
    assert_eq!(
        all.iter().map(|r| r.id).collect::<Vec<_>>(),
        vec![second.id, first.id]
    );

    let cancelled = db
        .list_reservations(&ReservationFilter::with_status(ReservationStatus::Cancelled))
        .expect("Failed to list");
    assert_eq!(cancelled.len(), 1);
    assert_eq!(cancelled[0].id, first.id);
}

#[test]
fn test_transition_requires_expected_status() {
    let (_temp_file, mut db) = create_test_db();
    let created = insert_sample(&mut db);

    let confirmed = db
        .transition_status(created.id, ReservationStatus::Pending, ReservationStatus::Confirmed)
        .expect("Transition failed")
        .expect("First writer should win");
    assert_eq!(confirmed.status, ReservationStatus::Confirmed);

    // A second writer still believing the reservation is pending loses
    let stale = db
        .transition_status(created.id, ReservationStatus::Pending, ReservationStatus::Cancelled)
        .expect("Transition failed");
    assert!(stale.is_none());

    let current = db
        .get_reservation(created.id)
        .expect("Query failed")
        .expect("Reservation should exist");
    assert_eq!(current.status, ReservationStatus::Confirmed);
}

#[test]
fn test_transition_unknown_reservation() {
    let (_temp_file, mut db) = create_test_db();
    let result = db
        .transition_status(7, ReservationStatus::Pending, ReservationStatus::Confirmed)
        .expect("Transition failed");
    assert!(result.is_none());
}

#[test]
fn test_set_progress_keeps_status() {
    let (_temp_file, mut db) = create_test_db();
    let created = insert_sample(&mut db);

    let updated = db
        .set_progress(created.id, 60)
        .expect("Update failed")
        .expect("Reservation should exist");
    assert_eq!(updated.progress, 60);
    assert_eq!(updated.status, ReservationStatus::Pending);
    assert!(updated.updated_at >= created.updated_at);

    assert!(db.set_progress(999, 10).expect("Update failed").is_none());
}

#[test]
fn test_expired_deadline_refuses_to_open() {
    let temp_file = NamedTempFile::new().expect("Failed to create temporary file");
    let past = Instant::now() - Duration::from_millis(1);

    let err = Database::with_deadline(temp_file.path(), past)
        .err()
        .expect("Opening past the deadline should fail");
    assert!(matches!(err, RentalError::DependencyUnavailable { .. }));
}

#[test]
fn test_locked_write_gives_up_at_deadline() {
    let (temp_file, mut db) = create_test_db();
    let created = insert_sample(&mut db);

    let locker = rusqlite::Connection::open(temp_file.path()).expect("Failed to open");
    locker
        .execute_batch("BEGIN IMMEDIATE")
        .expect("Failed to take write lock");

    let deadline = Instant::now() + Duration::from_millis(100);
    let mut late = Database::with_deadline(temp_file.path(), deadline).expect("Failed to open");
    let started = Instant::now();
    let err = late
        .transition_status(
            created.id,
            ReservationStatus::Pending,
            ReservationStatus::Confirmed,
        )
        .expect_err("Write should not wait past its deadline");
    assert!(matches!(err, RentalError::DependencyUnavailable { .. }));
    assert!(started.elapsed() < Duration::from_secs(2));

    locker.execute_batch("COMMIT").expect("Failed to release lock");
    let stored = db
        .get_reservation(created.id)
        .expect("Failed to get reservation")
        .expect("Reservation should exist");
    assert_eq!(stored.status, ReservationStatus::Pending);
}
