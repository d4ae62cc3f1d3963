#![allow(dead_code)]

use rentwise_core::{models::RentalRequest, ReservationManager, ReservationManagerBuilder};
use tempfile::TempDir;

/// Helper function to create a manager backed by a temporary SQLite file
pub async fn create_test_manager() -> (TempDir, ReservationManager) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    let manager = ReservationManagerBuilder::new()
        .with_database_path(Some(&db_path))
        .build()
        .await
        .expect("Failed to create manager");
    (temp_dir, manager)
}

/// A fully filled request: 3 days at 120 with standard insurance and GPS.
pub fn sample_request() -> RentalRequest {
    let mut request = RentalRequest {
        vehicle_id: "suv-7".to_string(),
        daily_rate: 120.0,
        pickup_date: "2024-06-01".to_string(),
        pickup_time: "10:00".to_string(),
        return_date: "2024-06-04".to_string(),
        return_time: "10:00".to_string(),
        first_name: "Ada".to_string(),
        last_name: "Lovelace".to_string(),
        email: "ada@example.com".to_string(),
        phone: "555-0100".to_string(),
        ..RentalRequest::default()
    };
    request.insurance_tier = rentwise_core::InsuranceTier::Standard;
    request.add_ons.insert(rentwise_core::AddOn::GpsUnit);
    request
}
