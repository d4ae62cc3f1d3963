#[cfg(test)]
mod model_tests {
    use std::collections::BTreeSet;

    use jiff::Timestamp;

    use crate::{
        config::PricingConfig,
        display::{CreateResult, Reservations, UpdateResult},
        models::{
            AddOn, Field, InsuranceTier, PaymentMethod, ProgressUpdate, RentalRequest,
            Reservation, ReservationFilter, ReservationStatus, StatusChange, Vehicle,
            DEFAULT_LOCATION,
        },
        params::{ListReservations, SetProgress, SetStatus},
        pricing,
    };

    fn create_test_request() -> RentalRequest {
        RentalRequest {
            vehicle_id: "van-3".to_string(),
            daily_rate: 80.0,
            pickup_date: "2024-06-01".to_string(),
            pickup_time: "09:30".to_string(),
            return_date: "2024-06-03".to_string(),
            return_time: "18:00".to_string(),
            pickup_location: "Airport".to_string(),
            insurance_tier: InsuranceTier::Elite,
            add_ons: BTreeSet::from([AddOn::ChildSeat, AddOn::GpsUnit]),
            first_name: "Grace".to_string(),
            last_name: "Hopper".to_string(),
            email: "grace@example.com".to_string(),
            phone: "555-0199".to_string(),
            payment_method: PaymentMethod::Cash,
            ..RentalRequest::default()
        }
    }

    fn create_test_reservation(status: ReservationStatus) -> Reservation {
        let request = create_test_request();
        let price = pricing::quote(&request, &PricingConfig::default()).unwrap();
        Reservation {
            id: 17,
            total_price: price.total,
            request,
            price,
            status,
            progress: 35,
            created_at: Timestamp::from_second(1_717_200_000).unwrap(),
            updated_at: Timestamp::from_second(1_717_286_400).unwrap(),
        }
    }

    #[test]
    fn test_transition_table() {
        use ReservationStatus::*;

        assert_eq!(Pending.next_statuses(), &[Confirmed, Cancelled]);
        assert_eq!(Confirmed.next_statuses(), &[InTransit, Cancelled]);
        assert_eq!(InTransit.next_statuses(), &[Completed]);
        assert!(Cancelled.next_statuses().is_empty());
        assert!(Completed.next_statuses().is_empty());

        assert!(Pending.can_transition_to(Confirmed));
        assert!(!Pending.can_transition_to(InTransit));
        assert!(!Pending.can_transition_to(Pending));
        assert!(!InTransit.can_transition_to(Cancelled));
        assert!(!Completed.can_transition_to(Pending));
    }

    #[test]
    fn test_only_cancelled_and_completed_are_terminal() {
        let terminal: Vec<ReservationStatus> = ReservationStatus::ALL
            .into_iter()
            .filter(ReservationStatus::is_terminal)
            .collect();
        assert_eq!(
            terminal,
            vec![ReservationStatus::Cancelled, ReservationStatus::Completed]
        );
    }

    #[test]
    fn test_status_parsing() {
        for status in ReservationStatus::ALL {
            assert_eq!(status.as_str().parse::<ReservationStatus>(), Ok(status));
        }
        assert_eq!(
            "Canceled".parse::<ReservationStatus>(),
            Ok(ReservationStatus::Cancelled)
        );
        assert_eq!(
            "in-transit".parse::<ReservationStatus>(),
            Ok(ReservationStatus::InTransit)
        );
        assert!("shipped".parse::<ReservationStatus>().is_err());
    }

    #[test]
    fn test_status_serializes_snake_case() {
        let json = serde_json::to_string(&ReservationStatus::InTransit).unwrap();
        assert_eq!(json, "\"in_transit\"");
    }

    #[test]
    fn test_option_parsing() {
        assert_eq!("prestige".parse::<InsuranceTier>(), Ok(InsuranceTier::Standard));
        assert_eq!("ELITE".parse::<InsuranceTier>(), Ok(InsuranceTier::Elite));
        assert!("platinum".parse::<InsuranceTier>().is_err());

        assert_eq!("gps".parse::<AddOn>(), Ok(AddOn::GpsUnit));
        assert_eq!("child-seat".parse::<AddOn>(), Ok(AddOn::ChildSeat));
        assert!("roof-box".parse::<AddOn>().is_err());

        assert_eq!("cash".parse::<PaymentMethod>(), Ok(PaymentMethod::Cash));
    }

    #[test]
    fn test_request_defaults() {
        let request = RentalRequest::default();
        assert_eq!(request.pickup_location, DEFAULT_LOCATION);
        assert_eq!(request.return_location, DEFAULT_LOCATION);
        assert_eq!(request.insurance_tier, InsuranceTier::Essential);
        assert_eq!(request.payment_method, PaymentMethod::Card);
        assert!(request.add_ons.is_empty());
    }

    #[test]
    fn test_request_deserializes_partial_json() {
        let request: RentalRequest = serde_json::from_str(
            r#"{"vehicle_id": "suv-7", "daily_rate": 120, "insurance_tier": "prestige", "add_ons": ["gps", "second_driver"]}"#,
        )
        .unwrap();
        assert_eq!(request.insurance_tier, InsuranceTier::Standard);
        assert_eq!(
            request.add_ons,
            BTreeSet::from([AddOn::GpsUnit, AddOn::SecondDriver])
        );
        assert_eq!(request.pickup_location, DEFAULT_LOCATION);
        assert!(request.pickup_date.is_empty());
    }

    #[test]
    fn test_duplicate_add_ons_collapse() {
        let request: RentalRequest =
            serde_json::from_str(r#"{"add_ons": ["gps_unit", "gps_unit"]}"#).unwrap();
        assert_eq!(request.add_ons.len(), 1);
    }

    #[test]
    fn test_blank_fields_ignores_structured_fields() {
        let mut request = create_test_request();
        request.email = "  ".to_string();
        let blank = request.blank_fields(&[
            Field::Email,
            Field::Phone,
            Field::InsuranceTier,
            Field::DailyRate,
        ]);
        assert_eq!(blank, vec![Field::Email]);
    }

    #[test]
    fn test_for_vehicle_freezes_rate() {
        let mut vehicle = Vehicle {
            id: "sedan-1".to_string(),
            name: "Sedan".to_string(),
            vehicle_type: "sedan".to_string(),
            daily_rate: 65.0,
            attributes: vec![],
        };
        let request = RentalRequest::for_vehicle(&vehicle);
        vehicle.daily_rate = 90.0;
        assert_eq!(request.vehicle_id, "sedan-1");
        assert_eq!(request.daily_rate, 65.0);
    }

    #[test]
    fn test_reservation_json_keeps_request_fields_flat() {
        let reservation = create_test_reservation(ReservationStatus::Confirmed);
        let value = serde_json::to_value(&reservation).unwrap();

        assert_eq!(value["vehicle_id"], "van-3");
        assert_eq!(value["first_name"], "Grace");
        assert_eq!(value["status"], "confirmed");
        assert_eq!(value["progress"], 35);
        assert!(value["total_price"].is_number());
        assert!(value["created_at"].is_string());

        let back: Reservation = serde_json::from_value(value).unwrap();
        assert_eq!(back, reservation);
    }

    #[test]
    fn test_filter_from_params() {
        let filter = ReservationFilter::try_from(&ListReservations {
            status: Some("cancelled".to_string()),
        })
        .unwrap();
        assert!(filter.matches(ReservationStatus::Cancelled));
        assert!(!filter.matches(ReservationStatus::Pending));

        let everything = ReservationFilter::default();
        assert!(ReservationStatus::ALL.iter().all(|s| everything.matches(*s)));

        let err = ReservationFilter::try_from(&ListReservations {
            status: Some("lost".to_string()),
        })
        .unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_status_change_from_params() {
        let change = StatusChange::try_from(SetStatus {
            id: 9,
            status: "completed".to_string(),
        })
        .unwrap();
        assert_eq!(change.id, 9);
        assert_eq!(change.status, ReservationStatus::Completed);
    }

    #[test]
    fn test_progress_bounds() {
        assert_eq!(ProgressUpdate::new(1, 0).unwrap().progress, 0);
        assert_eq!(ProgressUpdate::new(1, 100).unwrap().progress, 100);
        assert!(ProgressUpdate::new(1, -5).is_err());
        assert!(ProgressUpdate::new(1, 101).is_err());
        assert!(ProgressUpdate::try_from(SetProgress {
            id: 1,
            progress: i64::MAX
        })
        .is_err());
    }

    #[test]
    fn test_reservation_display() {
        let reservation = create_test_reservation(ReservationStatus::InTransit);
        let output = format!("{reservation}");

        assert!(output.starts_with("# Reservation 17 (➤ In Transit)"));
        assert!(output.contains("- Customer: Grace Hopper <grace@example.com>, 555-0199"));
        assert!(output.contains("- Pickup: 2024-06-01 09:30 at Airport"));
        assert!(output.contains(&format!("- Return: 2024-06-03 18:00 at {DEFAULT_LOCATION}")));
        assert!(output.contains("- Add-ons: GPS unit, Child seat"));
        assert!(output.contains("- Payment: cash"));
        assert!(output.contains("- Progress: 35%"));
        assert!(output.contains("## Price"));
    }

    #[test]
    fn test_price_breakdown_display() {
        let reservation = create_test_reservation(ReservationStatus::Pending);
        let output = format!("{}", reservation.price);

        // 2 days: 160 vehicle + 80 elite + 10 gps + 16 child seat
        assert!(output.contains("- Vehicle: 2 days x 80.00 = 160.00"));
        assert!(output.contains("- Insurance (Elite): 2 days x 40.00 = 80.00"));
        assert!(output.contains("- GPS unit: 2 days x 5.00 = 10.00"));
        assert!(output.contains("- Child seat: 2 days x 8.00 = 16.00"));
        assert!(output.contains("- **Subtotal**: 266.00"));
        assert!(output.contains("- Tax (18%): 47.88"));
        assert!(output.contains("- **Total**: 313.88"));
    }

    #[test]
    fn test_result_wrappers() {
        let reservation = create_test_reservation(ReservationStatus::Pending);

        let created = format!("{}", CreateResult::new(reservation.clone()));
        assert!(created.starts_with("Created reservation with ID: 17"));

        let updated = format!(
            "{}",
            UpdateResult::with_changes(reservation.clone(), vec!["Status set to confirmed".into()])
        );
        assert!(updated.contains("Changes made:\n- Status set to confirmed"));

        let plain = format!("{}", UpdateResult::new(reservation));
        assert!(!plain.contains("Changes made:"));
    }

    #[test]
    fn test_reservation_list_display() {
        let list = Reservations(vec![
            create_test_reservation(ReservationStatus::Pending),
            create_test_reservation(ReservationStatus::Cancelled),
        ]);
        let output = format!("{list}");
        assert_eq!(output.matches("## 17. Grace Hopper").count(), 2);
        assert!(output.contains("✗ Cancelled"));
        assert!(output.contains("- **Total**: 313.88"));

        assert_eq!(format!("{}", Reservations(vec![])), "No reservations found.\n");
    }
}
