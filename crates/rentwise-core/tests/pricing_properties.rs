//! Property-based tests for the pricing engine.
//!
//! 1. **Composition**: `subtotal` is the sum of its line items and
//!    `total = subtotal + tax`
//! 2. **Minimum billing**: `days >= 1` for every valid date pair
//! 3. **Linearity**: every line item is its daily price times `days`
//! 4. **Determinism**: quoting the same request twice gives the same result
//! 5. **Monotonicity**: adding an add-on never lowers the total

use jiff::{civil::Date, ToSpan};
use proptest::prelude::*;
use rentwise_core::{
    config::PricingConfig,
    models::{AddOn, InsuranceTier, RentalRequest},
    pricing,
};

const EPSILON: f64 = 1e-6;

fn tier_strategy() -> impl Strategy<Value = InsuranceTier> {
    prop_oneof![
        Just(InsuranceTier::Essential),
        Just(InsuranceTier::Standard),
        Just(InsuranceTier::Elite),
    ]
}

fn add_on_strategy() -> impl Strategy<Value = AddOn> {
    prop_oneof![
        Just(AddOn::GpsUnit),
        Just(AddOn::ChildSeat),
        Just(AddOn::SecondDriver),
    ]
}

/// A valid request: pickup within a few years, rental of up to 60 days.
fn request_strategy() -> impl Strategy<Value = RentalRequest> {
    (
        0i64..2_000,
        0i64..60,
        0.0f64..500.0,
        tier_strategy(),
        prop::collection::btree_set(add_on_strategy(), 0..=3),
    )
        .prop_map(|(offset, length, daily_rate, tier, add_ons)| {
            let base = Date::constant(2023, 1, 1);
            let pickup = base.checked_add(offset.days()).unwrap();
            let dropoff = pickup.checked_add(length.days()).unwrap();
            RentalRequest {
                daily_rate,
                pickup_date: pickup.to_string(),
                return_date: dropoff.to_string(),
                insurance_tier: tier,
                add_ons,
                ..RentalRequest::default()
            }
        })
}

proptest! {
    #[test]
    fn prop_total_is_subtotal_plus_tax(request in request_strategy()) {
        let quote = pricing::quote(&request, &PricingConfig::default()).unwrap();
        prop_assert!((quote.total - (quote.subtotal + quote.tax)).abs() < EPSILON);
        prop_assert!((quote.tax - quote.subtotal * 0.18).abs() < EPSILON);
    }

    #[test]
    fn prop_subtotal_is_sum_of_line_items(request in request_strategy()) {
        let quote = pricing::quote(&request, &PricingConfig::default()).unwrap();
        let items: f64 = quote.add_ons.iter().map(|c| c.subtotal).sum();
        prop_assert!((quote.add_ons_subtotal - items).abs() < EPSILON);
        let parts = quote.vehicle_subtotal + quote.insurance_subtotal + quote.add_ons_subtotal;
        prop_assert!((quote.subtotal - parts).abs() < EPSILON);
        prop_assert_eq!(quote.add_ons.len(), request.add_ons.len());
    }

    #[test]
    fn prop_at_least_one_billable_day(request in request_strategy()) {
        let quote = pricing::quote(&request, &PricingConfig::default()).unwrap();
        prop_assert!(quote.days >= 1);
        if request.pickup_date == request.return_date {
            prop_assert_eq!(quote.days, 1);
        }
    }

    #[test]
    fn prop_line_items_scale_with_days(request in request_strategy()) {
        let config = PricingConfig::default();
        let quote = pricing::quote(&request, &config).unwrap();
        let days = f64::from(quote.days);
        prop_assert!((quote.vehicle_subtotal - request.daily_rate * days).abs() < EPSILON);
        prop_assert!(
            (quote.insurance_subtotal - config.insurance_daily(request.insurance_tier) * days).abs()
                < EPSILON
        );
        for charge in &quote.add_ons {
            prop_assert!((charge.subtotal - charge.daily_price * days).abs() < EPSILON);
        }
    }

    #[test]
    fn prop_quote_is_deterministic(request in request_strategy()) {
        let config = PricingConfig::default();
        prop_assert_eq!(
            pricing::quote(&request, &config).unwrap(),
            pricing::quote(&request, &config).unwrap()
        );
    }

    #[test]
    fn prop_add_on_never_lowers_total(request in request_strategy(), extra in add_on_strategy()) {
        let config = PricingConfig::default();
        let before = pricing::quote(&request, &config).unwrap();
        let mut with_extra = request.clone();
        with_extra.add_ons.insert(extra);
        let after = pricing::quote(&with_extra, &config).unwrap();
        prop_assert!(after.total >= before.total);
    }

    #[test]
    fn prop_return_before_pickup_is_rejected(offset in 1i64..365) {
        let pickup = Date::constant(2024, 6, 1);
        let request = RentalRequest {
            pickup_date: pickup.to_string(),
            return_date: pickup.checked_sub(offset.days()).unwrap().to_string(),
            ..RentalRequest::default()
        };
        let err = pricing::quote(&request, &PricingConfig::default()).unwrap_err();
        prop_assert!(err.is_validation());
    }
}
