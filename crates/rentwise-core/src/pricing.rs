//! Pricing engine.
//!
//! Turns a [`RentalRequest`] into an itemized [`PriceBreakdown`]. Quoting is a
//! pure function of the request and the [`PricingConfig`]: no I/O, no clock,
//! no rounding. Every screen that shows a price (quick quote, wizard steps,
//! final submission) goes through [`quote`].

use jiff::civil::Date;

use crate::{
    config::PricingConfig,
    error::{RentalError, Result},
    models::{AddOnCharge, Field, PriceBreakdown, RentalRequest},
};

/// Computes the itemized price of a request.
///
/// # Errors
///
/// `RentalError::InvalidInput` naming the offending field when a date is
/// missing or unparseable, the return date precedes the pickup date, or the
/// daily rate is negative or not a number. Missing dates are never defaulted.
///
/// # Examples
///
/// ```rust
/// use rentwise_core::{config::PricingConfig, models::{AddOn, InsuranceTier, RentalRequest}, pricing};
///
/// let mut request = RentalRequest::default();
/// request.daily_rate = 120.0;
/// request.pickup_date = "2024-06-01".into();
/// request.return_date = "2024-06-04".into();
/// request.insurance_tier = InsuranceTier::Standard;
/// request.add_ons.insert(AddOn::GpsUnit);
///
/// let quote = pricing::quote(&request, &PricingConfig::default())?;
/// assert_eq!(quote.days, 3);
/// assert_eq!(quote.subtotal, 450.0);
/// assert!((quote.total - 531.0).abs() < 1e-9);
/// # Ok::<(), rentwise_core::RentalError>(())
/// ```
pub fn quote(request: &RentalRequest, config: &PricingConfig) -> Result<PriceBreakdown> {
    if !request.daily_rate.is_finite() || request.daily_rate < 0.0 {
        return Err(RentalError::invalid_input(Field::DailyRate.as_str()).with_reason(format!(
            "Daily rate must be a non-negative amount, got {}",
            request.daily_rate
        )));
    }

    let days = billable_days(&request.pickup_date, &request.return_date)?;
    let factor = f64::from(days);

    let vehicle_subtotal = request.daily_rate * factor;

    let insurance_daily = config.insurance_daily(request.insurance_tier);
    let insurance_subtotal = insurance_daily * factor;

    let add_ons: Vec<AddOnCharge> = request
        .add_ons
        .iter()
        .map(|&add_on| {
            let daily_price = config.add_on_daily(add_on);
            AddOnCharge {
                add_on,
                daily_price,
                subtotal: daily_price * factor,
            }
        })
        .collect();
    let add_ons_subtotal = add_ons.iter().map(|charge| charge.subtotal).sum::<f64>();

    let subtotal = vehicle_subtotal + insurance_subtotal + add_ons_subtotal;
    let tax = subtotal * config.tax_rate;

    Ok(PriceBreakdown {
        days,
        daily_rate: request.daily_rate,
        vehicle_subtotal,
        insurance_tier: request.insurance_tier,
        insurance_daily,
        insurance_subtotal,
        add_ons,
        add_ons_subtotal,
        subtotal,
        tax_rate: config.tax_rate,
        tax,
        total: subtotal + tax,
    })
}

/// Number of billed days between two `YYYY-MM-DD` dates.
///
/// Partial days round up and a same-day rental bills one day.
pub fn billable_days(pickup_date: &str, return_date: &str) -> Result<u32> {
    let pickup = parse_date(Field::PickupDate, pickup_date)?;
    let dropoff = parse_date(Field::ReturnDate, return_date)?;

    let span = pickup.until(dropoff).map_err(|e| {
        RentalError::invalid_input(Field::ReturnDate.as_str())
            .with_reason(format!("Cannot measure rental period: {e}"))
    })?;

    let days = u32::try_from(span.get_days()).map_err(|_| {
        RentalError::invalid_input(Field::ReturnDate.as_str()).with_reason(format!(
            "Return date {return_date} is before pickup date {pickup_date}"
        ))
    })?;

    Ok(days.max(1))
}

fn parse_date(field: Field, raw: &str) -> Result<Date> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(RentalError::invalid_input(field.as_str()).with_reason("Date is required"));
    }
    raw.parse::<Date>().map_err(|e| {
        RentalError::invalid_input(field.as_str())
            .with_reason(format!("'{raw}' is not a valid YYYY-MM-DD date: {e}"))
    })
}
