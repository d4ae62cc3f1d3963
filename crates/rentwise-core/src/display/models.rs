//! Display implementations for domain models.
//!
//! Output is markdown: a heading per record, a bullet list of attributes and
//! the price breakdown as its own section. Amounts go through [`Money`].

use std::fmt;

use super::format::{LocalDateTime, Money};
use crate::models::{
    AddOn, InsuranceTier, PaymentMethod, PriceBreakdown, Reservation, ReservationStatus,
};

impl fmt::Display for ReservationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for InsuranceTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl fmt::Display for AddOn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

fn days_label(days: u32) -> &'static str {
    if days == 1 {
        "day"
    } else {
        "days"
    }
}

impl fmt::Display for PriceBreakdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let days = self.days;
        let unit = days_label(days);

        writeln!(
            f,
            "- Vehicle: {days} {unit} x {} = {}",
            Money(self.daily_rate),
            Money(self.vehicle_subtotal)
        )?;
        writeln!(
            f,
            "- Insurance ({}): {days} {unit} x {} = {}",
            self.insurance_tier,
            Money(self.insurance_daily),
            Money(self.insurance_subtotal)
        )?;
        for charge in &self.add_ons {
            writeln!(
                f,
                "- {}: {days} {unit} x {} = {}",
                charge.add_on,
                Money(charge.daily_price),
                Money(charge.subtotal)
            )?;
        }
        writeln!(f, "- **Subtotal**: {}", Money(self.subtotal))?;
        // Percent to two decimals, without float noise such as 18.000000000000004
        let percent = (self.tax_rate * 10_000.0).round() / 100.0;
        writeln!(f, "- Tax ({percent}%): {}", Money(self.tax))?;
        writeln!(f, "- **Total**: {}", Money(self.total))
    }
}

impl fmt::Display for Reservation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let request = &self.request;

        writeln!(f, "# Reservation {} ({})", self.id, self.status.with_icon())?;
        writeln!(f)?;

        writeln!(f, "- Vehicle: {}", request.vehicle_id)?;
        writeln!(
            f,
            "- Customer: {} <{}>, {}",
            request.customer_name(),
            request.email,
            request.phone
        )?;
        writeln!(
            f,
            "- Pickup: {} {} at {}",
            request.pickup_date, request.pickup_time, request.pickup_location
        )?;
        writeln!(
            f,
            "- Return: {} {} at {}",
            request.return_date, request.return_time, request.return_location
        )?;
        writeln!(f, "- Insurance: {}", request.insurance_tier)?;
        if !request.add_ons.is_empty() {
            let labels: Vec<&str> = request.add_ons.iter().map(AddOn::label).collect();
            writeln!(f, "- Add-ons: {}", labels.join(", "))?;
        }
        writeln!(f, "- Payment: {}", request.payment_method)?;
        writeln!(f, "- Progress: {}%", self.progress)?;
        writeln!(f, "- Created: {}", LocalDateTime(&self.created_at))?;
        writeln!(f, "- Updated: {}", LocalDateTime(&self.updated_at))?;

        writeln!(f, "\n## Price")?;
        writeln!(f)?;
        write!(f, "{}", self.price)
    }
}
