//! Reservation CRUD operations and queries.

use std::collections::BTreeSet;

use jiff::Timestamp;
use rusqlite::{params, types::Type, OptionalExtension, TransactionBehavior};

use super::commit_before;
use crate::{
    error::{DatabaseResultExt, Result},
    models::{
        AddOn, InsuranceTier, PaymentMethod, PriceBreakdown, RentalRequest, Reservation,
        ReservationFilter, ReservationStatus,
    },
};

const RESERVATION_COLUMNS: &str = "id, vehicle_id, daily_rate, pickup_date, pickup_time, return_date, return_time, pickup_location, return_location, insurance_tier, add_ons, first_name, last_name, email, phone, payment_method, price_breakdown, total_price, status, progress, created_at, updated_at";

const INSERT_RESERVATION_SQL: &str = "INSERT INTO reservations (vehicle_id, daily_rate, pickup_date, pickup_time, return_date, return_time, pickup_location, return_location, insurance_tier, add_ons, first_name, last_name, email, phone, payment_method, price_breakdown, total_price, status, progress, created_at, updated_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15, ?16, ?17, ?18, ?19, ?20, ?21)";
const UPDATE_STATUS_IF_CURRENT_SQL: &str =
    "UPDATE reservations SET status = ?1, updated_at = ?2 WHERE id = ?3 AND status = ?4";
const UPDATE_PROGRESS_SQL: &str =
    "UPDATE reservations SET progress = ?1, updated_at = ?2 WHERE id = ?3";

fn select_by_id_sql() -> String {
    format!("SELECT {RESERVATION_COLUMNS} FROM reservations WHERE id = ?1")
}

fn select_all_sql() -> String {
    format!("SELECT {RESERVATION_COLUMNS} FROM reservations ORDER BY id DESC")
}

fn select_by_status_sql() -> String {
    format!(
        "SELECT {RESERVATION_COLUMNS} FROM reservations WHERE status = ?1 ORDER BY id DESC"
    )
}

fn conversion_error(index: usize, message: String) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(index, Type::Text, message.into())
}

fn parse_timestamp(row: &rusqlite::Row, index: usize) -> rusqlite::Result<Timestamp> {
    row.get::<_, String>(index)?
        .parse::<Timestamp>()
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(index, Type::Text, Box::new(e)))
}

impl super::Database {
    /// Helper function to construct a Reservation from a database row
    fn build_reservation_from_row(row: &rusqlite::Row) -> rusqlite::Result<Reservation> {
        let tier_str: String = row.get(9)?;
        let insurance_tier = tier_str
            .parse::<InsuranceTier>()
            .map_err(|e| conversion_error(9, e))?;

        // Add-ons are stored as a comma-separated list
        let add_ons_str: Option<String> = row.get(10)?;
        let add_ons = add_ons_str
            .as_deref()
            .filter(|s| !s.is_empty())
            .map(|s| {
                s.split(',')
                    .map(str::parse::<AddOn>)
                    .collect::<std::result::Result<BTreeSet<_>, _>>()
            })
            .transpose()
            .map_err(|e| conversion_error(10, e))?
            .unwrap_or_default();

        let payment_str: String = row.get(15)?;
        let payment_method = payment_str
            .parse::<PaymentMethod>()
            .map_err(|e| conversion_error(15, e))?;

        let breakdown_str: String = row.get(16)?;
        let price = serde_json::from_str::<PriceBreakdown>(&breakdown_str)
            .map_err(|e| rusqlite::Error::FromSqlConversionFailure(16, Type::Text, Box::new(e)))?;

        let status_str: String = row.get(18)?;
        let status = status_str
            .parse::<ReservationStatus>()
            .map_err(|e| conversion_error(18, e))?;

        let progress: i64 = row.get(19)?;
        let progress = u8::try_from(progress)
            .map_err(|_| conversion_error(19, format!("Invalid progress: {progress}")))?;

        Ok(Reservation {
            id: row.get::<_, i64>(0)? as u64,
            request: RentalRequest {
                vehicle_id: row.get(1)?,
                daily_rate: row.get(2)?,
                pickup_date: row.get(3)?,
                pickup_time: row.get(4)?,
                return_date: row.get(5)?,
                return_time: row.get(6)?,
                pickup_location: row.get(7)?,
                return_location: row.get(8)?,
                insurance_tier,
                add_ons,
                first_name: row.get(11)?,
                last_name: row.get(12)?,
                email: row.get(13)?,
                phone: row.get(14)?,
                payment_method,
            },
            price,
            total_price: row.get(17)?,
            status,
            progress,
            created_at: parse_timestamp(row, 20)?,
            updated_at: parse_timestamp(row, 21)?,
        })
    }

    /// Persists a submitted request in the `pending` status.
    pub fn create_reservation(
        &mut self,
        request: &RentalRequest,
        price: &PriceBreakdown,
    ) -> Result<Reservation> {
        let breakdown_json = serde_json::to_string(price)?;

        let add_ons_str = if request.add_ons.is_empty() {
            None
        } else {
            Some(
                request
                    .add_ons
                    .iter()
                    .map(AddOn::as_str)
                    .collect::<Vec<_>>()
                    .join(","),
            )
        };

        let now = Timestamp::now();
        let now_str = now.to_string();

        let tx = self
            .connection
            .transaction_with_behavior(TransactionBehavior::Immediate)
            .db_context("Failed to begin transaction")?;

        tx.execute(
            INSERT_RESERVATION_SQL,
            params![
                &request.vehicle_id,
                request.daily_rate,
                &request.pickup_date,
                &request.pickup_time,
                &request.return_date,
                &request.return_time,
                &request.pickup_location,
                &request.return_location,
                request.insurance_tier.as_str(),
                add_ons_str.as_deref(),
                &request.first_name,
                &request.last_name,
                &request.email,
                &request.phone,
                request.payment_method.as_str(),
                &breakdown_json,
                price.total,
                ReservationStatus::Pending.as_str(),
                0_i64,
                &now_str,
                &now_str
            ],
        )
        .db_context("Failed to insert reservation")?;

        let id = tx.last_insert_rowid() as u64;

        commit_before(tx, self.deadline, "insert")?;

        Ok(Reservation {
            id,
            request: request.clone(),
            price: price.clone(),
            total_price: price.total,
            status: ReservationStatus::Pending,
            progress: 0,
            created_at: now,
            updated_at: now,
        })
    }

    /// Retrieves a single reservation by its ID.
    pub fn get_reservation(&self, id: u64) -> Result<Option<Reservation>> {
        let mut stmt = self
            .connection
            .prepare(&select_by_id_sql())
            .db_context("Failed to prepare query")?;

        stmt.query_row(params![id as i64], Self::build_reservation_from_row)
            .optional()
            .db_context("Failed to get reservation")
    }

    /// Lists reservations, newest first, optionally restricted to one status.
    pub fn list_reservations(&self, filter: &ReservationFilter) -> Result<Vec<Reservation>> {
        let (sql, status) = match filter.status {
            Some(status) => (select_by_status_sql(), Some(status.as_str())),
            None => (select_all_sql(), None),
        };

        let mut stmt = self
            .connection
            .prepare(&sql)
            .db_context("Failed to prepare query")?;

        let rows = match status {
            Some(status) => stmt.query_map(params![status], Self::build_reservation_from_row),
            None => stmt.query_map([], Self::build_reservation_from_row),
        }
        .db_context("Failed to query reservations")?;

        rows.collect::<std::result::Result<Vec<_>, _>>()
            .db_context("Failed to fetch reservations")
    }

    /// Atomically moves a reservation from `expected` to `next`.
    ///
    /// Returns the updated reservation, or `None` when the reservation does
    /// not exist or its status is no longer `expected` (another writer got
    /// there first). Legality of the edge is the caller's concern.
    pub fn transition_status(
        &mut self,
        id: u64,
        expected: ReservationStatus,
        next: ReservationStatus,
    ) -> Result<Option<Reservation>> {
        let tx = self
            .connection
            .transaction_with_behavior(TransactionBehavior::Immediate)
            .db_context("Failed to begin transaction")?;

        let now_str = Timestamp::now().to_string();
        let changed = tx
            .execute(
                UPDATE_STATUS_IF_CURRENT_SQL,
                params![next.as_str(), &now_str, id as i64, expected.as_str()],
            )
            .db_context("Failed to update reservation status")?;

        if changed == 0 {
            // Nothing written; dropping the transaction rolls it back
            return Ok(None);
        }

        let reservation = tx
            .query_row(
                &select_by_id_sql(),
                params![id as i64],
                Self::build_reservation_from_row,
            )
            .db_context("Failed to read updated reservation")?;

        commit_before(tx, self.deadline, "compare_and_set_status")?;

        Ok(Some(reservation))
    }

    /// Sets the fulfillment percentage. Returns `None` for an unknown ID.
    pub fn set_progress(&mut self, id: u64, progress: u8) -> Result<Option<Reservation>> {
        let tx = self
            .connection
            .transaction_with_behavior(TransactionBehavior::Immediate)
            .db_context("Failed to begin transaction")?;

        let now_str = Timestamp::now().to_string();
        let changed = tx
            .execute(
                UPDATE_PROGRESS_SQL,
                params![i64::from(progress), &now_str, id as i64],
            )
            .db_context("Failed to update reservation progress")?;

        if changed == 0 {
            return Ok(None);
        }

        let reservation = tx
            .query_row(
                &select_by_id_sql(),
                params![id as i64],
                Self::build_reservation_from_row,
            )
            .db_context("Failed to read updated reservation")?;

        commit_before(tx, self.deadline, "set_progress")?;

        Ok(Some(reservation))
    }
}
