//! Pitch bookings and the per-slot uniqueness guarantee.

use anyhow::{Context, Result};
use sqlx::SqlitePool;

use crate::db::models::{FieldSettings, ProfileReservation, Reservation};
use crate::slots;

/// Defaults when a field has no `field_settings` row.
pub const DEFAULT_PRICE: i64 = 1200;
pub const DEFAULT_OPEN_HOUR: i64 = 12;
// 24 means the 23:00 slot is the last bookable hour of the day.
pub const DEFAULT_CLOSE_HOUR: i64 = 24;

pub async fn field_settings(db: &SqlitePool, field_id: &str) -> Result<FieldSettings> {
    let row = sqlx::query_as::<_, FieldSettings>(
        "SELECT price, open_hour, close_hour FROM field_settings WHERE field_id = ?",
    )
    .bind(field_id)
    .fetch_optional(db)
    .await
    .context("fetching field settings")?;

    Ok(row.unwrap_or(FieldSettings {
        price: DEFAULT_PRICE,
        open_hour: DEFAULT_OPEN_HOUR,
        close_hour: DEFAULT_CLOSE_HOUR,
    }))
}

/// Times already booked for (field, date), truncated to `"HH:MM"`.
pub async fn taken_times(db: &SqlitePool, field_id: &str, date: &str) -> Result<Vec<String>> {
    let rows = sqlx::query_scalar::<_, String>(
        "SELECT time FROM reservations WHERE field_id = ? AND date = ?",
    )
    .bind(field_id)
    .bind(date)
    .fetch_all(db)
    .await
    .context("fetching taken times")?;

    Ok(rows.iter().map(|t| slots::short_time(t)).collect())
}

pub struct NewReservation<'a> {
    pub field_id: &'a str,
    pub field_name: &'a str,
    pub date: &'a str,
    pub time: &'a str,
    pub price: i64,
}

/// Outcome of a booking attempt. The `(field_id, date, time)` unique index
/// decides slot contention; concurrent inserts cannot both succeed.
pub enum BookOutcome {
    Booked(i64),
    SlotTaken,
}

pub async fn book(db: &SqlitePool, user_id: i64, res: &NewReservation<'_>) -> Result<BookOutcome> {
    match sqlx::query(
        r#"
        INSERT INTO reservations (user_id, field_id, field_name, date, time, price)
        VALUES (?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(user_id)
    .bind(res.field_id)
    .bind(res.field_name)
    .bind(res.date)
    .bind(res.time)
    .bind(res.price)
    .execute(db)
    .await
    {
        Ok(done) => Ok(BookOutcome::Booked(done.last_insert_rowid())),
        Err(sqlx::Error::Database(e)) if e.is_unique_violation() => Ok(BookOutcome::SlotTaken),
        Err(e) => Err(e).context("inserting reservation"),
    }
}

pub async fn list_mine(db: &SqlitePool, user_id: i64) -> Result<Vec<Reservation>> {
    sqlx::query_as::<_, Reservation>(
        r#"
        SELECT id, field_id, field_name, date, time, price, created_at
          FROM reservations
         WHERE user_id = ?
         ORDER BY date DESC, time DESC
        "#,
    )
    .bind(user_id)
    .fetch_all(db)
    .await
    .context("listing own reservations")
}

/// Owner-predicate delete; 0 rows means missing or not the caller's booking.
pub async fn cancel(db: &SqlitePool, user_id: i64, reservation_id: i64) -> Result<u64> {
    let done = sqlx::query("DELETE FROM reservations WHERE id = ? AND user_id = ?")
        .bind(reservation_id)
        .bind(user_id)
        .execute(db)
        .await
        .context("cancelling reservation")?;
    Ok(done.rows_affected())
}

//////////////////////////////////////////////////
// Personal agenda entries (profile reservations)
//////////////////////////////////////////////////

pub async fn create_profile_reservation(
    db: &SqlitePool,
    user_id: i64,
    title: &str,
    date: &str,
    time: &str,
    note: Option<&str>,
) -> Result<i64> {
    let done = sqlx::query(
        r#"
        INSERT INTO profile_reservations (user_id, title, date, time, note)
        VALUES (?, ?, ?, ?, ?)
        "#,
    )
    .bind(user_id)
    .bind(title)
    .bind(date)
    .bind(time)
    .bind(note)
    .execute(db)
    .await
    .context("inserting profile reservation")?;
    Ok(done.last_insert_rowid())
}

pub async fn list_profile_reservations(
    db: &SqlitePool,
    user_id: i64,
) -> Result<Vec<ProfileReservation>> {
    sqlx::query_as::<_, ProfileReservation>(
        r#"
        SELECT id, title, date, time, note, created_at
          FROM profile_reservations
         WHERE user_id = ?
         ORDER BY date DESC, time DESC
        "#,
    )
    .bind(user_id)
    .fetch_all(db)
    .await
    .context("listing profile reservations")
}
