use serde::Serialize;
use sqlx::FromRow;

/// Profile row as returned to the client (never carries the hash).
#[derive(Debug, FromRow, Serialize)]
pub struct Profile {
    pub id: i64,
    pub email: String,
    pub name: Option<String>,
    pub position: Option<String>,
    pub city: Option<String>,
    pub age: Option<i64>,
    pub avatar: Option<String>,
    pub created_at: String,
}

/// Credential row used only by the login path.
#[derive(Debug, FromRow)]
pub struct Credentials {
    pub id: i64,
    pub email: String,
    pub password_hash: String,
}

/// "Looking for a player" listing, joined with the owner's display name.
#[derive(Debug, FromRow, Serialize)]
pub struct PlayerPost {
    pub id: i64,
    pub user_id: i64,
    pub position: String,
    pub city: String,
    pub note: Option<String>,
    pub created_at: String,
    pub name: Option<String>,
}

/// "Looking for a match" listing, joined with the owner's display name.
#[derive(Debug, FromRow, Serialize)]
pub struct MatchPost {
    pub id: i64,
    pub user_id: i64,
    pub city: String,
    pub field: String,
    pub match_date: String,
    pub match_time: String,
    pub note: Option<String>,
    pub created_at: String,
    pub name: Option<String>,
}

#[derive(Debug, FromRow, Serialize)]
pub struct Reservation {
    pub id: i64,
    pub field_id: String,
    pub field_name: String,
    pub date: String,
    pub time: String,
    pub price: i64,
    pub created_at: String,
}

/// Per-field operating hours and pricing; defaults apply when no row exists.
#[derive(Debug, FromRow)]
pub struct FieldSettings {
    pub price: i64,
    pub open_hour: i64,
    pub close_hour: i64,
}

#[derive(Debug, FromRow, Serialize)]
pub struct ProfileReservation {
    pub id: i64,
    pub title: String,
    pub date: String,
    pub time: String,
    pub note: Option<String>,
    pub created_at: String,
}

#[derive(Debug, FromRow, Serialize)]
pub struct Message {
    pub id: i64,
    pub sender_id: i64,
    pub receiver_id: i64,
    pub text: String,
    pub created_at: String,
}

/// Inbox line: the newest message exchanged with one counterpart.
#[derive(Debug, FromRow, Serialize)]
pub struct InboxEntry {
    pub id: i64,
    pub text: String,
    pub created_at: String,
    pub other_user_id: i64,
    pub other_user_name: Option<String>,
    pub other_user_email: Option<String>,
}
