//! SQLite pool construction and schema bootstrap.

pub mod message_repo;
pub mod models;
pub mod post_repo;
pub mod reservation_repo;
pub mod user_repo;

use anyhow::{Context, Result};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;

/// Open (creating if missing) the database and ensure the schema exists.
pub async fn connect(database_url: &str) -> Result<SqlitePool> {
    let opts = SqliteConnectOptions::from_str(database_url)
        .context("parsing DATABASE_URL")?
        .create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(opts)
        .await
        .context("opening SQLite database")?;

    init_schema(&pool).await?;
    Ok(pool)
}

/// Idempotent table/index creation, run at startup and from tests.
pub async fn init_schema(pool: &SqlitePool) -> Result<()> {
    let statements = [
        r#"
        CREATE TABLE IF NOT EXISTS users (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            email TEXT UNIQUE NOT NULL,
            password_hash TEXT NOT NULL,
            name TEXT,
            position TEXT,
            city TEXT,
            age INTEGER,
            avatar TEXT,
            created_at TEXT NOT NULL DEFAULT (datetime('now'))
        )
        "#,
        r#"
        CREATE TABLE IF NOT EXISTS player_posts (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            user_id INTEGER NOT NULL,
            position TEXT NOT NULL,
            city TEXT NOT NULL,
            note TEXT,
            created_at TEXT NOT NULL DEFAULT (datetime('now'))
        )
        "#,
        r#"
        CREATE TABLE IF NOT EXISTS match_posts (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            user_id INTEGER NOT NULL,
            city TEXT NOT NULL,
            field TEXT NOT NULL,
            match_date TEXT NOT NULL,
            match_time TEXT NOT NULL,
            note TEXT,
            created_at TEXT NOT NULL DEFAULT (datetime('now'))
        )
        "#,
        r#"
        CREATE TABLE IF NOT EXISTS reservations (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            user_id INTEGER NOT NULL,
            field_id TEXT NOT NULL,
            field_name TEXT NOT NULL,
            date TEXT NOT NULL,
            time TEXT NOT NULL,
            price INTEGER NOT NULL,
            created_at TEXT NOT NULL DEFAULT (datetime('now')),
            FOREIGN KEY(user_id) REFERENCES users(id)
        )
        "#,
        // At-most-one booking per slot is enforced here, not in application code.
        r#"
        CREATE UNIQUE INDEX IF NOT EXISTS idx_res_unique
        ON reservations(field_id, date, time)
        "#,
        r#"
        CREATE TABLE IF NOT EXISTS field_settings (
            field_id TEXT PRIMARY KEY,
            price INTEGER NOT NULL DEFAULT 1200,
            open_hour INTEGER NOT NULL DEFAULT 12,
            close_hour INTEGER NOT NULL DEFAULT 24
        )
        "#,
        r#"
        CREATE TABLE IF NOT EXISTS profile_reservations (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            user_id INTEGER NOT NULL,
            title TEXT NOT NULL,
            date TEXT NOT NULL,
            time TEXT NOT NULL,
            note TEXT,
            created_at TEXT NOT NULL DEFAULT (datetime('now')),
            FOREIGN KEY(user_id) REFERENCES users(id)
        )
        "#,
        r#"
        CREATE TABLE IF NOT EXISTS messages (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            sender_id INTEGER NOT NULL,
            receiver_id INTEGER NOT NULL,
            text TEXT NOT NULL,
            created_at TEXT NOT NULL DEFAULT (datetime('now'))
        )
        "#,
    ];

    for stmt in statements {
        sqlx::query(stmt)
            .execute(pool)
            .await
            .context("creating schema")?;
    }
    Ok(())
}
