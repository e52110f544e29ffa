//! Account and profile persistence.

use anyhow::{Context, Result};
use sqlx::SqlitePool;

use crate::db::models::{Credentials, Profile};

/// Outcome of a registration attempt; the email column is UNIQUE.
pub enum NewUser {
    Created(i64),
    EmailTaken,
}

pub async fn create_user(db: &SqlitePool, email: &str, password_hash: &str) -> Result<NewUser> {
    match sqlx::query("INSERT INTO users (email, password_hash) VALUES (?, ?)")
        .bind(email)
        .bind(password_hash)
        .execute(db)
        .await
    {
        Ok(done) => Ok(NewUser::Created(done.last_insert_rowid())),
        Err(sqlx::Error::Database(e)) if e.is_unique_violation() => Ok(NewUser::EmailTaken),
        Err(e) => Err(e).context("inserting user"),
    }
}

pub async fn find_credentials(db: &SqlitePool, email: &str) -> Result<Option<Credentials>> {
    sqlx::query_as::<_, Credentials>(
        "SELECT id, email, password_hash FROM users WHERE email = ?",
    )
    .bind(email)
    .fetch_optional(db)
    .await
    .context("fetching credentials")
}

pub async fn get_profile(db: &SqlitePool, user_id: i64) -> Result<Option<Profile>> {
    sqlx::query_as::<_, Profile>(
        "SELECT id, email, name, position, city, age, avatar, created_at
           FROM users
          WHERE id = ?",
    )
    .bind(user_id)
    .fetch_optional(db)
    .await
    .context("fetching profile")
}

/// Partial profile update: a `None` keeps the stored value.
#[derive(Debug, Default)]
pub struct ProfileUpdate {
    pub name: Option<String>,
    pub position: Option<String>,
    pub city: Option<String>,
    pub age: Option<i64>,
    pub avatar: Option<String>,
}

pub async fn update_profile(db: &SqlitePool, user_id: i64, upd: &ProfileUpdate) -> Result<u64> {
    let done = sqlx::query(
        r#"
        UPDATE users
           SET name     = COALESCE(?, name),
               position = COALESCE(?, position),
               city     = COALESCE(?, city),
               age      = COALESCE(?, age),
               avatar   = COALESCE(?, avatar)
         WHERE id = ?
        "#,
    )
    .bind(upd.name.as_deref())
    .bind(upd.position.as_deref())
    .bind(upd.city.as_deref())
    .bind(upd.age)
    .bind(upd.avatar.as_deref())
    .bind(user_id)
    .execute(db)
    .await
    .context("updating profile")?;
    Ok(done.rows_affected())
}
