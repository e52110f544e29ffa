//! Owner-scoped CRUD for player and match listings.
//!
//! Writes never fetch-then-authorize: the `(id = ? AND user_id = ?)`
//! predicate makes editing someone else's post indistinguishable from
//! editing a post that does not exist.

use anyhow::{Context, Result};
use sqlx::SqlitePool;

use crate::db::models::{MatchPost, PlayerPost};

//////////////////////////////////////////////////
// Player posts
//////////////////////////////////////////////////

pub async fn create_player_post(
    db: &SqlitePool,
    user_id: i64,
    position: &str,
    city: &str,
    note: Option<&str>,
) -> Result<i64> {
    let done = sqlx::query(
        "INSERT INTO player_posts (user_id, position, city, note) VALUES (?, ?, ?, ?)",
    )
    .bind(user_id)
    .bind(position)
    .bind(city)
    .bind(note)
    .execute(db)
    .await
    .context("inserting player post")?;
    Ok(done.last_insert_rowid())
}

const PLAYER_POST_SELECT: &str = r#"
    SELECT p.id, p.user_id, p.position, p.city, p.note, p.created_at, u.name
      FROM player_posts p
      JOIN users u ON u.id = p.user_id
"#;

pub async fn list_player_posts(db: &SqlitePool) -> Result<Vec<PlayerPost>> {
    sqlx::query_as::<_, PlayerPost>(&format!("{PLAYER_POST_SELECT} ORDER BY p.id DESC"))
        .fetch_all(db)
        .await
        .context("listing player posts")
}

pub async fn list_my_player_posts(db: &SqlitePool, user_id: i64) -> Result<Vec<PlayerPost>> {
    sqlx::query_as::<_, PlayerPost>(&format!(
        "{PLAYER_POST_SELECT} WHERE p.user_id = ? ORDER BY p.id DESC"
    ))
    .bind(user_id)
    .fetch_all(db)
    .await
    .context("listing own player posts")
}

/// Partial update; `None` keeps the stored value. Returns rows affected
/// (0 means the post is missing or owned by someone else).
pub async fn update_player_post(
    db: &SqlitePool,
    user_id: i64,
    post_id: i64,
    position: Option<&str>,
    city: Option<&str>,
    note: Option<&str>,
) -> Result<u64> {
    let done = sqlx::query(
        r#"
        UPDATE player_posts
           SET position = COALESCE(?, position),
               city     = COALESCE(?, city),
               note     = COALESCE(?, note)
         WHERE id = ? AND user_id = ?
        "#,
    )
    .bind(position)
    .bind(city)
    .bind(note)
    .bind(post_id)
    .bind(user_id)
    .execute(db)
    .await
    .context("updating player post")?;
    Ok(done.rows_affected())
}

pub async fn delete_player_post(db: &SqlitePool, user_id: i64, post_id: i64) -> Result<u64> {
    let done = sqlx::query("DELETE FROM player_posts WHERE id = ? AND user_id = ?")
        .bind(post_id)
        .bind(user_id)
        .execute(db)
        .await
        .context("deleting player post")?;
    Ok(done.rows_affected())
}

//////////////////////////////////////////////////
// Match posts
//////////////////////////////////////////////////

pub async fn create_match_post(
    db: &SqlitePool,
    user_id: i64,
    city: &str,
    field: &str,
    match_date: &str,
    match_time: &str,
    note: Option<&str>,
) -> Result<i64> {
    let done = sqlx::query(
        r#"
        INSERT INTO match_posts (user_id, city, field, match_date, match_time, note)
        VALUES (?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(user_id)
    .bind(city)
    .bind(field)
    .bind(match_date)
    .bind(match_time)
    .bind(note)
    .execute(db)
    .await
    .context("inserting match post")?;
    Ok(done.last_insert_rowid())
}

const MATCH_POST_SELECT: &str = r#"
    SELECT m.id, m.user_id, m.city, m.field, m.match_date, m.match_time,
           m.note, m.created_at, u.name
      FROM match_posts m
      JOIN users u ON u.id = m.user_id
"#;

pub async fn list_match_posts(db: &SqlitePool) -> Result<Vec<MatchPost>> {
    sqlx::query_as::<_, MatchPost>(&format!("{MATCH_POST_SELECT} ORDER BY m.id DESC"))
        .fetch_all(db)
        .await
        .context("listing match posts")
}

pub async fn list_my_match_posts(db: &SqlitePool, user_id: i64) -> Result<Vec<MatchPost>> {
    sqlx::query_as::<_, MatchPost>(&format!(
        "{MATCH_POST_SELECT} WHERE m.user_id = ? ORDER BY m.id DESC"
    ))
    .bind(user_id)
    .fetch_all(db)
    .await
    .context("listing own match posts")
}

/// Optional replacement values for a match post; `None` keeps the column.
#[derive(Debug, Default)]
pub struct MatchPostUpdate {
    pub city: Option<String>,
    pub field: Option<String>,
    pub match_date: Option<String>,
    pub match_time: Option<String>,
    pub note: Option<String>,
}

pub async fn update_match_post(
    db: &SqlitePool,
    user_id: i64,
    post_id: i64,
    upd: &MatchPostUpdate,
) -> Result<u64> {
    let done = sqlx::query(
        r#"
        UPDATE match_posts
           SET city       = COALESCE(?, city),
               field      = COALESCE(?, field),
               match_date = COALESCE(?, match_date),
               match_time = COALESCE(?, match_time),
               note       = COALESCE(?, note)
         WHERE id = ? AND user_id = ?
        "#,
    )
    .bind(upd.city.as_deref())
    .bind(upd.field.as_deref())
    .bind(upd.match_date.as_deref())
    .bind(upd.match_time.as_deref())
    .bind(upd.note.as_deref())
    .bind(post_id)
    .bind(user_id)
    .execute(db)
    .await
    .context("updating match post")?;
    Ok(done.rows_affected())
}

pub async fn delete_match_post(db: &SqlitePool, user_id: i64, post_id: i64) -> Result<u64> {
    let done = sqlx::query("DELETE FROM match_posts WHERE id = ? AND user_id = ?")
        .bind(post_id)
        .bind(user_id)
        .execute(db)
        .await
        .context("deleting match post")?;
    Ok(done.rows_affected())
}
