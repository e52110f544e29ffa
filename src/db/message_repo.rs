//! Direct messages: inbox grouping, threads, sends and conversation wipes.

use anyhow::{Context, Result};
use sqlx::SqlitePool;

use crate::db::models::{InboxEntry, Message};

/// Latest message per counterpart, newest conversation first. Derived by
/// grouping over the messages table; there is no conversation table.
pub async fn inbox(db: &SqlitePool, me: i64) -> Result<Vec<InboxEntry>> {
    sqlx::query_as::<_, InboxEntry>(
        r#"
        SELECT m.id,
               m.text,
               m.created_at,
               x.other_user_id,
               u.name  AS other_user_name,
               u.email AS other_user_email
          FROM messages m
          JOIN (
            SELECT CASE WHEN sender_id = ? THEN receiver_id ELSE sender_id END AS other_user_id,
                   MAX(id) AS last_id
              FROM messages
             WHERE sender_id = ? OR receiver_id = ?
             GROUP BY other_user_id
          ) x ON x.last_id = m.id
          LEFT JOIN users u ON u.id = x.other_user_id
         ORDER BY m.id DESC
        "#,
    )
    .bind(me)
    .bind(me)
    .bind(me)
    .fetch_all(db)
    .await
    .context("building inbox")
}

/// Both directions between the pair, ascending by id (send order).
pub async fn thread(db: &SqlitePool, me: i64, other: i64) -> Result<Vec<Message>> {
    sqlx::query_as::<_, Message>(
        r#"
        SELECT id, sender_id, receiver_id, text, created_at
          FROM messages
         WHERE (sender_id = ? AND receiver_id = ?)
            OR (sender_id = ? AND receiver_id = ?)
         ORDER BY id ASC
        "#,
    )
    .bind(me)
    .bind(other)
    .bind(other)
    .bind(me)
    .fetch_all(db)
    .await
    .context("fetching thread")
}

pub async fn send(db: &SqlitePool, sender: i64, receiver: i64, text: &str) -> Result<i64> {
    let done = sqlx::query("INSERT INTO messages (sender_id, receiver_id, text) VALUES (?, ?, ?)")
        .bind(sender)
        .bind(receiver)
        .bind(text)
        .execute(db)
        .await
        .context("inserting message")?;
    Ok(done.last_insert_rowid())
}

/// Hard-delete the whole conversation, both directions. Either participant
/// may do this; returns the number of messages removed.
pub async fn delete_conversation(db: &SqlitePool, me: i64, other: i64) -> Result<u64> {
    let done = sqlx::query(
        r#"
        DELETE FROM messages
         WHERE (sender_id = ? AND receiver_id = ?)
            OR (sender_id = ? AND receiver_id = ?)
        "#,
    )
    .bind(me)
    .bind(other)
    .bind(other)
    .bind(me)
    .execute(db)
    .await
    .context("deleting conversation")?;
    Ok(done.rows_affected())
}
