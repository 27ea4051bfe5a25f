use chrono::{DateTime, Utc};
use sqlx::{SqliteConnection, SqlitePool};

use crate::models::EventRow;

const SQL_INSERT_EVENT: &str = r#"
INSERT INTO events (
  event_id,
  name,
  area,
  category,
  starts_at,
  ends_at,
  registration_starts_at,
  registration_ends_at,
  is_visible,
  is_active
) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
"#;

const SQL_GET_EVENT: &str = r#"
SELECT
  event_id,
  name,
  area,
  category,
  starts_at,
  ends_at,
  registration_starts_at,
  registration_ends_at,
  is_visible,
  is_active
FROM events
WHERE event_id = ?
LIMIT 1
"#;

const SQL_ADD_EVENT_RESPONSIBLE: &str = r#"
INSERT INTO event_responsibles (event_id, user_id) VALUES (?, ?)
"#;

pub struct NewEvent<'a> {
    pub event_id: &'a str,
    pub name: &'a str,
    pub area: Option<&'a str>,
    pub category: Option<&'a str>,
    pub starts_at: DateTime<Utc>,
    pub ends_at: DateTime<Utc>,
    pub registration_starts_at: DateTime<Utc>,
    pub registration_ends_at: DateTime<Utc>,
    pub is_visible: i64,
    pub is_active: i64,
}

pub async fn insert_event(pool: &SqlitePool, event: NewEvent<'_>) -> sqlx::Result<u64> {
    let res = sqlx::query(SQL_INSERT_EVENT)
        .bind(event.event_id)
        .bind(event.name)
        .bind(event.area)
        .bind(event.category)
        .bind(event.starts_at)
        .bind(event.ends_at)
        .bind(event.registration_starts_at)
        .bind(event.registration_ends_at)
        .bind(event.is_visible)
        .bind(event.is_active)
        .execute(pool)
        .await?;
    Ok(res.rows_affected())
}

pub async fn get_event(
    conn: &mut SqliteConnection,
    event_id: &str,
) -> sqlx::Result<Option<EventRow>> {
    sqlx::query_as::<_, EventRow>(SQL_GET_EVENT)
        .bind(event_id)
        .fetch_optional(conn)
        .await
}

pub async fn add_event_responsible(
    pool: &SqlitePool,
    event_id: &str,
    user_id: &str,
) -> sqlx::Result<u64> {
    let res = sqlx::query(SQL_ADD_EVENT_RESPONSIBLE)
        .bind(event_id)
        .bind(user_id)
        .execute(pool)
        .await?;
    Ok(res.rows_affected())
}
