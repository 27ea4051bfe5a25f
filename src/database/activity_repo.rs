use sqlx::{SqliteConnection, SqlitePool};

use crate::models::ActivityRow;

const SQL_INSERT_ACTIVITY: &str = r#"
INSERT INTO activities (
  activity_id,
  event_id,
  title,
  description,
  vacancy,
  workload_minutes,
  category,
  ready_for_certificate_emission
) VALUES (?, ?, ?, ?, ?, ?, ?, 0)
"#;

const SQL_GET_ACTIVITY: &str = r#"
SELECT
  activity_id,
  event_id,
  title,
  description,
  vacancy,
  workload_minutes,
  category,
  ready_for_certificate_emission
FROM activities
WHERE activity_id = ?
LIMIT 1
"#;

const SQL_ADD_TEACHER: &str = r#"
INSERT INTO activity_teachers (activity_id, user_id) VALUES (?, ?)
"#;

const SQL_ADD_RESPONSIBLE: &str = r#"
INSERT INTO activity_responsibles (activity_id, user_id) VALUES (?, ?)
"#;

const SQL_ARCHIVE: &str = r#"
UPDATE activities SET ready_for_certificate_emission = 1 WHERE activity_id = ?
"#;

pub struct NewActivity<'a> {
    pub activity_id: &'a str,
    pub event_id: &'a str,
    pub title: &'a str,
    pub description: Option<&'a str>,
    pub vacancy: i64,
    pub workload_minutes: i64,
    pub category: Option<&'a str>,
}

pub async fn insert_activity(
    conn: &mut SqliteConnection,
    activity: NewActivity<'_>,
) -> sqlx::Result<u64> {
    let res = sqlx::query(SQL_INSERT_ACTIVITY)
        .bind(activity.activity_id)
        .bind(activity.event_id)
        .bind(activity.title)
        .bind(activity.description)
        .bind(activity.vacancy)
        .bind(activity.workload_minutes)
        .bind(activity.category)
        .execute(conn)
        .await?;
    Ok(res.rows_affected())
}

pub async fn get_activity(
    conn: &mut SqliteConnection,
    activity_id: &str,
) -> sqlx::Result<Option<ActivityRow>> {
    sqlx::query_as::<_, ActivityRow>(SQL_GET_ACTIVITY)
        .bind(activity_id)
        .fetch_optional(conn)
        .await
}

pub async fn add_teacher(
    conn: &mut SqliteConnection,
    activity_id: &str,
    user_id: &str,
) -> sqlx::Result<u64> {
    let res = sqlx::query(SQL_ADD_TEACHER)
        .bind(activity_id)
        .bind(user_id)
        .execute(conn)
        .await?;
    Ok(res.rows_affected())
}

pub async fn add_responsible(
    conn: &mut SqliteConnection,
    activity_id: &str,
    user_id: &str,
) -> sqlx::Result<u64> {
    let res = sqlx::query(SQL_ADD_RESPONSIBLE)
        .bind(activity_id)
        .bind(user_id)
        .execute(conn)
        .await?;
    Ok(res.rows_affected())
}

/// One-way archival flip. Returns the number of rows touched so callers can
/// tell a missing activity apart from a no-op re-archive.
pub async fn set_ready_for_certificate_emission(
    pool: &SqlitePool,
    activity_id: &str,
) -> sqlx::Result<u64> {
    let res = sqlx::query(SQL_ARCHIVE).bind(activity_id).execute(pool).await?;
    Ok(res.rows_affected())
}
