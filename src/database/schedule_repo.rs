use chrono::{DateTime, Utc};
use sqlx::SqliteConnection;

use crate::models::ScheduleRow;

const SQL_INSERT_SCHEDULE: &str = r#"
INSERT INTO schedules (
  schedule_id,
  activity_id,
  starts_at,
  duration_minutes,
  room_id,
  url
) VALUES (?, ?, ?, ?, ?, ?)
"#;

const SQL_LIST_FOR_ACTIVITY: &str = r#"
SELECT
  schedule_id,
  activity_id,
  starts_at,
  duration_minutes,
  room_id,
  url
FROM schedules
WHERE activity_id = ?
ORDER BY starts_at ASC
"#;

pub struct NewSchedule<'a> {
    pub schedule_id: &'a str,
    pub activity_id: &'a str,
    pub starts_at: DateTime<Utc>,
    pub duration_minutes: i64,
    pub room_id: Option<&'a str>,
    pub url: Option<&'a str>,
}

pub async fn insert_schedule(
    conn: &mut SqliteConnection,
    schedule: NewSchedule<'_>,
) -> sqlx::Result<u64> {
    let res = sqlx::query(SQL_INSERT_SCHEDULE)
        .bind(schedule.schedule_id)
        .bind(schedule.activity_id)
        .bind(schedule.starts_at)
        .bind(schedule.duration_minutes)
        .bind(schedule.room_id)
        .bind(schedule.url)
        .execute(conn)
        .await?;
    Ok(res.rows_affected())
}

pub async fn list_for_activity(
    conn: &mut SqliteConnection,
    activity_id: &str,
) -> sqlx::Result<Vec<ScheduleRow>> {
    sqlx::query_as::<_, ScheduleRow>(SQL_LIST_FOR_ACTIVITY)
        .bind(activity_id)
        .fetch_all(conn)
        .await
}
