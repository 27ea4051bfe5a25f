use chrono::{DateTime, Utc};
use sqlx::SqliteConnection;

// One polymorphic commitments query: every schedule a person is tied to as
// teacher, responsible party, or enrollee, restricted to activities whose
// event has not yet ended at the horizon. The role that created the
// commitment is irrelevant to conflict detection, so it is not selected.
const SQL_LIST_COMMITMENTS: &str = r#"
SELECT
  a.activity_id,
  a.title AS activity_title,
  e.name AS event_name,
  s.schedule_id,
  s.starts_at,
  s.duration_minutes
FROM activities a
JOIN events e ON e.event_id = a.event_id
JOIN schedules s ON s.activity_id = a.activity_id
WHERE e.ends_at > ?2
  AND (?3 IS NULL OR a.activity_id != ?3)
  AND a.activity_id IN (
    SELECT activity_id FROM activity_teachers WHERE user_id = ?1
    UNION
    SELECT activity_id FROM activity_responsibles WHERE user_id = ?1
    UNION
    SELECT activity_id FROM activity_registries WHERE user_id = ?1
  )
ORDER BY a.activity_id ASC, s.starts_at ASC
"#;

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct CommitmentRow {
    pub activity_id: String,
    pub activity_title: String,
    pub event_name: String,
    pub schedule_id: String,
    pub starts_at: DateTime<Utc>,
    pub duration_minutes: i64,
}

pub async fn list_commitments(
    conn: &mut SqliteConnection,
    user_id: &str,
    horizon: DateTime<Utc>,
    exclude_activity_id: Option<&str>,
) -> sqlx::Result<Vec<CommitmentRow>> {
    sqlx::query_as::<_, CommitmentRow>(SQL_LIST_COMMITMENTS)
        .bind(user_id)
        .bind(horizon)
        .bind(exclude_activity_id)
        .fetch_all(conn)
        .await
}
