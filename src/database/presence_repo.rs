use sqlx::SqliteConnection;

use crate::models::PresenceRow;

const SQL_INSERT_PRESENCE: &str = r#"
INSERT INTO presences (
  presence_id,
  registry_id,
  schedule_id,
  is_present
) VALUES (?, ?, ?, ?)
"#;

// The unique attendance slot for a (user, schedule) pair goes through the
// registry join; the (registry_id, schedule_id) unique index keeps it single.
const SQL_FIND_FOR_USER_SCHEDULE: &str = r#"
SELECT p.presence_id, p.registry_id, p.schedule_id, p.is_present
FROM presences p
JOIN activity_registries r ON r.registry_id = p.registry_id
WHERE r.user_id = ? AND p.schedule_id = ?
LIMIT 1
"#;

const SQL_LIST_FOR_REGISTRY: &str = r#"
SELECT presence_id, registry_id, schedule_id, is_present
FROM presences
WHERE registry_id = ?
ORDER BY presence_id ASC
"#;

const SQL_SET_IS_PRESENT: &str = r#"
UPDATE presences SET is_present = ? WHERE presence_id = ?
"#;

const SQL_COUNT_ABSENT_FOR_REGISTRY: &str = r#"
SELECT COUNT(*) FROM presences WHERE registry_id = ? AND is_present = 0
"#;

const SQL_DELETE_FOR_REGISTRY: &str = r#"
DELETE FROM presences WHERE registry_id = ?
"#;

pub struct NewPresence<'a> {
    pub presence_id: &'a str,
    pub registry_id: &'a str,
    pub schedule_id: &'a str,
    pub is_present: i64,
}

pub async fn insert_presence(
    conn: &mut SqliteConnection,
    presence: NewPresence<'_>,
) -> sqlx::Result<u64> {
    let res = sqlx::query(SQL_INSERT_PRESENCE)
        .bind(presence.presence_id)
        .bind(presence.registry_id)
        .bind(presence.schedule_id)
        .bind(presence.is_present)
        .execute(conn)
        .await?;
    Ok(res.rows_affected())
}

pub async fn find_for_user_schedule(
    conn: &mut SqliteConnection,
    user_id: &str,
    schedule_id: &str,
) -> sqlx::Result<Option<PresenceRow>> {
    sqlx::query_as::<_, PresenceRow>(SQL_FIND_FOR_USER_SCHEDULE)
        .bind(user_id)
        .bind(schedule_id)
        .fetch_optional(conn)
        .await
}

pub async fn list_for_registry(
    conn: &mut SqliteConnection,
    registry_id: &str,
) -> sqlx::Result<Vec<PresenceRow>> {
    sqlx::query_as::<_, PresenceRow>(SQL_LIST_FOR_REGISTRY)
        .bind(registry_id)
        .fetch_all(conn)
        .await
}

pub async fn set_is_present(
    conn: &mut SqliteConnection,
    presence_id: &str,
    is_present: i64,
) -> sqlx::Result<u64> {
    let res = sqlx::query(SQL_SET_IS_PRESENT)
        .bind(is_present)
        .bind(presence_id)
        .execute(conn)
        .await?;
    Ok(res.rows_affected())
}

pub async fn count_absent_for_registry(
    conn: &mut SqliteConnection,
    registry_id: &str,
) -> sqlx::Result<i64> {
    sqlx::query_scalar::<_, i64>(SQL_COUNT_ABSENT_FOR_REGISTRY)
        .bind(registry_id)
        .fetch_one(conn)
        .await
}

pub async fn delete_for_registry(
    conn: &mut SqliteConnection,
    registry_id: &str,
) -> sqlx::Result<u64> {
    let res = sqlx::query(SQL_DELETE_FOR_REGISTRY)
        .bind(registry_id)
        .execute(conn)
        .await?;
    Ok(res.rows_affected())
}
