use sqlx::SqliteConnection;

use crate::models::ActivityRegistryRow;

const SQL_INSERT_REGISTRY: &str = r#"
INSERT INTO activity_registries (
  registry_id,
  activity_id,
  user_id,
  ready_for_certificate
) VALUES (?, ?, ?, 0)
"#;

const SQL_GET_REGISTRY: &str = r#"
SELECT registry_id, activity_id, user_id, ready_for_certificate
FROM activity_registries
WHERE registry_id = ?
LIMIT 1
"#;

const SQL_FIND_BY_ACTIVITY_AND_USER: &str = r#"
SELECT registry_id, activity_id, user_id, ready_for_certificate
FROM activity_registries
WHERE activity_id = ? AND user_id = ?
LIMIT 1
"#;

const SQL_COUNT_FOR_ACTIVITY: &str = r#"
SELECT COUNT(*) FROM activity_registries WHERE activity_id = ?
"#;

const SQL_SET_READY: &str = r#"
UPDATE activity_registries SET ready_for_certificate = ? WHERE registry_id = ?
"#;

const SQL_DELETE_REGISTRY: &str = r#"
DELETE FROM activity_registries WHERE registry_id = ?
"#;

pub struct NewRegistry<'a> {
    pub registry_id: &'a str,
    pub activity_id: &'a str,
    pub user_id: &'a str,
}

pub async fn insert_registry(
    conn: &mut SqliteConnection,
    registry: NewRegistry<'_>,
) -> sqlx::Result<u64> {
    let res = sqlx::query(SQL_INSERT_REGISTRY)
        .bind(registry.registry_id)
        .bind(registry.activity_id)
        .bind(registry.user_id)
        .execute(conn)
        .await?;
    Ok(res.rows_affected())
}

pub async fn get_registry(
    conn: &mut SqliteConnection,
    registry_id: &str,
) -> sqlx::Result<Option<ActivityRegistryRow>> {
    sqlx::query_as::<_, ActivityRegistryRow>(SQL_GET_REGISTRY)
        .bind(registry_id)
        .fetch_optional(conn)
        .await
}

pub async fn find_by_activity_and_user(
    conn: &mut SqliteConnection,
    activity_id: &str,
    user_id: &str,
) -> sqlx::Result<Option<ActivityRegistryRow>> {
    sqlx::query_as::<_, ActivityRegistryRow>(SQL_FIND_BY_ACTIVITY_AND_USER)
        .bind(activity_id)
        .bind(user_id)
        .fetch_optional(conn)
        .await
}

pub async fn count_for_activity(
    conn: &mut SqliteConnection,
    activity_id: &str,
) -> sqlx::Result<i64> {
    sqlx::query_scalar::<_, i64>(SQL_COUNT_FOR_ACTIVITY)
        .bind(activity_id)
        .fetch_one(conn)
        .await
}

pub async fn set_ready_for_certificate(
    conn: &mut SqliteConnection,
    registry_id: &str,
    ready: i64,
) -> sqlx::Result<u64> {
    let res = sqlx::query(SQL_SET_READY)
        .bind(ready)
        .bind(registry_id)
        .execute(conn)
        .await?;
    Ok(res.rows_affected())
}

pub async fn delete_registry(
    conn: &mut SqliteConnection,
    registry_id: &str,
) -> sqlx::Result<u64> {
    let res = sqlx::query(SQL_DELETE_REGISTRY)
        .bind(registry_id)
        .execute(conn)
        .await?;
    Ok(res.rows_affected())
}
