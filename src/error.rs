use thiserror::Error;

use crate::services::conflict_service::ConflictDescriptor;

/// Typed failures of the enrollment/attendance engine. Callers render these;
/// nothing here is retried internally.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("activity not found: {0}")]
    ActivityNotFound(String),

    #[error("event not found: {0}")]
    EventNotFound(String),

    #[error("registry not found: {0}")]
    RegistryNotFound(String),

    #[error("no presence for user {user_id} at schedule {schedule_id}")]
    PresenceNotFound { user_id: String, schedule_id: String },

    #[error("event is not open for registration")]
    EventNotVisible,

    #[error("user is already enrolled in this activity")]
    DuplicateEnrollment,

    #[error("activity has no remaining vacancies")]
    CapacityExceeded,

    #[error("schedule conflicts with {} other activities", .0.len())]
    ScheduleConflict(Vec<ConflictDescriptor>),

    #[error("activity attendance is archived for certificate emission")]
    ActivityHasPresencesArchived,

    #[error("vacancy must be at least 1, got {0}")]
    InvalidCapacityValue(i64),

    #[error("schedule needs a room or a url")]
    MissingVenue,

    #[error("activity needs at least one schedule")]
    EmptyScheduleSet,

    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

impl DomainError {
    /// Translate a commit-time unique-constraint violation on
    /// activity_registries into the same error the duplicate pre-check
    /// produces, so racing callers cannot tell the two apart.
    pub(crate) fn from_registry_insert(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::Database(db) if db.is_unique_violation() => {
                DomainError::DuplicateEnrollment
            }
            _ => DomainError::Database(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::sqlite::SqlitePoolOptions;
    use sqlx::SqlitePool;

    use crate::database::{registry_repo, schema};

    async fn seeded_pool() -> SqlitePool {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .expect("in-memory sqlite pool");
        schema::init_schema(&pool).await.expect("schema bootstrap");
        sqlx::query("INSERT INTO users (user_id, name, email) VALUES ('u1', 'Ada', 'u1@example.org')")
            .execute(&pool)
            .await
            .unwrap();
        sqlx::query(
            r#"
INSERT INTO events (
  event_id, name, starts_at, ends_at,
  registration_starts_at, registration_ends_at, is_visible, is_active
) VALUES (
  'ev1', 'Spring Conf', '2026-03-02 08:00:00+00:00', '2026-03-06 20:00:00+00:00',
  '2026-02-01 00:00:00+00:00', '2026-03-05 00:00:00+00:00', 1, 1
)
            "#,
        )
        .execute(&pool)
        .await
        .unwrap();
        sqlx::query(
            "INSERT INTO activities (activity_id, event_id, title, vacancy) \
             VALUES ('a1', 'ev1', 'talk', 10)",
        )
        .execute(&pool)
        .await
        .unwrap();
        pool
    }

    // A second registry insert for the same (activity, user) pair trips the
    // unique index; the translated error matches the duplicate pre-check.
    #[tokio::test]
    async fn unique_violation_maps_to_duplicate_enrollment() {
        let pool = seeded_pool().await;
        let mut conn = pool.acquire().await.unwrap();

        registry_repo::insert_registry(
            &mut conn,
            registry_repo::NewRegistry {
                registry_id: "r1",
                activity_id: "a1",
                user_id: "u1",
            },
        )
        .await
        .expect("first insert");

        let err = registry_repo::insert_registry(
            &mut conn,
            registry_repo::NewRegistry {
                registry_id: "r2",
                activity_id: "a1",
                user_id: "u1",
            },
        )
        .await
        .unwrap_err();

        assert!(matches!(
            DomainError::from_registry_insert(err),
            DomainError::DuplicateEnrollment
        ));
    }

    #[tokio::test]
    async fn other_database_errors_pass_through() {
        assert!(matches!(
            DomainError::from_registry_insert(sqlx::Error::RowNotFound),
            DomainError::Database(_)
        ));
    }
}
