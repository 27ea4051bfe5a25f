use serde::Serialize;
use sqlx::SqlitePool;
use tracing::info;

use crate::database::{activity_repo, presence_repo, registry_repo};
use crate::error::DomainError;

#[derive(Debug, Clone, Serialize)]
pub struct PresenceView {
    pub presence_id: String,
    pub registry_id: String,
    pub schedule_id: String,
    pub is_present: bool,
    /// Registry aggregate after this write: AND over all sibling presences.
    pub ready_for_certificate: bool,
}

/// Set the attendance bit for the unique (user, schedule) presence and
/// recompute the owning registry's certificate-readiness aggregate in the
/// same transaction.
///
/// The aggregate is always the AND of the current presences; it is never
/// cached across requests. Archived activities reject the write before any
/// field is touched. Setting an already-set bit is a no-op with the same
/// resulting state, so the call is idempotent.
pub async fn set_presence(
    pool: &SqlitePool,
    user_id: &str,
    schedule_id: &str,
    is_present: bool,
) -> Result<PresenceView, DomainError> {
    let mut tx = pool.begin().await?;

    let presence = presence_repo::find_for_user_schedule(&mut tx, user_id, schedule_id)
        .await?
        .ok_or_else(|| DomainError::PresenceNotFound {
            user_id: user_id.to_string(),
            schedule_id: schedule_id.to_string(),
        })?;

    let registry = registry_repo::get_registry(&mut tx, &presence.registry_id)
        .await?
        .ok_or_else(|| DomainError::RegistryNotFound(presence.registry_id.clone()))?;

    let activity = activity_repo::get_activity(&mut tx, &registry.activity_id)
        .await?
        .ok_or_else(|| DomainError::ActivityNotFound(registry.activity_id.clone()))?;
    if activity.is_archived() {
        return Err(DomainError::ActivityHasPresencesArchived);
    }

    presence_repo::set_is_present(&mut tx, &presence.presence_id, i64::from(is_present)).await?;

    let absent = presence_repo::count_absent_for_registry(&mut tx, &presence.registry_id).await?;
    let ready = i64::from(absent == 0);
    if ready != registry.ready_for_certificate {
        registry_repo::set_ready_for_certificate(&mut tx, &registry.registry_id, ready).await?;
    }

    tx.commit().await?;
    info!(
        user_id,
        schedule_id,
        is_present,
        ready = ready != 0,
        "presence updated"
    );

    Ok(PresenceView {
        presence_id: presence.presence_id,
        registry_id: presence.registry_id,
        schedule_id: presence.schedule_id,
        is_present,
        ready_for_certificate: ready != 0,
    })
}
