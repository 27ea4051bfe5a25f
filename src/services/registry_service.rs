use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::SqlitePool;
use tracing::info;
use uuid::Uuid;

use crate::database::{activity_repo, event_repo, presence_repo, registry_repo, schedule_repo};
use crate::error::DomainError;
use crate::services::conflict_service;
use crate::services::interval::CandidateInterval;

/// The enrollment as callers see it right after `enroll`: the registry plus
/// one attendance slot per schedule of the activity.
#[derive(Debug, Clone, Serialize)]
pub struct EnrollmentView {
    pub registry_id: String,
    pub activity_id: String,
    pub user_id: String,
    pub ready_for_certificate: bool,
    pub presences: Vec<PresenceSlotView>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PresenceSlotView {
    pub presence_id: String,
    pub schedule_id: String,
    pub is_present: bool,
}

/// Enroll a person into an activity.
///
/// Pre-checks run in order, first failure wins: activity exists and is not
/// archived, event open for registration at `now`, no duplicate registry,
/// free vacancy, no
/// schedule conflict with the person's other commitments. On success the
/// registry and one presence per schedule are inserted in one transaction,
/// so a registry with a missing presence is never observable.
pub async fn enroll(
    pool: &SqlitePool,
    activity_id: &str,
    user_id: &str,
    now: DateTime<Utc>,
) -> Result<EnrollmentView, DomainError> {
    let mut tx = pool.begin().await?;

    let activity = activity_repo::get_activity(&mut tx, activity_id)
        .await?
        .ok_or_else(|| DomainError::ActivityNotFound(activity_id.to_string()))?;
    if activity.is_archived() {
        return Err(DomainError::ActivityHasPresencesArchived);
    }

    let event = event_repo::get_event(&mut tx, &activity.event_id)
        .await?
        .ok_or_else(|| DomainError::EventNotFound(activity.event_id.clone()))?;
    if !event.is_open_for_registration(now) {
        return Err(DomainError::EventNotVisible);
    }

    if registry_repo::find_by_activity_and_user(&mut tx, activity_id, user_id)
        .await?
        .is_some()
    {
        return Err(DomainError::DuplicateEnrollment);
    }

    let enrolled = registry_repo::count_for_activity(&mut tx, activity_id).await?;
    if enrolled >= activity.vacancy {
        return Err(DomainError::CapacityExceeded);
    }

    let schedules = schedule_repo::list_for_activity(&mut tx, activity_id).await?;
    let candidates: Vec<CandidateInterval> = schedules
        .iter()
        .map(|s| CandidateInterval::new(s.starts_at, s.duration_minutes))
        .collect();
    let conflicts = conflict_service::find_conflicts_on(
        &mut tx,
        user_id,
        &candidates,
        Some(activity_id),
        now,
    )
    .await?;
    if !conflicts.is_empty() {
        return Err(DomainError::ScheduleConflict(conflicts));
    }

    let registry_id = Uuid::new_v4().to_string();
    registry_repo::insert_registry(
        &mut tx,
        registry_repo::NewRegistry {
            registry_id: &registry_id,
            activity_id,
            user_id,
        },
    )
    .await
    // A racing enrollment can slip past the pre-check and hit the unique
    // (activity_id, user_id) index instead; both paths report the same error.
    .map_err(DomainError::from_registry_insert)?;

    let mut slots = Vec::with_capacity(schedules.len());
    for schedule in &schedules {
        let presence_id = Uuid::new_v4().to_string();
        presence_repo::insert_presence(
            &mut tx,
            presence_repo::NewPresence {
                presence_id: &presence_id,
                registry_id: &registry_id,
                schedule_id: &schedule.schedule_id,
                is_present: 0,
            },
        )
        .await?;
        slots.push(PresenceSlotView {
            presence_id,
            schedule_id: schedule.schedule_id.clone(),
            is_present: false,
        });
    }

    tx.commit().await?;
    info!(activity_id, user_id, slots = slots.len(), "enrolled");

    Ok(EnrollmentView {
        registry_id,
        activity_id: activity_id.to_string(),
        user_id: user_id.to_string(),
        ready_for_certificate: false,
        presences: slots,
    })
}

/// Drop an enrollment and its attendance slots. Refused once the owning
/// activity has been archived for certificate emission.
pub async fn unenroll(pool: &SqlitePool, registry_id: &str) -> Result<(), DomainError> {
    let mut tx = pool.begin().await?;

    let registry = registry_repo::get_registry(&mut tx, registry_id)
        .await?
        .ok_or_else(|| DomainError::RegistryNotFound(registry_id.to_string()))?;

    let activity = activity_repo::get_activity(&mut tx, &registry.activity_id)
        .await?
        .ok_or_else(|| DomainError::ActivityNotFound(registry.activity_id.clone()))?;
    if activity.is_archived() {
        return Err(DomainError::ActivityHasPresencesArchived);
    }

    // Cascade is also declared in the schema; deleting explicitly keeps the
    // behavior independent of embedders' pragma configuration.
    presence_repo::delete_for_registry(&mut tx, registry_id).await?;
    registry_repo::delete_registry(&mut tx, registry_id).await?;

    tx.commit().await?;
    info!(registry_id, activity_id = %registry.activity_id, "unenrolled");
    Ok(())
}
