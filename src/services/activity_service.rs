use chrono::{DateTime, Utc};
use sqlx::SqlitePool;
use tracing::info;
use uuid::Uuid;

use crate::database::{activity_repo, event_repo, schedule_repo};
use crate::error::DomainError;
use crate::services::conflict_service;
use crate::services::interval::CandidateInterval;

pub struct NewActivitySpec {
    pub event_id: String,
    pub title: String,
    pub description: Option<String>,
    pub vacancy: i64,
    pub workload_minutes: i64,
    pub category: Option<String>,
    pub teacher_ids: Vec<String>,
    pub responsible_ids: Vec<String>,
    pub schedules: Vec<NewScheduleSpec>,
}

pub struct NewScheduleSpec {
    pub starts_at: DateTime<Utc>,
    pub duration_minutes: i64,
    pub room_id: Option<String>,
    pub url: Option<String>,
}

/// Create an activity together with its full schedule set and staff links.
///
/// Teachers and responsible people are subject to the same conflict rule as
/// enrollees: if any of them already holds an overlapping commitment, the
/// whole creation fails with the conflict list. Everything is written in one
/// transaction.
pub async fn create_activity(
    pool: &SqlitePool,
    spec: NewActivitySpec,
    now: DateTime<Utc>,
) -> Result<String, DomainError> {
    if spec.vacancy < 1 {
        return Err(DomainError::InvalidCapacityValue(spec.vacancy));
    }
    if spec.schedules.is_empty() {
        return Err(DomainError::EmptyScheduleSet);
    }
    for schedule in &spec.schedules {
        if schedule.room_id.is_none() && schedule.url.is_none() {
            return Err(DomainError::MissingVenue);
        }
    }

    let candidates: Vec<CandidateInterval> = spec
        .schedules
        .iter()
        .map(|s| CandidateInterval::new(s.starts_at, s.duration_minutes))
        .collect();

    let mut tx = pool.begin().await?;

    event_repo::get_event(&mut tx, &spec.event_id)
        .await?
        .ok_or_else(|| DomainError::EventNotFound(spec.event_id.clone()))?;

    // No exclude id: the activity does not exist yet, so every overlap is a
    // real cross-activity conflict.
    let mut staff: Vec<&str> = spec
        .teacher_ids
        .iter()
        .chain(spec.responsible_ids.iter())
        .map(String::as_str)
        .collect();
    staff.sort_unstable();
    staff.dedup();
    for user_id in staff {
        let conflicts =
            conflict_service::find_conflicts_on(&mut tx, user_id, &candidates, None, now).await?;
        if !conflicts.is_empty() {
            return Err(DomainError::ScheduleConflict(conflicts));
        }
    }

    let activity_id = Uuid::new_v4().to_string();
    activity_repo::insert_activity(
        &mut tx,
        activity_repo::NewActivity {
            activity_id: &activity_id,
            event_id: &spec.event_id,
            title: &spec.title,
            description: spec.description.as_deref(),
            vacancy: spec.vacancy,
            workload_minutes: spec.workload_minutes,
            category: spec.category.as_deref(),
        },
    )
    .await?;

    for schedule in &spec.schedules {
        let schedule_id = Uuid::new_v4().to_string();
        schedule_repo::insert_schedule(
            &mut tx,
            schedule_repo::NewSchedule {
                schedule_id: &schedule_id,
                activity_id: &activity_id,
                starts_at: schedule.starts_at,
                duration_minutes: schedule.duration_minutes,
                room_id: schedule.room_id.as_deref(),
                url: schedule.url.as_deref(),
            },
        )
        .await?;
    }
    for user_id in &spec.teacher_ids {
        activity_repo::add_teacher(&mut tx, &activity_id, user_id).await?;
    }
    for user_id in &spec.responsible_ids {
        activity_repo::add_responsible(&mut tx, &activity_id, user_id).await?;
    }

    tx.commit().await?;
    info!(activity_id, event_id = %spec.event_id, "activity created");
    Ok(activity_id)
}

/// One-way archival flip: marks the activity's attendance record final for
/// certificate emission. There is no un-archive operation.
pub async fn archive_for_certificates(
    pool: &SqlitePool,
    activity_id: &str,
) -> Result<(), DomainError> {
    let touched =
        activity_repo::set_ready_for_certificate_emission(pool, activity_id).await?;
    if touched == 0 {
        return Err(DomainError::ActivityNotFound(activity_id.to_string()));
    }
    info!(activity_id, "activity archived for certificate emission");
    Ok(())
}
