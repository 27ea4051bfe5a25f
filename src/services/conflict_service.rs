use std::collections::HashSet;

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::{SqliteConnection, SqlitePool};

use crate::database::commitment_repo;
use crate::services::interval::{overlaps, CandidateInterval};

/// One conflicting activity, reported once no matter how many of its
/// schedules overlap the candidates. Carries enough context for callers to
/// render "clashes with X in event Y" messaging.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConflictDescriptor {
    pub activity_id: String,
    pub activity_title: String,
    pub event_name: String,
    pub schedule_id: String,
}

/// Find every existing commitment of `user_id` (teaching, responsible, or
/// enrolled) that overlaps one of the candidate intervals. Only activities
/// whose event ends after `horizon` are in scope; `exclude_activity_id`
/// suppresses self-conflicts when re-checking an activity's own slots.
///
/// An empty result is the normal no-conflict answer.
pub async fn find_conflicts(
    pool: &SqlitePool,
    user_id: &str,
    candidates: &[CandidateInterval],
    exclude_activity_id: Option<&str>,
    horizon: DateTime<Utc>,
) -> sqlx::Result<Vec<ConflictDescriptor>> {
    let mut conn = pool.acquire().await?;
    find_conflicts_on(&mut conn, user_id, candidates, exclude_activity_id, horizon).await
}

/// Transaction-sharing variant used by enrollment and activity authoring so
/// the conflict read runs on the same connection as the subsequent write.
pub async fn find_conflicts_on(
    conn: &mut SqliteConnection,
    user_id: &str,
    candidates: &[CandidateInterval],
    exclude_activity_id: Option<&str>,
    horizon: DateTime<Utc>,
) -> sqlx::Result<Vec<ConflictDescriptor>> {
    if candidates.is_empty() {
        return Ok(Vec::new());
    }

    let commitments =
        commitment_repo::list_commitments(conn, user_id, horizon, exclude_activity_id).await?;

    let mut seen: HashSet<String> = HashSet::new();
    let mut conflicts = Vec::new();
    for commitment in commitments {
        if seen.contains(&commitment.activity_id) {
            continue;
        }
        let clash = candidates.iter().any(|candidate| {
            overlaps(
                candidate.starts_at,
                candidate.duration_minutes,
                commitment.starts_at,
                commitment.duration_minutes,
            )
        });
        if clash {
            seen.insert(commitment.activity_id.clone());
            conflicts.push(ConflictDescriptor {
                activity_id: commitment.activity_id,
                activity_title: commitment.activity_title,
                event_name: commitment.event_name,
                schedule_id: commitment.schedule_id,
            });
        }
    }
    Ok(conflicts)
}
