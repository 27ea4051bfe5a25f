use chrono::{DateTime, Utc};

// One concrete time slot of an activity, held in a room or behind a url.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ScheduleRow {
    pub schedule_id: String,
    pub activity_id: String,
    pub starts_at: DateTime<Utc>,
    pub duration_minutes: i64,
    pub room_id: Option<String>,
    pub url: Option<String>,
}
