use chrono::{DateTime, Utc};

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct EventRow {
    pub event_id: String,
    pub name: String,
    pub area: Option<String>,
    pub category: Option<String>,
    pub starts_at: DateTime<Utc>,
    pub ends_at: DateTime<Utc>,
    pub registration_starts_at: DateTime<Utc>,
    pub registration_ends_at: DateTime<Utc>,
    pub is_visible: i64,
    pub is_active: i64,
}

impl EventRow {
    /// Registration window test used by enrollment. Half-open on the end so
    /// the closing instant itself is already closed.
    pub fn is_open_for_registration(&self, now: DateTime<Utc>) -> bool {
        self.is_visible != 0 && self.registration_starts_at <= now && now < self.registration_ends_at
    }
}
