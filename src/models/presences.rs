#[derive(Debug, Clone, sqlx::FromRow)]
pub struct PresenceRow {
    pub presence_id: String,
    pub registry_id: String,
    pub schedule_id: String,
    pub is_present: i64,
}
