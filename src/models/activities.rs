#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ActivityRow {
    pub activity_id: String,
    pub event_id: String,
    pub title: String,
    pub description: Option<String>,
    pub vacancy: i64,
    pub workload_minutes: i64,
    pub category: Option<String>,
    pub ready_for_certificate_emission: i64,
}

impl ActivityRow {
    /// Archival gate: once set, presence and registry mutation under this
    /// activity is frozen for certificate emission.
    pub fn is_archived(&self) -> bool {
        self.ready_for_certificate_emission != 0
    }
}
