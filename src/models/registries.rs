#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ActivityRegistryRow {
    pub registry_id: String,
    pub activity_id: String,
    pub user_id: String,
    /// Derived aggregate: AND over the registry's presences. Never set
    /// directly; recomputed after every presence write.
    pub ready_for_certificate: i64,
}
