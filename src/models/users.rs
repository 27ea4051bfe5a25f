// People have no stored role enum; teaching/responsible/enrolled are all
// derived from link tables and registries.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct UserRow {
    pub user_id: String,
    pub name: String,
    pub email: String,
}
