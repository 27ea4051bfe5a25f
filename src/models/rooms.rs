#[derive(Debug, Clone, sqlx::FromRow)]
pub struct RoomRow {
    pub room_id: String,
    pub code: String,
    pub capacity: i64,
}
