use sqlx::SqlitePool;

use crate::models::RoomRow;

const SQL_INSERT_ROOM: &str = r#"
INSERT INTO rooms (room_id, code, capacity) VALUES (?, ?, ?)
"#;

const SQL_GET_ROOM_BY_CODE: &str = r#"
SELECT room_id, code, capacity FROM rooms WHERE code = ? LIMIT 1
"#;

pub struct NewRoom<'a> {
    pub room_id: &'a str,
    pub code: &'a str,
    pub capacity: i64,
}

pub async fn insert_room(pool: &SqlitePool, room: NewRoom<'_>) -> sqlx::Result<u64> {
    let res = sqlx::query(SQL_INSERT_ROOM)
        .bind(room.room_id)
        .bind(room.code)
        .bind(room.capacity)
        .execute(pool)
        .await?;
    Ok(res.rows_affected())
}

pub async fn get_room_by_code(pool: &SqlitePool, code: &str) -> sqlx::Result<Option<RoomRow>> {
    sqlx::query_as::<_, RoomRow>(SQL_GET_ROOM_BY_CODE)
        .bind(code)
        .fetch_optional(pool)
        .await
}
