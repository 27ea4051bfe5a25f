use sqlx::SqlitePool;

use crate::models::UserRow;

const SQL_INSERT_USER: &str = r#"
INSERT INTO users (user_id, name, email) VALUES (?, ?, ?)
"#;

const SQL_GET_USER: &str = r#"
SELECT user_id, name, email FROM users WHERE user_id = ? LIMIT 1
"#;

pub struct NewUser<'a> {
    pub user_id: &'a str,
    pub name: &'a str,
    pub email: &'a str,
}

pub async fn insert_user(pool: &SqlitePool, user: NewUser<'_>) -> sqlx::Result<u64> {
    let res = sqlx::query(SQL_INSERT_USER)
        .bind(user.user_id)
        .bind(user.name)
        .bind(user.email)
        .execute(pool)
        .await?;
    Ok(res.rows_affected())
}

pub async fn get_user(pool: &SqlitePool, user_id: &str) -> sqlx::Result<Option<UserRow>> {
    sqlx::query_as::<_, UserRow>(SQL_GET_USER)
        .bind(user_id)
        .fetch_optional(pool)
        .await
}
