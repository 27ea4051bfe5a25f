#![allow(dead_code)]

use chrono::{DateTime, TimeZone, Utc};
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;

use sympo::database::{event_repo, schema, user_repo};
use sympo::services::activity_service::{self, NewActivitySpec, NewScheduleSpec};

/// One-connection in-memory pool: every handle sees the same database.
pub async fn test_pool() -> SqlitePool {
    // Repeated init across tests in the same binary is fine to lose.
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("in-memory sqlite pool");
    schema::init_schema(&pool).await.expect("schema bootstrap");
    pool
}

pub fn at(day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, day, hour, minute, 0).unwrap()
}

/// A moment inside the seeded event's registration window and before it ends.
pub fn reg_open_now() -> DateTime<Utc> {
    at(1, 12, 0)
}

/// Visible event running 2026-03-02..06, registration open through 03-05.
pub async fn seed_event(pool: &SqlitePool, event_id: &str, name: &str) {
    event_repo::insert_event(
        pool,
        event_repo::NewEvent {
            event_id,
            name,
            area: Some("main"),
            category: None,
            starts_at: at(2, 8, 0),
            ends_at: at(6, 20, 0),
            registration_starts_at: Utc.with_ymd_and_hms(2026, 2, 1, 0, 0, 0).unwrap(),
            registration_ends_at: at(5, 0, 0),
            is_visible: 1,
            is_active: 1,
        },
    )
    .await
    .expect("seed event");
}

/// Event that already ended before `reg_open_now()`; commitments under it sit
/// outside the scheduling horizon.
pub async fn seed_finished_event(pool: &SqlitePool, event_id: &str, name: &str) {
    event_repo::insert_event(
        pool,
        event_repo::NewEvent {
            event_id,
            name,
            area: None,
            category: None,
            starts_at: Utc.with_ymd_and_hms(2026, 1, 10, 8, 0, 0).unwrap(),
            ends_at: Utc.with_ymd_and_hms(2026, 1, 12, 20, 0, 0).unwrap(),
            registration_starts_at: Utc.with_ymd_and_hms(2025, 12, 1, 0, 0, 0).unwrap(),
            registration_ends_at: Utc.with_ymd_and_hms(2026, 1, 11, 0, 0, 0).unwrap(),
            is_visible: 1,
            is_active: 0,
        },
    )
    .await
    .expect("seed finished event");
}

/// Event hidden from registration regardless of the window.
pub async fn seed_hidden_event(pool: &SqlitePool, event_id: &str, name: &str) {
    event_repo::insert_event(
        pool,
        event_repo::NewEvent {
            event_id,
            name,
            area: None,
            category: None,
            starts_at: at(2, 8, 0),
            ends_at: at(6, 20, 0),
            registration_starts_at: Utc.with_ymd_and_hms(2026, 2, 1, 0, 0, 0).unwrap(),
            registration_ends_at: at(5, 0, 0),
            is_visible: 0,
            is_active: 1,
        },
    )
    .await
    .expect("seed hidden event");
}

pub async fn seed_user(pool: &SqlitePool, user_id: &str, name: &str) {
    user_repo::insert_user(
        pool,
        user_repo::NewUser {
            user_id,
            name,
            email: &format!("{user_id}@example.org"),
        },
    )
    .await
    .expect("seed user");
}

/// Activity with url-based schedules (no room needed) and no staff.
pub async fn seed_activity(
    pool: &SqlitePool,
    event_id: &str,
    title: &str,
    vacancy: i64,
    slots: &[(DateTime<Utc>, i64)],
) -> String {
    seed_activity_with_staff(pool, event_id, title, vacancy, slots, &[], &[]).await
}

pub async fn seed_activity_with_staff(
    pool: &SqlitePool,
    event_id: &str,
    title: &str,
    vacancy: i64,
    slots: &[(DateTime<Utc>, i64)],
    teacher_ids: &[&str],
    responsible_ids: &[&str],
) -> String {
    let spec = NewActivitySpec {
        event_id: event_id.to_string(),
        title: title.to_string(),
        description: None,
        vacancy,
        workload_minutes: slots.iter().map(|(_, minutes)| minutes).sum(),
        category: Some("workshop".to_string()),
        teacher_ids: teacher_ids.iter().map(|s| s.to_string()).collect(),
        responsible_ids: responsible_ids.iter().map(|s| s.to_string()).collect(),
        schedules: slots
            .iter()
            .map(|(starts_at, duration_minutes)| NewScheduleSpec {
                starts_at: *starts_at,
                duration_minutes: *duration_minutes,
                room_id: None,
                url: Some(format!("https://meet.example.org/{title}")),
            })
            .collect(),
    };
    activity_service::create_activity(pool, spec, reg_open_now())
        .await
        .expect("seed activity")
}
