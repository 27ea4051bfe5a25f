use sqlx::SqlitePool;

// Bootstrap DDL. The uniqueness constraints double as the commit-time
// backstop against duplicate concurrent enrollments/presences; cascades keep
// presences from outliving their registry or schedule.
const SCHEMA: &[&str] = &[
    r#"
CREATE TABLE IF NOT EXISTS users (
  user_id TEXT PRIMARY KEY,
  name TEXT NOT NULL,
  email TEXT NOT NULL UNIQUE
)
    "#,
    r#"
CREATE TABLE IF NOT EXISTS rooms (
  room_id TEXT PRIMARY KEY,
  code TEXT NOT NULL UNIQUE,
  capacity INTEGER NOT NULL
)
    "#,
    r#"
CREATE TABLE IF NOT EXISTS events (
  event_id TEXT PRIMARY KEY,
  name TEXT NOT NULL,
  area TEXT,
  category TEXT,
  starts_at TEXT NOT NULL,
  ends_at TEXT NOT NULL,
  registration_starts_at TEXT NOT NULL,
  registration_ends_at TEXT NOT NULL,
  is_visible INTEGER NOT NULL DEFAULT 0,
  is_active INTEGER NOT NULL DEFAULT 1
)
    "#,
    r#"
CREATE TABLE IF NOT EXISTS event_responsibles (
  event_id TEXT NOT NULL REFERENCES events(event_id) ON DELETE CASCADE,
  user_id TEXT NOT NULL REFERENCES users(user_id) ON DELETE CASCADE,
  UNIQUE (event_id, user_id)
)
    "#,
    r#"
CREATE TABLE IF NOT EXISTS activities (
  activity_id TEXT PRIMARY KEY,
  event_id TEXT NOT NULL REFERENCES events(event_id) ON DELETE CASCADE,
  title TEXT NOT NULL,
  description TEXT,
  vacancy INTEGER NOT NULL CHECK (vacancy > 0),
  workload_minutes INTEGER NOT NULL DEFAULT 0,
  category TEXT,
  ready_for_certificate_emission INTEGER NOT NULL DEFAULT 0
)
    "#,
    r#"
CREATE TABLE IF NOT EXISTS activity_teachers (
  activity_id TEXT NOT NULL REFERENCES activities(activity_id) ON DELETE CASCADE,
  user_id TEXT NOT NULL REFERENCES users(user_id) ON DELETE CASCADE,
  UNIQUE (activity_id, user_id)
)
    "#,
    r#"
CREATE TABLE IF NOT EXISTS activity_responsibles (
  activity_id TEXT NOT NULL REFERENCES activities(activity_id) ON DELETE CASCADE,
  user_id TEXT NOT NULL REFERENCES users(user_id) ON DELETE CASCADE,
  UNIQUE (activity_id, user_id)
)
    "#,
    r#"
CREATE TABLE IF NOT EXISTS schedules (
  schedule_id TEXT PRIMARY KEY,
  activity_id TEXT NOT NULL REFERENCES activities(activity_id) ON DELETE CASCADE,
  starts_at TEXT NOT NULL,
  duration_minutes INTEGER NOT NULL,
  room_id TEXT REFERENCES rooms(room_id),
  url TEXT
)
    "#,
    r#"
CREATE TABLE IF NOT EXISTS activity_registries (
  registry_id TEXT PRIMARY KEY,
  activity_id TEXT NOT NULL REFERENCES activities(activity_id) ON DELETE CASCADE,
  user_id TEXT NOT NULL REFERENCES users(user_id) ON DELETE CASCADE,
  ready_for_certificate INTEGER NOT NULL DEFAULT 0,
  UNIQUE (activity_id, user_id)
)
    "#,
    r#"
CREATE TABLE IF NOT EXISTS presences (
  presence_id TEXT PRIMARY KEY,
  registry_id TEXT NOT NULL REFERENCES activity_registries(registry_id) ON DELETE CASCADE,
  schedule_id TEXT NOT NULL REFERENCES schedules(schedule_id) ON DELETE CASCADE,
  is_present INTEGER NOT NULL DEFAULT 0,
  UNIQUE (registry_id, schedule_id)
)
    "#,
];

/// Create all tables if they do not exist yet. Embedders with their own
/// migration tooling can skip this; tests and fresh SQLite files use it.
pub async fn init_schema(pool: &SqlitePool) -> sqlx::Result<()> {
    for ddl in SCHEMA {
        sqlx::query(ddl).execute(pool).await?;
    }
    Ok(())
}
