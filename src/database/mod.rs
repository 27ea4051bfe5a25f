pub mod activity_repo;
pub mod commitment_repo;
pub mod event_repo;
pub mod presence_repo;
pub mod registry_repo;
pub mod room_repo;
pub mod schema;
pub mod schedule_repo;
pub mod user_repo;
