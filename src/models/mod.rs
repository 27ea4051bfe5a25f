pub mod activities;
pub mod events;
pub mod presences;
pub mod registries;
pub mod rooms;
pub mod schedules;
pub mod users;

pub use activities::ActivityRow;
pub use events::EventRow;
pub use presences::PresenceRow;
pub use registries::ActivityRegistryRow;
pub use rooms::RoomRow;
pub use schedules::ScheduleRow;
pub use users::UserRow;
