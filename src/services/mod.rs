pub mod activity_service;
pub mod conflict_service;
pub mod interval;
pub mod presence_service;
pub mod registry_service;
