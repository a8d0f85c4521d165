//! Schedule store adapters.

pub mod sqlite_repo;
pub mod static_store;

pub use sqlite_repo::SqliteScheduleRepo;
pub use static_store::StaticScheduleStore;
