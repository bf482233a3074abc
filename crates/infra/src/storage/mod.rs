//! Meeting persistence

pub mod manager;
pub mod meeting_repository;
pub mod memory;

pub use manager::{DbManager, SqlitePool};
pub use meeting_repository::SqliteMeetingRepository;
pub use memory::InMemoryMeetingStore;
