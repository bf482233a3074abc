//! # MeetSync Infrastructure
//!
//! Infrastructure implementations of core domain ports.
//!
//! This crate contains:
//! - SQLite and in-memory meeting stores
//! - Calendar gateway implementations (Google, mock)
//! - Client backends (remote HTTP, local in-process)
//! - Configuration loading
//!
//! ## Architecture
//! - Implements traits defined in `meetsync-core`
//! - Contains all "impure" code (I/O, HTTP, database)

pub mod calendar;
pub mod client;
pub mod config;
pub mod errors;
pub mod storage;

// Re-export commonly used items
pub use calendar::{create_gateway, GoogleCalendarGateway, MockCalendarGateway};
pub use client::{create_backend, LocalMeetingBackend, MeetingBackend, RemoteMeetingBackend};
pub use errors::InfraError;
pub use storage::{DbManager, InMemoryMeetingStore, SqliteMeetingRepository};
