//! # MeetSync Core
//!
//! Pure business logic layer - no infrastructure dependencies.
//!
//! This crate contains:
//! - Port/adapter interfaces (traits)
//! - The meeting scheduling service
//!
//! ## Architecture Principles
//! - Only depends on `meetsync-domain`
//! - No database, HTTP, or provider code
//! - All external dependencies via traits

pub mod scheduling;

pub use scheduling::ports::{CalendarEventHandle, CalendarGateway, MeetingRepository};
pub use scheduling::MeetingService;
