//! # MeetSync Domain
//!
//! Business domain types and models for MeetSync.
//!
//! This crate contains:
//! - Domain data types (Meeting, MeetingDraft, etc.)
//! - Domain error types and Result definitions
//! - Configuration structures
//! - Wire protocol envelopes for the callable endpoints
//! - Date/time utilities for meeting windows
//!
//! ## Architecture
//! - No dependencies on other MeetSync crates
//! - Only external dependencies allowed
//! - Pure domain models and data structures

pub mod config;
pub mod constants;
pub mod datetime;
pub mod errors;
pub mod protocol;
pub mod types;

// Re-export commonly used items
pub use config::*;
pub use datetime::{calculate_end_time, format_date_range, parse_date, DateTimeInput, EventWindow};
pub use errors::*;
pub use types::*;
