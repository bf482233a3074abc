//! # MeetSync Server
//!
//! HTTP application layer - callable endpoints and wiring.
//!
//! This crate contains:
//! - Axum route handlers for the callable endpoints
//! - Application context (dependency injection)
//! - Main entry point and setup
//!
//! ## Architecture
//! - Depends on `domain`, `core`, and `infra`
//! - Wires up the hexagonal architecture
//! - Every endpoint answers with a structured `{success, error}` envelope

pub mod context;
pub mod routes;
pub mod utils;

pub use context::AppContext;
pub use routes::router;
