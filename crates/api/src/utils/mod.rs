//! Shared endpoint helpers

pub mod logging;
