//! Meeting scheduling - ports and orchestration

pub mod ports;
pub mod service;

pub use service::MeetingService;
