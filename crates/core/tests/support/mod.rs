//! Shared test doubles for the scheduling service tests.

pub mod calendar;
pub mod repositories;

pub use calendar::StubCalendarGateway;
pub use repositories::InMemoryMeetings;
