//! Domain constants

/// Fixed meeting duration applied to every calendar event window.
pub const MEETING_DURATION_HOURS: i64 = 1;

/// Prefix for synthesized calendar event ids in offline/mock operation.
pub const MOCK_EVENT_ID_PREFIX: &str = "mock-event-";

/// Default conferencing link used by the local client mode.
pub const DEFAULT_MOCK_MEET_LINK: &str = "https://meet.google.com/mock-link";

/// Email reminder offset sent with every created calendar event (24h).
pub const REMINDER_EMAIL_MINUTES: u32 = 1440;

/// Popup reminder offset sent with every created calendar event.
pub const REMINDER_POPUP_MINUTES: u32 = 15;
