//! Domain entities - Objects with identity and lifecycle

mod calendar_event;

pub use calendar_event::CalendarEvent;
