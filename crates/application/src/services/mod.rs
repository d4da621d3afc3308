//! Application services - Use case implementations

mod feed_service;
mod ics;
mod normalizer;

pub use feed_service::{CalendarFeedService, FeedSettings};
pub use ics::render_ics;
pub use normalizer::normalize;
