//! Canonical calendar event
//!
//! The normalized form of one portal planning entry, independent of the
//! upstream field names. Built per request, rendered to ICS, discarded.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A normalized calendar event in UTC
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarEvent {
    /// Stable upstream identifier, used as the ICS UID
    pub uid: i64,
    /// Start instant (UTC)
    pub start: DateTime<Utc>,
    /// End instant (UTC)
    pub end: DateTime<Utc>,
    /// Room or site
    pub location: String,
    /// Event title
    pub summary: String,
    /// Free-text details (typically the lecturer)
    pub description: String,
}

impl CalendarEvent {
    /// Create a new event with empty text fields
    #[must_use]
    pub fn new(uid: i64, start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self {
            uid,
            start,
            end,
            location: String::new(),
            summary: String::new(),
            description: String::new(),
        }
    }

    /// Set the location
    #[must_use]
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    /// Set the summary
    #[must_use]
    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = summary.into();
        self
    }

    /// Set the description
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Event duration
    #[must_use]
    pub fn duration(&self) -> chrono::Duration {
        self.end - self.start
    }
}
