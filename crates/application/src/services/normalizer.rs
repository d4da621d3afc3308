//! Event normalization
//!
//! Converts raw portal entries into canonical UTC events. Pure and total:
//! an entry that cannot be normalized is skipped and counted, never an
//! error, so one malformed record cannot deny the user the whole calendar.

use chrono::{DateTime, LocalResult, NaiveDateTime, TimeZone, Utc};
use domain::{CalendarEvent, CivilTimezone};
use tracing::{debug, warn};

use crate::ports::RawScheduleEntry;

/// The portal's timestamp layout: local wall clock, millisecond precision,
/// no offset.
const PORTAL_TIMESTAMP_LAYOUT: &str = "%Y-%m-%dT%H:%M:%S%.3f";

/// Normalize raw schedule entries into canonical events, in input order.
///
/// Entries are skipped when they lack a favorite descriptor or an id, or
/// when either timestamp fails to parse. The wall-clock values are
/// reinterpreted in `zone` and converted to UTC; a naive as-UTC reading
/// would be wrong by the zone's offset, DST included.
#[must_use]
pub fn normalize(entries: &[RawScheduleEntry], zone: CivilTimezone) -> Vec<CalendarEvent> {
    let mut events = Vec::with_capacity(entries.len());
    let mut skipped = 0_usize;

    for entry in entries {
        let Some(favorite) = &entry.favorite else {
            debug!(id = ?entry.id, "skipping entry without favorite descriptor");
            skipped += 1;
            continue;
        };
        let Some(uid) = entry.id else {
            debug!("skipping entry without id");
            skipped += 1;
            continue;
        };
        let (Some(start), Some(end)) = (
            to_utc(&entry.starts_at, zone),
            to_utc(&entry.ends_at, zone),
        ) else {
            debug!(uid, start = %entry.starts_at, end = %entry.ends_at, "skipping entry with unparsable timestamps");
            skipped += 1;
            continue;
        };

        // f5 then f3; the order is part of the upstream contract.
        let summary = format!("{}{}", favorite.summary_prefix, favorite.summary_suffix);
        events.push(
            CalendarEvent::new(uid, start, end)
                .with_location(favorite.location.clone())
                .with_summary(summary)
                .with_description(favorite.description.clone()),
        );
    }

    if skipped > 0 {
        warn!(skipped, total = entries.len(), "dropped unnormalizable schedule entries");
    }
    events
}

/// Parse a portal wall-clock timestamp and pin it to UTC via `zone`.
///
/// Ambiguous local times (autumn DST fold) resolve to the earlier instant.
/// Nonexistent local times (spring-forward gap) return `None`.
fn to_utc(raw: &str, zone: CivilTimezone) -> Option<DateTime<Utc>> {
    let naive = NaiveDateTime::parse_from_str(raw, PORTAL_TIMESTAMP_LAYOUT).ok()?;
    match zone.tz().from_local_datetime(&naive) {
        LocalResult::Single(dt) => Some(dt.with_timezone(&Utc)),
        LocalResult::Ambiguous(earlier, _) => Some(earlier.with_timezone(&Utc)),
        LocalResult::None => None,
    }
}
