//! ICS rendering
//!
//! Deterministic serialization of canonical events into an iCalendar
//! (RFC 5545) document. Text values are escaped per §3.3.11; the upstream
//! data routinely contains commas and pipes that strict clients would
//! otherwise misparse.

use domain::CalendarEvent;

const PRODID: &str = "-//plancast//Plancast Calendar//EN";

/// UTC "basic" format required for DTSTART/DTEND
const ICS_UTC_LAYOUT: &str = "%Y%m%dT%H%M%SZ";

/// Render events into a complete VCALENDAR document.
///
/// Pure and total: same input, byte-identical output. Events appear in
/// input order with a fixed per-event field order.
#[must_use]
pub fn render_ics(events: &[CalendarEvent], calendar_name: &str) -> String {
    let name = escape_text(calendar_name);
    let mut ics = String::new();
    ics.push_str("BEGIN:VCALENDAR\n");
    ics.push_str("VERSION:2.0\n");
    ics.push_str(&format!("PRODID:{PRODID}\n"));
    ics.push_str(&format!("NAME:{name}\n"));
    ics.push_str(&format!("X-WR-CALNAME:{name}\n"));
    ics.push_str(&format!("DESCRIPTION:Schedule feed: {name}\n"));
    ics.push_str(&format!("X-WR-CALDESC:Schedule feed: {name}\n"));
    ics.push_str("REFRESH-INTERVAL;VALUE=DURATION:PT1H\n");

    for event in events {
        ics.push_str("BEGIN:VEVENT\n");
        ics.push_str(&format!("UID:{}\n", event.uid));
        ics.push_str(&format!("DTSTART:{}\n", event.start.format(ICS_UTC_LAYOUT)));
        ics.push_str(&format!("DTEND:{}\n", event.end.format(ICS_UTC_LAYOUT)));
        ics.push_str(&format!("LOCATION:{}\n", escape_text(&event.location)));
        ics.push_str(&format!("SUMMARY:{}\n", escape_text(&event.summary)));
        ics.push_str(&format!(
            "DESCRIPTION:{}\n",
            escape_text(&event.description)
        ));
        ics.push_str("END:VEVENT\n");
    }

    ics.push_str("END:VCALENDAR\n");
    ics
}

/// RFC 5545 §3.3.11 TEXT escaping: backslash, semicolon and comma get a
/// backslash; newlines become a literal `\n` sequence.
fn escape_text(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            ';' => out.push_str("\\;"),
            ',' => out.push_str("\\,"),
            '\n' => out.push_str("\\n"),
            '\r' => {}
            _ => out.push(ch),
        }
    }
    out
}
