//! Tolerant calendar text parsing, using the icalendar crate's parser.

use chrono::{Datelike, NaiveDateTime};
use icalendar::{
    CalendarDateTime, DatePerhapsTime,
    parser::{Component, read_calendar, unfold},
};

use crate::constants::UNTITLED;
use crate::entry::ScheduleEntry;
use crate::error::{TermcalError, TermcalResult};

/// Reconstruct schedule entries from stored calendar text.
///
/// This is a lossy, best-effort inverse of rendering: only the display
/// name, weekday, clock times and location come back. Text that cannot be
/// read as a calendar yields an empty list so callers can proceed from an
/// empty base; individual events that cannot be reconstructed are skipped.
/// Both cases leave a warning in the log, since they can mask corruption.
pub fn parse_entries(content: &str) -> Vec<ScheduleEntry> {
    if content.trim().is_empty() {
        return Vec::new();
    }

    let unfolded = unfold(content);
    let calendar = match read_calendar(&unfolded) {
        Ok(calendar) => calendar,
        Err(err) => {
            tracing::warn!(%err, "unreadable calendar text, treating stored schedule as empty");
            return Vec::new();
        }
    };

    let mut entries = Vec::new();
    for vevent in calendar.components.iter().filter(|c| c.name == "VEVENT") {
        match entry_from_vevent(vevent) {
            Ok(entry) => entries.push(entry),
            Err(err) => tracing::warn!(%err, "skipping unreadable calendar event"),
        }
    }
    entries
}

fn entry_from_vevent(vevent: &Component) -> TermcalResult<ScheduleEntry> {
    let commitment = vevent
        .find_prop("SUMMARY")
        .map(|p| p.val.to_string())
        .unwrap_or_else(|| UNTITLED.to_string());

    let start = prop_datetime(vevent, "DTSTART")
        .ok_or_else(|| TermcalError::MalformedTime("event start".to_string()))?;
    let end = prop_datetime(vevent, "DTEND")
        .ok_or_else(|| TermcalError::MalformedTime("event end".to_string()))?;

    let location = vevent
        .find_prop("LOCATION")
        .map(|p| p.val.to_string())
        .unwrap_or_default();

    ScheduleEntry::new(commitment, start.weekday(), start.time(), end.time(), location)
}

/// Read a date-time property as civil local time. All-day events carry no
/// clock interval and cannot become entries.
fn prop_datetime(vevent: &Component, name: &str) -> Option<NaiveDateTime> {
    let prop = vevent.find_prop(name)?;
    match DatePerhapsTime::try_from(prop).ok()? {
        DatePerhapsTime::Date(_) => None,
        DatePerhapsTime::DateTime(dt) => Some(match dt {
            CalendarDateTime::Utc(dt) => dt.naive_utc(),
            CalendarDateTime::Floating(naive) => naive,
            CalendarDateTime::WithTimezone { date_time, .. } => date_time,
        }),
    }
}
