//! Rendering schedule entries as calendar text.

use chrono::{Duration, NaiveDate, NaiveDateTime, Utc};
use icalendar::{Calendar, Component, EventLike};
use uuid::Uuid;

use crate::entry::ScheduleEntry;
use crate::error::TermcalResult;

/// Render entries as one non-recurring event each.
///
/// Events use floating local times anchored against a fixed reference week,
/// so the anchor date's weekday carries the entry's day. Metadata beyond
/// commitment/day/times/location is not represented.
pub fn render(entries: &[ScheduleEntry]) -> TermcalResult<String> {
    let mut cal = Calendar::new();

    for entry in entries {
        let date = reference_date(entry);
        let mut ics_event = icalendar::Event::new();
        ics_event.uid(&format!("{}@termcal", Uuid::new_v4()));
        ics_event.summary(&entry.commitment);

        if !entry.location.is_empty() {
            ics_event.location(&entry.location);
        }

        let dtstamp = Utc::now().format("%Y%m%dT%H%M%SZ").to_string();
        ics_event.add_property("DTSTAMP", dtstamp);

        ics_event.add_property(
            "DTSTART",
            NaiveDateTime::new(date, entry.start)
                .format("%Y%m%dT%H%M%S")
                .to_string(),
        );
        ics_event.add_property(
            "DTEND",
            NaiveDateTime::new(date, entry.end)
                .format("%Y%m%dT%H%M%S")
                .to_string(),
        );

        cal.push(ics_event.done());
    }

    let cal = cal.done();
    Ok(super::normalize_output(&cal.to_string()))
}

/// Anchor date for an entry: the day's slot within a fixed reference week.
fn reference_date(entry: &ScheduleEntry) -> NaiveDate {
    // 2024-01-01 is a Monday.
    let reference_monday = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    reference_monday + Duration::days(i64::from(entry.day.num_days_from_monday()))
}
