//! Conflict detection and last-writer-wins schedule merging.

use crate::entry::ScheduleEntry;
use crate::error::TermcalResult;
use crate::ics;

/// Whether two entries collide: same weekday and overlapping open intervals.
/// Back-to-back entries (one ends exactly when the other starts) do not
/// conflict.
pub fn conflicts(a: &ScheduleEntry, b: &ScheduleEntry) -> bool {
    if a.day != b.day {
        return false;
    }
    a.start < b.end && b.start < a.end
}

/// Merge incoming entries into an existing schedule.
///
/// Each incoming entry removes every entry it conflicts with from the
/// running result, then lands at the end. Incoming entries therefore never
/// lose to existing ones, and when incoming entries conflict with each
/// other the later one wins. Untouched entries keep their relative order.
pub fn merge(existing: Vec<ScheduleEntry>, incoming: &[ScheduleEntry]) -> Vec<ScheduleEntry> {
    let mut result = existing;
    for entry in incoming {
        result.retain(|kept| !conflicts(kept, entry));
        result.push(entry.clone());
    }
    result
}

/// Merge incoming entries into stored calendar text and re-render.
///
/// Unreadable stored text degrades to an empty base (with a logged warning
/// from the parser) so the merge still proceeds.
pub fn merge_calendar_text(
    existing_text: &str,
    incoming: &[ScheduleEntry],
) -> TermcalResult<(Vec<ScheduleEntry>, String)> {
    let existing = ics::parse_entries(existing_text);
    let merged = merge(existing, incoming);
    let text = ics::render(&merged)?;
    Ok((merged, text))
}
