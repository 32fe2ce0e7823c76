//! A user's schedule lifecycle: one working calendar plus its history.

use serde::{Deserialize, Serialize};

use crate::entry::ScheduleEntry;
use crate::error::TermcalResult;
use crate::ics;
use crate::merge::merge_calendar_text;

/// Current and superseded calendars for one user, as stored calendar text.
/// Persistence itself belongs to the caller; these are pure transforms.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserSchedule {
    pub current_schedule: Option<String>,
    /// Superseded calendars, most recent first. Never deleted, only grown.
    #[serde(default)]
    pub past_schedules: Vec<String>,
}

/// Outcome of a finalize request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Finalize {
    Archived,
    /// There was nothing to archive; the request is a no-op, not an error.
    NothingToArchive,
}

impl UserSchedule {
    /// Merge interpreted edits into the working calendar, starting from an
    /// empty base when there is none, and store the updated text.
    /// Returns the merged entries.
    pub fn apply_edits(&mut self, incoming: &[ScheduleEntry]) -> TermcalResult<Vec<ScheduleEntry>> {
        let existing = self.current_schedule.as_deref().unwrap_or("");
        let (entries, text) = merge_calendar_text(existing, incoming)?;
        self.current_schedule = Some(text);
        Ok(entries)
    }

    /// Move the working calendar to the front of the history and clear it.
    pub fn finalize(&mut self) -> Finalize {
        match self.current_schedule.take() {
            Some(current) => {
                self.past_schedules.insert(0, current);
                Finalize::Archived
            }
            None => Finalize::NothingToArchive,
        }
    }

    /// The working calendar's entries (empty when there is no calendar or
    /// its text is unreadable).
    pub fn current_entries(&self) -> Vec<ScheduleEntry> {
        self.current_schedule
            .as_deref()
            .map(ics::parse_entries)
            .unwrap_or_default()
    }
}
