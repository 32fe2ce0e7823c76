//! Schedule entries: one weekly commitment per record.

use chrono::{NaiveTime, Weekday};
use serde::{Deserialize, Serialize};

use crate::clock::{format_hhmm, parse_hhmm, parse_weekday, weekday_name};
use crate::constants::UNTITLED;
use crate::error::{TermcalError, TermcalResult};

/// A single weekly commitment: one weekday plus a clock-time interval.
///
/// Entries are only built through [`ScheduleEntry::new`] (directly or via
/// deserialization), so a held entry always satisfies `start < end`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "EntryRepr", into = "EntryRepr")]
pub struct ScheduleEntry {
    pub commitment: String,
    pub day: Weekday,
    pub start: NaiveTime,
    pub end: NaiveTime,
    pub location: String,
}

impl ScheduleEntry {
    /// Build a validated entry. The interval must be non-empty and must not
    /// cross midnight.
    pub fn new(
        commitment: impl Into<String>,
        day: Weekday,
        start: NaiveTime,
        end: NaiveTime,
        location: impl Into<String>,
    ) -> TermcalResult<Self> {
        let commitment = commitment.into();
        if start >= end {
            return Err(TermcalError::MalformedEntry(commitment));
        }
        Ok(ScheduleEntry {
            commitment,
            day,
            start,
            end,
            location: location.into(),
        })
    }
}

/// Wire shape used by the interpreter collaborator: weekday names and
/// `HH:MM` strings, commitment defaulting to "Untitled".
#[derive(Debug, Clone, Serialize, Deserialize)]
struct EntryRepr {
    #[serde(default = "default_commitment")]
    commitment: String,
    day: String,
    start_time: String,
    end_time: String,
    #[serde(default)]
    location: String,
}

fn default_commitment() -> String {
    UNTITLED.to_string()
}

impl TryFrom<EntryRepr> for ScheduleEntry {
    type Error = TermcalError;

    fn try_from(repr: EntryRepr) -> TermcalResult<Self> {
        ScheduleEntry::new(
            repr.commitment,
            parse_weekday(&repr.day)?,
            parse_hhmm(&repr.start_time)?,
            parse_hhmm(&repr.end_time)?,
            repr.location,
        )
    }
}

impl From<ScheduleEntry> for EntryRepr {
    fn from(entry: ScheduleEntry) -> Self {
        EntryRepr {
            commitment: entry.commitment,
            day: weekday_name(entry.day).to_string(),
            start_time: format_hhmm(entry.start),
            end_time: format_hhmm(entry.end),
            location: entry.location,
        }
    }
}
