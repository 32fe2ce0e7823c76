//! Academic calendar index: semester windows and recesses by label.
//!
//! Built externally (the academic-calendar scraper writes it as JSON) and
//! read-only at synthesis time. Date ordering inside a window is trusted
//! input here.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{TermcalError, TermcalResult};

/// A named date range within a semester during which no classes meet.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recess {
    pub name: String,
    pub start: NaiveDate,
    pub end: NaiveDate,
}

/// The date bounds of one semester, with its recesses in order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SemesterWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
    #[serde(default)]
    pub recesses: Vec<Recess>,
}

/// Lookup from semester label ("Spring 2025") to its window.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AcademicCalendar {
    semesters: BTreeMap<String, SemesterWindow>,
}

impl AcademicCalendar {
    pub fn from_semesters(
        semesters: impl IntoIterator<Item = (String, SemesterWindow)>,
    ) -> Self {
        AcademicCalendar {
            semesters: semesters.into_iter().collect(),
        }
    }

    /// Parse the scraper's JSON output.
    pub fn from_json_str(s: &str) -> TermcalResult<Self> {
        Ok(serde_json::from_str(s)?)
    }

    /// Look up a semester window by label.
    pub fn window(&self, label: &str) -> TermcalResult<&SemesterWindow> {
        self.semesters
            .get(label)
            .ok_or_else(|| TermcalError::UnknownSemester(label.to_string()))
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.semesters.keys().map(String::as_str)
    }
}

/// Registrar code for a semester label: term digit plus year,
/// e.g. "Fall 2025" becomes "92025".
pub fn semester_code(label: &str) -> TermcalResult<String> {
    let mut parts = label.split_whitespace();
    let (Some(term), Some(year), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(TermcalError::UnknownTerm(label.to_string()));
    };
    let digit = match term.to_ascii_lowercase().as_str() {
        "winter" => "0",
        "spring" => "1",
        "summer" => "7",
        "fall" => "9",
        _ => return Err(TermcalError::UnknownTerm(term.to_string())),
    };
    if year.is_empty() || !year.chars().all(|c| c.is_ascii_digit()) {
        return Err(TermcalError::UnknownTerm(label.to_string()));
    }
    Ok(format!("{digit}{year}"))
}
