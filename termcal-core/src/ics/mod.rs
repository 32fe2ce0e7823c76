//! Calendar text (de)serialization for schedule entries.
//!
//! `render` writes the simpler, non-semester-aware weekly calendar used for
//! a user's working schedule; `parse_entries` is its tolerant, lossy
//! inverse and also reads the semester-aware documents the synthesizer
//! emits.

pub mod generate;
pub mod parse;

pub use generate::render;
pub use parse::parse_entries;

/// Clean up ICS output from the icalendar crate:
/// - replace PRODID with TERMCAL (output is post-processed here)
/// - drop CALSCALE:GREGORIAN (it's the default)
pub(crate) fn normalize_output(ics: &str) -> String {
    let mut result = String::with_capacity(ics.len());

    for line in ics.lines() {
        if line.starts_with("PRODID:") {
            result.push_str("PRODID:TERMCAL\r\n");
            continue;
        }
        if line == "CALSCALE:GREGORIAN" {
            continue;
        }
        result.push_str(line);
        result.push_str("\r\n");
    }

    result
}
