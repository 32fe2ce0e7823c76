//! Schedule synthesis and conflict-resolution engine for university
//! semester calendars.
//!
//! This crate turns scraped course-meeting records into recurring iCalendar
//! documents bounded by the semester window, and merges interpreted schedule
//! edits into an existing calendar with automatic conflict resolution:
//! - `entry` / `course` for the schedule data model
//! - `academic` for the semester window index
//! - `merge` for conflict detection and last-writer-wins merging
//! - `synth` for semester-aware recurring calendar synthesis
//! - `ics` for the simpler weekly calendar (de)serializer
//! - `state` for a user's current/past schedule lifecycle

pub mod academic;
pub mod clock;
pub mod constants;
pub mod course;
pub mod entry;
pub mod error;
pub mod ics;
pub mod merge;
pub mod state;
pub mod synth;

pub use academic::{AcademicCalendar, Recess, SemesterWindow};
pub use course::{Course, CourseMeeting, ScrapedSchedule};
pub use entry::ScheduleEntry;
pub use error::{TermcalError, TermcalResult};
pub use merge::{conflicts, merge, merge_calendar_text};
pub use state::{Finalize, UserSchedule};
pub use synth::{synthesize, synthesize_schedule};
