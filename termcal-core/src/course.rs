//! Scraped course records, pre-synthesis.
//!
//! These mirror the JSON the registration scraper writes: a semester label
//! plus one record per course, each with zero or more weekly meetings.
//! Meeting times arrive as minutes after midnight.

use chrono::Weekday;
use serde::{Deserialize, Serialize};

/// One weekly meeting of a course section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CourseMeeting {
    #[serde(with = "crate::clock::weekday_str")]
    pub day: Weekday,
    /// Start and end, in minutes after midnight.
    pub range: (u16, u16),
    #[serde(default)]
    pub building: String,
    #[serde(default)]
    pub campus: String,
}

impl CourseMeeting {
    /// Display location: "Building (Campus)", or the campus alone when the
    /// scraper found no building link.
    pub fn location(&self) -> String {
        if self.building.is_empty() {
            self.campus.clone()
        } else {
            format!("{} ({})", self.building, self.campus)
        }
    }
}

/// A registered course section.
///
/// Asynchronous/arranged sections arrive with an empty `meeting_times` list
/// and synthesize to nothing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Course {
    pub title: String,
    pub course_number: String,
    pub section_number: String,
    pub index: String,
    #[serde(default)]
    pub credits: f64,
    #[serde(default)]
    pub meeting_times: Vec<CourseMeeting>,
}

impl Course {
    /// Event display name: title plus course number.
    pub fn summary(&self) -> String {
        format!("{} ({})", self.title, self.course_number)
    }

    /// Event description: section, registration index, credits.
    pub fn description(&self) -> String {
        format!(
            "Section {} | Index {} | Credits: {}",
            self.section_number, self.index, self.credits
        )
    }
}

/// The scraper's full output for one user and semester.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScrapedSchedule {
    pub semester: String,
    pub courses: Vec<Course>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn location_falls_back_to_campus() {
        let mut meeting: CourseMeeting = serde_json::from_str(
            r#"{"day": "Tuesday", "range": [620, 700], "building": "SEC 111", "campus": "Busch"}"#,
        )
        .unwrap();
        assert_eq!(meeting.location(), "SEC 111 (Busch)");

        meeting.building.clear();
        assert_eq!(meeting.location(), "Busch");
    }

    #[test]
    fn deserializes_scraped_schedule() {
        let scraped: ScrapedSchedule = serde_json::from_str(
            r#"{
                "semester": "Spring 2025",
                "courses": [{
                    "title": "INTRO COMPUTER SCI",
                    "course_number": "01:198:111",
                    "section_number": "05",
                    "index": "12345",
                    "credits": 4.0,
                    "meeting_times": [
                        {"day": "Monday", "range": [540, 620], "building": "HLL 114", "campus": "Busch"},
                        {"day": "Thursday", "range": [540, 620], "building": "", "campus": "Busch"}
                    ]
                }]
            }"#,
        )
        .unwrap();

        assert_eq!(scraped.semester, "Spring 2025");
        assert_eq!(scraped.courses.len(), 1);
        let course = &scraped.courses[0];
        assert_eq!(course.meeting_times.len(), 2);
        assert_eq!(course.meeting_times[0].day, Weekday::Mon);
        assert_eq!(course.meeting_times[0].range, (540, 620));
        assert_eq!(course.summary(), "INTRO COMPUTER SCI (01:198:111)");
        assert_eq!(
            course.description(),
            "Section 05 | Index 12345 | Credits: 4"
        );
    }

    #[test]
    fn asynchronous_course_has_no_meetings() {
        let course: Course = serde_json::from_str(
            r#"{"title": "SPECIAL TOPICS", "course_number": "01:198:500",
                "section_number": "01", "index": "54321"}"#,
        )
        .unwrap();
        assert!(course.meeting_times.is_empty());
        assert_eq!(course.credits, 0.0);
    }
}
