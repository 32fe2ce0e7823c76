//! Semester calendar synthesis.
//!
//! Turns scraped course meetings into a recurring-event calendar bounded by
//! the semester window: one weekly event per meeting, anchored in the
//! campus timezone, recurring until the end of the semester, with exclusion
//! dates for every recess occurrence of that weekday.

use chrono::{Duration, NaiveDateTime, NaiveTime, Utc};
use icalendar::{Calendar, Component, EventLike, Property};
use uuid::Uuid;

use crate::academic::{AcademicCalendar, SemesterWindow};
use crate::clock::{minutes_to_time, next_weekday};
use crate::constants::{CAMPUS_TZID, CAMPUS_VTIMEZONE};
use crate::course::{Course, CourseMeeting, ScrapedSchedule};
use crate::error::{TermcalError, TermcalResult};
use crate::ics;

/// Synthesize a recurring calendar document for one semester.
///
/// Meetings whose time range cannot be converted are skipped (with a logged
/// warning) rather than corrupting the document; everything else fails the
/// whole call before any output is produced.
pub fn synthesize(courses: &[Course], window: &SemesterWindow) -> TermcalResult<String> {
    let mut cal = Calendar::new();

    // UNTIL stays in campus-local civil time, matching the zoned DTSTART.
    let until = NaiveDateTime::new(window.end, NaiveTime::from_hms_opt(23, 59, 59).unwrap());

    for course in courses {
        for meeting in &course.meeting_times {
            let (start, end) = match meeting_interval(meeting) {
                Ok(interval) => interval,
                Err(err) => {
                    tracing::warn!(course = %course.title, %err, "skipping meeting with unusable time range");
                    continue;
                }
            };

            let first_date = next_weekday(window.start, meeting.day);

            let mut ics_event = icalendar::Event::new();
            ics_event.uid(&format!("{}@termcal", Uuid::new_v4()));
            ics_event.summary(&course.summary());
            ics_event.description(&course.description());
            ics_event.location(&meeting.location());

            let dtstamp = Utc::now().format("%Y%m%dT%H%M%SZ").to_string();
            ics_event.add_property("DTSTAMP", dtstamp);

            add_zoned_property(&mut ics_event, "DTSTART", NaiveDateTime::new(first_date, start));
            add_zoned_property(&mut ics_event, "DTEND", NaiveDateTime::new(first_date, end));

            ics_event.add_property(
                "RRULE",
                format!("FREQ=WEEKLY;UNTIL={}", until.format("%Y%m%dT%H%M%S")),
            );

            // One exclusion per recess occurrence of this weekday, at the
            // meeting's start time.
            for recess in &window.recesses {
                let mut date = next_weekday(recess.start, meeting.day);
                while date <= recess.end {
                    let mut prop = Property::new(
                        "EXDATE",
                        NaiveDateTime::new(date, start)
                            .format("%Y%m%dT%H%M%S")
                            .to_string(),
                    );
                    prop.add_parameter("TZID", CAMPUS_TZID);
                    ics_event.append_multi_property(prop);
                    date = date + Duration::days(7);
                }
            }

            cal.push(ics_event.done());
        }
    }

    let cal = cal.done();
    Ok(with_campus_timezone(&ics::normalize_output(&cal.to_string())))
}

/// Synthesize from the scraper's output, resolving the semester label first.
pub fn synthesize_schedule(
    scraped: &ScrapedSchedule,
    calendar: &AcademicCalendar,
) -> TermcalResult<String> {
    let window = calendar.window(&scraped.semester)?;
    synthesize(&scraped.courses, window)
}

/// Convert a meeting's minute range to a non-empty clock interval.
fn meeting_interval(meeting: &CourseMeeting) -> TermcalResult<(NaiveTime, NaiveTime)> {
    let (start_minutes, end_minutes) = meeting.range;
    let start = minutes_to_time(start_minutes)?;
    let end = minutes_to_time(end_minutes)?;
    if start >= end {
        return Err(TermcalError::MalformedTime(format!(
            "{start_minutes}-{end_minutes} minutes"
        )));
    }
    Ok((start, end))
}

/// Add a date-time property carrying the campus TZID.
fn add_zoned_property(ics_event: &mut icalendar::Event, name: &str, datetime: NaiveDateTime) {
    let mut prop = Property::new(name, datetime.format("%Y%m%dT%H%M%S").to_string());
    prop.add_parameter("TZID", CAMPUS_TZID);
    ics_event.append_property(prop);
}

/// Splice the campus VTIMEZONE block ahead of the first event, so the
/// document defines the timezone's transition rules exactly once.
fn with_campus_timezone(ics: &str) -> String {
    let mut result = String::with_capacity(ics.len() + CAMPUS_VTIMEZONE.len());
    let mut inserted = false;

    for line in ics.lines() {
        if !inserted && line == "BEGIN:VEVENT" {
            result.push_str(CAMPUS_VTIMEZONE);
            inserted = true;
        }
        result.push_str(line);
        result.push_str("\r\n");
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::academic::Recess;
    use crate::ics::parse_entries;
    use chrono::{NaiveDate, Weekday};
    use std::str::FromStr;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn spring_window() -> SemesterWindow {
        SemesterWindow {
            start: date(2025, 1, 21),
            end: date(2025, 5, 9),
            recesses: vec![Recess {
                name: "Spring Recess".to_string(),
                start: date(2025, 3, 17),
                end: date(2025, 3, 21),
            }],
        }
    }

    fn calc_course() -> Course {
        serde_json::from_str(
            r#"{
                "title": "CALC I",
                "course_number": "01:640:151",
                "section_number": "04",
                "index": "10101",
                "credits": 4.0,
                "meeting_times": [
                    {"day": "Monday", "range": [540, 615], "building": "HLL 114", "campus": "Busch"}
                ]
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn monday_meeting_anchors_on_first_monday() {
        let ics = synthesize(&[calc_course()], &spring_window()).unwrap();

        // Semester starts Tuesday 2025-01-21; first Monday is 2025-01-27.
        assert!(ics.contains("DTSTART;TZID=America/New_York:20250127T090000"));
        assert!(ics.contains("DTEND;TZID=America/New_York:20250127T101500"));
        assert!(ics.contains("RRULE:FREQ=WEEKLY;UNTIL=20250509T235959"));
    }

    #[test]
    fn recess_excludes_exactly_its_weekday_occurrences() {
        let ics = synthesize(&[calc_course()], &spring_window()).unwrap();

        let exdates: Vec<&str> = ics
            .lines()
            .filter(|l| l.starts_with("EXDATE"))
            .collect();
        assert_eq!(
            exdates,
            vec!["EXDATE;TZID=America/New_York:20250317T090000"]
        );
    }

    #[test]
    fn semester_starting_on_meeting_day_anchors_on_start() {
        let mut window = spring_window();
        window.start = date(2025, 1, 20); // a Monday
        let ics = synthesize(&[calc_course()], &window).unwrap();
        assert!(ics.contains("DTSTART;TZID=America/New_York:20250120T090000"));
    }

    #[test]
    fn vtimezone_appears_once_before_events() {
        let ics = synthesize(&[calc_course()], &spring_window()).unwrap();

        assert_eq!(ics.matches("BEGIN:VTIMEZONE").count(), 1);
        let tz_pos = ics.find("BEGIN:VTIMEZONE").unwrap();
        let event_pos = ics.find("BEGIN:VEVENT").unwrap();
        assert!(tz_pos < event_pos);
        assert!(ics.contains("TZNAME:EST"));
        assert!(ics.contains("TZNAME:EDT"));
    }

    #[test]
    fn vtimezone_matches_the_iana_zone() {
        use chrono::Offset;
        use chrono::TimeZone;

        // The hand-carried transition rules must agree with the IANA
        // database for the campus zone: -05:00 in winter, -04:00 in summer.
        let tz = chrono_tz::Tz::from_str(CAMPUS_TZID).unwrap();
        let winter = tz
            .with_ymd_and_hms(2025, 1, 15, 12, 0, 0)
            .unwrap()
            .offset()
            .fix()
            .local_minus_utc();
        let summer = tz
            .with_ymd_and_hms(2025, 7, 15, 12, 0, 0)
            .unwrap()
            .offset()
            .fix()
            .local_minus_utc();
        assert_eq!(winter, -5 * 3600);
        assert_eq!(summer, -4 * 3600);
        assert!(CAMPUS_VTIMEZONE.contains("TZOFFSETTO:-0500"));
        assert!(CAMPUS_VTIMEZONE.contains("TZOFFSETTO:-0400"));
    }

    #[test]
    fn event_metadata_composed_from_course() {
        let ics = synthesize(&[calc_course()], &spring_window()).unwrap();
        assert!(ics.contains("SUMMARY:CALC I (01:640:151)"));
        assert!(ics.contains("LOCATION:HLL 114 (Busch)"));
        assert!(ics.contains("Section 04"));
        assert!(ics.contains("Index 10101"));
    }

    #[test]
    fn malformed_meeting_is_skipped_not_fatal() {
        let mut bad = calc_course();
        bad.meeting_times[0].range = (615, 540);
        let ics = synthesize(&[bad, calc_course()], &spring_window()).unwrap();
        assert_eq!(ics.matches("BEGIN:VEVENT").count(), 1);
    }

    #[test]
    fn synthesize_schedule_resolves_label() {
        let calendar =
            AcademicCalendar::from_semesters([("Spring 2025".to_string(), spring_window())]);
        let scraped = ScrapedSchedule {
            semester: "Spring 2025".to_string(),
            courses: vec![calc_course()],
        };
        let ics = synthesize_schedule(&scraped, &calendar).unwrap();
        assert!(ics.contains("SUMMARY:CALC I (01:640:151)"));
    }

    #[test]
    fn unknown_semester_produces_no_document() {
        let scraped = ScrapedSchedule {
            semester: "Fall 1999".to_string(),
            courses: vec![calc_course()],
        };
        let calendar = AcademicCalendar::default();
        match synthesize_schedule(&scraped, &calendar) {
            Err(TermcalError::UnknownSemester(label)) => assert_eq!(label, "Fall 1999"),
            other => panic!("expected UnknownSemester, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn synthesized_document_parses_back_to_entries() {
        let ics = synthesize(&[calc_course()], &spring_window()).unwrap();
        let entries = parse_entries(&ics);

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].commitment, "CALC I (01:640:151)");
        assert_eq!(entries[0].day, Weekday::Mon);
        assert_eq!(
            entries[0].start,
            chrono::NaiveTime::from_hms_opt(9, 0, 0).unwrap()
        );
        assert_eq!(
            entries[0].end,
            chrono::NaiveTime::from_hms_opt(10, 15, 0).unwrap()
        );
    }

    #[test]
    fn multi_week_recess_excludes_each_occurrence() {
        let mut window = spring_window();
        window.recesses = vec![Recess {
            name: "Long Break".to_string(),
            start: date(2025, 3, 10),
            end: date(2025, 3, 24),
        }];
        let ics = synthesize(&[calc_course()], &window).unwrap();

        let exdates: Vec<&str> = ics
            .lines()
            .filter(|l| l.starts_with("EXDATE"))
            .collect();
        assert_eq!(
            exdates,
            vec![
                "EXDATE;TZID=America/New_York:20250310T090000",
                "EXDATE;TZID=America/New_York:20250317T090000",
                "EXDATE;TZID=America/New_York:20250324T090000",
            ]
        );
    }
}
