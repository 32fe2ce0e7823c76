//! Clock-time and weekday utilities.
//!
//! Pure conversions between the representations the scrapers and the
//! interpreter hand us (minutes after midnight, `HH:MM` strings, weekday
//! names) and chrono types. No state.

use chrono::{Datelike, Duration, NaiveDate, NaiveTime, Weekday};

use crate::error::{TermcalError, TermcalResult};

/// Convert minutes after midnight (as scraped meeting ranges carry them)
/// into a clock time. Values of 24 hours or more are malformed.
pub fn minutes_to_time(minutes: u16) -> TermcalResult<NaiveTime> {
    NaiveTime::from_num_seconds_from_midnight_opt(u32::from(minutes) * 60, 0).ok_or_else(|| {
        TermcalError::MalformedTime(format!("{minutes} minutes after midnight"))
    })
}

/// Parse a 24-hour `HH:MM` string.
pub fn parse_hhmm(s: &str) -> TermcalResult<NaiveTime> {
    NaiveTime::parse_from_str(s, "%H:%M")
        .map_err(|_| TermcalError::MalformedTime(s.to_string()))
}

/// Format a clock time as 24-hour `HH:MM`.
pub fn format_hhmm(t: NaiveTime) -> String {
    t.format("%H:%M").to_string()
}

/// Parse a weekday name ("Monday", "tue", ...).
pub fn parse_weekday(s: &str) -> TermcalResult<Weekday> {
    s.parse()
        .map_err(|_| TermcalError::UnknownWeekday(s.to_string()))
}

/// Full English name for a weekday.
pub fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// Earliest date on or after `date` that falls on `target`.
pub fn next_weekday(date: NaiveDate, target: Weekday) -> NaiveDate {
    let ahead = (i64::from(target.num_days_from_monday())
        - i64::from(date.weekday().num_days_from_monday()))
    .rem_euclid(7);
    date + Duration::days(ahead)
}

/// Serde helper: weekdays as full English names on the wire.
pub mod weekday_str {
    use chrono::Weekday;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(day: &Weekday, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(super::weekday_name(*day))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Weekday, D::Error> {
        let s = String::deserialize(deserializer)?;
        super::parse_weekday(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // --- minutes_to_time ---

    #[test]
    fn minutes_conversion() {
        assert_eq!(
            minutes_to_time(620).unwrap(),
            NaiveTime::from_hms_opt(10, 20, 0).unwrap()
        );
        assert_eq!(
            minutes_to_time(0).unwrap(),
            NaiveTime::from_hms_opt(0, 0, 0).unwrap()
        );
        assert_eq!(
            minutes_to_time(1439).unwrap(),
            NaiveTime::from_hms_opt(23, 59, 0).unwrap()
        );
    }

    #[test]
    fn minutes_out_of_range() {
        assert!(matches!(
            minutes_to_time(1440),
            Err(TermcalError::MalformedTime(_))
        ));
    }

    // --- parse_hhmm / format_hhmm ---

    #[test]
    fn hhmm_parse_and_format() {
        let t = parse_hhmm("09:30").unwrap();
        assert_eq!(t, NaiveTime::from_hms_opt(9, 30, 0).unwrap());
        assert_eq!(format_hhmm(t), "09:30");
    }

    #[test]
    fn hhmm_rejects_garbage() {
        assert!(parse_hhmm("9:30 AM").is_err());
        assert!(parse_hhmm("25:00").is_err());
        assert!(parse_hhmm("noon").is_err());
    }

    // --- parse_weekday ---

    #[test]
    fn weekday_names_parse() {
        assert_eq!(parse_weekday("Monday").unwrap(), Weekday::Mon);
        assert_eq!(parse_weekday("thursday").unwrap(), Weekday::Thu);
        assert!(parse_weekday("Someday").is_err());
    }

    #[test]
    fn weekday_name_round_trips() {
        for day in [
            Weekday::Mon,
            Weekday::Tue,
            Weekday::Wed,
            Weekday::Thu,
            Weekday::Fri,
            Weekday::Sat,
            Weekday::Sun,
        ] {
            assert_eq!(parse_weekday(weekday_name(day)).unwrap(), day);
        }
    }

    // --- next_weekday ---

    #[test]
    fn next_weekday_same_day() {
        // 2025-01-20 is a Monday
        let monday = NaiveDate::from_ymd_opt(2025, 1, 20).unwrap();
        assert_eq!(next_weekday(monday, Weekday::Mon), monday);
    }

    #[test]
    fn next_weekday_later_in_week() {
        let tuesday = NaiveDate::from_ymd_opt(2025, 1, 21).unwrap();
        assert_eq!(
            next_weekday(tuesday, Weekday::Fri),
            NaiveDate::from_ymd_opt(2025, 1, 24).unwrap()
        );
    }

    #[test]
    fn next_weekday_wraps_around() {
        let tuesday = NaiveDate::from_ymd_opt(2025, 1, 21).unwrap();
        assert_eq!(
            next_weekday(tuesday, Weekday::Mon),
            NaiveDate::from_ymd_opt(2025, 1, 27).unwrap()
        );
    }
}
