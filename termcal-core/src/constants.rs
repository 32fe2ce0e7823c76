//! Shared constants.

/// The fixed civil timezone all campus event times are anchored to.
pub const CAMPUS_TZID: &str = "America/New_York";

/// Display name for entries that arrive without one.
pub const UNTITLED: &str = "Untitled";

/// VTIMEZONE definition for the campus timezone, emitted once per
/// synthesized document so local times render correctly on both sides
/// of a daylight-saving transition.
pub const CAMPUS_VTIMEZONE: &str = "BEGIN:VTIMEZONE\r\n\
TZID:America/New_York\r\n\
X-LIC-LOCATION:America/New_York\r\n\
BEGIN:DAYLIGHT\r\n\
TZOFFSETFROM:-0500\r\n\
TZOFFSETTO:-0400\r\n\
TZNAME:EDT\r\n\
DTSTART:19700308T020000\r\n\
RRULE:FREQ=YEARLY;BYMONTH=3;BYDAY=2SU\r\n\
END:DAYLIGHT\r\n\
BEGIN:STANDARD\r\n\
TZOFFSETFROM:-0400\r\n\
TZOFFSETTO:-0500\r\n\
TZNAME:EST\r\n\
DTSTART:19701101T020000\r\n\
RRULE:FREQ=YEARLY;BYMONTH=11;BYDAY=1SU\r\n\
END:STANDARD\r\n\
END:VTIMEZONE\r\n";
