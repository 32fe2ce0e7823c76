//! Terminal rendering for schedule entries.

use chrono::Weekday;
use owo_colors::OwoColorize;
use termcal_core::ScheduleEntry;
use termcal_core::clock::{format_hhmm, weekday_name};

/// One-line description of an entry: "Math (Monday 09:30-10:30)".
pub fn entry_line(entry: &ScheduleEntry) -> String {
    format!(
        "{} ({} {}-{})",
        entry.commitment,
        weekday_name(entry.day),
        format_hhmm(entry.start),
        format_hhmm(entry.end)
    )
}

/// Render entries grouped by weekday, earliest first within each day.
pub fn render_schedule(entries: &[ScheduleEntry]) -> String {
    let mut lines = Vec::new();

    for day in [
        Weekday::Mon,
        Weekday::Tue,
        Weekday::Wed,
        Weekday::Thu,
        Weekday::Fri,
        Weekday::Sat,
        Weekday::Sun,
    ] {
        let mut on_day: Vec<&ScheduleEntry> = entries.iter().filter(|e| e.day == day).collect();
        if on_day.is_empty() {
            continue;
        }
        on_day.sort_by_key(|e| e.start);

        lines.push(format!("  {}", weekday_name(day).bold()));
        for entry in on_day {
            let time = format!("{}-{}", format_hhmm(entry.start), format_hhmm(entry.end));
            let mut line = format!("    {}  {}", time.dimmed(), entry.commitment);
            if !entry.location.is_empty() {
                line.push_str(&format!("  {}", entry.location.dimmed()));
            }
            lines.push(line);
        }
    }

    lines.join("\n")
}
