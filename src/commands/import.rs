use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use owo_colors::OwoColorize;
use termcal_core::academic::{AcademicCalendar, semester_code};
use termcal_core::{ScrapedSchedule, TermcalError, synthesize_schedule};

use crate::store::UserStore;

pub fn run(store: &UserStore, schedule_path: &Path, calendar_path: &Path) -> Result<()> {
    let raw = fs::read_to_string(schedule_path)
        .with_context(|| format!("reading {}", schedule_path.display()))?;
    let scraped: ScrapedSchedule = serde_json::from_str(&raw)
        .with_context(|| format!("parsing {}", schedule_path.display()))?;

    let raw = fs::read_to_string(calendar_path)
        .with_context(|| format!("reading {}", calendar_path.display()))?;
    let academic = AcademicCalendar::from_json_str(&raw)
        .with_context(|| format!("parsing {}", calendar_path.display()))?;

    let ics = match synthesize_schedule(&scraped, &academic) {
        Ok(ics) => ics,
        Err(TermcalError::UnknownSemester(label)) => {
            let available: Vec<_> = academic.labels().collect();
            anyhow::bail!(
                "Semester '{}' not found in the academic calendar. Available: {}",
                label,
                available.join(", ")
            );
        }
        Err(err) => return Err(err.into()),
    };

    let mut user = store.load()?;
    user.current_schedule = Some(ics.clone());
    store.save(&user)?;

    // Keep a semester-coded export next to the working copy.
    let code = semester_code(&scraped.semester)?;
    let export = store.export_path(&format!("{code}_schedule.ics"));
    fs::write(&export, &ics).with_context(|| format!("writing {}", export.display()))?;

    let meetings: usize = scraped.courses.iter().map(|c| c.meeting_times.len()).sum();
    println!(
        "{}",
        format!(
            "  Imported {}: {} courses, {} weekly meetings",
            scraped.semester,
            scraped.courses.len(),
            meetings
        )
        .green()
    );
    println!("  Saved {}", export.display());

    Ok(())
}
