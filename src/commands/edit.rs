use std::path::Path;

use anyhow::Result;
use owo_colors::OwoColorize;

use crate::commands::read_entries;
use crate::render::entry_line;
use crate::store::UserStore;

pub fn run(store: &UserStore, entries_path: &Path) -> Result<()> {
    let incoming = read_entries(entries_path)?;

    let mut user = store.load()?;
    let had_current = user.current_schedule.is_some();
    let merged = user.apply_edits(&incoming)?;
    store.save(&user)?;

    if !had_current {
        println!("{}", "  Started a new schedule".dimmed());
    }
    for entry in &incoming {
        println!("{}", format!("  + {}", entry_line(entry)).green());
    }
    println!("  {} entries in current schedule", merged.len());

    Ok(())
}
