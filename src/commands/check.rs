use std::path::Path;

use anyhow::Result;
use owo_colors::OwoColorize;
use termcal_core::conflicts;

use crate::commands::read_entries;
use crate::render::entry_line;
use crate::store::UserStore;

/// Dry run: report which stored entries each incoming entry would displace.
pub fn run(store: &UserStore, entries_path: &Path) -> Result<()> {
    let incoming = read_entries(entries_path)?;
    let existing = store.load()?.current_entries();

    for entry in &incoming {
        let displaced: Vec<_> = existing
            .iter()
            .filter(|kept| conflicts(kept, entry))
            .collect();

        if displaced.is_empty() {
            println!("{}", format!("  {} fits", entry_line(entry)).green());
        } else {
            for kept in displaced {
                println!(
                    "{}",
                    format!("  {} displaces {}", entry_line(entry), entry_line(kept)).yellow()
                );
            }
        }
    }

    Ok(())
}
