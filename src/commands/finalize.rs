use anyhow::Result;
use owo_colors::OwoColorize;
use termcal_core::Finalize;

use crate::store::UserStore;

pub fn run(store: &UserStore) -> Result<()> {
    let mut user = store.load()?;

    match user.finalize() {
        Finalize::Archived => {
            store.save(&user)?;
            println!(
                "{}",
                format!(
                    "  Archived current schedule ({} in history)",
                    user.past_schedules.len()
                )
                .green()
            );
        }
        Finalize::NothingToArchive => {
            println!("{}", "  No current schedule to archive".dimmed());
        }
    }

    Ok(())
}
