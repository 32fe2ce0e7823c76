use anyhow::Result;
use owo_colors::OwoColorize;

use crate::render::render_schedule;
use crate::store::UserStore;

pub fn run(store: &UserStore) -> Result<()> {
    let user = store.load()?;

    match &user.current_schedule {
        None => println!("{}", "  No current schedule".dimmed()),
        Some(_) => {
            let entries = user.current_entries();
            if entries.is_empty() {
                println!("{}", "  Current schedule has no readable events".yellow());
            } else {
                println!("{}", render_schedule(&entries));
            }
        }
    }

    if !user.past_schedules.is_empty() {
        println!(
            "{}",
            format!("  {} archived schedule(s)", user.past_schedules.len()).dimmed()
        );
    }

    Ok(())
}
