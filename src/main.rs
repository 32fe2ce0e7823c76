mod commands;
mod render;
mod store;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::store::UserStore;

#[derive(Parser)]
#[command(name = "termcal")]
#[command(about = "Synthesize and edit university semester schedules as iCalendar files")]
struct Cli {
    /// Directory holding this user's schedule state
    #[arg(short, long, default_value = ".")]
    user_dir: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build a semester calendar from a scraped registration schedule
    Import {
        /// Scraped schedule JSON (semester label plus courses)
        schedule: PathBuf,

        /// Academic calendar JSON (semester windows and recesses)
        #[arg(short, long)]
        calendar: PathBuf,
    },
    /// Merge interpreted schedule entries into the current calendar
    Edit {
        /// Entries JSON produced by the interpreter
        entries: PathBuf,
    },
    /// Show what a set of entries would displace, without writing
    Check {
        /// Entries JSON produced by the interpreter
        entries: PathBuf,
    },
    /// Print the current schedule
    Status,
    /// Archive the current schedule into history
    Finalize,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();
    let store = UserStore::new(cli.user_dir);

    match cli.command {
        Commands::Import { schedule, calendar } => {
            commands::import::run(&store, &schedule, &calendar)
        }
        Commands::Edit { entries } => commands::edit::run(&store, &entries),
        Commands::Check { entries } => commands::check::run(&store, &entries),
        Commands::Status => commands::status::run(&store),
        Commands::Finalize => commands::finalize::run(&store),
    }
}
