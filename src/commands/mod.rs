pub mod check;
pub mod edit;
pub mod finalize;
pub mod import;
pub mod status;

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use termcal_core::ScheduleEntry;

/// Read an interpreter-produced entries file. Entries are validated as they
/// deserialize, so a malformed record fails here rather than mid-merge.
pub(crate) fn read_entries(path: &Path) -> Result<Vec<ScheduleEntry>> {
    let raw = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("parsing entries in {}", path.display()))
}
