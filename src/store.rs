//! File-backed store for a user's schedule state.
//!
//! Stands in for the document store at the file boundary: `current.ics`
//! plus a `past/` directory of superseded calendars, most recent first
//! (`000.ics`, `001.ics`, ...). One process per user directory keeps
//! read-modify-write cycles serialized.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use termcal_core::UserSchedule;

pub struct UserStore {
    root: PathBuf,
}

impl UserStore {
    pub fn new(root: PathBuf) -> Self {
        UserStore { root }
    }

    fn current_path(&self) -> PathBuf {
        self.root.join("current.ics")
    }

    fn past_dir(&self) -> PathBuf {
        self.root.join("past")
    }

    /// Path for an extra named export alongside the working state.
    pub fn export_path(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }

    pub fn load(&self) -> Result<UserSchedule> {
        let current_schedule = match fs::read_to_string(self.current_path()) {
            Ok(text) => Some(text),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => None,
            Err(err) => {
                return Err(err).with_context(|| {
                    format!("reading {}", self.current_path().display())
                });
            }
        };

        let mut past_schedules = Vec::new();
        if self.past_dir().is_dir() {
            let mut paths: Vec<PathBuf> = fs::read_dir(self.past_dir())
                .with_context(|| format!("listing {}", self.past_dir().display()))?
                .filter_map(|e| e.ok())
                .map(|e| e.path())
                .filter(|p| p.extension().is_some_and(|ext| ext == "ics"))
                .collect();
            paths.sort();
            for path in paths {
                let text = fs::read_to_string(&path)
                    .with_context(|| format!("reading {}", path.display()))?;
                past_schedules.push(text);
            }
        }

        Ok(UserSchedule {
            current_schedule,
            past_schedules,
        })
    }

    pub fn save(&self, schedule: &UserSchedule) -> Result<()> {
        fs::create_dir_all(&self.root)
            .with_context(|| format!("creating {}", self.root.display()))?;

        match &schedule.current_schedule {
            Some(text) => fs::write(self.current_path(), text)
                .with_context(|| format!("writing {}", self.current_path().display()))?,
            None => {
                if self.current_path().exists() {
                    fs::remove_file(self.current_path()).with_context(|| {
                        format!("removing {}", self.current_path().display())
                    })?;
                }
            }
        }

        if !schedule.past_schedules.is_empty() {
            fs::create_dir_all(self.past_dir())
                .with_context(|| format!("creating {}", self.past_dir().display()))?;
        }
        for (i, text) in schedule.past_schedules.iter().enumerate() {
            let path = self.past_dir().join(format!("{i:03}.ics"));
            fs::write(&path, text).with_context(|| format!("writing {}", path.display()))?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_from_empty_directory() {
        let dir = tempfile::tempdir().unwrap();
        let store = UserStore::new(dir.path().to_path_buf());
        let user = store.load().unwrap();
        assert!(user.current_schedule.is_none());
        assert!(user.past_schedules.is_empty());
    }

    #[test]
    fn save_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = UserStore::new(dir.path().to_path_buf());

        let user = UserSchedule {
            current_schedule: Some("BEGIN:VCALENDAR\r\nEND:VCALENDAR\r\n".to_string()),
            past_schedules: vec!["newest".to_string(), "oldest".to_string()],
        };
        store.save(&user).unwrap();

        let loaded = store.load().unwrap();
        assert_eq!(loaded.current_schedule, user.current_schedule);
        assert_eq!(loaded.past_schedules, user.past_schedules);
    }

    #[test]
    fn clearing_current_removes_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = UserStore::new(dir.path().to_path_buf());

        let mut user = UserSchedule {
            current_schedule: Some("text".to_string()),
            past_schedules: Vec::new(),
        };
        store.save(&user).unwrap();

        user.finalize();
        store.save(&user).unwrap();

        let loaded = store.load().unwrap();
        assert!(loaded.current_schedule.is_none());
        assert_eq!(loaded.past_schedules, vec!["text"]);
    }
}
