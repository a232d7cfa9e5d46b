use crate::domain::menu::Choice;
use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// On-disk snapshot of everything worth keeping between runs: the menu, the
/// angle the wheel settled at, and the last winner.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersistedWheel {
    pub menu: Vec<Choice>,
    pub last_angle: f32,
    #[serde(default)]
    pub last_winner: Option<String>,
    pub saved_at: DateTime<Utc>,
}

impl PersistedWheel {
    pub fn new(menu: Vec<Choice>, last_angle: f32, last_winner: Option<String>) -> Self {
        Self {
            menu,
            last_angle,
            last_winner,
            saved_at: Utc::now(),
        }
    }
}

/// JSON persistence under the user's state directory.
pub struct MenuStore {
    file_path: PathBuf,
}

impl MenuStore {
    /// Store rooted at `~/.dinnerwheel`, or at the given override directory.
    pub fn new(dir_override: Option<&str>) -> Result<Self> {
        let state_dir = match dir_override {
            Some(dir) => PathBuf::from(dir),
            None => {
                let home = std::env::var("HOME").context("Could not find HOME directory")?;
                PathBuf::from(home).join(".dinnerwheel")
            }
        };
        Self::at_dir(&state_dir)
    }

    /// Store rooted at an explicit directory (created if missing).
    pub fn at_dir(dir: &Path) -> Result<Self> {
        if !dir.exists() {
            fs::create_dir_all(dir).context("Failed to create state directory")?;
        }
        Ok(Self {
            file_path: dir.join("wheel.json"),
        })
    }

    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    /// Loads the stored snapshot. `Ok(None)` means nothing has been saved
    /// yet; a parse failure is an error the caller decides how to survive.
    pub fn load(&self) -> Result<Option<PersistedWheel>> {
        if !self.file_path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&self.file_path).context("Failed to read wheel file")?;
        let persisted: PersistedWheel =
            serde_json::from_str(&content).context("Failed to parse wheel JSON")?;

        info!("Loaded wheel state from {:?}", self.file_path);
        Ok(Some(persisted))
    }

    /// Saves atomically: write to a temp file, then rename over the old
    /// one, so a crash mid-write never leaves a half-written menu.
    pub fn save(&self, persisted: &PersistedWheel) -> Result<()> {
        let content =
            serde_json::to_string_pretty(persisted).context("Failed to serialize wheel state")?;

        let temp_path = self.file_path.with_extension("tmp");
        fs::write(&temp_path, content).context("Failed to write temp wheel file")?;
        fs::rename(&temp_path, &self.file_path).context("Failed to rename wheel file")?;

        info!("Saved wheel state to {:?}", self.file_path);
        Ok(())
    }
}
