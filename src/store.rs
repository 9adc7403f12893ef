//! State file persistence
//!
//! The whole [`HighscoreState`] is one unit of persistence: every mutation
//! rewrites the entire file. Saves go through a sibling temp file followed by
//! an atomic rename, so a crash mid-write leaves the previous file intact
//! rather than a truncated one.
//!
//! Load policy is fail-open: an unreadable or unparseable state file is
//! logged, discarded, and replaced with an empty state. Availability of a
//! working service is prioritized over preserving unreadable data.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::error::{Error, Result};
use crate::model::HighscoreState;

/// Default state file name inside the data folder
pub const STATE_FILE_NAME: &str = "highscores.json";

/// Whole-file JSON store for the highscore state
#[derive(Debug, Clone)]
pub struct Store {
    path: PathBuf,
}

impl Store {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load state from disk.
    ///
    /// - Missing file: start empty and immediately create the file, so later
    ///   reads and writes are uniform.
    /// - Unreadable or unparseable file: warn, fall back to empty state, and
    ///   overwrite the file with it.
    ///
    /// Only a failure to write the fresh empty file is an error.
    pub fn load(&self) -> Result<HighscoreState> {
        if !self.path.exists() {
            let state = HighscoreState::default();
            self.save(&state)?;
            info!("Created new state file at {}", self.path.display());
            return Ok(state);
        }

        let parsed = fs::read_to_string(&self.path)
            .map_err(Error::from)
            .and_then(|raw| Ok(serde_json::from_str::<HighscoreState>(&raw)?));

        match parsed {
            Ok(state) => Ok(state),
            Err(e) => {
                warn!(
                    "Could not read state file {}, starting with empty state: {}",
                    self.path.display(),
                    e
                );
                let state = HighscoreState::default();
                self.save(&state)?;
                Ok(state)
            }
        }
    }

    /// Serialize and overwrite the entire state file.
    ///
    /// Writes to `<file>.tmp` and renames over the target so readers never
    /// observe a partially written file.
    pub fn save(&self, state: &HighscoreState) -> Result<()> {
        let tmp = self.path.with_extension("json.tmp");
        let json = serde_json::to_string_pretty(state)?;
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}
