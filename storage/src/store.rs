//! JSON file store for [`BotState`].
//!
//! `load` never fails the caller: a missing file yields the default state and
//! a corrupt or invalid snapshot yields the default state with a logged
//! warning. `save` writes the whole snapshot to `<path>.tmp` and renames it
//! over the target so a crash mid-write cannot leave a torn file.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{info, warn};

use crate::state::BotState;

const TEMP_FILE_SUFFIX: &str = ".tmp";

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Durable store for the bot state, backed by a single JSON file.
#[derive(Debug, Clone)]
pub struct StateStore {
    path: PathBuf,
}

impl StateStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the snapshot. Absent, unreadable, or invalid data falls back to
    /// the default state; the caller always gets a usable state.
    pub fn load(&self) -> BotState {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                info!(path = %self.path.display(), "No data file, starting with defaults");
                return BotState::default();
            }
            Err(e) => {
                warn!(error = %e, path = %self.path.display(), "Failed to read data file, using defaults");
                return BotState::default();
            }
        };

        match serde_json::from_slice::<BotState>(&bytes) {
            Ok(mut state) => {
                state.normalize();
                state
            }
            Err(e) => {
                warn!(error = %e, path = %self.path.display(), "Invalid data file, using defaults");
                BotState::default()
            }
        }
    }

    /// Writes the full snapshot atomically (temp file + rename).
    pub fn save(&self, state: &BotState) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let bytes = serde_json::to_vec_pretty(state)?;
        let tmp = PathBuf::from(format!("{}{}", self.path.display(), TEMP_FILE_SUFFIX));
        fs::write(&tmp, &bytes)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}
