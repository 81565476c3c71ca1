//! File-backed State Store Implementation
//!
//! This module implements the `StateStore` trait against a single JSON file.
//! It handles all filesystem access and converts I/O errors to domain
//! errors.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use lumora_domain::cms::{AppState, StoreError};
use lumora_domain::ports::StateStore;
use tracing::{debug, info, instrument, warn};

/// File name of the persisted state document.
pub const STATE_FILE: &str = "state.json";

/// Directory under the platform data dir that owns the document.
const APP_DIR: &str = "lumora";

/// The default location of the state document:
/// `<platform data dir>/lumora/state.json`.
pub fn default_state_path() -> PathBuf {
    let mut path = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push(APP_DIR);
    path.push(STATE_FILE);
    path
}

/// File-based implementation of the [`StateStore`] port
///
/// One store instance owns one fixed path. Every save overwrites the whole
/// document; there is no partial write, no versioning, and no locking — in
/// an environment with concurrent writers the last writer wins.
pub struct FileStateStore {
    path: PathBuf,
}

impl FileStateStore {
    /// Create a store bound to the given document path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        info!(path = %path.display(), "Initializing FileStateStore");
        Self { path }
    }

    /// Create a store at the platform-default location.
    pub fn at_default_location() -> Self {
        Self::new(default_state_path())
    }

    /// The document path this store reads and writes.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl StateStore for FileStateStore {
    #[instrument(skip(self), fields(path = %self.path.display()))]
    fn load(&self) -> Option<AppState> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                debug!("no persisted state document");
                return None;
            }
            Err(err) => {
                warn!(error = %err, "failed to read persisted state; discarding");
                return None;
            }
        };

        match serde_json::from_str(&raw) {
            Ok(state) => {
                info!(bytes = raw.len(), "Loaded persisted state");
                Some(state)
            }
            Err(err) => {
                warn!(error = %err, "persisted state is not parseable; discarding");
                None
            }
        }
    }

    #[instrument(skip(self, state), fields(path = %self.path.display()))]
    fn save(&self, state: &AppState) -> Result<(), StoreError> {
        let json = serde_json::to_string(state)
            .map_err(|err| StoreError::serialization(err.to_string()))?;

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|err| {
                StoreError::write_failure(format!(
                    "failed to create '{}': {}",
                    parent.display(),
                    err
                ))
            })?;
        }

        fs::write(&self.path, json).map_err(|err| {
            StoreError::write_failure(format!("failed to write '{}': {}", self.path.display(), err))
        })?;

        debug!("Persisted state document");
        Ok(())
    }
}
