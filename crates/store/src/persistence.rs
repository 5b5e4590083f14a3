//! Durable storage for the store state.
//!
//! The entire store - task list, project list, and active filter - is one
//! JSON record at a fixed path. Loading an absent file yields the empty
//! state; every mutation writes the whole record back. Reads are always
//! served from the in-memory copy, never re-fetched from disk.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use kanri_protocol::{Project, Task, TaskFilter};

use crate::error::{Result, StoreError};

/// Name of the state file inside the data directory.
const STORE_FILE_NAME: &str = "store.json";

/// Application data directory name.
const DATA_DIR: &str = "kanri";

/// Returns the default state file path.
///
/// This is typically `~/.local/share/kanri/store.json` on Linux.
///
/// # Errors
///
/// Returns an error if the user data directory cannot be determined.
///
/// # Examples
///
/// ```no_run
/// use kanri_store::default_store_path;
///
/// let path = default_store_path().unwrap();
/// println!("State lives at: {}", path.display());
/// ```
pub fn default_store_path() -> Result<PathBuf> {
    dirs::data_dir()
        .map(|d| d.join(DATA_DIR).join(STORE_FILE_NAME))
        .ok_or(StoreError::NoDataDirectory)
}

/// The single persisted record: all tasks, all projects, and the active
/// filter.
///
/// There is no schema version; a format change requires a manual
/// migration of the state file.
///
/// # Examples
///
/// ```
/// use kanri_store::StoreState;
///
/// let state = StoreState::default();
/// assert!(state.tasks.is_empty());
/// assert!(state.projects.is_empty());
/// assert!(state.filter.is_match_all());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreState {
    /// Every task, in insertion order.
    #[serde(default)]
    pub tasks: Vec<Task>,

    /// Every project, in insertion order.
    #[serde(default)]
    pub projects: Vec<Project>,

    /// The last-set filter. Defaults to match-all.
    #[serde(default)]
    pub filter: TaskFilter,
}

/// Owns the state file path and performs the reads and writes.
///
/// # Examples
///
/// ```no_run
/// use kanri_store::{Storage, StoreState};
///
/// # fn main() -> kanri_store::Result<()> {
/// let storage = Storage::at_default_location()?;
/// let state = storage.load()?;
/// storage.save(&state)?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Storage {
    path: PathBuf,
}

impl Storage {
    /// Creates a storage handle for the given state file path.
    ///
    /// # Examples
    ///
    /// ```
    /// use kanri_store::Storage;
    ///
    /// let storage = Storage::new("/tmp/kanri-test/store.json");
    /// assert!(storage.path().ends_with("store.json"));
    /// ```
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Creates a storage handle at the default state file location.
    ///
    /// # Errors
    ///
    /// Returns an error if the user data directory cannot be determined.
    pub fn at_default_location() -> Result<Self> {
        Ok(Self::new(default_store_path()?))
    }

    /// Returns the path of the state file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the state record from disk.
    ///
    /// An absent file is not an error: it yields the empty state (no
    /// tasks, no projects, match-all filter).
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load(&self) -> Result<StoreState> {
        if !self.path.exists() {
            return Ok(StoreState::default());
        }

        let content = std::fs::read_to_string(&self.path).map_err(|e| StoreError::ReadState {
            path: self.path.clone(),
            source: e,
        })?;

        serde_json::from_str(&content).map_err(|e| StoreError::ParseState {
            path: self.path.clone(),
            source: e,
        })
    }

    /// Writes the whole state record to disk as pretty-printed JSON.
    ///
    /// Creates parent directories as needed.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails, the parent directory
    /// cannot be created, or the file cannot be written.
    pub fn save(&self, state: &StoreState) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.exists()) {
            std::fs::create_dir_all(parent).map_err(|e| StoreError::WriteState {
                path: self.path.clone(),
                source: e,
            })?;
        }

        let content = serde_json::to_string_pretty(state)?;

        std::fs::write(&self.path, content).map_err(|e| StoreError::WriteState {
            path: self.path.clone(),
            source: e,
        })
    }
}
