//! Error types for store operations.
//!
//! Validation failures and persistence failures are distinct: the former
//! reject the mutation outright, while the latter occur after the
//! in-memory state has already been updated (the in-memory copy stays
//! authoritative for the session).

use std::path::PathBuf;

use kanri_protocol::{ProjectId, TaskId};

/// Errors that can occur during store operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// A task was added or updated with an empty (post-trim) title.
    #[error("task title must not be empty")]
    EmptyTitle,

    /// A project was added or updated with an empty (post-trim) name.
    #[error("project name must not be empty")]
    EmptyName,

    /// A task was added with an id that already exists in the store.
    #[error("a task with id {0} already exists")]
    DuplicateTaskId(TaskId),

    /// A project was added with an id that already exists in the store.
    #[error("a project with id {0} already exists")]
    DuplicateProjectId(ProjectId),

    /// Failed to read the state file.
    #[error("failed to read state file at {path}: {source}")]
    ReadState {
        /// The path that could not be read.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to write the state file.
    #[error("failed to write state file at {path}: {source}")]
    WriteState {
        /// The path that could not be written.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The state file exists but could not be parsed.
    #[error("failed to parse state file at {path}: {source}")]
    ParseState {
        /// The path of the malformed file.
        path: PathBuf,
        /// The underlying parse error.
        #[source]
        source: serde_json::Error,
    },

    /// Failed to serialize the state record.
    #[error("failed to serialize state: {0}")]
    SerializeState(#[from] serde_json::Error),

    /// Failed to determine the user data directory.
    #[error("could not determine data directory")]
    NoDataDirectory,
}

/// A specialized Result type for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;
