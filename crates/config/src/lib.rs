//! Configuration management for the kanri application.
//!
//! This crate handles loading, validating, and persisting configuration
//! from files.
//!
//! # Overview
//!
//! - [`config`]: core configuration struct and loading logic
//! - [`persistence`]: config file discovery, reading, and writing
//! - [`error`]: error types for configuration operations
//!
//! # Configuration Sources (Priority)
//!
//! 1. `KANRI_CONFIG` environment variable (a direct file path)
//! 2. Local config (`./kanri.json5` or `./kanri.json`)
//! 3. User config (`~/.config/kanri/config.json5` or
//!    `~/.config/kanri/config.json`)
//! 4. Built-in defaults
//!
//! # Example file
//!
//! ```json5
//! {
//!   // Store the state file somewhere else
//!   "data_file": "/data/kanri/store.json",
//!   // Weeks run Monday through Sunday
//!   "week_start": "monday",
//! }
//! ```
//!
//! # Examples
//!
//! ```no_run
//! use kanri_config::Config;
//!
//! # fn example() -> kanri_config::Result<()> {
//! let config = Config::load()?;
//! if let Some(path) = &config.data_file {
//!     println!("State file override: {}", path.display());
//! }
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod persistence;

// Re-export primary types at crate root for convenience
pub use config::Config;
pub use error::{ConfigError, Result};
