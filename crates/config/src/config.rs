//! Core configuration struct and loading logic.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use kanri_calendar::WeekStart;

use crate::error::{ConfigError, Result};
use crate::persistence::{find_config_file, read_config_file, write_config_file};

/// The main configuration struct for the kanri application.
///
/// Everything is optional: with no config file present the defaults apply
/// (default state file location, Sunday-first weeks).
///
/// # Examples
///
/// ```
/// use kanri_calendar::WeekStart;
/// use kanri_config::Config;
///
/// let config = Config::default();
/// assert!(config.data_file.is_none());
/// assert_eq!(config.week_start, WeekStart::Sunday);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Override for the state file path.
    ///
    /// When unset, the store uses its default location in the user data
    /// directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_file: Option<PathBuf>,

    /// The day the calendar week starts on.
    #[serde(default)]
    pub week_start: WeekStart,
}

impl Config {
    /// Creates a new default configuration.
    ///
    /// # Examples
    ///
    /// ```
    /// use kanri_config::Config;
    ///
    /// let config = Config::new();
    /// assert_eq!(config, Config::default());
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from the default file locations.
    ///
    /// Searches `./kanri.json5`, `./kanri.json`, then the user config
    /// directory. If no configuration file is found, returns the default
    /// configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if a configuration file is found but cannot be
    /// read or parsed, or if it fails validation.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use kanri_config::Config;
    ///
    /// # fn example() -> kanri_config::Result<()> {
    /// let config = Config::load()?;
    /// println!("Week starts on {:?}", config.week_start);
    /// # Ok(())
    /// # }
    /// ```
    pub fn load() -> Result<Self> {
        match find_config_file() {
            Some(path) => Self::load_from(path),
            None => Ok(Self::default()),
        }
    }

    /// Loads configuration from a specific file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or if it
    /// fails validation.
    pub fn load_from(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let config: Config = read_config_file(path)?;
        config.validate()?;
        Ok(config)
    }

    /// Saves the configuration to a file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn save_to(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        write_config_file(path, self)
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if `data_file` is set to an empty path.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::path::PathBuf;
    /// use kanri_config::Config;
    ///
    /// let mut config = Config::default();
    /// assert!(config.validate().is_ok());
    ///
    /// config.data_file = Some(PathBuf::new());
    /// assert!(config.validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<()> {
        if self
            .data_file
            .as_ref()
            .is_some_and(|p| p.as_os_str().is_empty())
        {
            return Err(ConfigError::EmptyDataFile);
        }
        Ok(())
    }
}
