//! Configuration file discovery, reading, and writing.
//!
//! A config file is found by checking, in order: the `KANRI_CONFIG`
//! environment variable, the current directory (`kanri.json5`,
//! `kanri.json`), and the user config directory
//! (`~/.config/kanri/config.json5`, `~/.config/kanri/config.json`).
//!
//! Files ending in `.json5` are parsed as JSON5 (comments and trailing
//! commas allowed); anything else is parsed as strict JSON. Writing
//! always produces pretty-printed JSON.

use std::path::{Path, PathBuf};

use crate::error::{ConfigError, Result};

/// Environment variable that points directly at a config file.
const CONFIG_PATH_ENV: &str = "KANRI_CONFIG";

/// File names probed in the current directory, in priority order.
const LOCAL_FILE_NAMES: &[&str] = &["kanri.json5", "kanri.json"];

/// Directory under the user config root.
const USER_CONFIG_DIR: &str = "kanri";

/// File names probed in the user config directory, in priority order.
const USER_FILE_NAMES: &[&str] = &["config.json5", "config.json"];

/// Finds the configuration file path, if any.
///
/// A path given via `KANRI_CONFIG` wins unconditionally, even if the file
/// does not exist (so a typo surfaces as a read error instead of being
/// silently ignored). Otherwise the first existing candidate is used.
///
/// # Examples
///
/// ```no_run
/// use kanri_config::persistence::find_config_file;
///
/// if let Some(path) = find_config_file() {
///     println!("Found config at: {}", path.display());
/// }
/// ```
#[must_use]
pub fn find_config_file() -> Option<PathBuf> {
    if let Some(path) = std::env::var_os(CONFIG_PATH_ENV) {
        return Some(PathBuf::from(path));
    }

    LOCAL_FILE_NAMES
        .iter()
        .map(PathBuf::from)
        .find(|p| p.exists())
        .or_else(user_config_file)
}

/// Returns the first existing config file in the user config directory.
fn user_config_file() -> Option<PathBuf> {
    let dir = user_config_dir().ok()?;
    USER_FILE_NAMES.iter().map(|n| dir.join(n)).find(|p| p.exists())
}

/// Returns the user configuration directory, typically `~/.config/kanri/`.
///
/// # Errors
///
/// Returns an error if the home directory cannot be determined.
pub fn user_config_dir() -> Result<PathBuf> {
    dirs::config_dir()
        .map(|d| d.join(USER_CONFIG_DIR))
        .ok_or(ConfigError::NoHomeDirectory)
}

/// Reads and parses a configuration file.
///
/// The parser is picked by extension: `.json5` files go through the JSON5
/// parser, everything else through the strict JSON parser.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
///
/// # Examples
///
/// ```no_run
/// use kanri_config::Config;
/// use kanri_config::persistence::read_config_file;
///
/// # fn main() -> kanri_config::Result<()> {
/// let config: Config = read_config_file("kanri.json5")?;
/// # Ok(())
/// # }
/// ```
pub fn read_config_file<T: serde::de::DeserializeOwned>(path: impl AsRef<Path>) -> Result<T> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadFile {
        path: path.to_path_buf(),
        source: e,
    })?;

    if path.extension().is_some_and(|ext| ext == "json5") {
        serde_json5::from_str(&content).map_err(ConfigError::from)
    } else {
        serde_json::from_str(&content).map_err(|e| ConfigError::ParseJson {
            path: path.to_path_buf(),
            source: e,
        })
    }
}

/// Writes a configuration to a file as pretty-printed JSON with a
/// trailing newline, creating parent directories as needed.
///
/// (Output is plain JSON regardless of extension; serde_json5 does not
/// serialize to JSON5.)
///
/// # Errors
///
/// Returns an error if the parent directory cannot be created, the value
/// cannot be serialized, or the file cannot be written.
pub fn write_config_file<T: serde::Serialize>(path: impl AsRef<Path>, config: &T) -> Result<()> {
    let path = path.as_ref();

    if let Some(parent) = path.parent().filter(|p| !p.exists()) {
        std::fs::create_dir_all(parent).map_err(|e| ConfigError::WriteFile {
            path: path.to_path_buf(),
            source: e,
        })?;
    }

    let mut content = serde_json::to_string_pretty(config)?;
    content.push('\n');

    std::fs::write(path, content).map_err(|e| ConfigError::WriteFile {
        path: path.to_path_buf(),
        source: e,
    })
}
