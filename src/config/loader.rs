// src/config/loader.rs

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::model::{ConfigFile, RawConfigFile};
use crate::errors::Result;

/// Load a configuration file from a given path and return the raw `RawConfigFile`.
///
/// This only performs TOML deserialization; it does **not** perform semantic
/// validation. Use [`load_and_validate`] for that.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<RawConfigFile> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;

    let config: RawConfigFile = toml::from_str(&contents)?;

    Ok(config)
}

/// Load a configuration file from path and validate it.
pub fn load_and_validate(path: impl AsRef<Path>) -> Result<ConfigFile> {
    let raw_config = load_from_path(&path)?;
    let config = ConfigFile::try_from(raw_config)?;
    Ok(config)
}

/// Resolve the raw config to start from.
///
/// - An explicitly given path must exist and parse.
/// - Otherwise [`default_config_path`] is used when present.
/// - Otherwise the built-in defaults apply.
///
/// Callers apply CLI overrides to the returned value and then validate it.
pub fn load_raw_or_default(path: Option<&Path>) -> Result<RawConfigFile> {
    match path {
        Some(path) => {
            debug!(path = %path.display(), "loading config file");
            load_from_path(path)
        }
        None => {
            let default_path = default_config_path();
            if default_path.is_file() {
                debug!(path = %default_path.display(), "loading default config file");
                load_from_path(&default_path)
            } else {
                debug!("no config file found, using built-in defaults");
                Ok(RawConfigFile::default())
            }
        }
    }
}

/// Default config location: `Dagcheck.toml` in the current working directory.
pub fn default_config_path() -> PathBuf {
    PathBuf::from("Dagcheck.toml")
}
