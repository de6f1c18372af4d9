//! Application settings read from the environment.
//!
//! | Variable | Default |
//! |---|---|
//! | `OFICINA_DB_PATH` | `<user data dir>/oficina/oficina.db` |
//! | `OFICINA_CHANNEL_BUFFER` | `32` |
//!
//! A `.env` file in the working directory is loaded first (see `main`).

use std::env;
use std::path::PathBuf;
use thiserror::Error;

pub const DB_PATH_VAR: &str = "OFICINA_DB_PATH";
pub const CHANNEL_BUFFER_VAR: &str = "OFICINA_CHANNEL_BUFFER";

const APP_DIR: &str = "oficina";
const DB_FILE: &str = "oficina.db";
const DEFAULT_CHANNEL_BUFFER: usize = 32;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum SettingsError {
    #[error("{var} must be a positive number, got {value:?}")]
    InvalidNumber { var: &'static str, value: String },

    #[error("No per-user data directory on this platform; set {DB_PATH_VAR}")]
    NoDataDir,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// The single SQLite file for this installation.
    pub database_path: PathBuf,
    /// Capacity of each actor's request channel.
    pub channel_buffer: usize,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, SettingsError> {
        Self::from_lookup(|var| env::var(var).ok())
    }

    /// Builds the config from any variable source. `from_env` passes the process environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, SettingsError> {
        let database_path = match lookup(DB_PATH_VAR).filter(|v| !v.trim().is_empty()) {
            Some(path) => PathBuf::from(path),
            None => default_database_path()?,
        };

        let channel_buffer = match lookup(CHANNEL_BUFFER_VAR) {
            Some(raw) => raw
                .trim()
                .parse::<usize>()
                .ok()
                .filter(|n| *n > 0)
                .ok_or(SettingsError::InvalidNumber {
                    var: CHANNEL_BUFFER_VAR,
                    value: raw,
                })?,
            None => DEFAULT_CHANNEL_BUFFER,
        };

        Ok(Self {
            database_path,
            channel_buffer,
        })
    }
}

pub fn default_database_path() -> Result<PathBuf, SettingsError> {
    dirs::data_dir()
        .map(|dir| dir.join(APP_DIR).join(DB_FILE))
        .ok_or(SettingsError::NoDataDir)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |var| map.get(var).cloned()
    }

    #[test]
    fn test_explicit_values() {
        let config = AppConfig::from_lookup(lookup(&[
            (DB_PATH_VAR, "/tmp/shop/oficina.db"),
            (CHANNEL_BUFFER_VAR, "8"),
        ]))
        .unwrap();
        assert_eq!(config.database_path, PathBuf::from("/tmp/shop/oficina.db"));
        assert_eq!(config.channel_buffer, 8);
    }

    #[test]
    fn test_rejects_bad_buffer() {
        let err = AppConfig::from_lookup(lookup(&[
            (DB_PATH_VAR, "x.db"),
            (CHANNEL_BUFFER_VAR, "0"),
        ]))
        .unwrap_err();
        assert!(matches!(err, SettingsError::InvalidNumber { .. }));
    }

    #[test]
    fn test_default_path_ends_with_app_file() {
        if let Ok(path) = default_database_path() {
            assert!(path.ends_with("oficina/oficina.db"));
        }
        let config = AppConfig::from_lookup(lookup(&[(DB_PATH_VAR, "x.db")])).unwrap();
        assert_eq!(config.channel_buffer, 32);
    }
}
