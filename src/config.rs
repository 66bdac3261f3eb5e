//! Server configuration from environment variables.
//!
//! - `HOST` (default `0.0.0.0`) and `PORT` (default `8080`)
//! - `DATA_DIR`: when set, rooms are stored as JSON files there; otherwise in memory
//! - `PLAYERS`: comma-separated roster of four names

use std::path::PathBuf;
use std::sync::Arc;

use thiserror::Error;

use crate::models::{Roster, RosterError};
use crate::store::{FileStore, MemoryStore, RoomStore};

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid PORT {0:?}")]
    InvalidPort(String),

    #[error("Invalid PLAYERS: {0}")]
    InvalidPlayers(#[from] RosterError),
}

/// Settings for the `web` binary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub data_dir: Option<PathBuf>,
    pub roster: Roster,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            data_dir: None,
            roster: Roster::default(),
        }
    }
}

impl ServerConfig {
    /// Read from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read from any key lookup. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let host = get("HOST").unwrap_or_else(default_host);
        let port = match get("PORT") {
            Some(p) => p
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidPort(p.clone()))?,
            None => default_port(),
        };
        let data_dir = get("DATA_DIR").map(PathBuf::from);
        let roster = match get("PLAYERS") {
            Some(list) => Roster::parse(&list)?,
            None => Roster::default(),
        };

        Ok(Self {
            host,
            port,
            data_dir,
            roster,
        })
    }

    /// The store selected by `data_dir`.
    pub fn build_store(&self) -> Arc<dyn RoomStore> {
        match &self.data_dir {
            Some(dir) => Arc::new(FileStore::new(dir.clone())),
            None => Arc::new(MemoryStore::new()),
        }
    }
}
