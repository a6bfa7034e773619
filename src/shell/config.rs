// Service configuration.
//
// - Bind address and users file from environment variables.
// - Users file parsing into seeded users.

use serde::Deserialize;
use std::net::{AddrParseError, SocketAddr};
use std::path::{Path, PathBuf};
use thiserror::Error;
use uuid::Uuid;

use crate::shared::infrastructure::identity::User;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid TRACES_BIND_ADDR '{value}': {source}")]
    BindAddr {
        value: String,
        #[source]
        source: AddrParseError,
    },

    #[error("failed to read users file {path}: {source}")]
    ReadUsers {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse users file {path}: {source}")]
    ParseUsers {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub bind_addr: SocketAddr,
    pub users_file: Option<PathBuf>,
}

impl Config {
    /// Reads configuration from environment variables.
    ///
    /// | Variable            | Default        |
    /// |---------------------|----------------|
    /// | `TRACES_BIND_ADDR`  | `0.0.0.0:8080` |
    /// | `TRACES_USERS_FILE` | unset          |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let value = lookup("TRACES_BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = value
            .parse()
            .map_err(|source| ConfigError::BindAddr { value, source })?;
        let users_file = lookup("TRACES_USERS_FILE")
            .filter(|path| !path.trim().is_empty())
            .map(PathBuf::from);
        Ok(Self {
            bind_addr,
            users_file,
        })
    }
}

/// A user entry in the users file.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct SeedUser {
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    pub password_hash: String,
    pub token: Option<String>,
}

impl SeedUser {
    /// The user with a freshly assigned id, and its pre-issued token if any.
    pub fn into_user(self) -> (User, Option<String>) {
        let user = User {
            user_id: Uuid::now_v7().to_string(),
            username: self.username,
            email: self.email,
            first_name: self.first_name,
            last_name: self.last_name,
            password_hash: self.password_hash,
        };
        (user, self.token)
    }
}

pub fn load_seed_users(path: &Path) -> Result<Vec<SeedUser>, ConfigError> {
    let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadUsers {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| ConfigError::ParseUsers {
        path: path.to_path_buf(),
        source,
    })
}
