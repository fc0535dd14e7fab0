//! Error types.
//!
//! Errors are grouped by the layer that raises them. Library callers match on
//! [`Error`]; a missing record is never an error at the library level, lookups
//! return `Ok(None)` instead.

use std::path::PathBuf;
use std::process::ExitStatus;

use thiserror::Error;

/// Top-level error.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Engine(#[from] EngineError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Keyring(#[from] KeyringError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("prompt failed: {0}")]
    Prompt(#[from] dialoguer::Error),
}

/// Failures invoking the external gpg engine.
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("gpg not found: {0}. Install GnuPG from https://gnupg.org/download/")]
    NotFound(String),

    #[error("failed to spawn {}: {source}", program.display())]
    Spawn {
        program: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The engine exited non-zero. Diagnostics are carried, never parsed.
    #[error("gpg exited with {status}: {stderr}")]
    Failed { status: ExitStatus, stderr: String },
}

/// Configuration loading failures.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", path.display())]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("unable to determine a default gpg home directory")]
    NoHomeDir,
}

/// Lifecycle operation failures.
#[derive(Error, Debug)]
pub enum KeyringError {
    /// gpg reported success but the follow-up listing was empty.
    #[error("gpg created a key but the keyring listing is empty")]
    MissingCreatedKey,

    #[error("key not found: {0}")]
    NotFound(String),
}

pub type Result<T> = std::result::Result<T, Error>;
