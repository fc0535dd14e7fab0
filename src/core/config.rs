//! Engine configuration.
//!
//! Resolves which gpg binary to run and which home directory scopes the
//! keyring. Values come from, in order: explicit overrides (CLI flags or
//! their environment variables), an optional TOML file, then platform
//! defaults. Nothing is read from process-wide state after construction.
//!
//! ```toml
//! [engine]
//! program = "/usr/local/bin/gpg"
//! home_dir = "/home/alice/.keysmith/gnupg"
//! ```

use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::core::constants;
use crate::error::{ConfigError, Result};

/// Resolved engine configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// gpg binary
    pub program: PathBuf,
    /// Home directory scoping an independent keyring
    pub home_dir: PathBuf,
}

/// On-disk configuration file.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    #[serde(default)]
    engine: EngineSection,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct EngineSection {
    program: Option<PathBuf>,
    home_dir: Option<PathBuf>,
}

impl Config {
    pub fn new(program: impl Into<PathBuf>, home_dir: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            home_dir: home_dir.into(),
        }
    }

    /// Resolve configuration from overrides, an optional file and defaults.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ReadFile` or `ConfigError::Parse` if the file
    /// cannot be loaded, and `ConfigError::NoHomeDir` if no home directory
    /// was given and none can be derived for this platform.
    pub fn resolve(
        program: Option<PathBuf>,
        home_dir: Option<PathBuf>,
        file: Option<&Path>,
    ) -> Result<Self> {
        let section = match file {
            Some(path) => Self::load_file(path)?.engine,
            None => EngineSection::default(),
        };

        let program = program
            .or(section.program)
            .unwrap_or_else(Self::default_program);
        let home_dir = match home_dir.or(section.home_dir) {
            Some(dir) => dir,
            None => Self::default_home_dir()?,
        };

        debug!(
            program = %program.display(),
            home_dir = %home_dir.display(),
            "resolved config"
        );

        Ok(Self { program, home_dir })
    }

    /// gpg on `PATH`, or the bare program name when it cannot be located.
    pub fn default_program() -> PathBuf {
        which::which(constants::GPG_PROGRAM)
            .unwrap_or_else(|_| PathBuf::from(constants::GPG_PROGRAM))
    }

    /// Platform gpg home: `%APPDATA%\gnupg` on Windows, `~/.gnupg` elsewhere.
    pub fn default_home_dir() -> Result<PathBuf> {
        #[cfg(windows)]
        let dir = dirs::data_dir().map(|d| d.join(constants::GPG_HOME_DIR));
        #[cfg(not(windows))]
        let dir = dirs::home_dir().map(|d| d.join(format!(".{}", constants::GPG_HOME_DIR)));

        dir.ok_or_else(|| ConfigError::NoHomeDir.into())
    }

    fn load_file(path: &Path) -> Result<ConfigFile> {
        debug!(path = %path.display(), "loading config");

        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadFile {
            path: path.to_path_buf(),
            source,
        })?;
        let file: ConfigFile = toml::from_str(&contents).map_err(ConfigError::Parse)?;
        Ok(file)
    }
}
