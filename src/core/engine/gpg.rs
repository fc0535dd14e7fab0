//! GnuPG engine.
//!
//! Runs the `gpg` CLI against an explicit home directory:
//!
//! ```text
//! gpg --homedir <dir> <args...>
//! ```
//!
//! ## Requirements
//!
//! - `gpg` 2.1 or newer (quick key commands, loopback pinentry)
//! - The home directory must exist; gpg creates the keyring files inside it

use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use tracing::{debug, trace};

use super::{Engine, Invocation};
use crate::core::config::Config;
use crate::error::{EngineError, Result};

/// GnuPG engine using the gpg CLI
#[derive(Debug, Clone)]
pub struct Gpg {
    program: PathBuf,
    home_dir: PathBuf,
}

impl Gpg {
    /// Create an engine for a gpg binary and home directory.
    pub fn new(program: impl Into<PathBuf>, home_dir: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            home_dir: home_dir.into(),
        }
    }

    /// Create an engine from resolved configuration.
    pub fn from_config(config: &Config) -> Self {
        Self::new(&config.program, &config.home_dir)
    }

    pub fn program(&self) -> &Path {
        &self.program
    }

    /// Home directory scoping the keyring
    pub fn home_dir(&self) -> &Path {
        &self.home_dir
    }

    /// Check that the gpg binary can be run.
    pub fn check(&self) -> Result<()> {
        self.run(&Invocation::version()).map(|_| ())
    }
}

impl Engine for Gpg {
    fn run(&self, invocation: &Invocation) -> Result<String> {
        debug!(
            program = %self.program.display(),
            home_dir = %self.home_dir.display(),
            "[gpg] {}",
            invocation
        );

        let mut cmd = Command::new(&self.program);
        cmd.arg("--homedir")
            .arg(&self.home_dir)
            .args(invocation.args())
            .stdin(if invocation.input().is_some() {
                Stdio::piped()
            } else {
                Stdio::null()
            })
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());

        let mut child = cmd.spawn().map_err(|e| match e.kind() {
            ErrorKind::NotFound => EngineError::NotFound(self.program.display().to_string()),
            _ => EngineError::Spawn {
                program: self.program.clone(),
                source: e,
            },
        })?;

        // Dropping stdin closes it so gpg sees EOF after the passphrase
        let written = match (child.stdin.take(), invocation.input()) {
            (Some(mut stdin), Some(input)) => stdin.write_all(input.as_bytes()),
            _ => Ok(()),
        };

        // Always reap the child; its exit status explains a failed write
        let output = child.wait_with_output().map_err(|e| EngineError::Spawn {
            program: self.program.clone(),
            source: e,
        })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            debug!(status = %output.status, "gpg failed");
            return Err(EngineError::Failed {
                status: output.status,
                stderr,
            }
            .into());
        }

        match written {
            Err(e) if e.kind() == ErrorKind::BrokenPipe => {
                debug!("gpg closed stdin before reading its input");
            }
            Err(e) => {
                return Err(EngineError::Spawn {
                    program: self.program.clone(),
                    source: e,
                }
                .into())
            }
            Ok(()) => {}
        }

        // User ids are not guaranteed to be UTF-8; bad bytes must not sink
        // the whole listing
        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        trace!(stdout_len = stdout.len(), "gpg finished");
        Ok(stdout)
    }

    fn name(&self) -> &'static str {
        "gpg"
    }
}
