//! Show command - look up one key by fingerprint.

use crate::cli::{output, GlobalArgs};
use crate::error::{KeyringError, Result};

/// Show a key.
pub fn execute(global: &GlobalArgs, fingerprint: &str, public: bool, json: bool) -> Result<()> {
    let keyring = global.keyring()?;
    let key = if public {
        keyring.public_key_by_fingerprint(fingerprint)?
    } else {
        keyring.private_key_by_fingerprint(fingerprint)?
    };
    let key = key.ok_or_else(|| KeyringError::NotFound(fingerprint.to_string()))?;

    if json {
        output::key_json(&key)
    } else {
        output::key_detail(&key);
        Ok(())
    }
}
