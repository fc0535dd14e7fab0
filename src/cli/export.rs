//! Export command.
//!
//! Print the armored public key block, exactly as gpg wrote it.

use crate::cli::{output, GlobalArgs};
use crate::error::{KeyringError, Result};

/// Export a public key block.
pub fn execute(global: &GlobalArgs, fingerprint: &str) -> Result<()> {
    let keyring = global.keyring()?;
    let key = keyring
        .public_key_by_fingerprint(fingerprint)?
        .ok_or_else(|| KeyringError::NotFound(fingerprint.to_string()))?;

    output::data(&keyring.public_key_block(&key)?);
    Ok(())
}
