//! Remove command - delete a primary key or a single sub-key.

use dialoguer::Confirm;

use crate::cli::{output, GlobalArgs};
use crate::error::{KeyringError, Result};

/// Delete a key.
pub fn execute(global: &GlobalArgs, fingerprint: &str, yes: bool) -> Result<()> {
    let keyring = global.keyring()?;
    let key = keyring
        .private_key_by_fingerprint(fingerprint)?
        .ok_or_else(|| KeyringError::NotFound(fingerprint.to_string()))?;

    if !yes && !confirm(&key.to_string(), key.is_primary())? {
        output::dimmed("cancelled");
        return Ok(());
    }

    if key.is_primary() {
        keyring.delete_primary_key(&key)?;
        output::success(&format!("deleted {} and its sub-keys", output::fingerprint(fingerprint)));
    } else {
        keyring.delete_sub_key(&key)?;
        output::success(&format!("deleted sub-key {}", output::fingerprint(fingerprint)));
    }

    Ok(())
}

fn confirm(key: &str, primary: bool) -> Result<bool> {
    let prompt = if primary {
        format!("Delete {} and all of its sub-keys?", key)
    } else {
        format!("Delete sub-key {}?", key)
    };

    Confirm::new()
        .with_prompt(prompt)
        .default(false)
        .interact()
        .map_err(Into::into)
}
