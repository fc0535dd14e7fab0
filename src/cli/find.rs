//! Find command - look up a secret key by email.

use crate::cli::{output, GlobalArgs};
use crate::error::{KeyringError, Result};

/// Find a key by email.
pub fn execute(global: &GlobalArgs, email: &str, json: bool) -> Result<()> {
    let key = global
        .keyring()?
        .private_key_by_email(email)?
        .ok_or_else(|| KeyringError::NotFound(email.to_string()))?;

    if json {
        output::key_json(&key)
    } else {
        output::key_detail(&key);
        Ok(())
    }
}
