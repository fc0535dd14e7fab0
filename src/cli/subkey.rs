//! Sub-key commands.

use crate::cli::{output, GlobalArgs, PassphraseArgs};
use crate::error::{KeyringError, Result};

/// Add a signing sub-key to a primary key.
pub fn add(
    global: &GlobalArgs,
    fingerprint: &str,
    passphrase: &PassphraseArgs,
    json: bool,
) -> Result<()> {
    let keyring = global.keyring()?;

    let primary = keyring
        .private_key_by_fingerprint(fingerprint)?
        .filter(|key| key.is_primary())
        .ok_or_else(|| KeyringError::NotFound(format!("primary key {}", fingerprint)))?;

    let passphrase = passphrase.resolve()?;
    let sub = keyring.create_sub_key(&primary, &passphrase)?;

    if json {
        return output::key_json(&sub);
    }

    output::success(&format!("added sub-key {}", output::fingerprint(sub.fingerprint())));
    output::kv("expires", sub.expiration());
    Ok(())
}
