//! Create command.
//!
//! Generate a primary key for a name and email.

use crate::cli::{output, GlobalArgs, PassphraseArgs};
use crate::error::Result;

/// Create a primary key.
pub fn execute(
    global: &GlobalArgs,
    name: Option<String>,
    email: &str,
    passphrase: &PassphraseArgs,
    json: bool,
) -> Result<()> {
    let name = name.unwrap_or_else(whoami::realname);
    let passphrase = passphrase.resolve()?;

    let keyring = global.keyring()?;
    let key = keyring.create_primary_key(&name, email, &passphrase)?;

    if json {
        return output::key_json(&key);
    }

    output::success(&format!("created {}", output::fingerprint(key.fingerprint())));
    if let Some(username) = key.username() {
        output::kv("user id", username);
    }
    output::hint(&format!("add a signing key: keysmith subkey add {}", key.fingerprint()));
    Ok(())
}
