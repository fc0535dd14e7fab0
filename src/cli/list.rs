//! List command.
//!
//! List the secret or public keyring.

use crate::cli::{output, GlobalArgs};
use crate::error::Result;

/// List keys.
pub fn execute(global: &GlobalArgs, public: bool, json: bool) -> Result<()> {
    let keyring = global.keyring()?;
    let keys = if public {
        keyring.list_public_keys()?
    } else {
        keyring.list_private_keys()?
    };

    if json {
        let result = serde_json::json!({
            "keys": &keys,
            "count": keys.len()
        });
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else if keys.is_empty() {
        output::dimmed("no keys");
    } else {
        let primaries = keys.iter().filter(|k| k.is_primary()).count();
        output::header(&format!(
            "{} {} keys ({} primary)",
            keys.len(),
            if public { "public" } else { "secret" },
            primaries
        ));
        output::rule();
        for key in &keys {
            output::key_row(key);
        }
    }

    Ok(())
}
