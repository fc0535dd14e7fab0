//! Fixed gpg argument templates.
//!
//! Every operation maps to one template with only identifying values
//! substituted. Arguments are passed to the process as a vector, never
//! through a shell, so names, emails and fingerprints need no quoting.
//! Passphrases travel on stdin (`--passphrase-fd 0`) rather than argv.

use zeroize::Zeroizing;

use crate::core::constants;

/// One engine call: arguments plus optional stdin text.
#[derive(Clone)]
pub struct Invocation {
    args: Vec<String>,
    input: Option<Zeroizing<String>>,
}

impl Invocation {
    /// Create an invocation from raw arguments.
    pub fn new<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            args: args.into_iter().map(Into::into).collect(),
            input: None,
        }
    }

    /// Attach text written to the engine's stdin.
    pub fn with_input(mut self, input: &str) -> Self {
        self.input = Some(Zeroizing::new(input.to_string()));
        self
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }

    pub fn input(&self) -> Option<&str> {
        self.input.as_ref().map(|s| s.as_str())
    }

    /// Generate a certification-only ed25519 primary key that never expires.
    pub fn generate_primary_key(user_id: &str, passphrase: &str) -> Self {
        Self::new(with_passphrase_fd([
            "--quick-generate-key",
            user_id,
            constants::KEY_ALGORITHM,
            constants::PRIMARY_USAGE,
            constants::PRIMARY_EXPIRY,
        ]))
        .with_input(passphrase)
    }

    /// Add an ed25519 signing sub-key valid for one year.
    pub fn add_sub_key(primary_fingerprint: &str, passphrase: &str) -> Self {
        Self::new(with_passphrase_fd([
            "--quick-add-key",
            primary_fingerprint,
            constants::KEY_ALGORITHM,
            constants::SUBKEY_USAGE,
            constants::SUBKEY_EXPIRY,
        ]))
        .with_input(passphrase)
    }

    /// Delete secret key material for a key specifier.
    pub fn delete_secret_key(specifier: &str) -> Self {
        Self::new(["--batch", "--delete-secret-key", "--yes", specifier])
    }

    /// Delete public key material for a key specifier.
    pub fn delete_public_key(specifier: &str) -> Self {
        Self::new(["--batch", "--delete-key", "--yes", specifier])
    }

    /// Export an ASCII-armored public key block.
    pub fn export_armored(fingerprint: &str) -> Self {
        Self::new(["--armor", "--export", fingerprint])
    }

    pub fn list_secret_keys() -> Self {
        Self::new(["--list-secret-keys", "--with-colons", "--with-fingerprint"])
    }

    pub fn list_public_keys() -> Self {
        Self::new(["--list-public-keys", "--with-colons", "--with-fingerprint"])
    }

    /// Check the engine runs at all.
    pub fn version() -> Self {
        Self::new(["--version"])
    }
}

impl std::fmt::Display for Invocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.args.join(" "))
    }
}

// Stdin contents are never printed.
impl std::fmt::Debug for Invocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Invocation")
            .field("args", &self.args)
            .field("input", &self.input.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

/// `Name <email>` user id.
pub fn user_id(name: &str, email: &str) -> String {
    format!("{} <{}>", name, email)
}

/// Specifier that selects exactly one sub-key rather than its whole key.
pub fn sub_key_specifier(fingerprint: &str) -> String {
    format!("{}!", fingerprint)
}

fn with_passphrase_fd<const N: usize>(command: [&str; N]) -> Vec<String> {
    ["--batch", "--pinentry-mode", "loopback", "--passphrase-fd", "0"]
        .into_iter()
        .chain(command)
        .map(str::to_string)
        .collect()
}
