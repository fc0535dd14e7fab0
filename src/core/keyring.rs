//! Key lifecycle operations.
//!
//! [`Keyring`] drives an [`Engine`] to create, list, look up, export and
//! delete keys. Nothing is cached: every query lists the keyring again and
//! parses the fresh output.
//!
//! Operations issue their engine calls one after another. A multi-step
//! operation that fails midway is not rolled back; deleting a key whose
//! secret half was removed but whose public half failed leaves the two
//! keyrings out of step, and only the returned error says so.

use tracing::{debug, info, warn};

use crate::core::domain::KeyRecord;
use crate::core::engine::{sub_key_specifier, user_id, Engine, Invocation};
use crate::core::parse;
use crate::error::{KeyringError, Result};

/// Key lifecycle operations over one engine.
#[derive(Debug, Clone)]
pub struct Keyring<E: Engine> {
    engine: E,
}

impl<E: Engine> Keyring<E> {
    pub fn new(engine: E) -> Self {
        Self { engine }
    }

    /// Create an ed25519 certification-only primary key that never expires.
    ///
    /// # Arguments
    ///
    /// * `name` - Real name part of the user id
    /// * `email` - Email part of the user id
    /// * `passphrase` - Protection passphrase; empty for an unprotected key
    ///
    /// # Returns
    ///
    /// The new secret primary key, identified by [`newest_record`].
    ///
    /// # Errors
    ///
    /// Returns `EngineError` if generation or the follow-up listing fails.
    pub fn create_primary_key(&self, name: &str, email: &str, passphrase: &str) -> Result<KeyRecord> {
        let uid = user_id(name, email);
        info!(user_id = %uid, "creating primary key");

        self.engine
            .run(&Invocation::generate_primary_key(&uid, passphrase))?;
        self.created()
    }

    /// Add an ed25519 signing sub-key, valid for one year, to a primary key.
    ///
    /// # Returns
    ///
    /// The new secret sub-key, identified by [`newest_record`].
    ///
    /// # Errors
    ///
    /// Returns `EngineError` if gpg rejects the key or the listing fails.
    pub fn create_sub_key(&self, primary: &KeyRecord, passphrase: &str) -> Result<KeyRecord> {
        info!(primary = %primary.fingerprint(), "creating sub-key");

        self.engine
            .run(&Invocation::add_sub_key(primary.fingerprint(), passphrase))?;
        self.created()
    }

    /// Delete a primary key from the secret keyring, then the public one.
    ///
    /// gpg removes the key's sub-keys along with it; they are not deleted
    /// one by one.
    pub fn delete_primary_key(&self, primary: &KeyRecord) -> Result<()> {
        info!(fingerprint = %primary.fingerprint(), "deleting primary key");

        self.engine
            .run(&Invocation::delete_secret_key(primary.fingerprint()))?;
        self.engine
            .run(&Invocation::delete_public_key(primary.fingerprint()))?;
        Ok(())
    }

    /// Delete a single sub-key from the secret keyring, then the public one.
    pub fn delete_sub_key(&self, sub: &KeyRecord) -> Result<()> {
        info!(fingerprint = %sub.fingerprint(), "deleting sub-key");

        let specifier = sub_key_specifier(sub.fingerprint());
        self.engine.run(&Invocation::delete_secret_key(&specifier))?;
        self.engine.run(&Invocation::delete_public_key(&specifier))?;
        Ok(())
    }

    /// Export the ASCII-armored public key block containing a key.
    ///
    /// The text runs from `-----BEGIN PGP PUBLIC KEY BLOCK-----` to the
    /// matching footer and its line terminator, exactly as gpg printed it.
    pub fn public_key_block(&self, key: &KeyRecord) -> Result<String> {
        let block = self
            .engine
            .run(&Invocation::export_armored(key.fingerprint()))?;
        if block.is_empty() {
            warn!(fingerprint = %key.fingerprint(), "gpg exported nothing");
        }
        Ok(block)
    }

    /// All secret keys in listing order.
    pub fn list_private_keys(&self) -> Result<Vec<KeyRecord>> {
        self.list(Invocation::list_secret_keys())
    }

    /// All public keys in listing order.
    pub fn list_public_keys(&self) -> Result<Vec<KeyRecord>> {
        self.list(Invocation::list_public_keys())
    }

    /// First secret key with this exact fingerprint, if any.
    pub fn private_key_by_fingerprint(&self, fingerprint: &str) -> Result<Option<KeyRecord>> {
        Ok(by_fingerprint(self.list_private_keys()?, fingerprint))
    }

    /// First public key with this exact fingerprint, if any.
    pub fn public_key_by_fingerprint(&self, fingerprint: &str) -> Result<Option<KeyRecord>> {
        Ok(by_fingerprint(self.list_public_keys()?, fingerprint))
    }

    /// First secret key whose user id contains `email`.
    ///
    /// Case-sensitive substring match; listing order decides ties.
    pub fn private_key_by_email(&self, email: &str) -> Result<Option<KeyRecord>> {
        Ok(self
            .list_private_keys()?
            .into_iter()
            .find(|key| key.username().is_some_and(|uid| uid.contains(email))))
    }

    fn list(&self, invocation: Invocation) -> Result<Vec<KeyRecord>> {
        let listing = self.engine.run(&invocation)?;
        let parsed = parse::parse(&listing);
        if parsed.discarded > 0 {
            warn!(
                discarded = parsed.discarded,
                "dropped incomplete records from gpg listing"
            );
        }
        Ok(parsed.records)
    }

    fn created(&self) -> Result<KeyRecord> {
        let key = newest_record(self.list_private_keys()?).ok_or(KeyringError::MissingCreatedKey)?;
        debug!(fingerprint = %key.fingerprint(), variant = %key.variant(), "created key");
        Ok(key)
    }
}

/// Identify the key a creation call just produced.
///
/// gpg does not report the new key, so callers list the secret keyring
/// right after creating and take the last record: gpg appends new primary
/// keys to the end of the listing and new sub-keys to the end of their
/// primary's block. When several primary keys exist, a sub-key added to an
/// earlier primary is not last and this returns the wrong record. Replacing
/// this with a before/after fingerprint diff only needs to change this
/// function.
pub fn newest_record(records: Vec<KeyRecord>) -> Option<KeyRecord> {
    records.into_iter().last()
}

fn by_fingerprint(records: Vec<KeyRecord>, fingerprint: &str) -> Option<KeyRecord> {
    records
        .into_iter()
        .find(|key| key.fingerprint() == fingerprint)
}
