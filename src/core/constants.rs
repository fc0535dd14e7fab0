//! Constants used throughout keysmith.
//!
//! Centralizes engine record tags and fixed argument values.

/// Default gpg binary name, resolved through `PATH`.
pub const GPG_PROGRAM: &str = "gpg";

/// Home directory name under the platform data directory.
pub const GPG_HOME_DIR: &str = "gnupg";

/// Record tags that open a new key record in colon listings.
pub const TAG_SECRET_KEY: &str = "sec";
pub const TAG_SECRET_SUBKEY: &str = "ssb";
pub const TAG_PUBLIC_KEY: &str = "pub";
pub const TAG_PUBLIC_SUBKEY: &str = "sub";

/// Auxiliary tags attached to the most recently opened record.
pub const TAG_FINGERPRINT: &str = "fpr";
pub const TAG_USER_ID: &str = "uid";

/// Key algorithm requested for every generated key.
pub const KEY_ALGORITHM: &str = "ed25519";

/// Primary keys are certification-only and never expire.
pub const PRIMARY_USAGE: &str = "cert";
pub const PRIMARY_EXPIRY: &str = "never";

/// Sub-keys are signing keys valid for one year.
pub const SUBKEY_USAGE: &str = "sign";
pub const SUBKEY_EXPIRY: &str = "1y";

/// Armor markers of an exported public key block.
pub const PUBLIC_BLOCK_HEADER: &str = "-----BEGIN PGP PUBLIC KEY BLOCK-----";
pub const PUBLIC_BLOCK_FOOTER: &str = "-----END PGP PUBLIC KEY BLOCK-----";
