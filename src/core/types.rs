//! Type aliases for domain concepts.
//!
//! Provides semantic type aliases to make function signatures more descriptive.

/// A 40 character uppercase hex key fingerprint.
///
/// The canonical handle for lookups and deletions.
pub type Fingerprint = String;

/// A 16 character uppercase hex key id (low 64 bits of the fingerprint).
pub type KeyId = String;

/// A user id in the form `Name <email>`.
pub type Username = String;
