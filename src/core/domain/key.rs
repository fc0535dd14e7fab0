//! Key record type.
//!
//! A key record is one key as reported by a gpg colon listing: a primary key
//! or sub-key, from either the secret or the public keyring.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::core::constants;
use crate::core::types::{Fingerprint, KeyId, Username};

/// Which keyring a record was listed from and which role it plays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum KeyVariant {
    /// Secret primary key (`sec`)
    #[serde(rename = "sec")]
    PrivatePrimary,
    /// Secret sub-key (`ssb`)
    #[serde(rename = "ssb")]
    PrivateSub,
    /// Public primary key (`pub`)
    #[serde(rename = "pub")]
    PublicPrimary,
    /// Public sub-key (`sub`)
    #[serde(rename = "sub")]
    PublicSub,
}

impl KeyVariant {
    /// Map a colon listing record tag to a variant.
    ///
    /// Returns `None` for tags that do not open a key record.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            constants::TAG_SECRET_KEY => Some(Self::PrivatePrimary),
            constants::TAG_SECRET_SUBKEY => Some(Self::PrivateSub),
            constants::TAG_PUBLIC_KEY => Some(Self::PublicPrimary),
            constants::TAG_PUBLIC_SUBKEY => Some(Self::PublicSub),
            _ => None,
        }
    }

    /// Record tag as written by gpg.
    pub fn tag(&self) -> &'static str {
        match self {
            Self::PrivatePrimary => constants::TAG_SECRET_KEY,
            Self::PrivateSub => constants::TAG_SECRET_SUBKEY,
            Self::PublicPrimary => constants::TAG_PUBLIC_KEY,
            Self::PublicSub => constants::TAG_PUBLIC_SUBKEY,
        }
    }

    pub fn is_primary(&self) -> bool {
        matches!(self, Self::PrivatePrimary | Self::PublicPrimary)
    }

    pub fn is_private(&self) -> bool {
        matches!(self, Self::PrivatePrimary | Self::PrivateSub)
    }

    /// The same role on the other keyring (`sec` <-> `pub`, `ssb` <-> `sub`).
    pub fn counterpart(&self) -> Self {
        match self {
            Self::PrivatePrimary => Self::PublicPrimary,
            Self::PrivateSub => Self::PublicSub,
            Self::PublicPrimary => Self::PrivatePrimary,
            Self::PublicSub => Self::PrivateSub,
        }
    }
}

impl std::fmt::Display for KeyVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}

/// Expiration state of a key.
///
/// gpg writes an empty expiration field for keys that never expire. A line
/// too short to carry the field at all leaves the expiration unspecified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Expiration {
    Never,
    #[default]
    Unspecified,
    At(DateTime<Utc>),
}

impl Expiration {
    /// Interpret the expiration field of a key line.
    pub fn from_field(field: Option<&str>) -> Self {
        match field {
            None => Self::Unspecified,
            Some("") | Some("0") => Self::Never,
            Some(value) => match parse_timestamp(value) {
                Some(at) => Self::At(at),
                None => Self::Unspecified,
            },
        }
    }

    /// Expiration as a timestamp, with the Unix epoch standing in for
    /// both `Never` and `Unspecified`.
    pub fn as_time(&self) -> DateTime<Utc> {
        match self {
            Self::At(at) => *at,
            Self::Never | Self::Unspecified => DateTime::<Utc>::UNIX_EPOCH,
        }
    }

    pub fn is_never(&self) -> bool {
        matches!(self, Self::Never)
    }
}

impl std::fmt::Display for Expiration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Never => f.write_str("never"),
            Self::Unspecified => f.write_str("unknown"),
            Self::At(at) => write!(f, "{}", at.format("%Y-%m-%d")),
        }
    }
}

/// Parse a Unix seconds field. Empty means the epoch.
pub(crate) fn parse_timestamp(field: &str) -> Option<DateTime<Utc>> {
    if field.is_empty() {
        return Some(DateTime::<Utc>::UNIX_EPOCH);
    }
    let secs: i64 = field.parse().ok()?;
    DateTime::<Utc>::from_timestamp(secs, 0)
}

/// A complete key record parsed from a gpg listing.
///
/// Records are never mutated after construction; every observation of the
/// keyring produces fresh records.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct KeyRecord {
    variant: KeyVariant,
    id: KeyId,
    fingerprint: Fingerprint,
    #[serde(skip_serializing_if = "Option::is_none")]
    username: Option<Username>,
    creation_time: DateTime<Utc>,
    expiration: Expiration,
}

impl KeyRecord {
    pub fn variant(&self) -> KeyVariant {
        self.variant
    }

    /// Short key id
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn fingerprint(&self) -> &str {
        &self.fingerprint
    }

    /// User id, present on primary keys only
    pub fn username(&self) -> Option<&str> {
        self.username.as_deref()
    }

    pub fn creation_time(&self) -> DateTime<Utc> {
        self.creation_time
    }

    pub fn expiration(&self) -> Expiration {
        self.expiration
    }

    /// Expiration as a timestamp; the Unix epoch when the key never expires
    /// or the listing did not say.
    pub fn expiration_time(&self) -> DateTime<Utc> {
        self.expiration.as_time()
    }

    pub fn is_primary(&self) -> bool {
        self.variant.is_primary()
    }
}

impl std::fmt::Display for KeyRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.variant, self.fingerprint)?;
        if let Some(username) = &self.username {
            write!(f, " {}", username)?;
        }
        Ok(())
    }
}

/// A record under construction by the parser.
#[derive(Debug, Clone, Default)]
pub struct PartialRecord {
    variant: Option<KeyVariant>,
    id: Option<KeyId>,
    fingerprint: Option<Fingerprint>,
    username: Option<Username>,
    creation_time: Option<DateTime<Utc>>,
    expiration: Expiration,
}

impl PartialRecord {
    /// Start a record from a key line.
    pub fn open(
        variant: KeyVariant,
        id: Option<&str>,
        creation_time: Option<DateTime<Utc>>,
        expiration: Expiration,
    ) -> Self {
        Self {
            variant: Some(variant),
            id: id.map(str::to_string),
            fingerprint: None,
            username: None,
            creation_time,
            expiration,
        }
    }

    pub fn set_fingerprint(&mut self, fingerprint: &str) {
        self.fingerprint = Some(fingerprint.to_string());
    }

    pub fn set_username(&mut self, username: &str) {
        self.username = Some(username.to_string());
    }

    /// Whether a key line has opened this record.
    pub fn is_open(&self) -> bool {
        self.variant.is_some()
    }

    /// Promote to a complete record.
    ///
    /// Requires a variant, a non-empty id, a non-empty fingerprint and a
    /// creation time. Anything less is discarded.
    pub fn validate(self) -> Option<KeyRecord> {
        let variant = self.variant?;
        let id = self.id.filter(|id| !id.is_empty())?;
        let fingerprint = self.fingerprint.filter(|fpr| !fpr.is_empty())?;
        let creation_time = self.creation_time?;

        Some(KeyRecord {
            variant,
            id,
            fingerprint,
            username: self.username,
            creation_time,
            expiration: self.expiration,
        })
    }
}
