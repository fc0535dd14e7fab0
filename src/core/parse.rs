//! gpg colon listing parser.
//!
//! Turns the output of `--list-secret-keys --with-colons --with-fingerprint`
//! (or the public equivalent) into key records. The listing is a flat stream
//! of records; a key line (`sec`, `ssb`, `pub`, `sub`) opens a record and the
//! `fpr` and `uid` lines after it fill in its fingerprint and user id.
//!
//! Parsing is best effort. Records that end up incomplete are dropped and
//! counted, never reported as errors.

use tracing::debug;

use crate::core::constants;
use crate::core::domain::key::{parse_timestamp, Expiration, KeyRecord, KeyVariant, PartialRecord};

// Positional fields of a colon record.
const FIELD_TAG: usize = 0;
const FIELD_KEY_ID: usize = 4;
const FIELD_CREATED: usize = 5;
const FIELD_EXPIRES: usize = 6;
const FIELD_USER_ID: usize = 9;

/// Result of parsing one listing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Parsed {
    /// Complete records in listing order
    pub records: Vec<KeyRecord>,
    /// Opened records dropped for missing id, fingerprint or creation time
    pub discarded: usize,
}

/// Parse a colon listing.
///
/// # Arguments
///
/// * `listing` - gpg stdout, CRLF or LF separated
///
/// # Returns
///
/// The complete records in the order gpg listed them, plus the number of
/// incomplete records that were dropped.
pub fn parse(listing: &str) -> Parsed {
    let mut parsed = Parsed::default();
    let mut current = PartialRecord::default();

    for line in listing.split('\n') {
        let line = line.strip_suffix('\r').unwrap_or(line);
        let fields: Vec<&str> = line.split(':').collect();
        let tag = fields[FIELD_TAG];

        if let Some(variant) = KeyVariant::from_tag(tag) {
            let finished = std::mem::replace(&mut current, open(variant, &fields));
            emit(&mut parsed, finished);
            continue;
        }

        match tag {
            constants::TAG_FINGERPRINT => {
                if let Some(fpr) = fields.get(FIELD_USER_ID) {
                    current.set_fingerprint(fpr);
                }
            }
            constants::TAG_USER_ID => {
                if let Some(uid) = fields.get(FIELD_USER_ID) {
                    current.set_username(&unescape(uid));
                }
            }
            _ => {}
        }
    }
    emit(&mut parsed, current);

    debug!(
        records = parsed.records.len(),
        discarded = parsed.discarded,
        "parsed key listing"
    );

    parsed
}

/// Parse a colon listing, keeping only the records.
pub fn parse_records(listing: &str) -> Vec<KeyRecord> {
    parse(listing).records
}

fn open(variant: KeyVariant, fields: &[&str]) -> PartialRecord {
    let id = fields.get(FIELD_KEY_ID).copied();
    let created = parse_timestamp(fields.get(FIELD_CREATED).copied().unwrap_or(""));
    let expires = Expiration::from_field(fields.get(FIELD_EXPIRES).copied());

    PartialRecord::open(variant, id, created, expires)
}

fn emit(parsed: &mut Parsed, partial: PartialRecord) {
    let opened = partial.is_open();
    match partial.validate() {
        Some(record) => parsed.records.push(record),
        None if opened => parsed.discarded += 1,
        None => {}
    }
}

/// Decode gpg's `\xHH` escapes in user id fields (colons arrive as `\x3a`).
fn unescape(field: &str) -> String {
    if !field.contains("\\x") {
        return field.to_string();
    }

    let bytes = field.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'\\' && bytes.get(i + 1) == Some(&b'x') {
            let decoded = field
                .get(i + 2..i + 4)
                .and_then(|hex| u8::from_str_radix(hex, 16).ok());
            if let Some(byte) = decoded {
                out.push(byte);
                i += 4;
                continue;
            }
        }
        out.push(bytes[i]);
        i += 1;
    }

    String::from_utf8_lossy(&out).into_owned()
}
