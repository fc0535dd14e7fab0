//! Domain types.

pub mod key;

pub use key::{Expiration, KeyRecord, KeyVariant, PartialRecord};
