//! keysmith - OpenPGP key lifecycle management on top of gpg.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── create        # Create a primary key
//! │   ├── subkey        # Add a signing sub-key
//! │   ├── list          # List secret or public keys
//! │   ├── show / find   # Look up one key
//! │   ├── export        # Armored public key block
//! │   └── rm            # Delete a key or sub-key
//! └── core/             # Core library components
//!     ├── domain/       # Key records and variants
//!     ├── parse         # gpg colon listing parser
//!     ├── engine/       # Engine trait, gpg process, argument templates
//!     ├── keyring       # Lifecycle operations
//!     └── config        # Engine and home directory resolution
//! ```
//!
//! # Example
//!
//! ```no_run
//! use keysmith::{Config, Gpg, Keyring};
//!
//! # fn main() -> keysmith::Result<()> {
//! let config = Config::resolve(None, Some("/tmp/ring".into()), None)?;
//! let keyring = Keyring::new(Gpg::from_config(&config));
//!
//! let primary = keyring.create_primary_key("John Doe", "john_doe@example.com", "")?;
//! let sub = keyring.create_sub_key(&primary, "")?;
//! println!("{}", keyring.public_key_block(&sub)?);
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod core;
pub mod error;

pub use crate::core::config::Config;
pub use crate::core::domain::{Expiration, KeyRecord, KeyVariant};
pub use crate::core::engine::{Engine, Gpg, Invocation};
pub use crate::core::keyring::Keyring;
pub use crate::core::parse::{parse, parse_records, Parsed};
pub use error::{Error, Result};
