//! Core library components.
//!
//! The key record model, the gpg listing parser, the engine seam and the
//! lifecycle operations built on them.

pub mod config;
pub mod constants;
pub mod domain;
pub mod engine;
pub mod keyring;
pub mod parse;
pub mod types;
