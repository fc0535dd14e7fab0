//! Key-management engine.
//!
//! The engine is the external tool that owns the keyring. keysmith never
//! touches key material itself; it hands the engine a fixed argument vector
//! and reads back standard output.
//!
//! ## Implementations
//!
//! - **gpg**: GnuPG via the `gpg` CLI, see [`Gpg`].
//!
//! Tests substitute their own engine to script or simulate gpg output.

use crate::error::Result;

mod gpg;
mod invocation;

pub use gpg::Gpg;
pub use invocation::{sub_key_specifier, user_id, Invocation};

/// Engine trait.
///
/// One call per engine invocation. Implementations return stdout on
/// success and an `EngineError` when the tool cannot be started or exits
/// non-zero.
pub trait Engine {
    /// Run one invocation.
    ///
    /// # Arguments
    ///
    /// * `invocation` - Argument vector plus optional stdin text
    ///
    /// # Returns
    ///
    /// The tool's standard output.
    ///
    /// # Errors
    ///
    /// Returns `EngineError` if the tool fails; diagnostics are carried
    /// in the error unparsed.
    fn run(&self, invocation: &Invocation) -> Result<String>;

    /// Engine name for display.
    fn name(&self) -> &'static str;
}

impl<E: Engine + ?Sized> Engine for &E {
    fn run(&self, invocation: &Invocation) -> Result<String> {
        (**self).run(invocation)
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}
