//! keysmith - OpenPGP key lifecycle management on top of gpg.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use keysmith::cli::output;
use keysmith::cli::{execute, Cli};
use keysmith::error::{EngineError, Error, KeyringError};

fn main() {
    let cli = Cli::parse();

    // Initialize tracing subscriber with env-filter support
    let filter = EnvFilter::try_from_env("KEYSMITH_LOG").unwrap_or_else(|_| {
        if cli.global.verbose {
            EnvFilter::new("keysmith=debug")
        } else {
            EnvFilter::new("keysmith=warn")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .without_time(),
        )
        .init();

    if let Err(e) = execute(&cli.global, cli.command) {
        // Format error with suggestion if available
        let suggestion = match &e {
            Error::Engine(EngineError::NotFound(_)) => Some("install GnuPG or pass --gpg <path>"),
            Error::Keyring(KeyringError::NotFound(_)) => Some("run: keysmith list"),
            _ => None,
        };

        output::error(&e.to_string());
        if let Some(hint) = suggestion {
            output::hint(hint);
        }
        std::process::exit(1);
    }
}
