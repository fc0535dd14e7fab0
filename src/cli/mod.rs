//! Command-line interface.

pub mod completions;
pub mod create;
pub mod export;
pub mod find;
pub mod list;
pub mod output;
pub mod rm;
pub mod show;
pub mod subkey;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use dialoguer::Password;
use zeroize::Zeroizing;

use crate::core::config::Config;
use crate::core::engine::Gpg;
use crate::core::keyring::Keyring;
use crate::error::Result;

/// keysmith - OpenPGP key lifecycle management on top of gpg.
#[derive(Parser)]
#[command(
    name = "keysmith",
    about = "Create, inspect and delete OpenPGP keys through gpg",
    version
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Command,
}

/// Options shared by every command.
#[derive(Args, Debug, Clone)]
pub struct GlobalArgs {
    /// gpg home directory holding the keyring
    #[arg(long, global = true, env = "KEYSMITH_HOMEDIR")]
    pub homedir: Option<PathBuf>,

    /// gpg binary to run
    #[arg(long, global = true, env = "KEYSMITH_GPG")]
    pub gpg: Option<PathBuf>,

    /// TOML configuration file
    #[arg(long, global = true, env = "KEYSMITH_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

impl GlobalArgs {
    /// Resolve configuration and open the keyring it points at.
    pub fn keyring(&self) -> Result<Keyring<Gpg>> {
        let config = Config::resolve(
            self.gpg.clone(),
            self.homedir.clone(),
            self.config.as_deref(),
        )?;
        Ok(Keyring::new(Gpg::from_config(&config)))
    }
}

/// Top-level commands.
#[derive(Subcommand)]
pub enum Command {
    /// Create a primary key (ed25519, certification only, never expires)
    Create {
        /// Email address for the user id
        email: String,
        /// Real name for the user id (defaults to your account's real name)
        #[arg(short, long)]
        name: Option<String>,
        #[command(flatten)]
        passphrase: PassphraseArgs,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Manage sub-keys
    Subkey {
        #[command(subcommand)]
        action: SubkeyAction,
    },

    /// List keys
    List {
        /// List the public keyring instead of the secret one
        #[arg(long)]
        public: bool,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show a key by fingerprint
    Show {
        /// 40 character fingerprint
        fingerprint: String,
        /// Look in the public keyring instead of the secret one
        #[arg(long)]
        public: bool,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Find a secret key by email
    Find {
        /// Email (substring of the user id, case-sensitive)
        email: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the armored public key block for a key
    Export {
        /// 40 character fingerprint
        fingerprint: String,
    },

    /// Delete a primary key (with its sub-keys) or a single sub-key
    Rm {
        /// 40 character fingerprint
        fingerprint: String,
        /// Skip confirmation
        #[arg(short, long)]
        yes: bool,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Sub-key subcommands.
#[derive(Subcommand)]
pub enum SubkeyAction {
    /// Add an ed25519 signing sub-key valid for one year
    Add {
        /// Fingerprint of the primary key
        fingerprint: String,
        #[command(flatten)]
        passphrase: PassphraseArgs,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

/// How the key passphrase is supplied. Empty by default.
#[derive(Args, Debug, Clone, Default)]
pub struct PassphraseArgs {
    /// Passphrase protecting the key
    #[arg(long, env = "KEYSMITH_PASSPHRASE", hide_env_values = true, conflicts_with = "ask_passphrase")]
    pub passphrase: Option<String>,

    /// Prompt for the passphrase
    #[arg(long)]
    pub ask_passphrase: bool,
}

impl PassphraseArgs {
    /// Passphrase from the flag, an interactive prompt, or empty.
    pub fn resolve(&self) -> Result<Zeroizing<String>> {
        if let Some(passphrase) = &self.passphrase {
            return Ok(Zeroizing::new(passphrase.clone()));
        }
        if !self.ask_passphrase {
            return Ok(Zeroizing::new(String::new()));
        }

        let passphrase = Password::new()
            .with_prompt("Passphrase")
            .with_confirmation("Repeat passphrase", "passphrases do not match")
            .allow_empty_password(true)
            .interact()?;
        Ok(Zeroizing::new(passphrase))
    }
}

/// Supported shells for completions.
#[derive(clap::ValueEnum, Clone, Debug)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}

/// Execute a parsed command.
///
/// # Errors
///
/// Returns error if the command execution fails.
pub fn execute(global: &GlobalArgs, command: Command) -> Result<()> {
    match command {
        Command::Create {
            email,
            name,
            passphrase,
            json,
        } => create::execute(global, name, &email, &passphrase, json),
        Command::Subkey { action } => match action {
            SubkeyAction::Add {
                fingerprint,
                passphrase,
                json,
            } => subkey::add(global, &fingerprint, &passphrase, json),
        },
        Command::List { public, json } => list::execute(global, public, json),
        Command::Show {
            fingerprint,
            public,
            json,
        } => show::execute(global, &fingerprint, public, json),
        Command::Find { email, json } => find::execute(global, &email, json),
        Command::Export { fingerprint } => export::execute(global, &fingerprint),
        Command::Rm { fingerprint, yes } => rm::execute(global, &fingerprint, yes),
        Command::Completions { shell } => completions::execute(shell),
    }
}
