//! In-memory gpg engine.
//!
//! `FakeGpg` keeps a secret and a public keyring in memory and answers the
//! invocations keysmith issues with the colon listings and armored blocks
//! gpg would print. Keys are listed the way gpg lists them: primaries in
//! creation order, each followed by its sub-keys.

use std::cell::RefCell;
use std::process::ExitStatus;

use keysmith::error::EngineError;
use keysmith::{Engine, Invocation};

const EPOCH_START: i64 = 1_700_000_000;
const ONE_YEAR: i64 = 365 * 24 * 60 * 60;

#[derive(Debug, Clone)]
struct Key {
    fingerprint: String,
    keygrip: String,
    created: i64,
    expires: Option<i64>,
    secret: bool,
    public: bool,
}

impl Key {
    fn id(&self) -> &str {
        &self.fingerprint[24..]
    }
}

#[derive(Debug, Clone)]
struct Primary {
    key: Key,
    user_id: String,
    subs: Vec<Key>,
}

#[derive(Debug, Default)]
struct State {
    primaries: Vec<Primary>,
    clock: i64,
    counter: u64,
    calls: Vec<Vec<String>>,
    inputs: Vec<Option<String>>,
    fail_on: Option<String>,
}

/// Simulated gpg keyring.
#[derive(Debug, Default)]
pub struct FakeGpg {
    state: RefCell<State>,
}

impl FakeGpg {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make the next invocation of `command` (e.g. `--delete-key`) fail.
    pub fn fail_on(&self, command: &str) {
        self.state.borrow_mut().fail_on = Some(command.to_string());
    }

    /// Argument vectors of every invocation so far.
    pub fn calls(&self) -> Vec<Vec<String>> {
        self.state.borrow().calls.clone()
    }

    /// Stdin text of every invocation so far.
    pub fn inputs(&self) -> Vec<Option<String>> {
        self.state.borrow().inputs.clone()
    }

    /// Number of keys with secret material (primaries and sub-keys).
    pub fn secret_count(&self) -> usize {
        self.count(|k| k.secret)
    }

    /// Number of keys with public material (primaries and sub-keys).
    pub fn public_count(&self) -> usize {
        self.count(|k| k.public)
    }

    fn count(&self, pred: impl Fn(&Key) -> bool) -> usize {
        self.state
            .borrow()
            .primaries
            .iter()
            .flat_map(|p| std::iter::once(&p.key).chain(p.subs.iter()))
            .filter(|&k| pred(k))
            .count()
    }
}

impl Engine for FakeGpg {
    fn run(&self, invocation: &Invocation) -> keysmith::Result<String> {
        let mut state = self.state.borrow_mut();
        let args = invocation.args().to_vec();
        state.calls.push(args.clone());
        state.inputs.push(invocation.input().map(str::to_string));

        let (position, command) = args
            .iter()
            .enumerate()
            .find(|(_, a)| COMMANDS.contains(&a.as_str()))
            .map(|(i, a)| (i, a.clone()))
            .ok_or_else(|| failure(&format!("unsupported invocation: {}", invocation)))?;
        let operand = args.get(position + 1).cloned().unwrap_or_default();
        let last = args.last().cloned().unwrap_or_default();

        if state.fail_on.as_deref() == Some(command.as_str()) {
            state.fail_on = None;
            return Err(failure("injected failure"));
        }

        match command.as_str() {
            "--version" => Ok("gpg (GnuPG) 2.4.4\n".to_string()),
            "--quick-generate-key" => state.generate(&operand),
            "--quick-add-key" => state.add_sub(&operand),
            "--delete-secret-key" => state.delete_secret(&last),
            "--delete-key" => state.delete_public(&last),
            "--export" => state.export(&operand),
            "--list-secret-keys" => Ok(state.listing(true)),
            "--list-public-keys" => Ok(state.listing(false)),
            _ => Err(failure(&format!("unsupported command: {}", command))),
        }
    }

    fn name(&self) -> &'static str {
        "fake-gpg"
    }
}

const COMMANDS: &[&str] = &[
    "--version",
    "--quick-generate-key",
    "--quick-add-key",
    "--delete-secret-key",
    "--delete-key",
    "--export",
    "--list-secret-keys",
    "--list-public-keys",
];

impl State {
    fn new_key(&mut self, expires_in: Option<i64>) -> Key {
        self.counter += 1;
        self.clock += 1;
        let created = EPOCH_START + self.clock;
        let mix = (self.counter as u128).wrapping_mul(0x9E37_79B9_7F4A_7C15_F39C_C060_5CED_C835);
        Key {
            fingerprint: format!("{:08X}{:032X}", self.counter, mix),
            keygrip: format!("{:032X}{:08X}", mix.rotate_left(17), self.counter),
            created,
            expires: expires_in.map(|secs| created + secs),
            secret: true,
            public: true,
        }
    }

    fn generate(&mut self, user_id: &str) -> keysmith::Result<String> {
        if user_id.is_empty() {
            return Err(failure("missing user id"));
        }
        let key = self.new_key(None);
        self.primaries.push(Primary {
            key,
            user_id: user_id.to_string(),
            subs: Vec::new(),
        });
        Ok(String::new())
    }

    fn add_sub(&mut self, primary_fpr: &str) -> keysmith::Result<String> {
        let index = self
            .primaries
            .iter()
            .position(|p| p.key.fingerprint == primary_fpr && p.key.secret)
            .ok_or_else(|| failure(&format!("\"{}\" is not a secret key", primary_fpr)))?;
        let sub = self.new_key(Some(ONE_YEAR));
        self.primaries[index].subs.push(sub);
        Ok(String::new())
    }

    fn delete_secret(&mut self, specifier: &str) -> keysmith::Result<String> {
        if let Some(fpr) = specifier.strip_suffix('!') {
            let sub = self
                .sub_mut(fpr)
                .filter(|s| s.secret)
                .ok_or_else(|| failure(&format!("key \"{}\" not found", specifier)))?;
            sub.secret = false;
            return Ok(String::new());
        }

        let primary = self
            .primaries
            .iter_mut()
            .find(|p| p.key.fingerprint == specifier && p.key.secret)
            .ok_or_else(|| failure(&format!("key \"{}\" not found", specifier)))?;
        primary.key.secret = false;
        for sub in &mut primary.subs {
            sub.secret = false;
        }
        Ok(String::new())
    }

    fn delete_public(&mut self, specifier: &str) -> keysmith::Result<String> {
        if let Some(fpr) = specifier.strip_suffix('!') {
            let sub = self
                .sub_mut(fpr)
                .filter(|s| s.public)
                .ok_or_else(|| failure(&format!("key \"{}\" not found", specifier)))?;
            if sub.secret {
                return Err(failure("there is a secret key for this public key"));
            }
            let fpr = fpr.to_string();
            for primary in &mut self.primaries {
                primary.subs.retain(|s| s.fingerprint != fpr);
            }
            return Ok(String::new());
        }

        let index = self
            .primaries
            .iter()
            .position(|p| p.key.fingerprint == specifier && p.key.public)
            .ok_or_else(|| failure(&format!("key \"{}\" not found", specifier)))?;
        if self.primaries[index].key.secret {
            return Err(failure("there is a secret key for this public key"));
        }
        self.primaries.remove(index);
        Ok(String::new())
    }

    fn export(&self, fpr: &str) -> keysmith::Result<String> {
        let found = self.primaries.iter().any(|p| {
            std::iter::once(&p.key)
                .chain(p.subs.iter())
                .any(|k| k.fingerprint == fpr && k.public)
        });
        if !found {
            return Ok(String::new());
        }
        Ok(format!(
            "-----BEGIN PGP PUBLIC KEY BLOCK-----\r\n\r\nmDMEZ{}\r\n=AbCd\r\n-----END PGP PUBLIC KEY BLOCK-----\r\n",
            fpr
        ))
    }

    fn listing(&self, secret: bool) -> String {
        let (primary_tag, sub_tag) = if secret { ("sec", "ssb") } else { ("pub", "sub") };
        let has = |k: &Key| if secret { k.secret } else { k.public };

        let mut lines = Vec::new();
        if !secret && !self.primaries.is_empty() {
            lines.push(format!("tru::1:{}:0:3:1:5", EPOCH_START));
        }
        for primary in &self.primaries {
            if has(&primary.key) {
                let key = &primary.key;
                lines.push(format!(
                    "{}:u:255:22:{}:{}:{}:::u:::cC:::+:::ed25519:::0:",
                    primary_tag,
                    key.id(),
                    key.created,
                    expires(key)
                ));
                lines.push(format!("fpr:::::::::{}:", key.fingerprint));
                lines.push(format!("grp:::::::::{}:", key.keygrip));
                lines.push(format!(
                    "uid:u::::{}::{}::{}::::::::::0:",
                    key.created,
                    key.keygrip,
                    primary.user_id.replace(':', "\\x3a")
                ));
            }
            for sub in primary.subs.iter().filter(|&s| has(s)) {
                lines.push(format!(
                    "{}:u:255:22:{}:{}:{}:::::s:::+:::ed25519::",
                    sub_tag,
                    sub.id(),
                    sub.created,
                    expires(sub)
                ));
                lines.push(format!("fpr:::::::::{}:", sub.fingerprint));
                lines.push(format!("grp:::::::::{}:", sub.keygrip));
            }
        }

        lines.iter().map(|l| format!("{}\r\n", l)).collect()
    }

    fn sub_mut(&mut self, fpr: &str) -> Option<&mut Key> {
        self.primaries
            .iter_mut()
            .flat_map(|p| p.subs.iter_mut())
            .find(|s| s.fingerprint == fpr)
    }
}

fn expires(key: &Key) -> String {
    key.expires.map(|t| t.to_string()).unwrap_or_default()
}

fn failure(stderr: &str) -> keysmith::Error {
    EngineError::Failed {
        status: exit_status(2),
        stderr: format!("gpg: {}", stderr),
    }
    .into()
}

#[cfg(unix)]
fn exit_status(code: i32) -> ExitStatus {
    use std::os::unix::process::ExitStatusExt;
    ExitStatus::from_raw(code << 8)
}

#[cfg(windows)]
fn exit_status(code: i32) -> ExitStatus {
    use std::os::windows::process::ExitStatusExt;
    ExitStatus::from_raw(code as u32)
}
