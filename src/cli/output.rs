//! Shared CLI output helpers for consistent terminal output.
//!
//! Color scheme (respects NO_COLOR):
//! - Green: success, checkmarks
//! - Red: errors
//! - Cyan: fingerprints, hints
//! - Bold: headers, important values
//! - Dimmed: secondary info

use console::style;
use std::fmt::Display;

use crate::core::domain::KeyRecord;

const RULE_WIDTH: usize = 72;

/// Check if color output is disabled via NO_COLOR env var.
fn colors_enabled() -> bool {
    std::env::var("NO_COLOR").is_err()
}

/// Print a success message with checkmark (green).
///
/// Example: `✓ created key`
pub fn success(msg: &str) {
    if colors_enabled() {
        println!("{} {}", style("✓").green(), msg);
    } else {
        println!("✓ {}", msg);
    }
}

/// Print an error message to stderr (red).
///
/// Example: `✗ key not found`
pub fn error(msg: &str) {
    if colors_enabled() {
        eprintln!("{} {}", style("✗").red(), msg);
    } else {
        eprintln!("✗ {}", msg);
    }
}

/// Print a hint message to stderr (cyan).
///
/// Example: `→ run: keysmith list`
pub fn hint(msg: &str) {
    if colors_enabled() {
        eprintln!("{} {}", style("→").cyan(), style(msg).cyan());
    } else {
        eprintln!("→ {}", msg);
    }
}

/// Print a bold section header.
pub fn header(title: &str) {
    if colors_enabled() {
        println!("{}", style(title).bold());
    } else {
        println!("{}", title);
    }
}

/// Print a key-value pair (label dimmed, value bold).
///
/// Example: `  created   2024-01-01`
pub fn kv(label: &str, value: impl Display) {
    if colors_enabled() {
        println!("  {:<10}{}", style(label).dim(), style(value).bold());
    } else {
        println!("  {:<10}{}", label, value);
    }
}

/// Print a horizontal rule separator.
pub fn rule() {
    if colors_enabled() {
        println!("{}", style("─".repeat(RULE_WIDTH)).dim());
    } else {
        println!("{}", "─".repeat(RULE_WIDTH));
    }
}

/// Print a dimmed/secondary message.
///
/// Example: `no keys`
pub fn dimmed(msg: &str) {
    if colors_enabled() {
        println!("{}", style(msg).dim());
    } else {
        println!("{}", msg);
    }
}

/// Print raw data to stdout with no decoration.
pub fn data(text: &str) {
    print!("{}", text);
}

/// Format a fingerprint in cyan.
pub fn fingerprint(fpr: &str) -> String {
    if colors_enabled() {
        style(fpr).cyan().to_string()
    } else {
        fpr.to_string()
    }
}

/// Print one key as a listing row.
///
/// Example: `sec  0D9E...3E2F  2024-01-01  never  John Doe <john@example.com>`
pub fn key_row(key: &KeyRecord) {
    let indent = if key.is_primary() { "" } else { "  " };
    println!(
        "{}{}  {}  {}  {}  {}",
        indent,
        key.variant(),
        fingerprint(key.fingerprint()),
        key.creation_time().format("%Y-%m-%d"),
        key.expiration(),
        key.username().unwrap_or("")
    );
}

/// Print one key in detail.
pub fn key_detail(key: &KeyRecord) {
    header(&format!("{} {}", key.variant(), fingerprint(key.fingerprint())));
    rule();
    kv("id", key.id());
    if let Some(username) = key.username() {
        kv("user id", username);
    }
    kv("created", key.creation_time().format("%Y-%m-%d %H:%M:%S UTC"));
    kv("expires", key.expiration());
}

/// Print a key as pretty JSON.
pub fn key_json(key: &KeyRecord) -> crate::error::Result<()> {
    println!("{}", serde_json::to_string_pretty(key)?);
    Ok(())
}
