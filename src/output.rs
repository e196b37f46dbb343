//! Console output for a run.
//!
//! Progress lines are prefixed `[VERIFY]`, the final failure `[FAIL]`. Both go
//! to stdout so a captured log reads in order.

use colored::Colorize;
use std::fmt::Display;

pub const VERIFY_PREFIX: &str = "[VERIFY]";
pub const FAIL_PREFIX: &str = "[FAIL]";

pub fn log(message: impl Display) {
    println!("{} {message}", VERIFY_PREFIX.blue().bold());
}

pub fn fail(message: impl Display) {
    println!("{} {message}", FAIL_PREFIX.red().bold());
}

/// Pretty-print a JSON value for diagnostics, falling back to compact form.
pub fn pretty_json(value: &serde_json::Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}
