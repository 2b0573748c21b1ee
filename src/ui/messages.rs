//! User-facing console messages.
//! The library core never prints; only CLI handlers and exports call these.

use crate::utils::colors::{BOLD, CYAN, GREEN, GREY, RED, RESET, YELLOW};
use std::fmt;

const ICON_INFO: &str = "ℹ️";
const ICON_OK: &str = "✅";
const ICON_WARN: &str = "⚠️";
const ICON_ERR: &str = "❌";

pub fn info<T: fmt::Display>(msg: T) {
    println!("{CYAN}{BOLD}{ICON_INFO}{RESET} {msg}");
}

pub fn success<T: fmt::Display>(msg: T) {
    println!("{GREEN}{BOLD}{ICON_OK}{RESET} {msg}");
}

pub fn warning<T: fmt::Display>(msg: T) {
    println!("{YELLOW}{BOLD}{ICON_WARN}{RESET} {msg}");
}

pub fn error<T: fmt::Display>(msg: T) {
    eprintln!("{RED}{BOLD}{ICON_ERR}{RESET} {msg}");
}

/// Section title, e.g. `── This week ──────`.
pub fn header<T: fmt::Display>(msg: T) {
    println!("\n{CYAN}{BOLD}── {msg} ──────────────{RESET}");
}

/// Aligned `label: value` line inside a section.
pub fn field<T: fmt::Display>(label: &str, value: T) {
    println!("  {GREY}{label:<22}{RESET} {value}");
}
