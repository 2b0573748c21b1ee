/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";

pub const GREY: &str = "\x1b[90m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";

/// OT color:
/// \>0 → green
/// \<0 → red
/// 0 → reset
pub fn color_for_overtime(value: i64) -> &'static str {
    match value {
        v if v > 0 => GREEN,
        v if v < 0 => RED,
        _ => RESET,
    }
}

/// Grey out empty optional fields (`None` or blank), shown as `--`.
pub fn colorize_optional(value: Option<&str>) -> String {
    match value {
        Some(v) if !v.trim().is_empty() => v.to_string(),
        _ => format!("{GREY}--{RESET}"),
    }
}
