/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";

pub const GREY: &str = "\x1b[90m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";

/// Counter color against its limit:
/// at or over the limit → red,
/// one below → yellow,
/// zero → grey.
pub fn color_for_count(value: u32, limit: u32) -> &'static str {
    if value >= limit {
        RED
    } else if value + 1 == limit {
        YELLOW
    } else if value == 0 {
        GREY
    } else {
        RESET
    }
}

pub fn colorize(value: &str, color: &str) -> String {
    if color == RESET {
        value.to_string()
    } else {
        format!("{color}{value}{RESET}")
    }
}
