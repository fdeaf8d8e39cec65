//! ANSI color helper utilities for terminal output.

use crate::models::Status;

pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";
pub const MAGENTA: &str = "\x1b[35m";
pub const CYAN: &str = "\x1b[36m";

/// Colour of a status tag.
/// Initial statuses stay grey so that only "something happened" stands out.
pub fn color_for_status(status: Status) -> &'static str {
    match status {
        Status::NotClocked | Status::Normal | Status::NotStarted => GREY,
        Status::ClockedIn => GREEN,
        Status::ClockedOut => BLUE,
        Status::Tardy => YELLOW,
        Status::Absent => RED,
        Status::OnBreak => MAGENTA,
        Status::Returned => CYAN,
    }
}

/// Colour of a cell's text, taken from the strongest row-wide tag.
///
/// Absence beats lateness, lateness beats clock state.
pub fn color_for_tags(tags: &[Status]) -> &'static str {
    const PRIORITY: [Status; 4] = [
        Status::Absent,
        Status::Tardy,
        Status::ClockedOut,
        Status::ClockedIn,
    ];

    PRIORITY
        .iter()
        .find(|s| tags.contains(*s))
        .map(|s| color_for_status(*s))
        .unwrap_or(RESET)
}

pub fn paint(value: &str, color: &str, enabled: bool) -> String {
    if enabled && color != RESET {
        format!("{color}{value}{RESET}")
    } else {
        value.to_string()
    }
}
