/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";

use crate::models::attendance_status::AttendanceStatus;
use crate::models::join_status::JoinStatus;

/// Join → green, Leave → yellow, End → grey.
pub fn color_for_status(status: AttendanceStatus) -> &'static str {
    match status {
        AttendanceStatus::Join => GREEN,
        AttendanceStatus::Leave => YELLOW,
        AttendanceStatus::End => GREY,
    }
}

pub fn colorize_status(status: AttendanceStatus) -> String {
    format!("{}{}{}", color_for_status(status), status, RESET)
}

pub fn colorize_join_status(status: JoinStatus) -> String {
    match status {
        JoinStatus::Joined => format!("{GREEN}joined{RESET}"),
        JoinStatus::Free => format!("{GREY}free{RESET}"),
    }
}
