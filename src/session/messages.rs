//! Status lines printed around a session
//!
//! Session lines go to stdout with a coloured tag; command results use the
//! `print_cmd_*` macros instead.

const TAG_INFO: &str = "\x1b[1;36m[INFO]\x1b[0m";
const TAG_DONE: &str = "\x1b[1;32m[DONE]\x1b[0m";

fn session_line(tag: &str, msg: &str) {
    println!("{} {}", tag, msg);
}

/// `mode` is "TUI" or "headless".
pub fn print_session_starting(mode: &str, api_url: &str) {
    session_line(TAG_INFO, &format!("Starting {} mode against {}", mode, api_url));
}

pub fn print_session_shutdown() {
    session_line(TAG_INFO, "Cancelling outstanding requests...");
}

pub fn print_session_exit_success() {
    session_line(TAG_DONE, "Food dashboard exited successfully");
}
