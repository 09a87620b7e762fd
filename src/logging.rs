//! Log thresholds and console logging
//!
//! `RUST_LOG` drives both outputs: the headless commands hand it to
//! `env_logger`, and the TUI compares activity events against the same
//! threshold before showing them.

pub use crate::error_classifier::LogLevel;
use std::env;

/// Threshold from `RUST_LOG`, `Info` when unset.
pub fn get_rust_log_level() -> LogLevel {
    env::var("RUST_LOG")
        .map(|value| parse_rust_log_level(&value))
        .unwrap_or(LogLevel::Info)
}

/// Reads the first directive only; `food_dashboard=debug,hyper=warn` is `Debug`.
pub fn parse_rust_log_level(rust_log: &str) -> LogLevel {
    let directive = rust_log.split(',').next().unwrap_or_default();
    let level = match directive.rsplit_once('=') {
        Some((_, level)) => level,
        None => directive,
    };

    match level.trim().to_ascii_lowercase().as_str() {
        "trace" => LogLevel::Trace,
        "debug" => LogLevel::Debug,
        "warn" | "warning" => LogLevel::Warn,
        "error" => LogLevel::Error,
        _ => LogLevel::Info,
    }
}

pub fn should_log(event_level: LogLevel, threshold: LogLevel) -> bool {
    event_level >= threshold
}

pub fn should_log_with_env(event_level: LogLevel) -> bool {
    should_log(event_level, get_rust_log_level())
}

/// Routes `log` records to stderr for the headless commands.
///
/// The TUI never calls this: records would tear the alternate screen, so its
/// diagnostics go to the activity panel instead.
pub fn init_console_logger() {
    let _ = env_logger::Builder::new()
        .filter_level(get_rust_log_level().into())
        .parse_default_env()
        .format_timestamp_secs()
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_rust_log_level() {
        assert_eq!(parse_rust_log_level("debug"), LogLevel::Debug);
        assert_eq!(parse_rust_log_level("info"), LogLevel::Info);
        assert_eq!(parse_rust_log_level("warn"), LogLevel::Warn);
        assert_eq!(parse_rust_log_level("error"), LogLevel::Error);
        assert_eq!(parse_rust_log_level("trace"), LogLevel::Trace);

        assert_eq!(parse_rust_log_level("food_dashboard=debug"), LogLevel::Debug);
        assert_eq!(
            parse_rust_log_level("food_dashboard=debug,hyper=info"),
            LogLevel::Debug
        );

        assert_eq!(parse_rust_log_level(" WARNING "), LogLevel::Warn);
        assert_eq!(parse_rust_log_level("invalid"), LogLevel::Info);
        assert_eq!(parse_rust_log_level(""), LogLevel::Info);
    }

    #[test]
    fn test_should_log() {
        assert!(should_log(LogLevel::Error, LogLevel::Debug));
        assert!(should_log(LogLevel::Warn, LogLevel::Warn));
        assert!(!should_log(LogLevel::Debug, LogLevel::Error));
        assert!(!should_log(LogLevel::Info, LogLevel::Error));
    }
}
