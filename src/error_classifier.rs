use crate::dashboard::DashboardError;
use crate::store::error::StoreError;
use log::{Level, LevelFilter};

#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Trace = 0,
    Debug = 1,
    Info = 2,
    Warn = 3,
    Error = 4,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => LevelFilter::Trace,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Error => LevelFilter::Error,
        }
    }
}

impl From<LogLevel> for Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => Level::Trace,
            LogLevel::Debug => Level::Debug,
            LogLevel::Info => Level::Info,
            LogLevel::Warn => Level::Warn,
            LogLevel::Error => Level::Error,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ErrorClassifier;

impl ErrorClassifier {
    pub fn new() -> Self {
        Self
    }

    pub fn classify_store_error(&self, error: &StoreError) -> LogLevel {
        match (error, error.status()) {
            // Critical: credentials or permissions
            (_, Some(401 | 403)) => LogLevel::Error,

            // Temporary server issues
            (_, Some(500..=599)) => LogLevel::Warn,

            // Broken setup rather than a transient failure
            (StoreError::Encode(_) | StoreError::Client(_), _) => LogLevel::Error,

            // Network issues and other client errors (e.g. 404 after a concurrent delete)
            _ => LogLevel::Warn,
        }
    }

    pub fn classify_dashboard_error(&self, error: &DashboardError) -> LogLevel {
        match error {
            DashboardError::Store(e) => self.classify_store_error(e),
            DashboardError::NoEditTarget => LogLevel::Warn,
            // Expected during shutdown
            DashboardError::Cancelled => LogLevel::Debug,
        }
    }
}

impl Default for ErrorClassifier {
    fn default() -> Self {
        Self::new()
    }
}
