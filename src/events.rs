//! Event System
//!
//! Flow outcomes reported from request tasks back to the UI loop

use crate::dashboard::{Action, Flow};
use crate::logging::{LogLevel, should_log_with_env};
use chrono::Local;
use std::fmt::Display;

#[derive(Debug, Copy, Clone, Eq, PartialEq, strum::Display)]
pub enum EventType {
    /// A request was sent and is awaiting the store.
    Pending,
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    pub flow: Flow,
    pub msg: String,
    pub timestamp: String,
    pub event_type: EventType,
    pub log_level: LogLevel,
    /// Reconciling transition carried by success events
    pub action: Option<Action>,
}

impl Event {
    fn new(flow: Flow, msg: String, event_type: EventType, log_level: LogLevel) -> Self {
        Self {
            flow,
            msg,
            timestamp: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            event_type,
            log_level,
            action: None,
        }
    }

    pub fn pending(flow: Flow, msg: String) -> Self {
        Self::new(flow, msg, EventType::Pending, LogLevel::Debug)
    }

    pub fn success(flow: Flow, msg: String, action: Action) -> Self {
        Self {
            action: Some(action),
            ..Self::new(flow, msg, EventType::Success, LogLevel::Info)
        }
    }

    pub fn error(flow: Flow, msg: String, log_level: LogLevel) -> Self {
        Self::new(flow, msg, EventType::Error, log_level)
    }

    pub fn should_display(&self) -> bool {
        // Always show success events and info level events
        if self.event_type == EventType::Success || self.log_level >= LogLevel::Info {
            return true;
        }
        should_log_with_env(self.log_level)
    }
}

impl Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} [{}] {}", self.event_type, self.timestamp, self.msg)
    }
}
