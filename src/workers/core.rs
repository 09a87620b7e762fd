//! Core worker utilities

use crate::dashboard::{Action, Flow};
use crate::events::Event;
use crate::logging::LogLevel;
use tokio::sync::mpsc;

/// Common event sending utilities for request tasks
#[derive(Clone)]
pub struct EventSender {
    sender: mpsc::Sender<Event>,
}

impl EventSender {
    pub fn new(sender: mpsc::Sender<Event>) -> Self {
        Self { sender }
    }

    /// Send a generic event
    pub async fn send_event(&self, event: Event) {
        // The UI loop may already be gone during shutdown.
        let _ = self.sender.send(event).await;
    }

    pub async fn send_pending(&self, flow: Flow, message: String) {
        self.send_event(Event::pending(flow, message)).await;
    }

    pub async fn send_success(&self, flow: Flow, message: String, action: Action) {
        self.send_event(Event::success(flow, message, action)).await;
    }

    pub async fn send_error(&self, flow: Flow, message: String, log_level: LogLevel) {
        self.send_event(Event::error(flow, message, log_level))
            .await;
    }
}
