//! Dashboard utility functions
//!
//! Contains helper functions used across dashboard components

use crate::dashboard::Flow;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::prelude::Color;

/// Get a ratatui color for the flow an event belongs to
pub fn get_flow_color(flow: &Flow) -> Color {
    match flow {
        Flow::List => Color::Cyan,
        Flow::Add => Color::Green,
        Flow::Update => Color::Yellow,
        Flow::Delete => Color::LightRed,
    }
}

/// Format compact timestamp with date and time from full timestamp
pub fn format_compact_timestamp(timestamp: &str) -> String {
    // "YYYY-MM-DD HH:MM:SS" -> "MM-DD HH:MM"
    let mut parts = timestamp.split(' ');
    if let (Some(date_part), Some(time_part)) = (parts.next(), parts.next()) {
        if let (Some(month_day), Some(hour_min)) = (date_part.get(5..10), time_part.get(0..5)) {
            return format!("{} {}", month_day, hour_min);
        }
    }
    timestamp.to_string()
}

/// Clean HTTP error messages
pub fn clean_http_error_message(msg: &str) -> String {
    if msg.contains("error sending request") || msg.contains("Connection refused") {
        return match msg.split_once(':') {
            Some((flow, _)) => format!("{}: food API unreachable", flow),
            None => "Food API unreachable".to_string(),
        };
    }
    if msg.contains("operation timed out") {
        return "Request timed out".to_string();
    }
    msg.to_string()
}

/// Rectangle of the given percentage size centered in `area`, for modals.
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}
