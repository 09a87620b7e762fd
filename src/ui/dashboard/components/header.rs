//! Dashboard header component
//!
//! Renders the title and sync gauge

use super::super::state::DashboardView;

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Gauge, Paragraph};

/// Render header with title, menu size and request progress.
pub fn render_header(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardView) {
    let header_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Length(2)])
        .split(area);

    let version = env!("CARGO_PKG_VERSION");
    let title_text = format!(
        "FOOD DASHBOARD v{} | {} items | {}",
        version,
        state.state.foods().len(),
        state.environment.api_url()
    );

    let title = Paragraph::new(title_text)
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_type(BorderType::Thick),
        );
    f.render_widget(title, header_chunks[0]);

    let (progress_text, gauge_color, progress_percent) = if state.in_flight() > 0 {
        // Loops every 20 ticks while requests are outstanding
        let progress = ((state.tick % 20) as f64 / 20.0 * 100.0) as u16;
        (
            format!("SYNCING - {} request(s) in flight", state.in_flight()),
            Color::LightGreen,
            progress,
        )
    } else {
        let uptime = state.start_time.elapsed().as_secs();
        (
            format!("IDLE - up {}m {}s", uptime / 60, uptime % 60),
            Color::LightBlue,
            100,
        )
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .gauge_style(
            Style::default()
                .fg(gauge_color)
                .add_modifier(Modifier::BOLD),
        )
        .percent(progress_percent)
        .label(progress_text);

    f.render_widget(gauge, header_chunks[1]);
}
