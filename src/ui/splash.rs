//! Splash screen rendering module.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

pub const LOGO_NAME: &str = r#"
  ███████╗   ██████╗    ██████╗   ██████╗
  ██╔════╝  ██╔═══██╗  ██╔═══██╗  ██╔══██╗
  █████╗    ██║   ██║  ██║   ██║  ██║  ██║
  ██╔══╝    ██║   ██║  ██║   ██║  ██║  ██║
  ██║       ╚██████╔╝  ╚██████╔╝  ██████╔╝
  ╚═╝        ╚═════╝    ╚═════╝   ╚═════╝
"#;

pub fn render_splash(f: &mut Frame) {
    let mut lines: Vec<Line> = LOGO_NAME
        .trim_matches('\n')
        .lines()
        .map(|line| {
            Span::styled(
                line.to_string(),
                Style::default()
                    .fg(Color::LightYellow)
                    .add_modifier(Modifier::BOLD),
            )
            .into()
        })
        .collect();

    lines.push(Line::from(Span::raw(" ")));
    lines.push(
        Span::styled(
            format!("Menu dashboard {}", env!("CARGO_PKG_VERSION")),
            Style::default()
                .fg(Color::LightBlue)
                .add_modifier(Modifier::ITALIC),
        )
        .into(),
    );
    lines.push(Span::styled("Press any key", Style::default().fg(Color::DarkGray)).into());

    let [centered_area] = Layout::vertical([Constraint::Length(lines.len() as u16)])
        .flex(Flex::Center)
        .areas(f.area());

    let logo = Paragraph::new(lines).alignment(Alignment::Center);
    f.render_widget(logo, centered_area);
}
