//! Dashboard footer component
//!
//! Renders the key bindings for the current mode

use super::super::state::DashboardView;

use ratatui::Frame;
use ratatui::layout::Alignment;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

/// Render footer. Modals swap in their own bindings.
pub fn render_footer(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardView) {
    let footer_text = if state.state.is_add_modal_open() || state.state.is_edit_modal_open() {
        "[Tab] Next field | [Shift+Tab] Previous | [Enter] Save | [Esc] Cancel"
    } else {
        "[A] Add | [E] Edit | [D] Delete | [Up/Down] Select | [Q] Quit"
    };

    let footer = Paragraph::new(footer_text)
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::TOP)
                .border_type(BorderType::Thick),
        );
    f.render_widget(footer, area);
}
