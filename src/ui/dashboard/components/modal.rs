//! Add and edit modals
//!
//! Popup form drawn over the dashboard while a modal flag is set

use super::super::state::DashboardView;
use super::super::utils::centered_rect;
use crate::ui::form::{FoodForm, FormField};

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Clear, Paragraph};

/// Render whichever modal is open, if any.
pub fn render_modal(f: &mut Frame, state: &DashboardView) {
    if state.state.is_add_modal_open() {
        render_form(f, "NEW FOOD", &state.add_form, state.tick);
    } else if state.state.is_edit_modal_open() {
        let title = match state.state.editing_food() {
            Some(food) => format!("EDIT #{} {}", food.id, food.name),
            None => "EDIT FOOD".to_string(),
        };
        render_form(f, &title, &state.edit_form, state.tick);
    }
}

fn render_form(f: &mut Frame, title: &str, form: &FoodForm, tick: usize) {
    let area = centered_rect(60, 60, f.area());
    f.render_widget(Clear, area);

    let block = Block::default()
        .title(title.to_string())
        .borders(Borders::ALL)
        .border_type(BorderType::Double)
        .border_style(Style::default().fg(Color::Yellow));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(
            FormField::ALL
                .iter()
                .map(|_| Constraint::Length(3))
                .collect::<Vec<_>>(),
        )
        .split(inner);

    for (field, row) in FormField::ALL.iter().zip(rows.iter()) {
        render_field(f, *row, form, *field, tick);
    }
}

fn render_field(f: &mut Frame, area: Rect, form: &FoodForm, field: FormField, tick: usize) {
    let focused = form.focus() == field;
    let bad_price = field == FormField::Price && !form.has_valid_price();
    let border_color = match (bad_price, focused) {
        (true, _) => Color::LightRed,
        (false, true) => Color::Yellow,
        (false, false) => Color::DarkGray,
    };
    let title = if bad_price {
        format!("{} (a number, e.g. 12.50)", field)
    } else {
        field.to_string()
    };
    // Blink the cursor every 5 ticks
    let cursor = if focused && tick % 10 < 5 { "_" } else { "" };

    let input = Paragraph::new(Line::from(vec![
        Span::styled(form.value(field), Style::default().fg(Color::White)),
        Span::styled(cursor, Style::default().add_modifier(Modifier::BOLD)),
    ]))
    .block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(border_color)),
    );
    f.render_widget(input, area);
}
