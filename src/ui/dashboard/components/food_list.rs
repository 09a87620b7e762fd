//! Food list component
//!
//! Renders one card per food, highlighting the selected one

use super::super::state::DashboardView;
use crate::food::{Food, format_price};

use ratatui::Frame;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, List, ListItem, ListState, Padding, Paragraph};

fn food_card(food: &Food) -> ListItem<'_> {
    let (status, status_color) = if food.available {
        ("Available", Color::LightGreen)
    } else {
        ("Unavailable", Color::LightRed)
    };

    ListItem::new(vec![
        Line::from(vec![
            Span::styled(
                food.name.as_str(),
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(
                format!("R$ {}", format_price(food.price)),
                Style::default().fg(Color::Yellow),
            ),
            Span::raw("  "),
            Span::styled(status, Style::default().fg(status_color)),
        ]),
        Line::from(Span::styled(
            food.description.as_str(),
            Style::default().fg(Color::Gray),
        )),
        Line::from(Span::styled(
            food.image.as_str(),
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(""),
    ])
}

/// Render the menu as a selectable list of cards.
pub fn render_food_list(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardView) {
    let block = Block::default()
        .title(format!("MENU ({})", state.state.foods().len()))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan))
        .padding(Padding::horizontal(1));

    if state.state.foods().is_empty() {
        let text = if state.in_flight() > 0 {
            "Loading..."
        } else {
            "No foods yet. Press [A] to add one."
        };
        f.render_widget(Paragraph::new(text).block(block), area);
        return;
    }

    let items: Vec<ListItem> = state.state.foods().iter().map(food_card).collect();
    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().bg(Color::Rgb(40, 48, 56)))
        .highlight_symbol("> ");

    let mut list_state = ListState::default().with_selected(Some(state.selected()));
    f.render_stateful_widget(list, area, &mut list_state);
}
