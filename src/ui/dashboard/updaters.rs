//! Dashboard state update logic
//!
//! Applies flow outcomes from the event queue and turns key presses into
//! transitions or requests.

use super::state::{DashboardView, Request};

use crate::dashboard::Action;
use crate::events::{Event, EventType};
use crossterm::event::{KeyCode, KeyEvent};

impl DashboardView {
    /// Advance one frame: bump the tick and drain queued events.
    pub fn update(&mut self) {
        self.tick += 1;

        // Process all queued events one by one
        while let Some(event) = self.pending_events.pop_front() {
            self.process_event(&event);
            self.add_to_activity_log(event);
        }
    }

    /// Process a single event and update relevant state
    fn process_event(&mut self, event: &Event) {
        match event.event_type {
            EventType::Pending => self.mark_request_started(),
            EventType::Success | EventType::Error => self.mark_request_finished(),
        }
        if let Some(action) = &event.action {
            self.apply(action.clone());
        }
    }

    /// Handle a key press. Returns work the app has to start, if any.
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<Request> {
        // The add modal is drawn on top, so it gets keys first.
        if self.state.is_add_modal_open() {
            return self.handle_add_modal_key(key);
        }
        if self.state.is_edit_modal_open() {
            return self.handle_edit_modal_key(key);
        }

        match key.code {
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => Some(Request::Quit),
            KeyCode::Char('a') | KeyCode::Char('A') => {
                self.apply(Action::ToggleAddModal);
                None
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.select_prev();
                None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.select_next();
                None
            }
            KeyCode::Char('e') | KeyCode::Char('E') => {
                if let Some(food) = self.selected_food().cloned() {
                    self.apply(Action::BeginEdit(food));
                }
                None
            }
            KeyCode::Char('d') | KeyCode::Char('D') => {
                self.selected_food().map(|food| Request::Delete(food.id))
            }
            _ => None,
        }
    }

    fn handle_add_modal_key(&mut self, key: KeyEvent) -> Option<Request> {
        match key.code {
            KeyCode::Esc => {
                self.apply(Action::ToggleAddModal);
                None
            }
            KeyCode::Enter => {
                if !self.add_form.check_submittable() {
                    return None;
                }
                let draft = self.add_form.take_draft();
                self.apply(Action::ToggleAddModal);
                Some(Request::Add(draft))
            }
            code => {
                edit_form_field(&mut self.add_form, code);
                None
            }
        }
    }

    fn handle_edit_modal_key(&mut self, key: KeyEvent) -> Option<Request> {
        match key.code {
            KeyCode::Esc => {
                self.apply(Action::ToggleEditModal);
                None
            }
            KeyCode::Enter => {
                if !self.edit_form.check_submittable() {
                    return None;
                }
                let draft = self.edit_form.to_draft();
                let editing = self.state.editing_food().cloned();
                self.apply(Action::ToggleEditModal);
                Some(Request::Update(editing, draft))
            }
            code => {
                edit_form_field(&mut self.edit_form, code);
                None
            }
        }
    }
}

fn edit_form_field(form: &mut crate::ui::form::FoodForm, code: KeyCode) {
    match code {
        KeyCode::Tab | KeyCode::Down => form.next_field(),
        KeyCode::BackTab | KeyCode::Up => form.prev_field(),
        KeyCode::Backspace => form.pop_char(),
        KeyCode::Char(c) => form.push_char(c),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboard::Flow;
    use crate::environment::Environment;
    use crate::food::Food;
    use crate::logging::LogLevel;
    use crossterm::event::KeyModifiers;
    use std::time::Instant;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn food(id: u64, name: &str) -> Food {
        Food {
            id,
            name: name.to_string(),
            description: "desc".to_string(),
            price: 5.0,
            available: true,
            image: "img.png".to_string(),
        }
    }

    fn view_with(foods: Vec<Food>) -> DashboardView {
        let mut view = DashboardView::new(Environment::Local, Instant::now(), false);
        view.apply(Action::Loaded(foods));
        view
    }

    fn type_text(view: &mut DashboardView, text: &str) {
        for c in text.chars() {
            assert_eq!(view.handle_key(key(KeyCode::Char(c))), None);
        }
    }

    #[test]
    fn test_events_apply_actions_and_track_in_flight() {
        let mut view = view_with(vec![food(1, "Soup")]);
        view.add_event(Event::pending(Flow::Add, "Adding...".to_string()));
        view.update();
        assert_eq!(view.in_flight(), 1);

        view.add_event(Event::success(
            Flow::Add,
            "Added".to_string(),
            Action::Added(food(2, "Pasta")),
        ));
        view.update();
        assert_eq!(view.in_flight(), 0);
        assert_eq!(view.state.foods().len(), 2);
        assert_eq!(view.activity_logs.len(), 2);
    }

    #[test]
    fn test_error_event_leaves_foods() {
        let mut view = view_with(vec![food(1, "Soup")]);
        view.add_event(Event::error(
            Flow::Delete,
            "Delete food failed".to_string(),
            LogLevel::Warn,
        ));
        view.update();
        assert_eq!(view.state.foods(), &[food(1, "Soup")]);
    }

    #[test]
    fn test_add_modal_submit() {
        let mut view = view_with(vec![]);
        assert_eq!(view.handle_key(key(KeyCode::Char('a'))), None);
        assert!(view.state.is_add_modal_open());

        type_text(&mut view, "img.png");
        view.handle_key(key(KeyCode::Tab));
        // 'q' types into the form instead of quitting.
        type_text(&mut view, "quiche");
        view.handle_key(key(KeyCode::Tab));
        type_text(&mut view, "7.5");

        let request = view.handle_key(key(KeyCode::Enter));
        match request {
            Some(Request::Add(draft)) => {
                assert_eq!(draft.image, "img.png");
                assert_eq!(draft.name, "quiche");
                assert_eq!(draft.price, "7.5");
            }
            other => panic!("unexpected request: {:?}", other),
        }
        assert!(!view.state.is_add_modal_open());
    }

    #[test]
    fn test_add_modal_holds_unparseable_price() {
        let mut view = view_with(vec![]);
        view.handle_key(key(KeyCode::Char('a')));
        view.handle_key(key(KeyCode::Tab));
        type_text(&mut view, "Tea");

        // Empty price
        assert_eq!(view.handle_key(key(KeyCode::Enter)), None);
        assert!(view.state.is_add_modal_open());

        type_text(&mut view, ".");
        assert_eq!(view.handle_key(key(KeyCode::Enter)), None);
        assert!(view.state.is_add_modal_open());

        type_text(&mut view, "5");
        match view.handle_key(key(KeyCode::Enter)) {
            Some(Request::Add(draft)) => {
                assert_eq!(draft.name, "Tea");
                assert_eq!(draft.price, ".5");
            }
            other => panic!("unexpected request: {:?}", other),
        }
    }

    #[test]
    fn test_edit_modal_holds_cleared_price() {
        let mut view = view_with(vec![food(1, "Soup")]);
        view.handle_key(key(KeyCode::Char('e')));
        view.handle_key(key(KeyCode::Tab));
        view.handle_key(key(KeyCode::Tab));
        for _ in 0.."5.00".len() {
            view.handle_key(key(KeyCode::Backspace));
        }
        assert_eq!(view.handle_key(key(KeyCode::Enter)), None);
        assert!(view.state.is_edit_modal_open());
    }

    #[test]
    fn test_escape_closes_add_modal_without_request() {
        let mut view = view_with(vec![]);
        view.handle_key(key(KeyCode::Char('a')));
        assert_eq!(view.handle_key(key(KeyCode::Esc)), None);
        assert!(!view.state.is_add_modal_open());
    }

    #[test]
    fn test_edit_flow_keys() {
        let mut view = view_with(vec![food(1, "Soup"), food(2, "Salad")]);
        view.handle_key(key(KeyCode::Down));
        view.handle_key(key(KeyCode::Char('e')));
        assert!(view.state.is_edit_modal_open());
        assert_eq!(view.state.editing_food(), Some(&food(2, "Salad")));

        view.handle_key(key(KeyCode::Tab));
        type_text(&mut view, "!");
        let request = view.handle_key(key(KeyCode::Enter));
        match request {
            Some(Request::Update(Some(target), draft)) => {
                assert_eq!(target.id, 2);
                assert_eq!(draft.name, "Salad!");
                assert_eq!(draft.price, "5.00");
            }
            other => panic!("unexpected request: {:?}", other),
        }
        assert!(!view.state.is_edit_modal_open());
    }

    #[test]
    fn test_delete_and_quit_keys() {
        let mut view = view_with(vec![food(1, "Soup")]);
        assert_eq!(
            view.handle_key(key(KeyCode::Char('d'))),
            Some(Request::Delete(1))
        );
        assert_eq!(view.handle_key(key(KeyCode::Char('q'))), Some(Request::Quit));

        let mut empty = view_with(vec![]);
        assert_eq!(empty.handle_key(key(KeyCode::Char('d'))), None);
    }

    #[test]
    fn test_selection_follows_deletes() {
        let mut view = view_with(vec![food(1, "Soup"), food(2, "Salad")]);
        view.select_next();
        assert_eq!(view.selected(), 1);
        view.apply(Action::Deleted(2));
        assert_eq!(view.selected(), 0);
        assert_eq!(view.selected_food().map(|f| f.id), Some(1));
    }
}
