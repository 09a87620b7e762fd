//! Dashboard screen state
//!
//! Wraps the core [`DashboardState`] with what only the terminal needs:
//! selection, form drafts, the activity log and animation ticks.

use crate::consts::cli_consts::MAX_ACTIVITY_LOGS;
use crate::dashboard::{Action, DashboardState};
use crate::environment::Environment;
use crate::events::Event;
use crate::food::{Food, FoodDraft, FoodId};
use crate::ui::form::FoodForm;

use std::collections::VecDeque;
use std::time::Instant;

/// Work the dashboard asks the app to start on its behalf.
#[derive(Debug, Clone, PartialEq)]
pub enum Request {
    Add(FoodDraft),
    /// Edit target captured at submit time, plus the draft.
    Update(Option<Food>, FoodDraft),
    Delete(FoodId),
    Quit,
}

#[derive(Debug)]
pub struct DashboardView {
    /// Foods, edit target and modal flags.
    pub state: DashboardState,
    /// The store the dashboard talks to.
    pub environment: Environment,
    /// The start time of the application, used for computing uptime.
    pub start_time: Instant,
    /// Draft of the add modal.
    pub add_form: FoodForm,
    /// Draft of the edit modal, prefilled when editing begins.
    pub edit_form: FoodForm,
    /// Queue of events waiting to be processed
    pub pending_events: VecDeque<Event>,
    /// Activity logs for display
    pub activity_logs: VecDeque<Event>,
    /// Whether to enable background colors
    pub with_background_color: bool,
    /// Animation tick counter
    pub tick: usize,

    /// Index of the highlighted card
    selected: usize,
    /// Requests sent and not yet answered
    in_flight: usize,
}

impl DashboardView {
    pub fn new(environment: Environment, start_time: Instant, with_background_color: bool) -> Self {
        Self {
            state: DashboardState::new(),
            environment,
            start_time,
            add_form: FoodForm::new(),
            edit_form: FoodForm::new(),
            pending_events: VecDeque::new(),
            activity_logs: VecDeque::new(),
            with_background_color,
            tick: 0,
            selected: 0,
            in_flight: 0,
        }
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn selected_food(&self) -> Option<&Food> {
        self.state.foods().get(self.selected)
    }

    pub fn in_flight(&self) -> usize {
        self.in_flight
    }

    pub fn select_next(&mut self) {
        let len = self.state.foods().len();
        if len > 0 {
            self.selected = (self.selected + 1).min(len - 1);
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub(super) fn mark_request_started(&mut self) {
        self.in_flight += 1;
    }

    pub(super) fn mark_request_finished(&mut self) {
        self.in_flight = self.in_flight.saturating_sub(1);
    }

    /// Apply a transition to the core state and keep the selection in range.
    pub fn apply(&mut self, action: Action) {
        if let Action::BeginEdit(food) = &action {
            self.edit_form = FoodForm::from_food(food);
        }
        self.state.apply(action);
        let len = self.state.foods().len();
        if self.selected >= len {
            self.selected = len.saturating_sub(1);
        }
    }

    /// Add an event to activity logs with size limit
    pub fn add_to_activity_log(&mut self, event: Event) {
        if self.activity_logs.len() >= MAX_ACTIVITY_LOGS {
            self.activity_logs.pop_front();
        }
        self.activity_logs.push_back(event);
    }

    /// Add an event to the processing queue
    pub fn add_event(&mut self, event: Event) {
        self.pending_events.push_back(event);
    }
}
