//! The dashboard controller
//!
//! Owns the state, the store handle and the cancellation token for one
//! dashboard lifetime. Every remote flow returns a `Result`; on failure the
//! state is left exactly as it was and the error is logged.

use super::action::Action;
use super::error::DashboardError;
use super::flows::{self, Flow, run_cancellable};
use super::state::DashboardState;
use crate::error_classifier::ErrorClassifier;
use crate::food::{Food, FoodDraft, FoodId};
use crate::store::FoodStore;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

pub struct Dashboard<S: FoodStore + ?Sized> {
    store: Arc<S>,
    state: DashboardState,
    token: CancellationToken,
    mounted: bool,
    error_classifier: ErrorClassifier,
}

impl<S: FoodStore + ?Sized> Dashboard<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self::with_token(store, CancellationToken::new())
    }

    /// Creates a dashboard whose lifetime is bound to `token`.
    pub fn with_token(store: Arc<S>, token: CancellationToken) -> Self {
        Self {
            store,
            state: DashboardState::new(),
            token,
            mounted: false,
            error_classifier: ErrorClassifier::new(),
        }
    }

    pub fn state(&self) -> &DashboardState {
        &self.state
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Fetch the food list. Only the first call issues a request.
    pub async fn mount(&mut self) -> Result<(), DashboardError> {
        if self.mounted {
            log::debug!("Dashboard already mounted; skipping initial fetch");
            return Ok(());
        }
        self.mounted = true;
        let store = Arc::clone(&self.store);
        self.run(Flow::List, flows::load_foods(store.as_ref()), Action::Loaded)
            .await
            .map(|_| ())
    }

    /// Create a food from `draft` and append the stored result.
    pub async fn add_food(&mut self, draft: FoodDraft) -> Result<Food, DashboardError> {
        let store = Arc::clone(&self.store);
        self.run(Flow::Add, flows::add_food(store.as_ref(), draft), Action::Added)
            .await
    }

    /// Update the current edit target with `draft`.
    pub async fn update_food(&mut self, draft: FoodDraft) -> Result<Food, DashboardError> {
        let store = Arc::clone(&self.store);
        let editing = self.state.editing_food().cloned();
        self.run(
            Flow::Update,
            flows::update_food(store.as_ref(), editing, draft),
            Action::Updated,
        )
        .await
    }

    /// Delete a food remotely, then locally.
    pub async fn delete_food(&mut self, id: FoodId) -> Result<(), DashboardError> {
        let store = Arc::clone(&self.store);
        self.run(Flow::Delete, flows::delete_food(store.as_ref(), id), Action::Deleted)
            .await
            .map(|_| ())
    }

    pub fn toggle_add_modal(&mut self) {
        self.state.apply(Action::ToggleAddModal);
    }

    pub fn toggle_edit_modal(&mut self) {
        self.state.apply(Action::ToggleEditModal);
    }

    pub fn begin_edit(&mut self, food: Food) {
        self.state.apply(Action::BeginEdit(food));
    }

    /// Cancel in-flight requests. Flows started afterwards fail with `Cancelled`.
    pub fn unmount(&mut self) {
        self.token.cancel();
    }

    /// Runs one remote flow and applies its reconciling action on success.
    async fn run<T, F>(
        &mut self,
        flow: Flow,
        request: F,
        to_action: fn(T) -> Action,
    ) -> Result<T, DashboardError>
    where
        T: Clone,
        F: std::future::Future<Output = Result<T, DashboardError>>,
    {
        if self.token.is_cancelled() {
            return Err(DashboardError::Cancelled);
        }
        match run_cancellable(&self.token, request).await {
            Ok(output) => {
                let action = to_action(output.clone());
                log::debug!("{} succeeded: {}", flow, action);
                self.state.apply(action);
                Ok(output)
            }
            Err(e) => {
                let level = self.error_classifier.classify_dashboard_error(&e);
                log::log!(log::Level::from(level), "{} failed: {}", flow, e);
                Err(e)
            }
        }
    }
}

impl<S: FoodStore + ?Sized> Drop for Dashboard<S> {
    fn drop(&mut self) {
        self.unmount();
    }
}
