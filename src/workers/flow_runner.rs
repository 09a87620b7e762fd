//! Background execution of dashboard flows for the TUI
//!
//! The UI loop must keep drawing while a request is in flight, so each flow
//! runs as its own tokio task and reports its outcome as an [`Event`]. The
//! UI loop stays the only writer of dashboard state: it applies the action
//! carried by success events when it drains the channel.
//!
//! [`Event`]: crate::events::Event

use super::core::EventSender;
use crate::dashboard::flows::{self, run_cancellable};
use crate::dashboard::{Action, DashboardError, Flow};
use crate::error_classifier::ErrorClassifier;
use crate::food::{Food, FoodDraft, FoodId};
use crate::store::FoodStore;
use std::future::Future;
use std::sync::Arc;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

pub struct FlowRunner {
    store: Arc<dyn FoodStore>,
    event_sender: EventSender,
    token: CancellationToken,
    error_classifier: ErrorClassifier,
}

impl FlowRunner {
    pub fn new(
        store: Arc<dyn FoodStore>,
        event_sender: EventSender,
        token: CancellationToken,
    ) -> Self {
        Self {
            store,
            event_sender,
            token,
            error_classifier: ErrorClassifier::new(),
        }
    }

    /// Cancels every flow spawned by this runner.
    pub fn shutdown(&self) {
        self.token.cancel();
    }

    pub fn spawn_load(&self) -> JoinHandle<()> {
        let store = Arc::clone(&self.store);
        self.spawn(
            Flow::List,
            "Loading menu...".to_string(),
            async move { flows::load_foods(store.as_ref()).await },
            |foods: &Vec<Food>| format!("Loaded {} food items", foods.len()),
            Action::Loaded,
        )
    }

    pub fn spawn_add(&self, draft: FoodDraft) -> JoinHandle<()> {
        let store = Arc::clone(&self.store);
        let pending = format!("Adding {}...", draft.name);
        self.spawn(
            Flow::Add,
            pending,
            async move { flows::add_food(store.as_ref(), draft).await },
            |food: &Food| format!("Added {}", food),
            Action::Added,
        )
    }

    /// `editing` is the edit target captured when the form was submitted.
    pub fn spawn_update(&self, editing: Option<Food>, draft: FoodDraft) -> JoinHandle<()> {
        let store = Arc::clone(&self.store);
        let pending = match &editing {
            Some(food) => format!("Updating #{}...", food.id),
            None => "Updating...".to_string(),
        };
        self.spawn(
            Flow::Update,
            pending,
            async move { flows::update_food(store.as_ref(), editing, draft).await },
            |food: &Food| format!("Updated {}", food),
            Action::Updated,
        )
    }

    pub fn spawn_delete(&self, id: FoodId) -> JoinHandle<()> {
        let store = Arc::clone(&self.store);
        self.spawn(
            Flow::Delete,
            format!("Deleting #{}...", id),
            async move { flows::delete_food(store.as_ref(), id).await },
            |id: &FoodId| format!("Deleted #{}", id),
            Action::Deleted,
        )
    }

    fn spawn<T, F>(
        &self,
        flow: Flow,
        pending: String,
        request: F,
        describe: fn(&T) -> String,
        to_action: fn(T) -> Action,
    ) -> JoinHandle<()>
    where
        T: Send + 'static,
        F: Future<Output = Result<T, DashboardError>> + Send + 'static,
    {
        let event_sender = self.event_sender.clone();
        let token = self.token.clone();
        let error_classifier = self.error_classifier.clone();

        tokio::spawn(async move {
            event_sender.send_pending(flow, pending).await;
            match run_cancellable(&token, request).await {
                Ok(output) => {
                    let msg = describe(&output);
                    event_sender
                        .send_success(flow, msg, to_action(output))
                        .await;
                }
                Err(DashboardError::Cancelled) => {
                    log::debug!("{} cancelled", flow);
                }
                Err(e) => {
                    let level = error_classifier.classify_dashboard_error(&e);
                    log::log!(log::Level::from(level), "{} failed: {}", flow, e);
                    event_sender
                        .send_error(flow, format!("{} failed: {}", flow, e), level)
                        .await;
                }
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::{Event, EventType};
    use crate::logging::LogLevel;
    use crate::store::MockFoodStore;
    use crate::store::error::StoreError;
    use tokio::sync::mpsc;

    fn pasta() -> Food {
        Food {
            id: 3,
            name: "Pasta".to_string(),
            description: "Fresh".to_string(),
            price: 14.0,
            available: true,
            image: "pasta.png".to_string(),
        }
    }

    fn runner(store: MockFoodStore) -> (FlowRunner, mpsc::Receiver<Event>) {
        let (sender, receiver) = mpsc::channel(16);
        let runner = FlowRunner::new(
            Arc::new(store),
            EventSender::new(sender),
            CancellationToken::new(),
        );
        (runner, receiver)
    }

    #[tokio::test]
    /// A successful add reports pending, then success with the Added action.
    async fn test_add_reports_action() {
        let mut store = MockFoodStore::new();
        store
            .expect_create_food()
            .times(1)
            .returning(|_| Ok(pasta()));
        let (runner, mut receiver) = runner(store);

        runner.spawn_add(FoodDraft::from(&pasta())).await.unwrap();

        let pending = receiver.recv().await.unwrap();
        assert_eq!(pending.event_type, EventType::Pending);
        let success = receiver.recv().await.unwrap();
        assert_eq!(success.event_type, EventType::Success);
        assert_eq!(success.flow, Flow::Add);
        assert_eq!(success.action, Some(Action::Added(pasta())));
    }

    #[tokio::test]
    /// A failed delete reports an error event without an action.
    async fn test_delete_failure_reports_error() {
        let mut store = MockFoodStore::new();
        store.expect_delete_food().times(1).returning(|_| {
            Err(StoreError::Http {
                status: 503,
                message: "unavailable".to_string(),
            })
        });
        let (runner, mut receiver) = runner(store);

        runner.spawn_delete(3).await.unwrap();

        let _pending = receiver.recv().await.unwrap();
        let error = receiver.recv().await.unwrap();
        assert_eq!(error.event_type, EventType::Error);
        assert_eq!(error.log_level, LogLevel::Warn);
        assert!(error.action.is_none());
        assert!(error.msg.contains("Delete food failed"));
    }

    #[tokio::test]
    /// Update without an edit target becomes an error event, no request made.
    async fn test_update_without_target() {
        let mut store = MockFoodStore::new();
        store.expect_update_food().times(0);
        let (runner, mut receiver) = runner(store);

        runner
            .spawn_update(None, FoodDraft::default())
            .await
            .unwrap();

        let _pending = receiver.recv().await.unwrap();
        let error = receiver.recv().await.unwrap();
        assert_eq!(error.event_type, EventType::Error);
        assert!(error.msg.contains("No food selected"));
    }

    #[tokio::test]
    /// After shutdown, flows end without reporting an outcome.
    async fn test_shutdown_suppresses_outcome() {
        let mut store = MockFoodStore::new();
        store.expect_list_foods().times(0);
        let (runner, mut receiver) = runner(store);

        runner.shutdown();
        runner.spawn_load().await.unwrap();

        let pending = receiver.recv().await.unwrap();
        assert_eq!(pending.event_type, EventType::Pending);
        assert!(receiver.try_recv().is_err());
    }
}
