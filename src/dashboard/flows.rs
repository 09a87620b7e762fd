//! Remote half of each dashboard flow
//!
//! Each function performs exactly one store request and returns what the
//! store answered. None of them touch state; the caller turns the result into
//! an [`Action`](super::Action) and decides when (and whether) it is applied.

use super::error::DashboardError;
use crate::food::{Food, FoodDraft, FoodId, NewFood, merge_draft};
use crate::store::FoodStore;
use crate::store::error::StoreError;
use std::future::Future;
use tokio_util::sync::CancellationToken;

/// The flows the dashboard can run against the store.
#[derive(Debug, Copy, Clone, Eq, PartialEq, strum::Display)]
pub enum Flow {
    #[strum(to_string = "List foods")]
    List,
    #[strum(to_string = "Add food")]
    Add,
    #[strum(to_string = "Update food")]
    Update,
    #[strum(to_string = "Delete food")]
    Delete,
}

/// `GET /foods`, replacing the local sequence.
pub async fn load_foods<S: FoodStore + ?Sized>(store: &S) -> Result<Vec<Food>, DashboardError> {
    Ok(store.list_foods().await?)
}

/// `POST /foods` with `available: true` injected.
pub async fn add_food<S: FoodStore + ?Sized>(
    store: &S,
    draft: FoodDraft,
) -> Result<Food, DashboardError> {
    Ok(store.create_food(&NewFood::from(draft)).await?)
}

/// `PUT /foods/{id}` addressed by the edit target, with the draft merged over it.
pub async fn update_food<S: FoodStore + ?Sized>(
    store: &S,
    editing: Option<Food>,
    draft: FoodDraft,
) -> Result<Food, DashboardError> {
    let editing = editing.ok_or(DashboardError::NoEditTarget)?;
    let body = merge_draft(&editing, &draft).map_err(StoreError::from)?;
    Ok(store.update_food(editing.id, &body).await?)
}

/// `DELETE /foods/{id}`; the removal is only reported once the store confirms.
pub async fn delete_food<S: FoodStore + ?Sized>(
    store: &S,
    id: FoodId,
) -> Result<FoodId, DashboardError> {
    store.delete_food(id).await?;
    Ok(id)
}

/// Runs `flow` unless `token` is cancelled first.
///
/// A cancelled flow resolves to [`DashboardError::Cancelled`] and its
/// response, if any, is dropped.
pub async fn run_cancellable<T, F>(token: &CancellationToken, flow: F) -> Result<T, DashboardError>
where
    F: Future<Output = Result<T, DashboardError>>,
{
    tokio::select! {
        biased;
        _ = token.cancelled() => Err(DashboardError::Cancelled),
        result = flow => result,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MockFoodStore;
    use std::time::Duration;

    fn soup() -> Food {
        Food {
            id: 1,
            name: "Soup".to_string(),
            description: "Hot".to_string(),
            price: 8.0,
            available: true,
            image: "soup.png".to_string(),
        }
    }

    #[tokio::test]
    async fn test_update_without_target_sends_nothing() {
        let mut store = MockFoodStore::new();
        store.expect_update_food().times(0);

        let result = update_food(&store, None, FoodDraft::default()).await;
        assert!(matches!(result, Err(DashboardError::NoEditTarget)));
    }

    #[tokio::test]
    async fn test_delete_reports_id_after_success() {
        let mut store = MockFoodStore::new();
        store
            .expect_delete_food()
            .withf(|id| *id == 2)
            .times(1)
            .returning(|_| Ok(()));

        assert_eq!(delete_food(&store, 2).await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_update_merges_draft_over_target() {
        let mut store = MockFoodStore::new();
        store
            .expect_update_food()
            .withf(|id, body| {
                *id == 1
                    && body["name"] == "Tomato Soup"
                    && body["description"] == "Hot"
                    && body["available"] == true
            })
            .times(1)
            .returning(|_, _| {
                Ok(Food {
                    name: "Tomato Soup".to_string(),
                    ..soup()
                })
            });

        let draft = FoodDraft {
            name: "Tomato Soup".to_string(),
            ..FoodDraft::from(&soup())
        };
        let updated = update_food(&store, Some(soup()), draft).await.unwrap();
        assert_eq!(updated.name, "Tomato Soup");
    }

    #[tokio::test]
    async fn test_run_cancellable_stops_pending_flow() {
        let token = CancellationToken::new();
        let canceller = token.clone();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(20)).await;
            canceller.cancel();
        });

        let result: Result<(), DashboardError> =
            run_cancellable(&token, std::future::pending()).await;
        assert!(matches!(result, Err(DashboardError::Cancelled)));
    }

    #[tokio::test]
    async fn test_run_cancellable_passes_result_through() {
        let token = CancellationToken::new();
        let result = run_cancellable(&token, async { Ok(5) }).await;
        assert_eq!(result.unwrap(), 5);
    }
}
