use crate::environment::Environment;
use crate::food::{Food, FoodId, NewFood};
use crate::store::error::StoreError;
use serde_json::Value;

pub(crate) mod client;
pub use client::FoodStoreClient;
pub mod error;

#[cfg(test)]
use mockall::automock;

/// The remote food store: the HTTP API of record for food items.
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait FoodStore: Send + Sync {
    fn environment(&self) -> &Environment;

    /// `GET /foods`: every food item, in store order.
    async fn list_foods(&self) -> Result<Vec<Food>, StoreError>;

    /// `POST /foods`: creates an item and returns it with its assigned id.
    async fn create_food(&self, food: &NewFood) -> Result<Food, StoreError>;

    /// `PUT /foods/{id}`: replaces the item with `body` and returns the stored result.
    async fn update_food(&self, id: FoodId, body: &Value) -> Result<Food, StoreError>;

    /// `DELETE /foods/{id}`. The response body is ignored.
    async fn delete_food(&self, id: FoodId) -> Result<(), StoreError>;
}
