//! Food Store Client
//!
//! A JSON client for the remote food store.

use crate::consts::cli_consts::store::{FOODS_PATH, connect_timeout, request_timeout};
use crate::environment::Environment;
use crate::food::{Food, FoodId, NewFood};
use crate::store::FoodStore;
use crate::store::error::StoreError;
use reqwest::{Client, ClientBuilder, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

// User-Agent string with CLI version
const USER_AGENT: &str = concat!("food-dashboard/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone)]
pub struct FoodStoreClient {
    client: Client,
    environment: Environment,
}

impl FoodStoreClient {
    pub fn new(environment: Environment) -> Result<Self, StoreError> {
        let client = ClientBuilder::new()
            .connect_timeout(connect_timeout())
            .timeout(request_timeout())
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| StoreError::Client(e.to_string()))?;
        Ok(Self {
            client,
            environment,
        })
    }

    fn build_url(&self, endpoint: &str) -> String {
        format!(
            "{}/{}",
            self.environment.api_url().trim_end_matches('/'),
            endpoint.trim_start_matches('/')
        )
    }

    fn food_endpoint(id: FoodId) -> String {
        format!("{}/{}", FOODS_PATH, id)
    }

    async fn handle_response_status(response: Response) -> Result<Response, StoreError> {
        if !response.status().is_success() {
            return Err(StoreError::from_response(response).await);
        }
        Ok(response)
    }

    async fn get_request<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, StoreError> {
        let url = self.build_url(endpoint);
        log::debug!("GET {}", url);
        let response = self.client.get(&url).send().await?;

        let response = Self::handle_response_status(response).await?;
        Ok(response.json::<T>().await?)
    }

    async fn post_request<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        endpoint: &str,
        body: &B,
    ) -> Result<T, StoreError> {
        let url = self.build_url(endpoint);
        log::debug!("POST {}", url);
        let body = serde_json::to_vec(body)?;
        let response = self
            .client
            .post(&url)
            .header("Content-Type", "application/json")
            .body(body)
            .send()
            .await?;

        let response = Self::handle_response_status(response).await?;
        Ok(response.json::<T>().await?)
    }

    async fn put_request<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        endpoint: &str,
        body: &B,
    ) -> Result<T, StoreError> {
        let url = self.build_url(endpoint);
        log::debug!("PUT {}", url);
        let body = serde_json::to_vec(body)?;
        let response = self
            .client
            .put(&url)
            .header("Content-Type", "application/json")
            .body(body)
            .send()
            .await?;

        let response = Self::handle_response_status(response).await?;
        Ok(response.json::<T>().await?)
    }

    async fn delete_request_no_response(&self, endpoint: &str) -> Result<(), StoreError> {
        let url = self.build_url(endpoint);
        log::debug!("DELETE {}", url);
        let response = self.client.delete(&url).send().await?;

        Self::handle_response_status(response).await?;
        Ok(())
    }
}

#[async_trait::async_trait]
impl FoodStore for FoodStoreClient {
    fn environment(&self) -> &Environment {
        &self.environment
    }

    async fn list_foods(&self) -> Result<Vec<Food>, StoreError> {
        self.get_request(FOODS_PATH).await
    }

    async fn create_food(&self, food: &NewFood) -> Result<Food, StoreError> {
        self.post_request(FOODS_PATH, food).await
    }

    async fn update_food(&self, id: FoodId, body: &Value) -> Result<Food, StoreError> {
        self.put_request(&Self::food_endpoint(id), body).await
    }

    async fn delete_food(&self, id: FoodId) -> Result<(), StoreError> {
        self.delete_request_no_response(&Self::food_endpoint(id))
            .await
    }
}
