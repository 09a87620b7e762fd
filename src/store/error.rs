//! Error handling for the store module

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    /// Reqwest error, typically related to network issues or undecodable bodies.
    #[error("Reqwest error: {0}")]
    Reqwest(#[from] reqwest::Error),

    /// The store answered with a non-success status.
    #[error("HTTP error with status {status}: {message}")]
    Http { status: u16, message: String },

    /// A request body could not be serialized.
    #[error("Encoding error: {0}")]
    Encode(#[from] serde_json::Error),

    /// The HTTP client could not be constructed.
    #[error("Client error: {0}")]
    Client(String),
}

impl StoreError {
    pub async fn from_response(response: reqwest::Response) -> StoreError {
        let status = response.status().as_u16();
        let message = response
            .text()
            .await
            .unwrap_or_else(|_| "Failed to read response text".to_string());

        StoreError::Http { status, message }
    }

    /// HTTP status code carried by the error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            StoreError::Http { status, .. } => Some(*status),
            StoreError::Reqwest(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}
