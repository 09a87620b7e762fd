//! Session setup and initialization

use crate::environment::Environment;
use crate::store::FoodStoreClient;
use std::error::Error;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

/// Session data for both TUI and headless modes
#[derive(Debug)]
pub struct SessionData {
    /// The store every flow of this session talks to
    pub store: Arc<FoodStoreClient>,
    /// Cancelled when the session ends; in-flight requests resolve to `Cancelled`
    pub token: CancellationToken,
}

impl SessionData {
    pub fn environment(&self) -> &Environment {
        crate::store::FoodStore::environment(self.store.as_ref())
    }
}

/// Builds the store client for `env` and a fresh session token.
///
/// # Returns
/// * `Ok(SessionData)` - Successfully set up session
/// * `Err` - The HTTP client could not be built
pub fn setup_session(env: Environment) -> Result<SessionData, Box<dyn Error>> {
    log::debug!("Setting up session for {:?}", env);
    let store = FoodStoreClient::new(env)?;
    Ok(SessionData {
        store: Arc::new(store),
        token: CancellationToken::new(),
    })
}
