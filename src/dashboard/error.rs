//! Error handling for dashboard flows

use crate::store::error::StoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DashboardError {
    /// The remote store rejected the request or could not be reached.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// An update was submitted before any food was selected for editing.
    #[error("No food selected for editing")]
    NoEditTarget,

    /// The dashboard was unmounted while the request was in flight.
    #[error("Request cancelled")]
    Cancelled,
}
