//! Food dashboard core
//!
//! State, transitions and the flows that keep them in sync with the store.

pub mod action;
pub mod controller;
pub mod error;
pub mod flows;
pub mod state;

pub use action::Action;
pub use controller::Dashboard;
pub use error::DashboardError;
pub use flows::Flow;
pub use state::DashboardState;
