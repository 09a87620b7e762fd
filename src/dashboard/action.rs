//! State transitions understood by [`DashboardState::apply`](super::DashboardState::apply).

use crate::food::{Food, FoodId};

#[derive(Debug, Clone, PartialEq, strum::Display)]
pub enum Action {
    /// The initial list arrived; replaces the whole sequence.
    Loaded(Vec<Food>),
    /// A food was created remotely; appended at the end.
    Added(Food),
    /// A food was updated remotely; replaces the entry with the same id.
    Updated(Food),
    /// A food was deleted remotely; removed from the sequence.
    Deleted(FoodId),
    ToggleAddModal,
    ToggleEditModal,
    /// Select a food for editing and force the edit modal open.
    BeginEdit(Food),
}
