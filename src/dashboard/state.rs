//! Dashboard state and its reducer
//!
//! Every change to the food sequence or the modal flags goes through
//! [`DashboardState::apply`], which is pure and synchronous.

use super::action::Action;
use crate::food::{Food, FoodId};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardState {
    /// Food items in store order; newly created items at the end.
    foods: Vec<Food>,
    /// Copy of the food the edit modal targets, taken when editing began.
    editing_food: Option<Food>,
    add_modal_open: bool,
    edit_modal_open: bool,
}

impl DashboardState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn foods(&self) -> &[Food] {
        &self.foods
    }

    pub fn food(&self, id: FoodId) -> Option<&Food> {
        self.foods.iter().find(|food| food.id == id)
    }

    pub fn editing_food(&self) -> Option<&Food> {
        self.editing_food.as_ref()
    }

    pub fn is_add_modal_open(&self) -> bool {
        self.add_modal_open
    }

    pub fn is_edit_modal_open(&self) -> bool {
        self.edit_modal_open
    }

    /// Apply a single transition.
    pub fn apply(&mut self, action: Action) {
        match action {
            Action::Loaded(foods) => {
                self.foods = foods;
            }
            Action::Added(food) => {
                // Ids stay unique even if a reload already brought this item in.
                if let Some(existing) = self.foods.iter_mut().find(|f| f.id == food.id) {
                    log::warn!("Created food {} was already listed; replacing it", food.id);
                    *existing = food;
                } else {
                    self.foods.push(food);
                }
            }
            Action::Updated(food) => {
                if let Some(existing) = self.foods.iter_mut().find(|f| f.id == food.id) {
                    *existing = food;
                }
            }
            Action::Deleted(id) => {
                self.foods.retain(|food| food.id != id);
            }
            Action::ToggleAddModal => {
                self.add_modal_open = !self.add_modal_open;
            }
            Action::ToggleEditModal => {
                self.edit_modal_open = !self.edit_modal_open;
            }
            Action::BeginEdit(food) => {
                self.editing_food = Some(food);
                self.edit_modal_open = true;
            }
        }
    }
}
