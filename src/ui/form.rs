//! Form state shared by the add and edit modals.

use crate::food::{Food, FoodDraft, parse_price};

#[derive(Debug, Copy, Clone, Eq, PartialEq, strum::Display)]
pub enum FormField {
    #[strum(to_string = "Image URL")]
    Image,
    Name,
    Price,
    Description,
}

impl FormField {
    pub const ALL: [FormField; 4] = [
        FormField::Image,
        FormField::Name,
        FormField::Price,
        FormField::Description,
    ];

    fn position(self) -> usize {
        Self::ALL.iter().position(|f| *f == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.position() + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        Self::ALL[(self.position() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Draft values being typed plus the focused field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FoodForm {
    draft: FoodDraft,
    focus: FormField,
}

impl Default for FoodForm {
    fn default() -> Self {
        Self {
            draft: FoodDraft::default(),
            focus: FormField::Image,
        }
    }
}

impl FoodForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Form prefilled with an existing food, as the edit modal shows it.
    pub fn from_food(food: &Food) -> Self {
        Self {
            draft: FoodDraft::from(food),
            focus: FormField::Image,
        }
    }

    pub fn focus(&self) -> FormField {
        self.focus
    }

    pub fn value(&self, field: FormField) -> &str {
        match field {
            FormField::Image => &self.draft.image,
            FormField::Name => &self.draft.name,
            FormField::Price => &self.draft.price,
            FormField::Description => &self.draft.description,
        }
    }

    fn value_mut(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::Image => &mut self.draft.image,
            FormField::Name => &mut self.draft.name,
            FormField::Price => &mut self.draft.price,
            FormField::Description => &mut self.draft.description,
        }
    }

    pub fn next_field(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn prev_field(&mut self) {
        self.focus = self.focus.prev();
    }

    /// Type a character into the focused field. The price field only takes
    /// digits and a decimal separator.
    pub fn push_char(&mut self, c: char) {
        if c.is_control() {
            return;
        }
        if self.focus == FormField::Price && !(c.is_ascii_digit() || c == '.' || c == ',') {
            return;
        }
        self.value_mut(self.focus).push(c);
    }

    pub fn pop_char(&mut self) {
        self.value_mut(self.focus).pop();
    }

    /// Whether the price field holds a number the store can be given.
    pub fn has_valid_price(&self) -> bool {
        parse_price(&self.draft.price).is_some()
    }

    /// Move focus to the price field when it blocks submission.
    /// Returns true when the form can be submitted.
    pub fn check_submittable(&mut self) -> bool {
        if self.has_valid_price() {
            return true;
        }
        self.focus = FormField::Price;
        false
    }

    pub fn to_draft(&self) -> FoodDraft {
        self.draft.clone()
    }

    /// Hand out the draft and clear the form for the next entry.
    pub fn take_draft(&mut self) -> FoodDraft {
        std::mem::take(self).draft
    }
}
