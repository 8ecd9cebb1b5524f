//! Dish Draft
//!
//! Transient input of the add-dish form.

use crate::course::Course;
use crate::menu_item::MenuItem;
use crate::price::parse_price_text;
use crate::validation::{validate_and_build, ValidationResult};

/// Text the user has typed so far, plus the selected course
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DishDraft {
    pub name: String,
    pub description: String,
    pub price_text: String,
    pub course: Course,
}

impl DishDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the submit button is enabled.
    ///
    /// Only checks that every field is filled in and the price starts with a
    /// number. Non-positive prices pass here and fail in [`DishDraft::build`].
    pub fn is_submittable(&self) -> bool {
        !self.name.trim().is_empty()
            && !self.description.trim().is_empty()
            && !self.price_text.trim().is_empty()
            && parse_price_text(&self.price_text).is_some()
    }

    pub fn build(&self) -> ValidationResult<MenuItem> {
        validate_and_build(&self.name, &self.description, &self.price_text, self.course)
    }

    /// Clear the text fields and go back to the default course
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
