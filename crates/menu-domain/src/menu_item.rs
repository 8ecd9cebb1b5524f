//! Menu Item Entity
//!
//! A dish on the menu: either a catalog entry or one created through the form.

use serde::{Deserialize, Serialize};

use crate::course::Course;
use crate::price::Price;

/// A dish with its course and whole-number price
///
/// `name` and `description` are stored trimmed and never empty; the only
/// constructors that take raw user text go through validation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MenuItem {
    pub name: String,
    pub description: String,
    pub course: Course,
    pub price: Price,
}

impl MenuItem {
    /// Build an item from already-validated parts
    pub fn new(name: impl Into<String>, description: impl Into<String>, course: Course, price: Price) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            course,
            price,
        }
    }

    /// Card price label, e.g. `"95 R"`
    pub fn price_label(&self, currency: &str) -> String {
        format!("{} {}", self.price, currency)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_price_label() {
        let item = MenuItem::new("Pancakes", "Fluffy pancakes with maple syrup", Course::Breakfast, Price::new(140));
        assert_eq!(item.price_label("R"), "140 R");
    }

    #[test]
    fn test_item_serialization_shape() {
        let item = MenuItem::new("Cheesecake", "Classic New York style cheesecake", Course::Desserts, Price::new(100));
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["course"], "Desserts");
        assert_eq!(json["price"], "100");

        let back: MenuItem = serde_json::from_value(json).unwrap();
        assert_eq!(back, item);
    }
}
