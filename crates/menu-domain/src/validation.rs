//! Dish Validation
//!
//! Gate between raw form text and a stored `MenuItem`.

use thiserror::Error;

use crate::course::Course;
use crate::menu_item::MenuItem;
use crate::price::{parse_price_text, Price};

/// Result type for dish validation
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Why a dish could not be built from the form input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Name, description or price text is empty after trimming
    #[error("Please fill in all fields.")]
    MissingField,
    /// Price text does not start with a number, or the number is not positive
    #[error("Please enter a valid price.")]
    InvalidPrice,
}

impl ValidationError {
    /// Short heading shown above the message
    pub fn title(&self) -> &'static str {
        match self {
            ValidationError::MissingField => "Missing Information",
            ValidationError::InvalidPrice => "Invalid Price",
        }
    }
}

/// Validate raw form input and build the dish it describes.
///
/// Text fields are trimmed before the emptiness check. The price is read
/// with [`parse_price_text`] and rounded half away from zero.
pub fn validate_and_build(
    raw_name: &str,
    raw_description: &str,
    raw_price_text: &str,
    course: Course,
) -> ValidationResult<MenuItem> {
    let name = raw_name.trim();
    let description = raw_description.trim();
    let price_text = raw_price_text.trim();

    if name.is_empty() || description.is_empty() || price_text.is_empty() {
        log::debug!("[VALIDATE] rejected: missing field");
        return Err(ValidationError::MissingField);
    }

    let amount = parse_price_text(price_text).ok_or_else(|| {
        log::debug!("[VALIDATE] rejected: price {:?} is not a number", price_text);
        ValidationError::InvalidPrice
    })?;
    let price = Price::from_amount(amount).map_err(|e| {
        log::debug!("[VALIDATE] rejected: price {} is not positive", amount);
        e
    })?;

    Ok(MenuItem::new(name, description, course, price))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trims_and_rounds() {
        let item = validate_and_build(" Pizza ", " Cheesy ", "120.7", Course::Mains).unwrap();
        assert_eq!(item.name, "Pizza");
        assert_eq!(item.description, "Cheesy");
        assert_eq!(item.course, Course::Mains);
        assert_eq!(item.price.to_string(), "121");
    }

    #[test]
    fn test_rounding_matches_nearest_whole_number() {
        for (text, expected) in [("1", "1"), ("99.49", "99"), ("99.5", "100"), ("250.0", "250"), ("0.5", "1")] {
            let item = validate_and_build("Dish", "Tasty", text, Course::Desserts).unwrap();
            assert_eq!(item.price.to_string(), expected, "price text {:?}", text);
        }
    }

    #[test]
    fn test_missing_fields() {
        assert_eq!(validate_and_build("", "Cheesy", "10", Course::Mains), Err(ValidationError::MissingField));
        assert_eq!(validate_and_build("Pizza", "   ", "10", Course::Mains), Err(ValidationError::MissingField));
        assert_eq!(validate_and_build("Pizza", "Cheesy", "", Course::Mains), Err(ValidationError::MissingField));
        assert_eq!(validate_and_build("Pizza", "Cheesy", " \t", Course::Mains), Err(ValidationError::MissingField));
    }

    #[test]
    fn test_missing_field_checked_before_price() {
        // Both problems present: the missing field wins
        assert_eq!(validate_and_build("", "Cheesy", "-5", Course::Mains), Err(ValidationError::MissingField));
    }

    #[test]
    fn test_invalid_prices() {
        for text in ["-5", "0", "0.0", "abc", "R20", "-0.2"] {
            assert_eq!(
                validate_and_build("Pizza", "Cheesy", text, Course::Mains),
                Err(ValidationError::InvalidPrice),
                "price text {:?}",
                text
            );
        }
    }

    #[test]
    fn test_trailing_text_after_price_is_ignored() {
        let item = validate_and_build("Pizza", "Cheesy", "85 rand", Course::Mains).unwrap();
        assert_eq!(item.price, Price::new(85));
    }

    #[test]
    fn test_error_presentation() {
        assert_eq!(ValidationError::MissingField.title(), "Missing Information");
        assert_eq!(ValidationError::MissingField.to_string(), "Please fill in all fields.");
        assert_eq!(ValidationError::InvalidPrice.title(), "Invalid Price");
        assert_eq!(ValidationError::InvalidPrice.to_string(), "Please enter a valid price.");
    }
}
