//! Menu Domain Layer
//!
//! Contains the menu entities and the rules applied to them.
//! This layer has NO UI dependencies (only serde, thiserror and log).

mod course;
mod price;
mod menu_item;
mod validation;
mod draft;
mod catalog;
mod selection;

pub use course::{Course, CourseFilter, UnknownCourse};
pub use price::{parse_price_text, Price, PriceFormatError};
pub use menu_item::MenuItem;
pub use validation::{validate_and_build, ValidationError, ValidationResult};
pub use draft::DishDraft;
pub use catalog::{catalog, filter_catalog};
pub use selection::{average_price, count_by_course, total_price, CourseCounts};
