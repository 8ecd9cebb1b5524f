//! UI Components
//!
//! Reusable Leptos components.

mod header;
mod course_tabs;
mod dish_card;
mod catalog_view;
mod course_selector;
mod add_dish_form;
mod selection_list;
mod remove_confirm_button;
mod notice_banner;
mod bottom_nav;

pub use header::Header;
pub use course_tabs::CourseTabs;
pub use dish_card::DishCard;
pub use catalog_view::CatalogView;
pub use course_selector::CourseSelector;
pub use add_dish_form::AddDishForm;
pub use selection_list::SelectionList;
pub use remove_confirm_button::RemoveConfirmButton;
pub use notice_banner::NoticeBanner;
pub use bottom_nav::BottomNav;
