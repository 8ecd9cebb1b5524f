//! Catalog
//!
//! The fixed sample dishes offered on the home screen.

use crate::course::{Course, CourseFilter};
use crate::menu_item::MenuItem;
use crate::price::Price;

const CATALOG: &[(&str, &str, Course, u64)] = &[
    // Breakfast
    ("Avocado Toast", "Toasted sourdough with smashed avocado & feta", Course::Breakfast, 95),
    ("English Breakfast", "Eggs, bacon, beans, tomato & sausage", Course::Breakfast, 160),
    ("Smoothie Bowl", "Banana & berry blend with granola topping", Course::Breakfast, 120),
    ("Pancakes", "Fluffy pancakes with maple syrup", Course::Breakfast, 140),
    // Mains
    ("Grilled Salmon", "Served with lemon butter & roasted veggies", Course::Mains, 280),
    ("Chicken Alfredo Pasta", "Creamy fettuccine with grilled chicken", Course::Mains, 240),
    ("BBQ Ribs", "Slow cooked ribs with house-made BBQ sauce", Course::Mains, 310),
    ("Veggie Burger", "Plant-based patty with caramelized onions", Course::Mains, 180),
    // Desserts
    ("Red Velvet Cake", "Moist red velvet with cream cheese frosting", Course::Desserts, 95),
    ("Chocolate Brownie", "Rich brownie with vanilla ice cream", Course::Desserts, 85),
    ("Fruit Tart", "Seasonal fruit with vanilla custard base", Course::Desserts, 110),
    ("Cheesecake", "Classic New York style cheesecake", Course::Desserts, 100),
];

/// All catalog dishes, grouped by course
pub fn catalog() -> Vec<MenuItem> {
    CATALOG
        .iter()
        .map(|(name, description, course, price)| MenuItem::new(*name, *description, *course, Price::new(*price)))
        .collect()
}

/// Dishes visible under a tab, in catalog order
pub fn filter_catalog(items: &[MenuItem], filter: CourseFilter) -> Vec<MenuItem> {
    items.iter().filter(|item| filter.matches(item.course)).cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::selection::count_by_course;

    #[test]
    fn test_catalog_has_four_per_course() {
        let items = catalog();
        assert_eq!(items.len(), 12);
        let counts = count_by_course(&items);
        for course in Course::ALL {
            assert_eq!(counts.get(course), 4);
        }
    }

    #[test]
    fn test_catalog_entries_are_valid_items() {
        for item in catalog() {
            assert!(!item.name.trim().is_empty());
            assert_eq!(item.name, item.name.trim());
            assert!(!item.description.trim().is_empty());
            assert!(item.price.amount() > 0);
        }
    }

    #[test]
    fn test_filter_keeps_catalog_order() {
        let items = catalog();
        let desserts = filter_catalog(&items, CourseFilter::Only(Course::Desserts));
        let names: Vec<_> = desserts.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["Red Velvet Cake", "Chocolate Brownie", "Fruit Tart", "Cheesecake"]);

        assert_eq!(filter_catalog(&items, CourseFilter::All), items);
    }
}
