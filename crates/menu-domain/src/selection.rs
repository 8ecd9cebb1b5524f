//! Selection Aggregates
//!
//! Totals computed over the user's selected dishes.

use crate::course::Course;
use crate::menu_item::MenuItem;

/// Number of selected dishes per course
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CourseCounts([usize; 3]);

impl CourseCounts {
    pub fn get(&self, course: Course) -> usize {
        self.0[course.index()]
    }

    pub fn total(&self) -> usize {
        self.0.iter().sum()
    }
}

/// Sum of all prices, saturating at `u64::MAX`
pub fn total_price(items: &[MenuItem]) -> u64 {
    items.iter().fold(0u64, |sum, item| sum.saturating_add(item.price.amount()))
}

pub fn count_by_course(items: &[MenuItem]) -> CourseCounts {
    let mut counts = [0usize; 3];
    for item in items {
        counts[item.course.index()] += 1;
    }
    CourseCounts(counts)
}

/// Mean price of one course, rounded half away from zero.
/// `None` when nothing of that course is selected.
pub fn average_price(items: &[MenuItem], course: Course) -> Option<u64> {
    // Widened so a handful of near-maximum prices cannot overflow
    let (sum, count) = items
        .iter()
        .filter(|item| item.course == course)
        .fold((0u128, 0u128), |(sum, count), item| (sum + u128::from(item.price.amount()), count + 1));
    if count == 0 {
        return None;
    }
    // The mean never exceeds the largest price, so it fits back into u64
    Some(u64::try_from((sum + count / 2) / count).unwrap_or(u64::MAX))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::price::Price;

    fn dish(name: &str, course: Course, price: u64) -> MenuItem {
        MenuItem::new(name, format!("{} description", name), course, Price::new(price))
    }

    #[test]
    fn test_empty_selection() {
        assert_eq!(total_price(&[]), 0);
        assert_eq!(count_by_course(&[]).total(), 0);
        assert_eq!(average_price(&[], Course::Mains), None);
    }

    #[test]
    fn test_totals_count_duplicates() {
        let salmon = dish("Grilled Salmon", Course::Mains, 280);
        let items = vec![salmon.clone(), salmon, dish("Pancakes", Course::Breakfast, 140)];

        assert_eq!(total_price(&items), 700);
        let counts = count_by_course(&items);
        assert_eq!(counts.get(Course::Mains), 2);
        assert_eq!(counts.get(Course::Breakfast), 1);
        assert_eq!(counts.get(Course::Desserts), 0);
        assert_eq!(counts.total(), 3);
    }

    #[test]
    fn test_average_price_rounds() {
        let items = vec![
            dish("Fruit Tart", Course::Desserts, 110),
            dish("Chocolate Brownie", Course::Desserts, 85),
            dish("BBQ Ribs", Course::Mains, 310),
        ];
        // (110 + 85) / 2 = 97.5
        assert_eq!(average_price(&items, Course::Desserts), Some(98));
        assert_eq!(average_price(&items, Course::Mains), Some(310));
        assert_eq!(average_price(&items, Course::Breakfast), None);
    }

    #[test]
    fn test_near_maximum_prices_do_not_overflow() {
        let caviar = crate::validation::validate_and_build("Caviar", "Gold leaf", "1e19", Course::Mains).unwrap();
        assert_eq!(caviar.price, Price::new(10_000_000_000_000_000_000));
        let items = vec![caviar.clone(), caviar];

        assert_eq!(average_price(&items, Course::Mains), Some(10_000_000_000_000_000_000));
        assert_eq!(total_price(&items), u64::MAX);
        assert_eq!(count_by_course(&items).get(Course::Mains), 2);
    }
}
