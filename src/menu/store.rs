use crate::models::{Category, MenuItem};

/// The loaded menu: one ordered bucket per category.
///
/// Built fresh for every upload and dropped once the response is written.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Menu {
    buckets: [Vec<MenuItem>; 3],
}

impl Menu {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an item to a bucket, preserving insertion order.
    pub fn push(&mut self, category: Category, item: MenuItem) {
        self.buckets[category.index()].push(item);
    }

    /// Items of one category in row order.
    pub fn items(&self, category: Category) -> &[MenuItem] {
        &self.buckets[category.index()]
    }

    /// Categories that have no items.
    pub fn missing_categories(&self) -> Vec<Category> {
        Category::ALL
            .into_iter()
            .filter(|c| self.items(*c).is_empty())
            .collect()
    }

    /// True when every category has at least one item.
    pub fn is_complete(&self) -> bool {
        self.missing_categories().is_empty()
    }

    /// Total item count across all buckets.
    pub fn len(&self) -> usize {
        self.buckets.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_menu() -> Menu {
        let mut menu = Menu::new();
        menu.push(Category::Dish, MenuItem::new("Burger", 550, 8.2));
        menu.push(Category::Dish, MenuItem::new("Salad", 200, 6.0));
        menu.push(Category::Drink, MenuItem::new("Cola", 150, 9.0));
        menu
    }

    #[test]
    fn test_push_preserves_order() {
        let menu = sample_menu();
        let names: Vec<&str> = menu
            .items(Category::Dish)
            .iter()
            .map(|i| i.name.as_str())
            .collect();
        assert_eq!(names, vec!["Burger", "Salad"]);
        assert_eq!(menu.len(), 3);
    }

    #[test]
    fn test_missing_categories() {
        let mut menu = sample_menu();
        assert!(!menu.is_complete());
        assert_eq!(menu.missing_categories(), vec![Category::SideDish]);

        menu.push(Category::SideDish, MenuItem::new("Fries", 300, 7.5));
        assert!(menu.is_complete());
    }

    #[test]
    fn test_empty_menu() {
        let menu = Menu::new();
        assert!(menu.is_empty());
        assert_eq!(menu.missing_categories().len(), 3);
    }
}
