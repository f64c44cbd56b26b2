use tracing::trace;

use crate::error::{ComboError, Result};
use crate::menu::Menu;
use crate::models::{Combo, ComboBatch, MenuItem, PerCategory};
use crate::planner::constants::SAMPLE_SIZE;
use crate::planner::sampler::Sampler;

/// Highest-scoring candidate.
///
/// The first item reaching the maximum wins; a later item must score strictly
/// higher to replace it, so NaN scores never take over.
pub fn pick_best<'a, I>(candidates: I) -> Option<&'a MenuItem>
where
    I: IntoIterator<Item = &'a MenuItem>,
{
    let mut best: Option<(&MenuItem, f64)> = None;
    for item in candidates {
        let score = item.score();
        match best {
            Some((_, best_score)) if !(score > best_score) => {}
            _ => best = Some((item, score)),
        }
    }
    best.map(|(item, _)| item)
}

/// Sample up to [`SAMPLE_SIZE`] items from a bucket and keep the best one.
pub fn select_from_bucket<'a, S>(items: &'a [MenuItem], sampler: &mut S) -> Option<&'a MenuItem>
where
    S: Sampler + ?Sized,
{
    let amount = SAMPLE_SIZE.min(items.len());
    let indices = sampler.sample_indices(items.len(), amount);
    pick_best(indices.into_iter().filter_map(|i| items.get(i)))
}

/// Build one combo of the day.
///
/// Every category is sampled independently. Fails with
/// [`ComboError::IncompleteMenu`] if any bucket is empty.
pub fn create_combo<S>(menu: &Menu, sampler: &mut S) -> Result<Combo>
where
    S: Sampler + ?Sized,
{
    let picks = PerCategory::try_from_fn(|category| {
        let best = select_from_bucket(menu.items(category), sampler)
            .ok_or(ComboError::IncompleteMenu)?;
        trace!(%category, item = %best.name, score = best.score(), "selected");
        Ok::<_, ComboError>(best)
    })?;

    Ok(Combo {
        combo: picks.map(|item| item.name.clone()),
        reason: picks.map(|item| item.reason()),
    })
}

/// Build `count` independent combos. Repeats across combos are allowed.
pub fn create_batch<S>(menu: &Menu, sampler: &mut S, count: usize) -> Result<ComboBatch>
where
    S: Sampler + ?Sized,
{
    let combos_for_the_day = (0..count)
        .map(|_| create_combo(menu, sampler))
        .collect::<Result<Vec<_>>>()?;
    Ok(ComboBatch { combos_for_the_day })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;

    /// Returns the first `amount` indices in order.
    struct InOrder;

    impl Sampler for InOrder {
        fn sample_indices(&mut self, len: usize, amount: usize) -> Vec<usize> {
            (0..amount.min(len)).collect()
        }
    }

    fn item(name: &str, calories: i64, popularity: f64) -> MenuItem {
        MenuItem::new(name, calories, popularity)
    }

    #[test]
    fn test_pick_best_first_maximum_wins() {
        let items = vec![item("A", 100, 5.0), item("B", 200, 6.0), item("C", 0, 4.0)];
        // All score 4.0.
        assert_eq!(pick_best(&items).unwrap().name, "A");

        let reversed: Vec<MenuItem> = items.iter().rev().cloned().collect();
        assert_eq!(pick_best(&reversed).unwrap().name, "C");
    }

    #[test]
    fn test_pick_best_ignores_later_nan() {
        let items = vec![item("A", 100, 5.0), item("B", 0, f64::NAN)];
        assert_eq!(pick_best(&items).unwrap().name, "A");

        let empty: Vec<MenuItem> = Vec::new();
        assert!(pick_best(&empty).is_none());
    }

    #[test]
    fn test_select_from_bucket_only_sees_sample() {
        let items: Vec<MenuItem> = (0..8)
            .map(|i| item(&format!("I{i}"), 0, i as f64))
            .collect();
        // InOrder draws indices 0..5, so I7 is never a candidate.
        let best = select_from_bucket(&items, &mut InOrder).unwrap();
        assert_eq!(best.name, "I4");
    }

    #[test]
    fn test_create_combo_requires_every_category() {
        let mut menu = Menu::new();
        menu.push(Category::Dish, item("Burger", 550, 8.2));
        menu.push(Category::Drink, item("Cola", 150, 9.0));

        let err = create_combo(&menu, &mut InOrder).unwrap_err();
        assert!(matches!(err, ComboError::IncompleteMenu));
    }

    #[test]
    fn test_create_batch_has_requested_size() {
        let mut menu = Menu::new();
        menu.push(Category::Dish, item("Burger", 550, 8.2));
        menu.push(Category::SideDish, item("Fries", 300, 7.5));
        menu.push(Category::Drink, item("Cola", 150, 9.0));

        let batch = create_batch(&menu, &mut InOrder, 3).unwrap();
        assert_eq!(batch.len(), 3);
        for combo in &batch.combos_for_the_day {
            assert_eq!(combo.combo.dish, "Burger");
            assert_eq!(combo.combo.sidedish, "Fries");
            assert_eq!(combo.combo.drink, "Cola");
            assert_eq!(
                combo.reason.drink,
                "Cola was chosen for high popularity (9.0) and moderate calories (150)."
            );
        }
    }
}
