use serde::Serialize;

use crate::models::Category;

/// One value per meal slot, serialized under the canonical keys.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct PerCategory<T> {
    pub dish: T,
    pub sidedish: T,
    pub drink: T,
}

impl<T> PerCategory<T> {
    /// Build by calling `f` once per category in canonical order.
    pub fn try_from_fn<E>(mut f: impl FnMut(Category) -> Result<T, E>) -> Result<Self, E> {
        Ok(Self {
            dish: f(Category::Dish)?,
            sidedish: f(Category::SideDish)?,
            drink: f(Category::Drink)?,
        })
    }

    /// Apply `f` to every slot.
    pub fn map<U>(&self, mut f: impl FnMut(&T) -> U) -> PerCategory<U> {
        PerCategory {
            dish: f(&self.dish),
            sidedish: f(&self.sidedish),
            drink: f(&self.drink),
        }
    }

    pub fn get(&self, category: Category) -> &T {
        match category {
            Category::Dish => &self.dish,
            Category::SideDish => &self.sidedish,
            Category::Drink => &self.drink,
        }
    }

    /// Iterate as `(category, value)` pairs in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (Category, &T)> {
        Category::ALL.into_iter().map(move |c| (c, self.get(c)))
    }
}

/// A combo of the day: the chosen item name per slot and why it was chosen.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Combo {
    pub combo: PerCategory<String>,
    pub reason: PerCategory<String>,
}

/// The full response body of a successful request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComboBatch {
    pub combos_for_the_day: Vec<Combo>,
}

impl ComboBatch {
    pub fn len(&self) -> usize {
        self.combos_for_the_day.len()
    }

    pub fn is_empty(&self) -> bool {
        self.combos_for_the_day.is_empty()
    }
}
