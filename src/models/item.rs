use serde::Serialize;

use crate::planner::constants::CALORIE_DIVISOR;

/// One of the three meal slots a combo is built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Dish,
    SideDish,
    Drink,
}

impl Category {
    /// Canonical order: dish, sidedish, drink.
    pub const ALL: [Category; 3] = [Category::Dish, Category::SideDish, Category::Drink];

    /// Canonical bucket key.
    pub fn key(self) -> &'static str {
        match self {
            Category::Dish => "dish",
            Category::SideDish => "sidedish",
            Category::Drink => "drink",
        }
    }

    /// Map a raw CSV category (`main`, `side`, `drink`) to its bucket.
    ///
    /// Matching ignores surrounding whitespace and case.
    pub fn from_raw(raw: &str) -> Option<Self> {
        match raw.trim().to_lowercase().as_str() {
            "main" => Some(Category::Dish),
            "side" => Some(Category::SideDish),
            "drink" => Some(Category::Drink),
            _ => None,
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            Category::Dish => 0,
            Category::SideDish => 1,
            Category::Drink => 2,
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

/// A menu entry read from one CSV row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MenuItem {
    pub name: String,

    /// Truncated toward zero from the CSV value.
    pub calories: i64,

    /// Unbounded; higher is more popular.
    pub popularity: f64,
}

impl MenuItem {
    pub fn new(name: impl Into<String>, calories: i64, popularity: f64) -> Self {
        Self {
            name: name.into(),
            calories,
            popularity,
        }
    }

    /// Popularity minus calories per hundred.
    #[inline]
    pub fn score(&self) -> f64 {
        self.popularity - self.calories as f64 / CALORIE_DIVISOR
    }

    /// Justification shown next to a selected item.
    pub fn reason(&self) -> String {
        format!(
            "{} was chosen for high popularity ({}) and moderate calories ({}).",
            self.name,
            format_float(self.popularity),
            self.calories
        )
    }
}

/// Render a float the way a float literal reads.
///
/// Whole values keep `.0`. Decimal exponents of 16 and above or below -4
/// switch to exponent form with a signed, two-digit exponent (`1e+16`, `1.5e-05`).
pub fn format_float(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }

    // `{:e}` yields the shortest round-trip digits, e.g. `1.5e-5`.
    let scientific = format!("{:e}", value);
    let (mantissa, exponent) = match scientific.split_once('e') {
        Some((m, e)) => (m, e.parse::<i32>().unwrap_or(0)),
        None => (scientific.as_str(), 0),
    };

    if (-4..16).contains(&exponent) {
        let plain = value.to_string();
        if plain.contains('.') {
            plain
        } else {
            format!("{plain}.0")
        }
    } else {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{mantissa}e{sign}{:02}", exponent.abs())
    }
}
