use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord};
use thiserror::Error;
use tracing::{debug, trace};

use crate::error::Result;
use crate::menu::Menu;
use crate::models::{Category, MenuItem};

pub const CATEGORY_COLUMN: &str = "category";
pub const ITEM_NAME_COLUMN: &str = "item_name";
pub const CALORIES_COLUMN: &str = "calories";
pub const POPULARITY_COLUMN: &str = "popularity_score";

/// Why a data row did not make it into the menu.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SkipReason {
    #[error("missing field `{0}`")]
    MissingField(&'static str),

    #[error("unknown category `{0}`")]
    UnknownCategory(String),

    #[error("calories `{0}` is not a number")]
    InvalidCalories(String),

    #[error("popularity_score `{0}` is not a number")]
    InvalidPopularity(String),
}

/// A skipped row and its 1-based line in the source.
#[derive(Debug, Clone, PartialEq)]
pub struct SkippedRow {
    pub line: u64,
    pub reason: SkipReason,
}

/// Diagnostics collected while loading a menu.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoadReport {
    pub loaded: usize,
    pub skipped: Vec<SkippedRow>,
}

impl LoadReport {
    pub fn skipped_count(&self) -> usize {
        self.skipped.len()
    }
}

/// Header positions of the required columns. Duplicate names resolve to the last one.
#[derive(Debug)]
struct Columns {
    category: Option<usize>,
    item_name: Option<usize>,
    calories: Option<usize>,
    popularity: Option<usize>,
}

impl Columns {
    fn from_headers(headers: &StringRecord) -> Self {
        let find = |name: &str| {
            headers
                .iter()
                .enumerate()
                .filter(|(_, h)| *h == name)
                .map(|(i, _)| i)
                .last()
        };
        Self {
            category: find(CATEGORY_COLUMN),
            item_name: find(ITEM_NAME_COLUMN),
            calories: find(CALORIES_COLUMN),
            popularity: find(POPULARITY_COLUMN),
        }
    }
}

fn field<'r>(
    record: &'r StringRecord,
    index: Option<usize>,
    column: &'static str,
) -> std::result::Result<&'r str, SkipReason> {
    index
        .and_then(|i| record.get(i))
        .ok_or(SkipReason::MissingField(column))
}

/// Parse calories as a float and truncate toward zero.
///
/// Non-finite values and values outside the i64 range are rejected.
fn parse_calories(raw: &str) -> Option<i64> {
    let value: f64 = raw.trim().parse().ok()?;
    let truncated = value.trunc();
    if (i64::MIN as f64..i64::MAX as f64).contains(&truncated) {
        Some(truncated as i64)
    } else {
        None
    }
}

fn parse_row(
    record: &StringRecord,
    columns: &Columns,
) -> std::result::Result<(Category, MenuItem), SkipReason> {
    let raw_category = field(record, columns.category, CATEGORY_COLUMN)?;
    let name = field(record, columns.item_name, ITEM_NAME_COLUMN)?.trim();
    let raw_calories = field(record, columns.calories, CALORIES_COLUMN)?;
    let raw_popularity = field(record, columns.popularity, POPULARITY_COLUMN)?;

    let calories = parse_calories(raw_calories)
        .ok_or_else(|| SkipReason::InvalidCalories(raw_calories.to_string()))?;
    let popularity: f64 = raw_popularity
        .trim()
        .parse()
        .map_err(|_| SkipReason::InvalidPopularity(raw_popularity.to_string()))?;

    let category = Category::from_raw(raw_category)
        .ok_or_else(|| SkipReason::UnknownCategory(raw_category.trim().to_string()))?;

    Ok((category, MenuItem::new(name, calories, popularity)))
}

/// Load a menu from CSV text, collecting a report of skipped rows.
///
/// Rows with an unknown category, a missing field or a non-numeric value are
/// skipped. Only unreadable input (I/O failure, invalid UTF-8) is an error.
pub fn load_menu_with_report<R: Read>(reader: R) -> Result<(Menu, LoadReport)> {
    let mut rdr = ReaderBuilder::new().flexible(true).from_reader(reader);
    let columns = Columns::from_headers(rdr.headers()?);
    trace!(?columns, "resolved menu columns");

    let mut menu = Menu::new();
    let mut report = LoadReport::default();

    for result in rdr.records() {
        let record = result?;
        match parse_row(&record, &columns) {
            Ok((category, item)) => {
                menu.push(category, item);
                report.loaded += 1;
            }
            Err(reason) => {
                let line = record.position().map(|p| p.line()).unwrap_or(0);
                debug!(line, %reason, "skipping menu row");
                report.skipped.push(SkippedRow { line, reason });
            }
        }
    }

    Ok((menu, report))
}

/// Load a menu from CSV text.
pub fn load_menu<R: Read>(reader: R) -> Result<Menu> {
    load_menu_with_report(reader).map(|(menu, _)| menu)
}

/// Load a menu from a CSV file on disk.
pub fn load_menu_from_path<P: AsRef<Path>>(path: P) -> Result<(Menu, LoadReport)> {
    let file = File::open(path)?;
    load_menu_with_report(file)
}
