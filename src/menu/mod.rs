mod loader;
mod store;

pub use loader::{
    load_menu, load_menu_from_path, load_menu_with_report, LoadReport, SkipReason, SkippedRow,
    CALORIES_COLUMN, CATEGORY_COLUMN, ITEM_NAME_COLUMN, POPULARITY_COLUMN,
};
pub use store::Menu;
