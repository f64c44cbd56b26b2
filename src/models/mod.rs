pub mod combo;
pub mod item;

pub use combo::{Combo, ComboBatch, PerCategory};
pub use item::{format_float, Category, MenuItem};
