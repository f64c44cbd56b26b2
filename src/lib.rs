pub mod cli;
pub mod config;
pub mod error;
pub mod interface;
pub mod logging;
pub mod menu;
pub mod models;
pub mod planner;
pub mod server;

pub use error::{ComboError, Result};
pub use menu::{load_menu, load_menu_with_report, LoadReport, Menu};
pub use models::{Category, Combo, ComboBatch, MenuItem};
pub use planner::{create_batch, create_combo, RngSampler, Sampler};
