pub mod render;

pub use render::{display_batch, display_load_report, render_batch};
