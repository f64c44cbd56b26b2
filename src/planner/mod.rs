pub mod constants;
pub mod sampler;
pub mod selection;

pub use constants::*;
pub use sampler::{RngSampler, Sampler};
pub use selection::{create_batch, create_combo, pick_best, select_from_bucket};
