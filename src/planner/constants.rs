/// Maximum number of candidates drawn per category before picking the best.
pub const SAMPLE_SIZE: usize = 5;

/// Calories are divided by this before being subtracted from popularity.
pub const CALORIE_DIVISOR: f64 = 100.0;

/// Combos generated per request.
pub const COMBOS_PER_DAY: usize = 3;
