use tracing_subscriber::EnvFilter;

use crate::error::{ComboError, Result};

/// Install the global fmt subscriber.
///
/// `RUST_LOG` takes precedence over `level` when set.
pub fn init(level: &str) -> Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(format!("{level},tower_http={level}"))
            .map_err(|e| ComboError::Config(format!("invalid log level {level:?}: {e}")))?,
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init()
        .map_err(|e| ComboError::Config(format!("logging already initialized: {e}")))
}
