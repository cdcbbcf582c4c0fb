use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;
use weather_core::Config;

/// `RUST_LOG` wins over the configured level.
pub fn init_tracing(config: &Config) -> Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => {
            let level = config.logging.level_or("info");
            EnvFilter::try_new(level)
                .with_context(|| format!("invalid logging.level '{level}'"))?
        }
    };

    tracing_subscriber::fmt().with_env_filter(filter).init();
    Ok(())
}
