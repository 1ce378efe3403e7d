use shared_utils::get_env_path;

use crate::cli::commands::Cli;
use crate::config::{CONFIG_ENV, ChartConfig, ConfigError};

/// Build the effective config: defaults, then the config file (from `--config`
/// or `$PRICE_CHART_CONFIG`), then individual flag overrides.
pub fn resolve_config(cli: &Cli) -> Result<ChartConfig, ConfigError> {
    let path = cli.config.clone().or_else(|| get_env_path(CONFIG_ENV));

    let mut config = match path {
        Some(p) => ChartConfig::load(&p)?,
        None => ChartConfig::default(),
    };

    if let Some(source) = &cli.source {
        config.source_path = source.clone();
    }
    if let Some(interval) = cli.interval {
        config.interval = interval;
    }
    if let Some(period) = cli.ema_period {
        config.ema_period = period;
    }
    if let Some(origin) = cli.origin {
        config.origin = origin.into();
    }

    config.validate()?;
    Ok(config)
}
