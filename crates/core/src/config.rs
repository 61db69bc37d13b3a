use std::path::Path;

use config::{Config, Environment, File};

use crate::errors::CoreError;
use crate::models::settings::Settings;

/// Environment variable prefix, e.g. `TRACKER_POLL_INTERVAL_SECS=60`.
pub const ENV_PREFIX: &str = "TRACKER";

/// Load settings in layers:
/// 1. Built-in defaults (`Settings::default()`).
/// 2. The TOML file at `path`, when given (must exist).
/// 3. `TRACKER_*` environment variables.
///
/// The result is validated before it is returned.
pub fn load_settings(path: Option<&Path>) -> Result<Settings, CoreError> {
    let mut builder = Config::builder().add_source(Config::try_from(&Settings::default())?);

    if let Some(path) = path {
        builder = builder.add_source(File::from(path).required(true));
    }

    let settings: Settings = builder
        .add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        )
        .build()?
        .try_deserialize()?;

    settings.validate()?;
    tracing::debug!(
        api_base = %settings.api_base,
        poll_interval_secs = settings.poll_interval_secs,
        "Settings loaded"
    );
    Ok(settings)
}
