use crate::error::ConfigError;
use std::path::Path;

// Declare the modules that make up this crate.
pub mod error;
pub mod settings;
pub mod telemetry;

#[cfg(feature = "clap")]
pub mod overrides;

// Re-export the core types to provide a clean public API.
#[cfg(feature = "clap")]
pub use overrides::Overrides;
pub use settings::{DataSettings, LoggingSettings, ServerSettings, Settings, ViewSettings};
pub use telemetry::init_tracing;

/// Default location of the optional configuration file.
pub const DEFAULT_CONFIG_FILE: &str = "config.toml";

/// Prefix for environment overrides, e.g. `NIFTYBOARD_SERVER__PORT=8080`.
pub const ENV_PREFIX: &str = "NIFTYBOARD";

/// Loads the application configuration from `config.toml` and the environment.
///
/// This function is the primary entry point for this crate. Missing files are not an
/// error: every key has a built-in default.
pub fn load_config() -> Result<Settings, ConfigError> {
    dotenvy::dotenv().ok();
    load_config_from(Path::new(DEFAULT_CONFIG_FILE))
}

/// Same as [`load_config`] but reads the given file instead of `config.toml`.
pub fn load_config_from(path: &Path) -> Result<Settings, ConfigError> {
    let defaults = ViewSettings::default();

    let builder = config::Config::builder()
        .set_default("data.bundle_path", "processed_data/processed_data.json")?
        .set_default("server.host", "0.0.0.0")?
        .set_default("server.port", 3000)?
        .set_default("views.top_k", defaults.top_k as u64)?
        .set_default("views.card_count", defaults.card_count as u64)?
        .set_default("views.max_compare", defaults.max_compare as u64)?
        .set_default("views.correlation_default", defaults.correlation_default as u64)?
        .set_default("views.correlation_min", defaults.correlation_min as u64)?
        .set_default("views.correlation_max", defaults.correlation_max as u64)?
        .set_default("views.insight_pairs", defaults.insight_pairs as u64)?
        .set_default("views.monthly_movers", defaults.monthly_movers as u64)?
        .set_default("views.histogram_bins", defaults.histogram_bins as u64)?
        .set_default("logging.level", "info")?
        .add_source(config::File::from(path).required(false))
        .add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    // Attempt to deserialize the entire configuration into our `Settings` struct
    let settings = builder.try_deserialize::<Settings>()?;
    settings.validate()?;

    Ok(settings)
}
