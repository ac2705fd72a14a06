use std::path::PathBuf;

use anyhow::Result;
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, FileFormat};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub dataset: DatasetConfig,
    pub lookup: LookupConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatasetConfig {
    /// Directory holding `manifest.json` and the `tiles/` tree.
    pub path: PathBuf,
}

/// What to report for a coordinate no boundary claims.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OceanMode {
    /// Always `Etc/GMT`.
    #[default]
    Fixed,
    /// The 15 degree nautical band of the longitude, `Etc/GMT-12` to `Etc/GMT+12`.
    Nautical,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LookupConfig {
    pub ocean: OceanMode,
    /// Load every tile when the engine is built instead of on first use.
    pub precache: bool,
}

impl Settings {
    /// ## Summary
    /// Loads configuration from `geotz.toml` (optional) and `GEOTZ_*` environment
    /// variables. Environment variables take precedence over file values.
    ///
    /// Nested keys use a double underscore, e.g. `GEOTZ_DATASET__PATH`.
    ///
    /// ## Errors
    /// Returns an error if building the configuration or deserializing it fails.
    pub fn load() -> Result<Self> {
        Ok(Self::builder_with_defaults()?
            // TOML file
            .add_source(config::File::with_name("geotz.toml").required(false))
            // Env
            .add_source(
                config::Environment::with_prefix("GEOTZ")
                    .prefix_separator("_")
                    .separator("__")
                    .ignore_empty(true)
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize::<Settings>()?)
    }

    /// ## Summary
    /// Loads configuration from a TOML document layered over the defaults.
    ///
    /// ## Errors
    /// Returns an error if the document is not valid TOML or does not
    /// deserialize into `Settings`.
    pub fn from_toml_str(toml: &str) -> Result<Self> {
        Ok(Self::builder_with_defaults()?
            .add_source(config::File::from_str(toml, FileFormat::Toml))
            .build()?
            .try_deserialize::<Settings>()?)
    }

    fn builder_with_defaults() -> Result<ConfigBuilder<DefaultState>> {
        Ok(Config::builder()
            .set_default("dataset.path", "data")?
            .set_default("lookup.ocean", "fixed")?
            .set_default("lookup.precache", false)?)
    }
}

/// ## Summary
/// Loads configuration from environment variables, `.env` and `geotz.toml`.
///
/// ## Errors
/// Returns an error if loading or deserializing the configuration fails.
pub fn load_config() -> Result<Settings> {
    dotenvy::dotenv().ok();

    let settings = Settings::load()?;
    tracing::debug!(settings = ?settings, "Configuration loaded");
    Ok(settings)
}
