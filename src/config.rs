use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

use crate::core::DistanceMetric;
use crate::models::{CrimeWeights, ListingPreferences};

/// Application configuration
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Settings {
    #[serde(default)]
    pub data: DataSettings,
    #[serde(default)]
    pub scoring: ScoringSettings,
    #[serde(default)]
    pub matching: MatchingSettings,
    /// Listing constraints, each field independently unconstrained
    #[serde(default)]
    pub preferences: ListingPreferences,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DataSettings {
    #[serde(default = "default_areas_file")]
    pub areas_file: String,
    #[serde(default = "default_listings_file")]
    pub listings_file: String,
    /// When set, the assembled graph is written here as JSON
    #[serde(default)]
    pub export_file: Option<String>,
}

impl Default for DataSettings {
    fn default() -> Self {
        Self {
            areas_file: default_areas_file(),
            listings_file: default_listings_file(),
            export_file: None,
        }
    }
}

fn default_areas_file() -> String {
    "data/neighbourhood_crime_rates.csv".to_string()
}

fn default_listings_file() -> String {
    "data/apartment_prices.csv".to_string()
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct ScoringSettings {
    #[serde(default)]
    pub weights: WeightsConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WeightsConfig {
    #[serde(default = "default_assault_weight")]
    pub assault: f64,
    #[serde(default = "default_robbery_weight")]
    pub robbery: f64,
    #[serde(default = "default_homicide_weight")]
    pub homicide: f64,
}

impl Default for WeightsConfig {
    fn default() -> Self {
        Self {
            assault: default_assault_weight(),
            robbery: default_robbery_weight(),
            homicide: default_homicide_weight(),
        }
    }
}

impl From<WeightsConfig> for CrimeWeights {
    fn from(weights: WeightsConfig) -> Self {
        Self {
            assault: weights.assault,
            robbery: weights.robbery,
            homicide: weights.homicide,
        }
    }
}

fn default_assault_weight() -> f64 { 0.5 }
fn default_robbery_weight() -> f64 { 0.3 }
fn default_homicide_weight() -> f64 { 0.2 }

#[derive(Debug, Clone, Deserialize, Default)]
pub struct MatchingSettings {
    #[serde(default)]
    pub metric: DistanceMetric,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "pretty".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml, then config/local.toml)
    /// 3. Environment variables (prefixed with NESTMAP__)
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            // Local overrides for development
            .add_source(File::with_name("config/local").required(false))
            // e.g. NESTMAP__PREFERENCES__BEDS -> preferences.beds
            .add_source(
                Environment::with_prefix("NESTMAP")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(
                Environment::with_prefix("NESTMAP")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }
}
