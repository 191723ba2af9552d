use crate::application::sensor_generator::DEFAULT_POINT_COUNT;
use crate::domain::error::GeneratorError;
use crate::domain::predictive::Components;
use anyhow::Context;
use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_CONFIG_FILE: &str = "config/dashboard";
pub const ENV_PREFIX: &str = "LEAKWATCH";

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct DashboardConfig {
    pub default_points: usize,
    pub labels: LabelFormats,
    pub components: Components,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            default_points: DEFAULT_POINT_COUNT,
            labels: LabelFormats::default(),
            components: Components::default(),
        }
    }
}

/// chrono `strftime` patterns used when labelling generated points.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct LabelFormats {
    pub time: String,
    pub date: String,
    pub timestamp: String,
}

impl Default for LabelFormats {
    fn default() -> Self {
        Self {
            time: "%H:%M".to_string(),
            date: "%m/%d/%Y".to_string(),
            timestamp: "%d/%m/%Y, %H:%M:%S".to_string(),
        }
    }
}

impl DashboardConfig {
    pub fn validate(&self) -> Result<(), GeneratorError> {
        if self.default_points == 0 {
            return Err(GeneratorError::InvalidConfig(
                "default_points must be at least 1".to_string(),
            ));
        }
        for (name, pattern) in [
            ("labels.time", &self.labels.time),
            ("labels.date", &self.labels.date),
            ("labels.timestamp", &self.labels.timestamp),
        ] {
            if pattern.trim().is_empty() {
                return Err(GeneratorError::InvalidConfig(format!("{} is empty", name)));
            }
            // chrono panics when rendering a pattern with an unknown specifier
            if StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error)) {
                return Err(GeneratorError::InvalidConfig(format!(
                    "{} is not a valid strftime pattern: {:?}",
                    name, pattern
                )));
            }
        }
        self.components
            .validate()
            .map_err(|e| GeneratorError::InvalidConfig(e.to_string()))
    }

    pub fn to_toml(&self) -> anyhow::Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize configuration")
    }
}

/// Built-in defaults, then the config file (optional unless given
/// explicitly), then `LEAKWATCH__*` environment overrides.
pub fn load_dashboard_config(path: Option<&Path>) -> anyhow::Result<DashboardConfig> {
    let builder = config::Config::builder();
    let builder = match path {
        Some(path) => builder.add_source(config::File::from(path).required(true)),
        None => builder.add_source(config::File::with_name(DEFAULT_CONFIG_FILE).required(false)),
    };

    let settings = builder
        .add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .separator("__")
                .try_parsing(true),
        )
        .build()
        .context("Failed to load dashboard configuration")?;

    let config: DashboardConfig = settings
        .try_deserialize()
        .context("Failed to parse dashboard configuration")?;
    config.validate()?;

    tracing::debug!(
        "Loaded dashboard config: default_points={}, min component health={}",
        config.default_points,
        config.components.min_health()
    );

    Ok(config)
}
