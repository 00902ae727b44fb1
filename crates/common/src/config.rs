//! Spotlight configuration.
//!
//! Options are merged once over [`SpotlightConfig::default`]: any field a
//! caller leaves out of a JSON document keeps its default. In code, use
//! struct update syntax (`SpotlightConfig { size: 120.0, ..Default::default() }`).

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use spotlight_model::Rgba;

use crate::error::{SpotResult, SpotlightError};

/// Visual and timing options for one spotlight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SpotlightConfig {
    /// Mask fill color.
    #[serde(alias = "bgColor")]
    pub background_color: Rgba,

    /// Opacity of light at the spot center, in `[0.0, 1.0]`.
    /// The gradient stop there has alpha `1 - light_start_opacity`.
    #[serde(alias = "lightStart")]
    pub light_start_opacity: f64,

    /// Opacity of light at the lit radius, in `[0.0, 1.0]`.
    #[serde(alias = "lightEnd")]
    pub light_end_opacity: f64,

    /// Initial spot radius.
    pub size: f64,

    /// Initial soft-edge width.
    pub blur_radius: f64,

    /// Delay between animation ticks (milliseconds).
    #[serde(alias = "interval")]
    pub tick_interval_ms: u64,

    /// Ticks per animation when the caller does not specify a count.
    #[serde(alias = "steps")]
    pub default_steps: u32,

    /// Stacking order of the overlay surface.
    #[serde(alias = "zIndex")]
    pub surface_z_order: i32,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "spotlight_core=trace,warn").
    pub level: String,

    /// Whether to output structured JSON logs.
    pub json: bool,

    /// Optional log file path.
    pub file: Option<PathBuf>,
}

impl Default for SpotlightConfig {
    fn default() -> Self {
        Self {
            background_color: Rgba::new(0, 0, 0, 0.9),
            light_start_opacity: 0.0,
            light_end_opacity: 0.2,
            size: 300.0,
            blur_radius: 20.0,
            tick_interval_ms: 10,
            default_steps: 50,
            surface_z_order: 100,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
            file: None,
        }
    }
}

impl SpotlightConfig {
    /// Parse a JSON document of overrides, merged over the defaults.
    pub fn from_json_str(json: &str) -> SpotResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load overrides from a JSON file.
    pub fn load(path: &Path) -> SpotResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    /// Load overrides from a JSON file, falling back to defaults.
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }
        match Self::load(path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("Failed to load spotlight config at {:?}: {}", path, e);
                Self::default()
            }
        }
    }

    /// Check that every option is usable.
    pub fn validate(&self) -> SpotResult<()> {
        check_opacity("lightStartOpacity", self.light_start_opacity)?;
        check_opacity("lightEndOpacity", self.light_end_opacity)?;

        if !self.size.is_finite() || self.size < 0.0 {
            return Err(SpotlightError::config(format!(
                "size must be a non-negative number, got {}",
                self.size
            )));
        }
        if !self.blur_radius.is_finite() || self.blur_radius < 0.0 {
            return Err(SpotlightError::config(format!(
                "blurRadius must be a non-negative number, got {}",
                self.blur_radius
            )));
        }
        if self.default_steps == 0 {
            return Err(SpotlightError::config("defaultSteps must be at least 1"));
        }
        Ok(())
    }

    /// Delay between animation ticks.
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }
}

fn check_opacity(name: &str, value: f64) -> SpotResult<()> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(SpotlightError::config(format!(
            "{name} must be within [0, 1], got {value}"
        )))
    }
}
