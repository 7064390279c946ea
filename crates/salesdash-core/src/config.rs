//! Dashboard configuration
//!
//! Controls the dataset column names, the forecast horizon and display limits.
//!
//! ## Configuration Resolution
//!
//! Config is loaded with a layered resolution:
//! 1. An explicit path (e.g. `--config`), if given
//! 2. The user override (~/.config/salesdash/dashboard.toml on Linux)
//! 3. Embedded defaults (compiled into binary)
//!
//! Keys missing from an override file keep their default values.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use crate::error::{Error, Result};

/// Embedded default config (compiled into binary)
const DEFAULT_CONFIG: &str = include_str!("../../../config/dashboard.toml");

/// Header names for each field of a sales record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnMapping {
    pub date: String,
    pub region: String,
    pub product: String,
    pub units: String,
    /// Preferred revenue source
    pub revenue: String,
    /// Fallback: revenue = units x price when the revenue column is absent
    pub price: String,
}

impl Default for ColumnMapping {
    fn default() -> Self {
        Self {
            date: "OrderDate".to_string(),
            region: "Region".to_string(),
            product: "Product".to_string(),
            units: "UnitsSold".to_string(),
            revenue: "Revenue".to_string(),
            price: "SalePrice".to_string(),
        }
    }
}

/// Forecast settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ForecastConfig {
    /// Number of future months to project
    pub horizon: u32,
    /// Months of history shown alongside the forecast
    pub history_window: usize,
}

impl Default for ForecastConfig {
    fn default() -> Self {
        Self {
            horizon: 6,
            history_window: 12,
        }
    }
}

/// Presentation limits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayConfig {
    pub top_n: usize,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self { top_n: 10 }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DashboardConfig {
    pub columns: ColumnMapping,
    pub forecast: ForecastConfig,
    pub display: DisplayConfig,
}

impl DashboardConfig {
    /// Load using the default resolution (user override, then embedded defaults)
    pub fn load() -> Result<Self> {
        load_config(None)
    }

    /// Load from an explicit path; the file must exist
    pub fn from_path(path: &Path) -> Result<Self> {
        load_config(Some(path))
    }

    /// Parse config from TOML content, layered over the defaults
    pub fn from_toml(content: &str) -> Result<Self> {
        parse_config(content)
    }

    /// Override the forecast horizon, keeping the config valid
    pub fn with_horizon(mut self, horizon: u32) -> Result<Self> {
        self.forecast.horizon = horizon;
        self.validate()?;
        Ok(self)
    }

    fn validate(&self) -> Result<()> {
        if self.forecast.horizon == 0 {
            return Err(Error::Config("forecast.horizon must be at least 1".into()));
        }
        if self.forecast.history_window == 0 {
            return Err(Error::Config(
                "forecast.history_window must be at least 1".into(),
            ));
        }
        let columns = &self.columns;
        for (key, value) in [
            ("date", &columns.date),
            ("region", &columns.region),
            ("product", &columns.product),
            ("units", &columns.units),
            ("revenue", &columns.revenue),
            ("price", &columns.price),
        ] {
            if value.trim().is_empty() {
                return Err(Error::Config(format!("columns.{} must not be empty", key)));
            }
        }
        Ok(())
    }
}

/// Get the default user override path
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("salesdash").join("dashboard.toml"))
}

fn load_config(override_path: Option<&Path>) -> Result<DashboardConfig> {
    let content = if let Some(path) = override_path {
        debug!("Loading config from {}", path.display());
        fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("Failed to read {}: {}", path.display(), e)))?
    } else {
        match default_config_path() {
            Some(default_path) if default_path.exists() => {
                debug!("Loading config override from {}", default_path.display());
                fs::read_to_string(&default_path).map_err(|e| {
                    Error::Config(format!("Failed to read {}: {}", default_path.display(), e))
                })?
            }
            _ => DEFAULT_CONFIG.to_string(),
        }
    };

    parse_config(&content)
}

/// Raw config structure for TOML parsing
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawConfig {
    columns: Option<RawColumns>,
    forecast: Option<RawForecast>,
    display: Option<RawDisplay>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawColumns {
    date: Option<String>,
    region: Option<String>,
    product: Option<String>,
    units: Option<String>,
    revenue: Option<String>,
    price: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawForecast {
    horizon: Option<u32>,
    history_window: Option<usize>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawDisplay {
    top_n: Option<usize>,
}

fn parse_config(content: &str) -> Result<DashboardConfig> {
    let raw: RawConfig = toml::from_str(content)
        .map_err(|e| Error::Config(format!("Invalid config TOML: {}", e)))?;

    let mut config = DashboardConfig::default();

    if let Some(columns) = raw.columns {
        let target = &mut config.columns;
        for (value, slot) in [
            (columns.date, &mut target.date),
            (columns.region, &mut target.region),
            (columns.product, &mut target.product),
            (columns.units, &mut target.units),
            (columns.revenue, &mut target.revenue),
            (columns.price, &mut target.price),
        ] {
            if let Some(value) = value {
                *slot = value;
            }
        }
    }

    if let Some(forecast) = raw.forecast {
        if let Some(horizon) = forecast.horizon {
            config.forecast.horizon = horizon;
        }
        if let Some(window) = forecast.history_window {
            config.forecast.history_window = window;
        }
    }

    if let Some(display) = raw.display {
        if let Some(top_n) = display.top_n {
            config.display.top_n = top_n;
        }
    }

    config.validate()?;
    Ok(config)
}
