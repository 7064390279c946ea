//! Shared command utilities
//!
//! - `load_config` - Resolve the dashboard config (file, override, defaults)
//! - `open_dashboard` - Load the dataset once for the command

use std::path::Path;

use anyhow::{Context, Result};
use salesdash_core::{Dashboard, DashboardConfig};
use tracing::debug;

/// Resolve config from `--config`, the user override, or built-in defaults,
/// then apply a `--horizon` override
pub fn load_config(path: Option<&Path>, horizon: Option<u32>) -> Result<DashboardConfig> {
    let config = match path {
        Some(path) => DashboardConfig::from_path(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => DashboardConfig::load().context("Failed to load config")?,
    };

    match horizon {
        Some(horizon) => config
            .with_horizon(horizon)
            .context("Invalid --horizon (must be at least 1)"),
        None => Ok(config),
    }
}

/// Load the sales dataset
pub fn open_dashboard(data: &Path, config: DashboardConfig) -> Result<Dashboard> {
    debug!("Loading sales data from {}", data.display());
    Dashboard::load(data, config)
        .with_context(|| format!("Failed to load sales data from {}", data.display()))
}
