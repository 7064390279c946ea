//! CLI command implementations
//!
//! Commands are organized by view:
//! - `core` - Shared utilities (config resolution, dataset loading)
//! - `dashboard` - Full dashboard (KPIs, breakdowns, forecast, insight)
//! - `forecast` - Monthly series and trend forecast
//! - `options` - Filter options (regions, products)

pub mod core;
pub mod dashboard;
pub mod forecast;
pub mod options;

// Re-export command functions for main.rs
pub use self::core::*;
pub use dashboard::*;
pub use forecast::*;
pub use options::*;

/// Truncate a string to a maximum length, adding "..." if truncated
pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}
