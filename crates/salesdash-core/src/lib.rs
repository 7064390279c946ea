//! SalesDash Core Library
//!
//! The computation behind the sales performance dashboard:
//! - CSV loading with strict validation
//! - Region/product filtering
//! - KPI and grouped summaries (by month, region, product)
//! - Linear trend forecast of monthly revenue
//! - Top-region insight text
//! - Layered TOML configuration

pub mod aggregate;
pub mod config;
pub mod error;
pub mod filter;
pub mod forecast;
pub mod format;
pub mod insight;
pub mod loader;
pub mod models;
pub mod pipeline;

/// Sample datasets and record builders
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use aggregate::Aggregation;
pub use config::{ColumnMapping, DashboardConfig, DisplayConfig, ForecastConfig};
pub use error::{Error, Result};
pub use filter::{FilterCriteria, Selection};
pub use forecast::{ForecastPoint, ForecastResult, LinearTrend, TrendForecaster};
pub use insight::{Insight, InsightKind};
pub use models::{
    GroupSummary, GroupedSummaries, KpiSummary, MonthlyPoint, MonthlySeries, Product, Region,
    SalesRecord, SalesTable, YearMonth,
};
pub use pipeline::{
    compute, compute_with, ChartPoint, CriteriaSource, Dashboard, DashboardReport,
    ForecastOutcome, SeriesKind,
};
