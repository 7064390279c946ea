//! End-to-end dashboard computation
//!
//! `Loader -> Filter -> Aggregator -> {Forecaster, Insight}`. Each render
//! recomputes everything from the loaded table and the current criteria;
//! no state survives between renders.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::aggregate::{self, Aggregation};
use crate::config::{DashboardConfig, ForecastConfig};
use crate::error::{Error, Result};
use crate::filter::{self, FilterCriteria};
use crate::forecast::{ForecastResult, TrendForecaster};
use crate::insight::{self, Insight};
use crate::loader;
use crate::models::{GroupedSummaries, KpiSummary, MonthlySeries, SalesTable, YearMonth};

/// Supplies the user's current selection (the presentation side of the boundary)
pub trait CriteriaSource {
    fn current_criteria(&self) -> FilterCriteria;
}

impl CriteriaSource for FilterCriteria {
    fn current_criteria(&self) -> FilterCriteria {
        self.clone()
    }
}

/// A fitted forecast, or why one could not be produced
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ForecastOutcome {
    Ready(ForecastResult),
    Unavailable { reason: String },
}

impl ForecastOutcome {
    pub fn result(&self) -> Option<&ForecastResult> {
        match self {
            ForecastOutcome::Ready(result) => Some(result),
            ForecastOutcome::Unavailable { .. } => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeriesKind {
    Historical,
    Forecast,
}

/// One point of the history-plus-forecast chart
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    pub month: YearMonth,
    pub revenue: f64,
    pub series: SeriesKind,
}

/// Everything the presentation layer needs for one render
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardReport {
    pub criteria: FilterCriteria,
    pub kpis: KpiSummary,
    pub groups: GroupedSummaries,
    pub monthly: MonthlySeries,
    pub forecast: ForecastOutcome,
    /// Recent history followed by the forecast
    pub chart: Vec<ChartPoint>,
    pub insight: Insight,
}

impl DashboardReport {
    pub fn is_empty(&self) -> bool {
        self.kpis.is_empty()
    }

    /// Fails with [`Error::EmptyResult`] when the criteria matched no rows
    pub fn ensure_not_empty(&self) -> Result<()> {
        if self.is_empty() {
            Err(Error::EmptyResult)
        } else {
            Ok(())
        }
    }
}

/// Run the pipeline with the default forecast settings
pub fn compute(table: &SalesTable, criteria: &FilterCriteria) -> DashboardReport {
    compute_with(table, criteria, &ForecastConfig::default())
}

pub fn compute_with(
    table: &SalesTable,
    criteria: &FilterCriteria,
    settings: &ForecastConfig,
) -> DashboardReport {
    let filtered = filter::apply(table, criteria);
    if filtered.is_empty() {
        warn!("{}", Error::EmptyResult);
    }

    let aggregation = aggregate::summarize(&filtered);
    let monthly = aggregation.monthly_series();

    let forecast = match TrendForecaster::with_horizon(settings.horizon).forecast(&monthly) {
        Ok(result) => ForecastOutcome::Ready(result),
        Err(e) => {
            debug!("Forecast unavailable: {}", e);
            ForecastOutcome::Unavailable {
                reason: e.to_string(),
            }
        }
    };

    let chart = forecast_chart(&monthly, &forecast, settings.history_window);
    let insight = insight::top_region(&aggregation.groups.by_region);
    let Aggregation { kpis, groups } = aggregation;

    DashboardReport {
        criteria: criteria.clone(),
        kpis,
        groups,
        monthly,
        forecast,
        chart,
        insight,
    }
}

/// The last `history_window` actual months, then any forecast months
pub fn forecast_chart(
    monthly: &MonthlySeries,
    forecast: &ForecastOutcome,
    history_window: usize,
) -> Vec<ChartPoint> {
    let history = monthly.tail(history_window).iter().map(|p| ChartPoint {
        month: p.month,
        revenue: p.revenue,
        series: SeriesKind::Historical,
    });
    let projected = forecast
        .result()
        .into_iter()
        .flat_map(|r| r.points.iter())
        .map(|p| ChartPoint {
            month: p.month,
            revenue: p.revenue,
            series: SeriesKind::Forecast,
        });
    history.chain(projected).collect()
}

/// A loaded dataset plus the settings used to render it
pub struct Dashboard {
    table: SalesTable,
    config: DashboardConfig,
}

impl Dashboard {
    pub fn new(table: SalesTable, config: DashboardConfig) -> Self {
        Self { table, config }
    }

    /// Load the dataset once for the session
    pub fn load(path: &Path, config: DashboardConfig) -> Result<Self> {
        let table = loader::load_sales_file(path, &config.columns)?;
        Ok(Self::new(table, config))
    }

    pub fn table(&self) -> &SalesTable {
        &self.table
    }

    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    /// Recompute the whole dashboard for the source's current selection
    pub fn render(&self, source: &dyn CriteriaSource) -> DashboardReport {
        let criteria = source.current_criteria();
        compute_with(&self.table, &criteria, &self.config.forecast)
    }
}
