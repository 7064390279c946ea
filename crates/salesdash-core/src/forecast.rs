//! Linear trend forecast of monthly revenue
//!
//! Fits revenue against the position of each observed month (0, 1, 2, ...)
//! by ordinary least squares and extrapolates the line. Missing calendar
//! months do not widen the axis; only the forecast labels follow the
//! calendar, continuing from the last observed month.
//! There is no seasonality and no confidence interval.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};
use crate::models::{MonthlySeries, YearMonth};

/// Default number of months to project
pub const DEFAULT_HORIZON: u32 = 6;

/// A fitted line `revenue = intercept + slope * index`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearTrend {
    pub slope: f64,
    pub intercept: f64,
}

impl LinearTrend {
    /// Closed-form least squares over `(x, y)` points
    ///
    /// Needs at least two distinct x values.
    pub fn fit(points: &[(f64, f64)]) -> Result<Self> {
        let n = points.len() as f64;
        if points.len() < 2 {
            return Err(Error::InsufficientData(points.len()));
        }

        let mean_x = points.iter().map(|(x, _)| x).sum::<f64>() / n;
        let mean_y = points.iter().map(|(_, y)| y).sum::<f64>() / n;

        let mut sxx = 0.0;
        let mut sxy = 0.0;
        for (x, y) in points {
            sxx += (x - mean_x).powi(2);
            sxy += (x - mean_x) * (y - mean_y);
        }

        if sxx == 0.0 {
            // All x identical
            return Err(Error::InsufficientData(1));
        }

        let slope = sxy / sxx;
        Ok(Self {
            slope,
            intercept: mean_y - slope * mean_x,
        })
    }

    pub fn predict(&self, x: f64) -> f64 {
        self.intercept + self.slope * x
    }
}

/// One projected month
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ForecastPoint {
    pub month: YearMonth,
    /// Position on the fitted time axis
    pub index: i64,
    pub revenue: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastResult {
    pub horizon: u32,
    pub trend: LinearTrend,
    pub points: Vec<ForecastPoint>,
}

/// Projects a monthly series forward a fixed number of months
#[derive(Debug, Clone, Copy)]
pub struct TrendForecaster {
    horizon: u32,
}

impl TrendForecaster {
    pub fn new() -> Self {
        Self {
            horizon: DEFAULT_HORIZON,
        }
    }

    /// Horizons below 1 are raised to 1
    pub fn with_horizon(horizon: u32) -> Self {
        Self {
            horizon: horizon.max(1),
        }
    }

    pub fn horizon(&self) -> u32 {
        self.horizon
    }

    pub fn forecast(&self, series: &MonthlySeries) -> Result<ForecastResult> {
        let last = match series.last() {
            Some(last) if series.len() >= 2 => last.month,
            _ => return Err(Error::InsufficientData(series.len())),
        };

        let observations: Vec<(f64, f64)> = series
            .points()
            .iter()
            .enumerate()
            .map(|(i, p)| (i as f64, p.revenue))
            .collect();
        let trend = LinearTrend::fit(&observations)?;

        debug!(
            "Fitted trend over {} months: slope={:.2}, intercept={:.2}",
            series.len(),
            trend.slope,
            trend.intercept
        );

        let last_index = series.len() as i64 - 1;
        let points = (1..=self.horizon as i64)
            .map(|step| {
                let index = last_index + step;
                ForecastPoint {
                    month: last.add_months(step),
                    index,
                    revenue: trend.predict(index as f64),
                }
            })
            .collect();

        Ok(ForecastResult {
            horizon: self.horizon,
            trend,
            points,
        })
    }
}

impl Default for TrendForecaster {
    fn default() -> Self {
        Self::new()
    }
}
