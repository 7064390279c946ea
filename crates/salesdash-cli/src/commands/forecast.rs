//! Forecast command implementation

use anyhow::{bail, Result};
use salesdash_core::format::format_currency;
use salesdash_core::{CriteriaSource, Dashboard, ForecastOutcome};

pub fn cmd_forecast(dashboard: &Dashboard, source: &dyn CriteriaSource, json: bool) -> Result<()> {
    let report = dashboard.render(source);

    let result = match &report.forecast {
        ForecastOutcome::Ready(result) => result,
        ForecastOutcome::Unavailable { reason } => bail!("Forecast unavailable: {}", reason),
    };

    if json {
        let body = serde_json::json!({
            "monthly": report.monthly,
            "forecast": result,
        });
        println!("{}", serde_json::to_string_pretty(&body)?);
        return Ok(());
    }

    println!();
    println!("🔮 Revenue Forecast ({} months)", result.horizon);
    println!(
        "   Trend: {} per month (starting at {})",
        format_currency(result.trend.slope),
        format_currency(result.trend.intercept)
    );
    println!("   ─────────────────────────────────────────────────────────────");
    println!("   {:10} │ {:>14}", "Month", "Revenue");
    println!("   ───────────┼───────────────");

    for point in report.monthly.points() {
        println!(
            "   {:10} │ {:>14}",
            point.month.to_string(),
            format_currency(point.revenue)
        );
    }
    println!("   ───────────┼─────────────── forecast");
    for point in &result.points {
        println!(
            "   {:10} │ {:>14}",
            point.month.to_string(),
            format_currency(point.revenue)
        );
    }
    println!();

    Ok(())
}
