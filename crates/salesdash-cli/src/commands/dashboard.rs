//! Dashboard command implementation

use anyhow::Result;
use salesdash_core::format::{format_count, format_currency};
use salesdash_core::{
    CriteriaSource, Dashboard, DashboardReport, ForecastOutcome, GroupSummary, SeriesKind,
};

use super::truncate;

pub fn cmd_dashboard(dashboard: &Dashboard, source: &dyn CriteriaSource, json: bool) -> Result<()> {
    let report = dashboard.render(source);

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    let top_n = dashboard.config().display.top_n;

    println!();
    println!("📊 Sales Performance Dashboard");
    println!("   ─────────────────────────────────────────────────────────────");

    if let Err(e) = report.ensure_not_empty() {
        println!("   ⚠️  {}. Adjust --region/--product.", e);
    }

    print_kpis(&report);
    print_monthly(&report);
    print_groups("🌍 Sales by Region", "Region", &report.groups.by_region, top_n);
    print_groups("📦 Sales by Product", "Product", &report.groups.by_product, top_n);
    print_forecast_chart(&report);

    println!();
    println!("💡 Key Business Insight");
    println!("   {}", report.insight);
    println!();

    Ok(())
}

fn print_kpis(report: &DashboardReport) {
    let kpis = &report.kpis;
    println!();
    println!("   Total Revenue:       {}", format_currency(kpis.total_revenue));
    println!("   Total Units Sold:    {}", format_count(kpis.total_units));
    println!(
        "   Average Sale Price:  {}",
        format_currency(kpis.average_sale_price)
    );
}

fn print_monthly(report: &DashboardReport) {
    println!();
    println!("📈 Monthly Revenue Trend");

    if report.monthly.is_empty() {
        println!("   No monthly data.");
        return;
    }

    println!("   {:10} │ {:>14}", "Month", "Revenue");
    println!("   ───────────┼───────────────");
    for point in report.monthly.points() {
        println!(
            "   {:10} │ {:>14}",
            point.month.to_string(),
            format_currency(point.revenue)
        );
    }
}

fn print_groups<K: std::fmt::Display>(
    title: &str,
    label: &str,
    groups: &[GroupSummary<K>],
    top_n: usize,
) {
    println!();
    println!("{}", title);

    if groups.is_empty() {
        println!("   No data.");
        return;
    }

    println!(
        "   {:20} │ {:>14} │ {:>6} │ {:>8} │ {:>6}",
        label, "Revenue", "%", "Units", "%"
    );
    println!("   ─────────────────────┼────────────────┼────────┼──────────┼───────");
    for group in groups.iter().take(top_n) {
        println!(
            "   {:20} │ {:>14} │ {:>5.1}% │ {:>8} │ {:>5.1}%",
            truncate(&group.key.to_string(), 20),
            format_currency(group.revenue),
            group.revenue_share,
            format_count(group.units),
            group.units_share
        );
    }
    if groups.len() > top_n {
        println!("   ... and {} more", groups.len() - top_n);
    }
}

fn print_forecast_chart(report: &DashboardReport) {
    println!();
    println!("🔮 Sales Forecast");

    if let ForecastOutcome::Unavailable { reason } = &report.forecast {
        println!("   ⚠️  Forecast unavailable: {}", reason);
        return;
    }

    println!("   {:10} │ {:>14} │ {}", "Month", "Revenue", "Series");
    println!("   ───────────┼────────────────┼───────────");
    for point in &report.chart {
        let series = match point.series {
            SeriesKind::Historical => "historical",
            SeriesKind::Forecast => "forecast",
        };
        println!(
            "   {:10} │ {:>14} │ {}",
            point.month.to_string(),
            format_currency(point.revenue),
            series
        );
    }
}
