//! Integration tests for salesdash-core
//!
//! These tests exercise the full load → filter → aggregate → forecast → insight
//! workflow.

use std::io::Write;

use salesdash_core::{
    compute, compute_with,
    config::DashboardConfig,
    filter::{self, FilterCriteria},
    insight::InsightKind,
    loader::{load_sales, load_sales_file},
    ColumnMapping, Dashboard, Error, ForecastConfig, ForecastOutcome, Region, SalesTable,
};

const SAMPLE_CSV: &str = include_str!("data/sales_sample.csv");
const SAMPLE_REVENUE_CSV: &str = include_str!("data/sales_revenue.csv");

fn sample_table() -> SalesTable {
    load_sales(SAMPLE_CSV.as_bytes(), &ColumnMapping::default()).expect("sample dataset is valid")
}

// =============================================================================
// Loading
// =============================================================================

#[test]
fn test_sample_loads_with_derived_revenue() {
    let table = sample_table();

    assert_eq!(table.len(), 18);
    assert_eq!(
        table.regions(),
        vec![Region::from("East"), Region::from("West"), Region::from("North")]
    );
    // 2 x 1200.00
    assert_eq!(table.records()[0].revenue, 2400.0);
}

#[test]
fn test_revenue_layout_loads() {
    let table = load_sales(SAMPLE_REVENUE_CSV.as_bytes(), &ColumnMapping::default()).unwrap();
    assert_eq!(table.len(), 6);
    assert_eq!(table.records()[5].revenue, 480.0);
}

#[test]
fn test_load_from_file_and_render() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(SAMPLE_CSV.as_bytes()).unwrap();

    let table = load_sales_file(file.path(), &ColumnMapping::default()).unwrap();
    assert_eq!(table, sample_table());

    let dashboard = Dashboard::load(file.path(), DashboardConfig::default()).unwrap();
    let report = dashboard.render(&FilterCriteria::new());

    assert_eq!(report.kpis.record_count, 18);
}

#[test]
fn test_malformed_file_is_load_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "OrderDate,Region,Product,UnitsSold,Revenue").unwrap();
    writeln!(file, "2024-01-01,East,Laptop,2,100").unwrap();
    writeln!(file, "2024-13-45,East,Laptop,2,100").unwrap();

    let err = Dashboard::load(file.path(), DashboardConfig::default()).err().unwrap();
    assert!(err.is_load_error());
    assert!(matches!(err, Error::InvalidRecord { line: 3, .. }));
}

// =============================================================================
// Full pipeline
// =============================================================================

#[test]
fn test_full_dashboard_numbers() {
    let report = compute(&sample_table(), &FilterCriteria::new());

    assert!((report.kpis.total_revenue - 29097.5).abs() < 1e-9);
    assert_eq!(report.kpis.total_units, 112);
    assert!((report.kpis.average_sale_price - 29097.5 / 112.0).abs() < 1e-9);

    let regions: Vec<&str> = report
        .groups
        .by_region
        .iter()
        .map(|g| g.key.as_str())
        .collect();
    assert_eq!(regions, vec!["East", "West", "North"]);

    let months: Vec<String> = report.monthly.points().iter().map(|p| p.month.to_string()).collect();
    assert_eq!(
        months,
        vec!["2024-01", "2024-02", "2024-03", "2024-04", "2024-05", "2024-06"]
    );

    assert_eq!(report.insight.kind, InsightKind::TopRegion);
    assert!(report.insight.text.contains("East"));
    assert!(report.insight.text.contains("63.3%"));
    assert!(report.insight.text.contains("$18,420.00"));
}

#[test]
fn test_region_totals_match_kpi_total() {
    let table = sample_table();
    for criteria in [
        FilterCriteria::new(),
        FilterCriteria::new().regions(["East"]),
        FilterCriteria::new().products(["Mouse", "Monitor"]),
        FilterCriteria::new().regions(["West", "North"]).products(["Laptop"]),
    ] {
        let report = compute(&table, &criteria);
        let sum: f64 = report.groups.by_region.iter().map(|g| g.revenue).sum();
        assert!(
            (sum - report.kpis.total_revenue).abs() < 1e-6,
            "mismatch for {:?}",
            criteria
        );
    }
}

#[test]
fn test_filtered_view_changes_every_output() {
    let table = sample_table();
    let all = compute(&table, &FilterCriteria::new());
    let west = compute(&table, &FilterCriteria::new().regions(["West"]));

    assert!(west.kpis.total_revenue < all.kpis.total_revenue);
    assert_eq!(west.groups.by_region.len(), 1);
    assert!(west.insight.text.contains("100.0%"));
}

#[test]
fn test_empty_selection_is_neutral() {
    let report = compute(
        &sample_table(),
        &FilterCriteria::new().regions(["East"]).products(["Keyboard"]),
    );

    assert_eq!(report.kpis.total_revenue, 0.0);
    assert_eq!(report.kpis.total_units, 0);
    assert_eq!(report.kpis.average_sale_price, 0.0);
    assert_eq!(report.insight.kind, InsightKind::NoData);
    assert!(matches!(report.ensure_not_empty(), Err(Error::EmptyResult)));
}

#[test]
fn test_all_filter_round_trip() {
    let table = sample_table();
    assert_eq!(filter::apply(&table, &FilterCriteria::new()), table);
}

#[test]
fn test_forecast_follows_configured_horizon() {
    let settings = ForecastConfig {
        horizon: 3,
        history_window: 12,
    };
    let report = compute_with(&sample_table(), &FilterCriteria::new(), &settings);

    let forecast = match &report.forecast {
        ForecastOutcome::Ready(result) => result,
        other => panic!("expected forecast, got {:?}", other),
    };
    let months: Vec<String> = forecast.points.iter().map(|p| p.month.to_string()).collect();
    assert_eq!(months, vec!["2024-07", "2024-08", "2024-09"]);

    // Six months of history plus three forecast points
    assert_eq!(report.chart.len(), 9);

    // Forecast sits on the fitted line
    for point in &forecast.points {
        let expected = forecast.trend.intercept + forecast.trend.slope * point.index as f64;
        assert!((point.revenue - expected).abs() < 1e-9);
    }
}

#[test]
fn test_huge_unit_counts_render_without_overflow() {
    let csv = "OrderDate,Region,Product,UnitsSold,Revenue\n\
               2024-01-05,East,Laptop,10000000000000000000,100\n\
               2024-02-05,East,Laptop,10000000000000000000,200\n";
    let table = load_sales(csv.as_bytes(), &ColumnMapping::default()).unwrap();
    assert_eq!(table.len(), 2);

    let report = compute(&table, &FilterCriteria::new());
    assert_eq!(report.kpis.total_units, u64::MAX);
    assert_eq!(report.kpis.total_revenue, 300.0);
}

#[test]
fn test_forecast_indexes_present_months_consecutively() {
    // March is missing; the trend treats Jan, Feb, Apr as three steps
    let csv = "OrderDate,Region,Product,UnitsSold,Revenue\n\
               2024-01-10,East,Laptop,1,100\n\
               2024-02-10,East,Laptop,1,200\n\
               2024-04-10,East,Laptop,1,300\n";
    let table = load_sales(csv.as_bytes(), &ColumnMapping::default()).unwrap();
    let settings = ForecastConfig {
        horizon: 2,
        history_window: 12,
    };
    let report = compute_with(&table, &FilterCriteria::new(), &settings);

    let forecast = report.forecast.result().expect("three months is enough");
    assert!((forecast.trend.slope - 100.0).abs() < 1e-9);
    let months: Vec<String> = forecast.points.iter().map(|p| p.month.to_string()).collect();
    assert_eq!(months, vec!["2024-05", "2024-06"]);
    assert!((forecast.points[0].revenue - 400.0).abs() < 1e-9);
    assert!((forecast.points[1].revenue - 500.0).abs() < 1e-9);
}
