//! Test utilities for salesdash-core
//!
//! Sample datasets and record builders shared by unit tests and the CLI
//! tests (via the `test-utils` feature).

use chrono::NaiveDate;

use crate::config::ColumnMapping;
use crate::loader::load_sales;
use crate::models::{Product, Region, SalesRecord, SalesTable};

/// Six months of sales across three regions and three products, in the
/// original dashboard's column layout (revenue derived from SalePrice)
pub fn sample_csv() -> &'static str {
    include_str!("../tests/data/sales_sample.csv")
}

/// Five-column layout with an explicit Revenue column
pub fn sample_revenue_csv() -> &'static str {
    include_str!("../tests/data/sales_revenue.csv")
}

/// `sample_csv()` loaded with the default columns
pub fn sample_table() -> SalesTable {
    load_sales(sample_csv().as_bytes(), &ColumnMapping::default())
        .expect("sample dataset is valid")
}

/// Build a record from a `YYYY-MM-DD` date
pub fn record(date: &str, region: &str, product: &str, units: u64, revenue: f64) -> SalesRecord {
    SalesRecord {
        date: NaiveDate::parse_from_str(date, "%Y-%m-%d").expect("valid test date"),
        region: Region::from(region),
        product: Product::from(product),
        units,
        revenue,
    }
}
