//! CSV loader for the sales dataset
//!
//! Columns are located by header name (see [`ColumnMapping`]). Validation is
//! strict: one bad row rejects the whole file, so a loaded table is always
//! complete.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};
use csv::{ReaderBuilder, StringRecord, Trim};
use tracing::{debug, info};

use crate::config::ColumnMapping;
use crate::error::{Error, Result};
use crate::models::{Product, Region, SalesRecord, SalesTable};

/// Where a row's revenue comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RevenueSource {
    Column(usize),
    /// units x price
    Price(usize),
}

/// Resolved header positions
#[derive(Debug)]
struct ColumnIndex {
    date: usize,
    region: usize,
    product: usize,
    units: usize,
    revenue: RevenueSource,
}

impl ColumnIndex {
    fn resolve(headers: &StringRecord, columns: &ColumnMapping) -> Result<Self> {
        let find = |name: &str| {
            headers
                .iter()
                .position(|h| h.trim().eq_ignore_ascii_case(name.trim()))
        };

        let mut missing = Vec::new();
        let mut require = |name: &str| {
            let idx = find(name);
            if idx.is_none() {
                missing.push(name.to_string());
            }
            idx
        };

        let date = require(&columns.date);
        let region = require(&columns.region);
        let product = require(&columns.product);
        let units = require(&columns.units);

        let revenue = match (find(&columns.revenue), find(&columns.price)) {
            (Some(idx), _) => Some(RevenueSource::Column(idx)),
            (None, Some(idx)) => Some(RevenueSource::Price(idx)),
            (None, None) => {
                missing.push(format!("{} (or {})", columns.revenue, columns.price));
                None
            }
        };

        match (date, region, product, units, revenue) {
            (Some(date), Some(region), Some(product), Some(units), Some(revenue)) => Ok(Self {
                date,
                region,
                product,
                units,
                revenue,
            }),
            _ => Err(Error::MissingColumns(missing)),
        }
    }
}

/// Load sales records from any CSV reader
pub fn load_sales<R: Read>(reader: R, columns: &ColumnMapping) -> Result<SalesTable> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .trim(Trim::All)
        .from_reader(reader);

    let headers = rdr.headers()?.clone();
    let index = ColumnIndex::resolve(&headers, columns)?;
    if let RevenueSource::Price(_) = index.revenue {
        debug!(
            "No '{}' column; computing revenue from '{}'",
            columns.revenue, columns.price
        );
    }

    let mut records = Vec::new();
    for result in rdr.records() {
        let row = result?;
        // Header is line 1
        let line = row.position().map(|p| p.line()).unwrap_or(records.len() as u64 + 2);
        let record = parse_row(&row, &index, columns)
            .map_err(|reason| Error::InvalidRecord { line, reason })?;
        records.push(record);
    }

    info!("Loaded {} sales records", records.len());
    Ok(SalesTable::new(records))
}

/// Load sales records from a CSV file path
pub fn load_sales_file(path: &Path, columns: &ColumnMapping) -> Result<SalesTable> {
    let file = File::open(path)
        .map_err(|e| Error::Load(format!("Failed to open '{}': {}", path.display(), e)))?;
    load_sales(file, columns)
}

fn parse_row(
    row: &StringRecord,
    index: &ColumnIndex,
    columns: &ColumnMapping,
) -> std::result::Result<SalesRecord, String> {
    let field = |idx: usize, name: &str| {
        row.get(idx)
            .ok_or_else(|| format!("missing value for '{}'", name))
    };

    let date = parse_date(field(index.date, &columns.date)?)?;

    let region = field(index.region, &columns.region)?;
    if region.is_empty() {
        return Err(format!("empty '{}'", columns.region));
    }
    let product = field(index.product, &columns.product)?;
    if product.is_empty() {
        return Err(format!("empty '{}'", columns.product));
    }

    let units = parse_units(field(index.units, &columns.units)?)?;

    let revenue = match index.revenue {
        RevenueSource::Column(idx) => {
            parse_non_negative(field(idx, &columns.revenue)?, &columns.revenue)?
        }
        RevenueSource::Price(idx) => {
            units as f64 * parse_non_negative(field(idx, &columns.price)?, &columns.price)?
        }
    };

    Ok(SalesRecord {
        date,
        region: Region::new(region),
        product: Product::new(product),
        units,
        revenue,
    })
}

/// Earlier years are a misread short year, not real order dates
const MIN_YEAR: i32 = 1000;

/// Parse a date string in various common formats
fn parse_date(s: &str) -> std::result::Result<NaiveDate, String> {
    let s = s.trim();

    // Two-digit years go first: chrono's %Y also accepts "24" as year 24
    let formats = [
        "%Y-%m-%d", // 2024-01-15
        "%m/%d/%y", // 01/15/24
        "%m/%d/%Y", // 01/15/2024
        "%m-%d-%Y", // 01-15-2024
        "%d/%m/%Y", // 15/01/2024 (European)
    ];

    for fmt in formats {
        match NaiveDate::parse_from_str(s, fmt) {
            Ok(date) if date.year() >= MIN_YEAR => return Ok(date),
            _ => {}
        }
    }

    if let Ok(ts) = DateTime::parse_from_rfc3339(s) {
        return Ok(ts.date_naive());
    }
    if let Ok(ts) = NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S") {
        return Ok(ts.date());
    }

    // Month-only values land on the first of the month
    if let Ok(date) = NaiveDate::parse_from_str(&format!("{}-01", s), "%Y-%m-%d") {
        return Ok(date);
    }

    Err(format!("unable to parse date '{}'", s))
}

/// Parse an amount string, handling currency symbols and commas
fn parse_amount(s: &str) -> Option<f64> {
    let cleaned: String = s
        .trim()
        .replace(['$', ',', ' '], "")
        .replace('(', "-")
        .replace(')', "");

    cleaned.parse::<f64>().ok().filter(|v| v.is_finite())
}

fn parse_non_negative(s: &str, name: &str) -> std::result::Result<f64, String> {
    let value = parse_amount(s).ok_or_else(|| format!("unable to parse {} '{}'", name, s))?;
    if value < 0.0 {
        return Err(format!("negative {} '{}'", name, s));
    }
    Ok(value)
}

/// Units must be a whole, non-negative count ("12" or "12.0")
fn parse_units(s: &str) -> std::result::Result<u64, String> {
    let digits = s.trim().replace([',', ' '], "");
    if let Ok(count) = digits.parse::<u64>() {
        return Ok(count);
    }

    let value = parse_amount(s).ok_or_else(|| format!("unable to parse units '{}'", s))?;
    if value < 0.0 {
        return Err(format!("negative units '{}'", s));
    }
    if value.fract() != 0.0 {
        return Err(format!("units must be a whole number, got '{}'", s));
    }
    if value >= u64::MAX as f64 {
        return Err(format!("units out of range '{}'", s));
    }
    Ok(value as u64)
}
