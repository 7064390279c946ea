//! Domain models for SalesDash

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// A sales region (categorical key)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Region(String);

impl Region {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Region {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl std::fmt::Display for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A product name (categorical key)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Product(String);

impl Product {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Product {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl std::fmt::Display for Product {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A calendar month, serialized as `YYYY-MM`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct YearMonth {
    year: i32,
    month: u32,
}

impl YearMonth {
    /// Build from a year and a 1-based month; None if the month is out of range
    pub fn new(year: i32, month: u32) -> Option<Self> {
        (1..=12).contains(&month).then_some(Self { year, month })
    }

    /// Truncate a date to its calendar month
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    /// Months elapsed since year 0, used as a linear time axis
    fn ordinal(&self) -> i64 {
        self.year as i64 * 12 + (self.month as i64 - 1)
    }

    fn from_ordinal(ordinal: i64) -> Self {
        Self {
            year: ordinal.div_euclid(12) as i32,
            month: ordinal.rem_euclid(12) as u32 + 1,
        }
    }

    /// Shift by a number of calendar months (negative moves backwards)
    pub fn add_months(&self, months: i64) -> Self {
        Self::from_ordinal(self.ordinal() + months)
    }
}

impl std::fmt::Display for YearMonth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl std::str::FromStr for YearMonth {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let (year, month) = s
            .trim()
            .split_once('-')
            .ok_or_else(|| format!("Invalid month: {} (expected YYYY-MM)", s))?;
        let year: i32 = year
            .parse()
            .map_err(|_| format!("Invalid year in month: {}", s))?;
        let month: u32 = month
            .parse()
            .map_err(|_| format!("Invalid month: {}", s))?;
        Self::new(year, month).ok_or_else(|| format!("Month out of range: {}", s))
    }
}

impl From<YearMonth> for String {
    fn from(month: YearMonth) -> Self {
        month.to_string()
    }
}

impl TryFrom<String> for YearMonth {
    type Error = String;

    fn try_from(s: String) -> std::result::Result<Self, Self::Error> {
        s.parse()
    }
}

/// One row of the sales dataset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesRecord {
    pub date: NaiveDate,
    pub region: Region,
    pub product: Product,
    pub units: u64,
    pub revenue: f64,
}

impl SalesRecord {
    pub fn month(&self) -> YearMonth {
        YearMonth::from_date(self.date)
    }
}

/// The loaded dataset, in file order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SalesTable {
    records: Vec<SalesRecord>,
}

impl SalesTable {
    pub fn new(records: Vec<SalesRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[SalesRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SalesRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Distinct regions in first-seen order (selector options)
    pub fn regions(&self) -> Vec<Region> {
        let mut seen = Vec::new();
        for record in &self.records {
            if !seen.contains(&record.region) {
                seen.push(record.region.clone());
            }
        }
        seen
    }

    /// Distinct products in first-seen order (selector options)
    pub fn products(&self) -> Vec<Product> {
        let mut seen = Vec::new();
        for record in &self.records {
            if !seen.contains(&record.product) {
                seen.push(record.product.clone());
            }
        }
        seen
    }

    /// Earliest and latest order dates, if any
    pub fn date_range(&self) -> Option<(NaiveDate, NaiveDate)> {
        let first = self.records.iter().map(|r| r.date).min()?;
        let last = self.records.iter().map(|r| r.date).max()?;
        Some((first, last))
    }
}

impl From<Vec<SalesRecord>> for SalesTable {
    fn from(records: Vec<SalesRecord>) -> Self {
        Self::new(records)
    }
}

impl<'a> IntoIterator for &'a SalesTable {
    type Item = &'a SalesRecord;
    type IntoIter = std::slice::Iter<'a, SalesRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

// ========== Report Models ==========

/// Headline metrics for the filtered view
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KpiSummary {
    pub total_revenue: f64,
    pub total_units: u64,
    /// total_revenue / total_units, or 0 when no units were sold
    pub average_sale_price: f64,
    pub record_count: usize,
}

impl KpiSummary {
    pub fn is_empty(&self) -> bool {
        self.record_count == 0
    }
}

/// Revenue and units summed for one group key
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupSummary<K> {
    pub key: K,
    pub revenue: f64,
    pub units: u64,
    pub record_count: usize,
    /// Percentage of total revenue (0-100)
    pub revenue_share: f64,
    /// Percentage of total units (0-100)
    pub units_share: f64,
}

/// The three grouped views behind the charts
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GroupedSummaries {
    /// Chronological
    pub by_month: Vec<GroupSummary<YearMonth>>,
    /// Descending revenue
    pub by_region: Vec<GroupSummary<Region>>,
    /// Descending revenue
    pub by_product: Vec<GroupSummary<Product>>,
}

/// A single month of actual revenue
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MonthlyPoint {
    pub month: YearMonth,
    pub revenue: f64,
}

/// Chronological monthly revenue totals, one entry per month present
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MonthlySeries {
    points: Vec<MonthlyPoint>,
}

impl MonthlySeries {
    /// Build a series, sorting by month and merging duplicate months
    pub fn new(mut points: Vec<MonthlyPoint>) -> Self {
        points.sort_by_key(|p| p.month);
        let mut merged: Vec<MonthlyPoint> = Vec::with_capacity(points.len());
        for point in points {
            match merged.last_mut() {
                Some(last) if last.month == point.month => last.revenue += point.revenue,
                _ => merged.push(point),
            }
        }
        Self { points: merged }
    }

    pub fn points(&self) -> &[MonthlyPoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn first(&self) -> Option<&MonthlyPoint> {
        self.points.first()
    }

    pub fn last(&self) -> Option<&MonthlyPoint> {
        self.points.last()
    }

    /// The most recent `n` months
    pub fn tail(&self, n: usize) -> &[MonthlyPoint] {
        let start = self.points.len().saturating_sub(n);
        &self.points[start..]
    }
}

impl From<&[GroupSummary<YearMonth>]> for MonthlySeries {
    fn from(groups: &[GroupSummary<YearMonth>]) -> Self {
        Self::new(
            groups
                .iter()
                .map(|g| MonthlyPoint {
                    month: g.key,
                    revenue: g.revenue,
                })
                .collect(),
        )
    }
}
