//! KPI and grouped summaries over a (filtered) table
//!
//! Nothing here fails: an empty table yields zero KPIs and empty groups.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::models::{
    GroupSummary, GroupedSummaries, KpiSummary, MonthlySeries, SalesRecord, SalesTable,
};

/// Everything the aggregator derives from one table
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Aggregation {
    pub kpis: KpiSummary,
    pub groups: GroupedSummaries,
}

impl Aggregation {
    /// The monthly revenue series fed to the forecaster
    pub fn monthly_series(&self) -> MonthlySeries {
        MonthlySeries::from(self.groups.by_month.as_slice())
    }
}

/// Compute KPIs and all three grouped summaries
pub fn summarize(table: &SalesTable) -> Aggregation {
    let kpis = kpis(table);
    let groups = GroupedSummaries {
        by_month: group_by(table, &kpis, |r| r.month()),
        by_region: by_descending_revenue(group_by(table, &kpis, |r| r.region.clone())),
        by_product: by_descending_revenue(group_by(table, &kpis, |r| r.product.clone())),
    };
    Aggregation { kpis, groups }
}

pub fn kpis(table: &SalesTable) -> KpiSummary {
    let total_revenue: f64 = table.iter().map(|r| r.revenue).sum();
    // Saturates instead of overflowing on absurd unit counts
    let total_units = table
        .iter()
        .fold(0u64, |total, r| total.saturating_add(r.units));

    KpiSummary {
        total_revenue,
        total_units,
        average_sale_price: average_price(total_revenue, total_units),
        record_count: table.len(),
    }
}

/// Revenue per unit, defined as 0 when nothing was sold
pub fn average_price(revenue: f64, units: u64) -> f64 {
    if units == 0 {
        0.0
    } else {
        revenue / units as f64
    }
}

/// `part` as a percentage of `total`, 0 when the total is 0
pub fn share(part: f64, total: f64) -> f64 {
    if total > 0.0 {
        (part / total) * 100.0
    } else {
        0.0
    }
}

#[derive(Default)]
struct Totals {
    revenue: f64,
    units: u64,
    count: usize,
}

/// Sum revenue/units per key; output ordered by key ascending
fn group_by<K, F>(table: &SalesTable, kpis: &KpiSummary, key: F) -> Vec<GroupSummary<K>>
where
    K: Ord,
    F: Fn(&SalesRecord) -> K,
{
    let mut groups: BTreeMap<K, Totals> = BTreeMap::new();
    for record in table {
        let totals = groups.entry(key(record)).or_default();
        totals.revenue += record.revenue;
        totals.units = totals.units.saturating_add(record.units);
        totals.count += 1;
    }

    groups
        .into_iter()
        .map(|(key, totals)| GroupSummary {
            key,
            revenue: totals.revenue,
            units: totals.units,
            record_count: totals.count,
            revenue_share: share(totals.revenue, kpis.total_revenue),
            units_share: share(totals.units as f64, kpis.total_units as f64),
        })
        .collect()
}

/// Stable sort, so equal revenues keep key order
fn by_descending_revenue<K>(mut groups: Vec<GroupSummary<K>>) -> Vec<GroupSummary<K>> {
    groups.sort_by(|a, b| b.revenue.total_cmp(&a.revenue));
    groups
}
