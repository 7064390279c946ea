//! Region/product filtering of the loaded table
//!
//! Criteria are rebuilt on every interaction; applying them never fails and
//! never reorders records.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::{Product, Region, SalesRecord, SalesTable};

/// Either every value, or an explicit set of values
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Selection<T: Ord> {
    All,
    Only(BTreeSet<T>),
}

impl<T: Ord> Default for Selection<T> {
    fn default() -> Self {
        Self::All
    }
}

impl<T: Ord> Selection<T> {
    /// An empty set selects everything
    pub fn matches(&self, value: &T) -> bool {
        match self {
            Self::All => true,
            Self::Only(set) => set.is_empty() || set.contains(value),
        }
    }

    pub fn is_all(&self) -> bool {
        match self {
            Self::All => true,
            Self::Only(set) => set.is_empty(),
        }
    }
}

impl<T: Ord> FromIterator<T> for Selection<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::Only(iter.into_iter().collect())
    }
}

/// The user's current region and product selection
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCriteria {
    pub regions: Selection<Region>,
    pub products: Selection<Product>,
}

impl FilterCriteria {
    /// All regions, all products
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict to the given regions (empty means all)
    pub fn regions<I, S>(mut self, regions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Region>,
    {
        self.regions = regions.into_iter().map(Into::into).collect();
        self
    }

    /// Restrict to the given products (empty means all)
    pub fn products<I, S>(mut self, products: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Product>,
    {
        self.products = products.into_iter().map(Into::into).collect();
        self
    }

    pub fn matches(&self, record: &SalesRecord) -> bool {
        self.regions.matches(&record.region) && self.products.matches(&record.product)
    }

    pub fn is_unfiltered(&self) -> bool {
        self.regions.is_all() && self.products.is_all()
    }
}

/// Keep the records matching `criteria`, in their original order
pub fn apply(table: &SalesTable, criteria: &FilterCriteria) -> SalesTable {
    if criteria.is_unfiltered() {
        return table.clone();
    }

    let records: Vec<SalesRecord> = table
        .iter()
        .filter(|record| criteria.matches(record))
        .cloned()
        .collect();

    debug!("Filter kept {} of {} records", records.len(), table.len());
    SalesTable::new(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{record, sample_table};

    #[test]
    fn test_all_criteria_returns_input() {
        let table = sample_table();
        assert_eq!(apply(&table, &FilterCriteria::new()), table);
    }

    #[test]
    fn test_empty_sets_mean_all() {
        let table = sample_table();
        let criteria = FilterCriteria::new()
            .regions(Vec::<Region>::new())
            .products(Vec::<Product>::new());
        assert!(criteria.is_unfiltered());
        assert_eq!(apply(&table, &criteria), table);
    }

    #[test]
    fn test_region_filter_preserves_order() {
        let table = SalesTable::new(vec![
            record("2024-01-01", "East", "Laptop", 1, 10.0),
            record("2024-01-02", "West", "Laptop", 1, 20.0),
            record("2024-01-03", "East", "Mouse", 1, 30.0),
        ]);

        let filtered = apply(&table, &FilterCriteria::new().regions(["East"]));

        let revenues: Vec<f64> = filtered.iter().map(|r| r.revenue).collect();
        assert_eq!(revenues, vec![10.0, 30.0]);
    }

    #[test]
    fn test_region_and_product_combine() {
        let table = SalesTable::new(vec![
            record("2024-01-01", "East", "Laptop", 1, 10.0),
            record("2024-01-02", "West", "Laptop", 1, 20.0),
            record("2024-01-03", "East", "Mouse", 1, 30.0),
        ]);

        let criteria = FilterCriteria::new()
            .regions(["East", "West"])
            .products(["Mouse"]);
        let filtered = apply(&table, &criteria);

        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered.records()[0].revenue, 30.0);
    }

    #[test]
    fn test_unknown_value_selects_nothing() {
        let filtered = apply(&sample_table(), &FilterCriteria::new().regions(["Atlantis"]));
        assert!(filtered.is_empty());
    }
}
