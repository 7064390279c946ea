//! Key business insight: the top region and its revenue share

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::format::format_currency;
use crate::models::{GroupSummary, Region};

/// Shown when there is nothing to rank
pub const NO_DATA_MESSAGE: &str = "No data available for the selected filters.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InsightKind {
    /// Names the region with the largest revenue share
    TopRegion,
    /// Neutral message for an empty selection
    NoData,
}

impl InsightKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            InsightKind::TopRegion => "top_region",
            InsightKind::NoData => "no_data",
        }
    }
}

impl fmt::Display for InsightKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for InsightKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "top_region" => Ok(InsightKind::TopRegion),
            "no_data" => Ok(InsightKind::NoData),
            _ => Err(format!("Unknown insight kind: {}", s)),
        }
    }
}

/// A single rendered insight sentence plus the numbers behind it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Insight {
    pub kind: InsightKind,
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<Region>,
    /// Percentage of total revenue (0-100)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub share: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub revenue: Option<f64>,
}

impl Insight {
    pub fn no_data() -> Self {
        Self {
            kind: InsightKind::NoData,
            text: NO_DATA_MESSAGE.to_string(),
            region: None,
            share: None,
            revenue: None,
        }
    }
}

impl fmt::Display for Insight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Build the top-region insight from the by-region summary
///
/// Falls back to the neutral message when there are no regions or no revenue.
pub fn top_region(by_region: &[GroupSummary<Region>]) -> Insight {
    let total: f64 = by_region.iter().map(|g| g.revenue).sum();

    // First of any tie wins
    let top = by_region
        .iter()
        .reduce(|best, g| if g.revenue > best.revenue { g } else { best });

    match top {
        Some(top) if total > 0.0 => {
            let share = top.revenue / total * 100.0;
            Insight {
                kind: InsightKind::TopRegion,
                text: format!(
                    "The {} region is the top-performing market, contributing {:.1}% of total revenue ({}).",
                    top.key,
                    share,
                    format_currency(top.revenue)
                ),
                region: Some(top.key.clone()),
                share: Some(share),
                revenue: Some(top.revenue),
            }
        }
        _ => Insight::no_data(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn group(region: &str, revenue: f64) -> GroupSummary<Region> {
        GroupSummary {
            key: Region::from(region),
            revenue,
            units: 1,
            record_count: 1,
            revenue_share: 0.0,
            units_share: 0.0,
        }
    }

    #[test]
    fn test_east_at_sixty_percent() {
        let insight = top_region(&[group("East", 6000.0), group("West", 4000.0)]);

        assert_eq!(insight.kind, InsightKind::TopRegion);
        assert_eq!(insight.region, Some(Region::from("East")));
        assert!((insight.share.unwrap() - 60.0).abs() < 1e-9);
        assert!(insight.text.contains("East"));
        assert!(insight.text.contains("60.0%"));
        assert!(insight.text.contains("$6,000.00"));
    }

    #[test]
    fn test_top_region_found_regardless_of_order() {
        let insight = top_region(&[group("West", 100.0), group("South", 300.0)]);
        assert_eq!(insight.region, Some(Region::from("South")));
        assert!(insight.text.contains("75.0%"));
    }

    #[test]
    fn test_tie_keeps_first() {
        let insight = top_region(&[group("North", 50.0), group("South", 50.0)]);
        assert_eq!(insight.region, Some(Region::from("North")));
    }

    #[test]
    fn test_no_regions_is_neutral() {
        let insight = top_region(&[]);
        assert_eq!(insight, Insight::no_data());
        assert_eq!(insight.to_string(), NO_DATA_MESSAGE);
    }

    #[test]
    fn test_zero_revenue_is_neutral() {
        let insight = top_region(&[group("East", 0.0)]);
        assert_eq!(insight.kind, InsightKind::NoData);
    }

    #[test]
    fn test_kind_round_trips_through_str() {
        for kind in [InsightKind::TopRegion, InsightKind::NoData] {
            assert_eq!(kind.as_str().parse::<InsightKind>().unwrap(), kind);
        }
        assert!("other".parse::<InsightKind>().is_err());
    }
}
