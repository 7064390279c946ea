//! CLI argument definitions using clap
//!
//! This module contains all the clap structs and enums for parsing CLI arguments.
//! The actual command implementations are in the `commands` module.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use salesdash_core::{CriteriaSource, FilterCriteria};

/// SalesDash - Sales performance dashboard
#[derive(Parser)]
#[command(name = "salesdash")]
#[command(about = "Sales KPIs, breakdowns and a revenue trend forecast from a CSV file", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Sales dataset (CSV with date, region, product, units and revenue or price)
    #[arg(long, default_value = "sales_data.csv", global = true)]
    pub data: PathBuf,

    /// Config file
    ///
    /// Defaults to ~/.config/salesdash/dashboard.toml when it exists,
    /// otherwise the built-in defaults.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Defaults to `dashboard` when omitted
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Region/product selection (empty means all)
#[derive(Args, Debug, Clone, Default)]
pub struct SelectionArgs {
    /// Only include this region (repeatable)
    #[arg(short = 'r', long = "region", value_name = "REGION")]
    pub regions: Vec<String>,

    /// Only include this product (repeatable)
    #[arg(short = 'p', long = "product", value_name = "PRODUCT")]
    pub products: Vec<String>,
}

impl CriteriaSource for SelectionArgs {
    fn current_criteria(&self) -> FilterCriteria {
        FilterCriteria::new()
            .regions(self.regions.iter().map(String::as_str))
            .products(self.products.iter().map(String::as_str))
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show KPIs, monthly trend, region/product breakdowns, forecast and insight
    Dashboard {
        #[command(flatten)]
        selection: SelectionArgs,

        /// Months to forecast (overrides config)
        #[arg(long)]
        horizon: Option<u32>,

        /// Print the full report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the monthly revenue series and its trend forecast
    Forecast {
        #[command(flatten)]
        selection: SelectionArgs,

        /// Months to forecast (overrides config)
        #[arg(long)]
        horizon: Option<u32>,

        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the regions and products available for filtering
    Options {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
}
