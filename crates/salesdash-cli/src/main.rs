//! SalesDash CLI - Sales performance dashboard
//!
//! Usage:
//!   salesdash --data sales.csv                      Full dashboard
//!   salesdash dashboard -r East -p Laptop           Filtered dashboard
//!   salesdash forecast --horizon 3                  Monthly trend forecast
//!   salesdash options                               Available regions/products

mod cli;
mod commands;


use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::*;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    // Priority: RUST_LOG env var > --verbose flag > default (info)
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .compact()
                .with_writer(std::io::stderr),
        )
        .init();

    let command = cli.command.unwrap_or(Commands::Dashboard {
        selection: SelectionArgs::default(),
        horizon: None,
        json: false,
    });

    match command {
        Commands::Dashboard {
            selection,
            horizon,
            json,
        } => {
            let config = commands::load_config(cli.config.as_deref(), horizon)?;
            let dashboard = commands::open_dashboard(&cli.data, config)?;
            commands::cmd_dashboard(&dashboard, &selection, json)
        }
        Commands::Forecast {
            selection,
            horizon,
            json,
        } => {
            let config = commands::load_config(cli.config.as_deref(), horizon)?;
            let dashboard = commands::open_dashboard(&cli.data, config)?;
            commands::cmd_forecast(&dashboard, &selection, json)
        }
        Commands::Options { json } => {
            let config = commands::load_config(cli.config.as_deref(), None)?;
            let dashboard = commands::open_dashboard(&cli.data, config)?;
            commands::cmd_options(&dashboard, json)
        }
    }
}
