//! Command-line interface for store-loadgen
//!
//! # Usage Examples
//!
//! ## Orders traffic
//! ```bash
//! # Randomized traffic against the orders API on localhost:8080
//! store-loadgen loadtest populate orders
//!
//! # Reproducible run over the first 500 steps
//! store-loadgen loadtest populate orders \
//!   --target-url http://localhost:8080 \
//!   --upper-bound 500 \
//!   --seed 42
//! ```
//!
//! ## Product seed data
//! ```bash
//! # Copy the sample catalogue into the store products API
//! store-loadgen loadtest populate products \
//!   --source-url "https://dummyjson.com/products?limit=200" \
//!   --target-url http://localhost:8081/products
//! ```
//!
//! Status lines (`<path> - <status>`) go to stdout; logs go to stderr and are
//! filtered with `RUST_LOG`.

use clap::{Parser, Subcommand};
use loadtest_populate_orders::OrdersPopulateArgs;
use loadtest_populate_products::ProductsPopulateArgs;

mod loadtest;

#[derive(Parser)]
#[command(name = "store-loadgen")]
#[command(about = "Synthetic traffic and seed data for the store API")]
#[command(long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Load testing utilities for driving traffic and seeding data
    Loadtest {
        #[command(subcommand)]
        command: LoadtestCommand,
    },
}

/// Load testing subcommands
#[derive(Subcommand)]
enum LoadtestCommand {
    /// Send generated requests or seed data to a store API
    Populate {
        #[command(subcommand)]
        target: PopulateTarget,
    },
}

/// Store API to populate
#[derive(Subcommand)]
pub(crate) enum PopulateTarget {
    /// Drive randomized traffic against the orders API
    #[command(name = "orders")]
    Orders {
        #[command(flatten)]
        args: OrdersPopulateArgs,
    },
    /// Copy the sample product catalogue into the products API
    #[command(name = "products")]
    Products {
        #[command(flatten)]
        args: ProductsPopulateArgs,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if let Err(e) = run().await {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
    Ok(())
}

async fn run() -> anyhow::Result<()> {
    // Initialize tracing; stdout is reserved for status lines
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Loadtest { command } => match command {
            LoadtestCommand::Populate { target } => {
                loadtest::populate::run_populate(target).await?;
            }
        },
    }

    Ok(())
}
