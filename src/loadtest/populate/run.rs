//! Populate command runner.

use anyhow::Context;
use loadtest_generator::OrderTrafficGenerator;
use loadtest_http::mask_url_credentials;
use loadtest_populate_orders::{OrdersPopulateArgs, OrdersPopulator};
use loadtest_populate_products::{ProductsPopulateArgs, ProductsPopulator};

use crate::PopulateTarget;

/// Run populate command against the selected store API
pub async fn run_populate(target: PopulateTarget) -> anyhow::Result<()> {
    match target {
        PopulateTarget::Orders { args } => run_orders(args).await,
        PopulateTarget::Products { args } => run_products(args).await,
    }
}

async fn run_orders(args: OrdersPopulateArgs) -> anyhow::Result<()> {
    let target = mask_url_credentials(&args.target_url);
    let steps = 1..args.upper_bound;

    if args.common.dry_run {
        tracing::info!(
            "[DRY-RUN] Would drive orders traffic against {} for steps {}..{} (seed={:?})",
            target,
            steps.start,
            steps.end,
            args.seed
        );
        tracing::info!("[DRY-RUN] x-trace-id: {}", args.trace_id);
        return Ok(());
    }

    let transport = args
        .common
        .transport()
        .context("Failed to build HTTP client")?;

    // Without a seed every run draws a fresh call sequence.
    let generator = match args.seed {
        Some(seed) => {
            tracing::info!("Using seed {seed}");
            OrderTrafficGenerator::from_seed(seed)
        }
        None => OrderTrafficGenerator::from_entropy(),
    };

    let mut populator =
        OrdersPopulator::new(transport, generator, args.target_url, args.trace_id);
    let mut out = std::io::stdout();

    populator
        .run(steps, &mut out)
        .await
        .with_context(|| format!("Orders traffic against {target} aborted"))?;

    Ok(())
}

async fn run_products(args: ProductsPopulateArgs) -> anyhow::Result<()> {
    let source = mask_url_credentials(&args.source_url);
    let target = mask_url_credentials(&args.target_url);

    if args.common.dry_run {
        tracing::info!("[DRY-RUN] Would copy products from {source} to {target}");
        return Ok(());
    }

    let transport = args
        .common
        .transport()
        .context("Failed to build HTTP client")?;
    let populator = ProductsPopulator::new(transport);
    let mut out = std::io::stdout();

    let count = populator
        .run(&args.source_url, &args.target_url, &mut out)
        .await
        .with_context(|| format!("Copying products to {target} aborted"))?;

    tracing::info!("Posted {count} products to {target}");
    Ok(())
}
