//! CLI argument definitions for the products populator.

use clap::Args;
use loadtest_populate::CommonPopulateArgs;

pub const DEFAULT_SOURCE_URL: &str = "https://dummyjson.com/products?limit=200";
pub const DEFAULT_TARGET_URL: &str = "http://localhost:8081/products";

/// Products-specific populate arguments.
#[derive(Args, Clone, Debug)]
pub struct ProductsPopulateArgs {
    /// Catalogue to copy products from
    #[arg(long, default_value = DEFAULT_SOURCE_URL, env = "LOADGEN_PRODUCTS_SOURCE_URL")]
    pub source_url: String,

    /// Products endpoint to post each product to
    #[arg(long, default_value = DEFAULT_TARGET_URL, env = "LOADGEN_PRODUCTS_URL")]
    pub target_url: String,

    #[command(flatten)]
    pub common: CommonPopulateArgs,
}
