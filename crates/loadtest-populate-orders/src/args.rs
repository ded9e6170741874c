//! CLI argument definitions for the orders populator.

use clap::Args;
use loadtest_populate::CommonPopulateArgs;

/// Correlation id sent on every call unless overridden.
pub const DEFAULT_TRACE_ID: &str = "ead37b0f-e401-4536-a770-527394c5379d";

/// Exclusive upper bound of the outer step counter.
pub const DEFAULT_UPPER_BOUND: u64 = 100_000;

/// Orders-specific populate arguments.
#[derive(Args, Clone, Debug)]
pub struct OrdersPopulateArgs {
    /// Base URL of the orders API
    #[arg(long, default_value = "http://localhost:8080", env = "LOADGEN_ORDERS_URL")]
    pub target_url: String,

    /// Value of the x-trace-id header attached to every call
    #[arg(long, default_value = DEFAULT_TRACE_ID, env = "LOADGEN_TRACE_ID")]
    pub trace_id: String,

    /// Outer steps run from 1 up to this bound (exclusive)
    #[arg(long, default_value_t = DEFAULT_UPPER_BOUND, env = "LOADGEN_UPPER_BOUND")]
    pub upper_bound: u64,

    /// Random seed for a reproducible call sequence (omit for a fresh sequence each run)
    #[arg(long, env = "LOADGEN_SEED")]
    pub seed: Option<u64>,

    #[command(flatten)]
    pub common: CommonPopulateArgs,
}
