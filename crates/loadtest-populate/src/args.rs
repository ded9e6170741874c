//! Common CLI argument definitions shared by all populators.

use clap::Args;
use loadtest_http::{ReqwestTransport, TransportError};
use std::time::Duration;

/// Common arguments shared by all populators.
#[derive(Args, Clone, Debug, Default)]
pub struct CommonPopulateArgs {
    /// Per-request timeout in seconds (default: no timeout)
    #[arg(long, env = "LOADGEN_TIMEOUT_SECS")]
    pub timeout_secs: Option<u64>,

    /// Dry-run mode: validate configuration and log the plan without sending requests
    #[arg(long, env = "LOADGEN_DRY_RUN")]
    pub dry_run: bool,
}

impl CommonPopulateArgs {
    /// Build the HTTP transport these arguments describe.
    pub fn transport(&self) -> Result<ReqwestTransport, TransportError> {
        match self.timeout_secs {
            Some(secs) => ReqwestTransport::with_timeout(Duration::from_secs(secs)),
            None => ReqwestTransport::new(),
        }
    }
}
