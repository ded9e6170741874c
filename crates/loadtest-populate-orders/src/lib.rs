//! Randomized traffic driver for the store orders API.
//!
//! For every outer step `i` in `1..upper_bound` the driver issues five bursts
//! of 0 to 4 calls each (create, list, get, cancel, complete) and prints one
//! `<path> - <status>` line per call. Calls are strictly sequential and the
//! first transport failure ends the run.
//!
//! # Example
//!
//! ```ignore
//! use loadtest_generator::OrderTrafficGenerator;
//! use loadtest_http::ReqwestTransport;
//! use loadtest_populate_orders::OrdersPopulator;
//!
//! let mut populator = OrdersPopulator::new(
//!     ReqwestTransport::new()?,
//!     OrderTrafficGenerator::from_seed(42),
//!     "http://localhost:8080",
//!     "ead37b0f-e401-4536-a770-527394c5379d",
//! );
//! populator.run(1..100_000, &mut std::io::stdout()).await?;
//! ```

pub mod args;
pub mod error;
pub mod populator;

pub use args::{OrdersPopulateArgs, DEFAULT_TRACE_ID, DEFAULT_UPPER_BOUND};
pub use error::OrdersPopulatorError;
pub use populator::OrdersPopulator;
