//! store-loadgen library
//!
//! Synthetic traffic and seed data for the store API.
//!
//! # Crates
//!
//! - `loadtest_generator` - randomized orders request shaping, seeded or not
//! - `loadtest_http` - the `Transport` seam and its `reqwest` implementation
//! - `loadtest_populate_orders` - sequential, fail-fast orders traffic driver
//! - `loadtest_populate_products` - sample catalogue to products API copier
//!
//! # CLI Usage
//!
//! ```bash
//! store-loadgen loadtest populate orders --seed 42 --upper-bound 1000
//! store-loadgen loadtest populate products
//! ```

// Re-export the populator crates for convenience
pub use loadtest_generator as generator;
pub use loadtest_http as http;
pub use loadtest_populate_orders as orders;
pub use loadtest_populate_products as products;
