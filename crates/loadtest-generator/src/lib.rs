//! Request generator for the store-loadgen orders load driver.
//!
//! This crate provides the `OrderTrafficGenerator` which shapes the stream of
//! HTTP calls issued against the orders API. The generator takes an injected
//! RNG so that a fixed seed reproduces the exact same call sequence.
//!
//! # Architecture
//!
//! ```text
//!   outer step i (1..upper_bound)
//!        │
//!        ▼
//! ┌────────────────────────┐
//! │ OrderTrafficGenerator  │
//! │                        │
//! │  - rng (R: Rng)        │
//! └───────────┬────────────┘
//!             │  five bursts of 0..=4 calls each
//!             ▼
//!    RequestDescriptor { method, path, payload }
//! ```
//!
//! # Example
//!
//! ```rust
//! use loadtest_generator::OrderTrafficGenerator;
//!
//! let mut generator = OrderTrafficGenerator::from_seed(42);
//! let requests = generator.step_requests(1).unwrap();
//! for request in &requests {
//!     println!("{} {}", request.method, request.path);
//! }
//! ```
//!
//! # Bursts
//!
//! Each outer step issues, in order:
//!
//! - `POST /orders` with a two-item payload
//! - `GET /orders`
//! - `GET /orders/{n}`
//! - `DELETE /orders/{n}/cancel`
//! - `PUT /orders/{n}/complete`
//!
//! Every burst size is drawn from `0..=4`; every `n` and every item quantity
//! is drawn from `[0, i)`.

pub mod generator;
pub mod generators;
pub mod request;

// Re-exports for convenience
pub use generator::{GeneratorError, OrderTrafficGenerator, StepIterator};
pub use generators::payload::{OrderItem, OrderPayload, ProductRef};
pub use request::{BurstKind, Method, RequestDescriptor};
