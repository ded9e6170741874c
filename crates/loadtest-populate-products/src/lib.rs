//! Seeds the store products API from a public sample catalogue.
//!
//! Fetches the catalogue once, then posts every product to the local products
//! endpoint in catalogue order, printing one `<id> - <status>` line per product.

pub mod args;
pub mod error;
pub mod populator;
pub mod product;

pub use args::{ProductsPopulateArgs, DEFAULT_SOURCE_URL, DEFAULT_TARGET_URL};
pub use error::ProductsPopulatorError;
pub use populator::ProductsPopulator;
pub use product::{Catalogue, ProductPayload, SourceProduct};
