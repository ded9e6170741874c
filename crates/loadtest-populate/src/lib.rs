//! Common types and utilities for store-loadgen populators.
//!
//! This crate provides shared argument types used by the orders load driver
//! and the products seeder.

pub mod args;

pub use args::CommonPopulateArgs;
