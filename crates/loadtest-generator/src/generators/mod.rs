//! Individual value generators for the randomized parts of a request.
//!
//! This module provides the generation logic for burst sizes, order ids and
//! order payloads. Every generator draws from a caller-supplied RNG.

pub mod numeric;
pub mod payload;
