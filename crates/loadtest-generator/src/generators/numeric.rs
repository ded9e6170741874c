//! Numeric value generators.

use rand::Rng;

/// Largest number of calls a single burst may issue.
pub const MAX_BURST: u64 = 4;

/// Generate a burst size, uniform over `0..=MAX_BURST`.
pub fn generate_burst_count<R: Rng>(rng: &mut R) -> u64 {
    rng.gen_range(0..=MAX_BURST)
}

/// Generate a value uniform over `[0, step)`.
///
/// `step` must be at least 1; the generator rejects step 0 before calling this.
pub fn generate_below_step<R: Rng>(rng: &mut R, step: u64) -> u64 {
    rng.gen_range(0..step)
}
