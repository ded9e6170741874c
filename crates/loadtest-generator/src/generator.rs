//! Main traffic generator for producing order API requests.

use crate::generators::numeric::{generate_below_step, generate_burst_count};
use crate::generators::payload::{generate_order_payload, OrderPayload};
use crate::request::{BurstKind, RequestDescriptor};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::ops::Range;

/// Error type for generator operations.
#[derive(Debug, thiserror::Error)]
pub enum GeneratorError {
    /// Step 0 would make every `[0, step)` range empty
    #[error("Invalid outer step {0}: steps start at 1")]
    InvalidStep(u64),
}

/// Traffic generator that shapes the calls issued against the orders API.
///
/// The RNG is injected so callers decide between a fixed seed (reproducible
/// call sequence) and an entropy-seeded one (every run differs).
pub struct OrderTrafficGenerator<R = StdRng> {
    rng: R,
}

impl OrderTrafficGenerator<StdRng> {
    /// Create a generator whose call sequence is fully determined by `seed`.
    pub fn from_seed(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// Create an unseeded generator; no two runs are expected to match.
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }
}

impl<R: Rng> OrderTrafficGenerator<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Draw the size of the next burst, in `0..=4`.
    pub fn burst_count(&mut self) -> u64 {
        generate_burst_count(&mut self.rng)
    }

    /// Draw an order id in `[0, step)`.
    pub fn random_order_id(&mut self, step: u64) -> Result<u64, GeneratorError> {
        check_step(step)?;
        Ok(generate_below_step(&mut self.rng, step))
    }

    /// Build a two-item order payload with quantities in `[0, step)`.
    pub fn order_payload(&mut self, step: u64) -> Result<OrderPayload, GeneratorError> {
        check_step(step)?;
        Ok(generate_order_payload(&mut self.rng, step))
    }

    /// Build one request of the given kind for outer step `step`.
    pub fn request_for(
        &mut self,
        kind: BurstKind,
        step: u64,
    ) -> Result<RequestDescriptor, GeneratorError> {
        check_step(step)?;
        Ok(self.request_unchecked(kind, step))
    }

    /// Build one burst: a random count (`0..=4`) of requests of the given kind.
    pub fn burst(
        &mut self,
        kind: BurstKind,
        step: u64,
    ) -> Result<Vec<RequestDescriptor>, GeneratorError> {
        check_step(step)?;
        Ok(self.burst_unchecked(kind, step))
    }

    /// Build every request for one outer step: the five bursts, in issue order.
    pub fn step_requests(&mut self, step: u64) -> Result<Vec<RequestDescriptor>, GeneratorError> {
        check_step(step)?;
        Ok(self.step_unchecked(step))
    }

    /// Lazily generate the requests of every step in `range`.
    ///
    /// An empty range yields nothing; a non-empty range must start at 1 or above.
    pub fn steps(&mut self, range: Range<u64>) -> Result<StepIterator<'_, R>, GeneratorError> {
        if !range.is_empty() {
            check_step(range.start)?;
        }

        Ok(StepIterator {
            generator: self,
            range,
        })
    }

    fn request_unchecked(&mut self, kind: BurstKind, step: u64) -> RequestDescriptor {
        match kind {
            BurstKind::CreateOrder => {
                RequestDescriptor::create_order(generate_order_payload(&mut self.rng, step))
            }
            BurstKind::ListOrders => RequestDescriptor::list_orders(),
            BurstKind::GetOrder => {
                RequestDescriptor::get_order(generate_below_step(&mut self.rng, step))
            }
            BurstKind::CancelOrder => {
                RequestDescriptor::cancel_order(generate_below_step(&mut self.rng, step))
            }
            BurstKind::CompleteOrder => {
                RequestDescriptor::complete_order(generate_below_step(&mut self.rng, step))
            }
        }
    }

    fn burst_unchecked(&mut self, kind: BurstKind, step: u64) -> Vec<RequestDescriptor> {
        // The count is drawn before any per-request value of the burst.
        let count = self.burst_count();
        (0..count)
            .map(|_| self.request_unchecked(kind, step))
            .collect()
    }

    fn step_unchecked(&mut self, step: u64) -> Vec<RequestDescriptor> {
        let mut requests = Vec::new();
        for kind in BurstKind::ALL {
            requests.extend(self.burst_unchecked(kind, step));
        }
        requests
    }
}

fn check_step(step: u64) -> Result<(), GeneratorError> {
    if step == 0 {
        return Err(GeneratorError::InvalidStep(step));
    }
    Ok(())
}

/// Iterator that lazily generates the requests of successive outer steps.
pub struct StepIterator<'a, R> {
    generator: &'a mut OrderTrafficGenerator<R>,
    range: Range<u64>,
}

impl<R: Rng> Iterator for StepIterator<'_, R> {
    type Item = (u64, Vec<RequestDescriptor>);

    fn next(&mut self) -> Option<Self::Item> {
        let step = self.range.next()?;
        Some((step, self.generator.step_unchecked(step)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.range.size_hint()
    }
}
