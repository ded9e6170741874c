//! Order payload generator.

use super::numeric::generate_below_step;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Product ids referenced by every generated order, in item order.
pub const ORDER_PRODUCT_IDS: [u64; 2] = [1, 2];

/// Reference to a catalogue product inside an order item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductRef {
    pub id: u64,
}

/// One line of an order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderItem {
    pub product: ProductRef,
    pub quantity: u64,
}

/// Body of `POST /orders`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderPayload {
    pub items: Vec<OrderItem>,
}

/// Generate a two-item order whose quantities are drawn from `[0, step)`.
///
/// Quantities are synthetic and have no relation to real inventory.
pub fn generate_order_payload<R: Rng>(rng: &mut R, step: u64) -> OrderPayload {
    let items = ORDER_PRODUCT_IDS
        .iter()
        .map(|&id| OrderItem {
            product: ProductRef { id },
            quantity: generate_below_step(rng, step),
        })
        .collect();

    OrderPayload { items }
}
