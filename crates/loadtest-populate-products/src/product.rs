//! Catalogue and store product shapes.

use serde::{Deserialize, Serialize};

/// Response of the sample catalogue.
#[derive(Debug, Clone, Deserialize)]
pub struct Catalogue {
    pub products: Vec<SourceProduct>,
}

/// A product as listed by the sample catalogue. Unknown fields are ignored.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SourceProduct {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: String,
    pub price: f64,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub brand: Option<String>,
}

/// Body posted to the store products endpoint.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductPayload {
    pub category: String,
    pub title: String,
    pub description: String,
    pub price: f64,
    pub rating: f64,
    /// Serialized as `null` when the catalogue has no brand.
    pub brand: Option<String>,
}

impl From<&SourceProduct> for ProductPayload {
    fn from(product: &SourceProduct) -> Self {
        Self {
            category: product.category.clone(),
            title: product.title.clone(),
            description: product.description.clone(),
            price: product.price,
            rating: product.rating,
            brand: product.brand.clone(),
        }
    }
}
