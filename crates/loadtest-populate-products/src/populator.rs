//! Products populator: copies the sample catalogue into the store.

use crate::error::ProductsPopulatorError;
use crate::product::{Catalogue, ProductPayload, SourceProduct};
use loadtest_http::{format_status_line, mask_url_credentials, HttpRequest, Method, Transport};
use std::io::Write;
use tracing::{debug, info};

pub struct ProductsPopulator<T> {
    transport: T,
}

impl<T: Transport> ProductsPopulator<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    /// Fetch the catalogue listing from `source_url`.
    pub async fn fetch_products(
        &self,
        source_url: &str,
    ) -> Result<Vec<SourceProduct>, ProductsPopulatorError> {
        let response = self.transport.send(HttpRequest::get(source_url)).await?;
        if !(200..300).contains(&response.status) {
            return Err(ProductsPopulatorError::SourceStatus {
                url: mask_url_credentials(source_url),
                status: response.status,
            });
        }

        let catalogue: Catalogue = response.json()?;
        debug!(
            "Fetched {} products from {}",
            catalogue.products.len(),
            mask_url_credentials(source_url)
        );
        Ok(catalogue.products)
    }

    /// Post one product to `target_url` and return the status the store answered with.
    pub async fn publish(
        &self,
        target_url: &str,
        product: &SourceProduct,
    ) -> Result<u16, ProductsPopulatorError> {
        let request =
            HttpRequest::new(Method::POST, target_url).json(&ProductPayload::from(product))?;
        let response = self.transport.send(request).await?;
        Ok(response.status)
    }

    /// Copy every catalogue product to the store, in catalogue order.
    ///
    /// Writes `<id> - <status>` per product to `out` and returns how many
    /// products were posted. Stops at the first transport failure.
    pub async fn run<W: Write>(
        &self,
        source_url: &str,
        target_url: &str,
        out: &mut W,
    ) -> Result<usize, ProductsPopulatorError> {
        let products = self.fetch_products(source_url).await?;
        info!(
            "Posting {} products from {} to {}",
            products.len(),
            mask_url_credentials(source_url),
            mask_url_credentials(target_url)
        );

        for product in &products {
            let status = self.publish(target_url, product).await?;
            writeln!(out, "{}", format_status_line(&product.id.to_string(), status))?;
        }

        Ok(products.len())
    }
}
