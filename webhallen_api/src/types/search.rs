use serde::Deserialize;

use super::ProductRecord;

/// Body of `GET /productdiscovery/search/{query}`.
///
/// Only `products` is read. A missing or `null` field means no matches.
#[derive(Deserialize, Debug)]
pub struct SearchResponse {
    #[serde(default)]
    pub products: Option<Vec<ProductRecord>>,
}

impl SearchResponse {
    pub fn into_products(self) -> Vec<ProductRecord> {
        self.products.unwrap_or_default()
    }
}
