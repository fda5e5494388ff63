use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A product payload exactly as the API returned it.
pub type ProductRecord = Map<String, Value>;

/// Typed view over the record returned by
/// [`Client::get_product`](crate::Client::get_product), which wraps the
/// product under a `product` key.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ProductEnvelope {
    pub product: Product,
}

impl ProductEnvelope {
    /// Projects a raw record onto the typed view. Fields not modelled here
    /// are kept in [`Product::extra`].
    pub fn from_record(record: &ProductRecord) -> Result<Self, serde_json::Error> {
        serde_json::from_value(Value::Object(record.clone()))
    }
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Product {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub price: Option<Price>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Price block. The API sends amounts as decimal strings, e.g. `"13790.00"`.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Price {
    pub price: String,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
