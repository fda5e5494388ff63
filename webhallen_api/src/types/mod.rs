mod product;
pub use self::product::{Price, Product, ProductEnvelope, ProductRecord};

mod search;
pub use self::search::SearchResponse;
