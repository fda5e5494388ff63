//! Thin async client for the Webhallen product API.
//!
//! Two calls are exposed: [`Client::get_product`] and [`Client::search`].
//! Failures come back as [`Error::NotFound`] or the catch-all [`Error::Api`],
//! with the underlying `reqwest` or `serde_json` error chained as the source.

mod client;
pub mod config;
mod errors;
pub mod types;
pub use self::client::Client;
pub use self::config::Config;
pub use self::errors::{Error, StatusError};
pub use self::types::ProductRecord;
