//! HTTP client for the Webhallen API.

use reqwest::{redirect, StatusCode};
use serde_json::Value;
use url::Url;

use crate::{
    config::Config,
    errors::StatusError,
    types::{ProductRecord, SearchResponse},
    Error,
};

const USER_AGENT: &str = concat!("webhallen-rs/", env!("CARGO_PKG_VERSION"));

/// HTTP client for the Webhallen API.
///
/// Owns one pooled `reqwest::Client`, built from the [`Config`] at
/// construction and released by [`Client::close`] or on drop. Every call
/// sends exactly one GET request; nothing is cached, retried, or redirected.
///
/// `reqwest::Client` is `Send + Sync`, so a `&Client` can be shared across
/// tasks. `close` needs `&mut self` and therefore never races a request.
pub struct Client {
    config: Config,
    base_url: Url,
    http: Option<reqwest::Client>,
}

/// How a request failed before a body could be handed back.
enum Failure {
    /// The server answered with a non-2xx status.
    Status(StatusError),
    /// No usable response: DNS, connect, timeout, or body read.
    Transport(reqwest::Error),
}

impl Client {
    /// Creates a client pointing at the production Webhallen API with a
    /// 10-second timeout.
    pub fn new() -> Result<Self, Error> {
        Self::with_config(Config::default())
    }

    /// Creates a client with a custom base URL. Used for testing with wiremock.
    pub fn with_base_url(base_url: &str) -> Result<Self, Error> {
        Self::with_config(Config::default().with_base_url(base_url))
    }

    /// Creates a client from an explicit configuration. No request is sent.
    pub fn with_config(config: Config) -> Result<Self, Error> {
        let base_url = Url::parse(&config.base_url).map_err(|e| {
            tracing::error!("Invalid base URL {}: {}", config.base_url, e);
            Error::api_from(format!("Invalid base URL: {}", e), e)
        })?;
        if base_url.cannot_be_a_base() {
            return Err(Error::api(format!(
                "Invalid base URL: {} cannot carry a path",
                config.base_url
            )));
        }
        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(config.timeout)
            .redirect(redirect::Policy::none())
            .build()
            .map_err(|e| {
                tracing::error!("Failed to build HTTP client: {}", e);
                Error::api_from(format!("Failed to build HTTP client: {}", e), e)
            })?;
        Ok(Self {
            config,
            base_url,
            http: Some(http),
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn is_closed(&self) -> bool {
        self.http.is_none()
    }

    /// Releases the connection pool. Calling it again is a no-op.
    pub fn close(&mut self) {
        if self.http.take().is_some() {
            tracing::debug!("Closed HTTP client for {}", self.base_url);
        }
    }

    /// Appends `segments` to the base URL, percent-encoding each one.
    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        // cannot_be_a_base() was rejected in with_config
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    fn transport(&self) -> Result<&reqwest::Client, Error> {
        self.http.as_ref().ok_or_else(|| {
            tracing::error!("Request attempted on a closed client");
            Error::api("Connection error: client has been closed")
        })
    }

    async fn fetch(http: &reqwest::Client, url: Url) -> Result<String, Failure> {
        tracing::debug!("GET {}", url);
        let resp = http.get(url).send().await.map_err(Failure::Transport)?;
        let status = resp.status();
        if !status.is_success() {
            return Err(Failure::Status(StatusError {
                status,
                url: resp.url().clone(),
            }));
        }
        resp.text().await.map_err(Failure::Transport)
    }

    /// Fetches a product by its numeric ID.
    ///
    /// The endpoint answers with a JSON string that itself holds the JSON
    /// payload, so the body is decoded twice. The decoded object is returned
    /// untouched, including its outer `product` key; see
    /// [`ProductEnvelope`](crate::types::ProductEnvelope) for a typed view.
    ///
    /// Returns [`Error::NotFound`] on HTTP 404 or an empty payload, and
    /// [`Error::Api`] for every other failure.
    pub async fn get_product(&self, product_id: u64) -> Result<ProductRecord, Error> {
        let http = self.transport()?;
        let id = product_id.to_string();
        let url = self.endpoint(&["product", &id]);

        let body = match Self::fetch(http, url).await {
            Ok(body) => body,
            Err(Failure::Status(e)) if e.status == StatusCode::NOT_FOUND => {
                tracing::warn!("Product {} not found: {}", product_id, e);
                return Err(Error::not_found_from(
                    format!("Product with ID {} not found", product_id),
                    e,
                ));
            }
            Err(Failure::Status(e)) => {
                tracing::error!("Product request failed: {}", e);
                return Err(Error::api_from(format!("API request failed: {}", e), e));
            }
            Err(Failure::Transport(e)) => return Err(connection_error(e)),
        };

        let payload = decode_double_encoded(&body)?;
        if is_empty_payload(&payload) {
            tracing::warn!("Empty payload for product {}", product_id);
            return Err(Error::not_found(format!(
                "No product found with ID {}",
                product_id
            )));
        }
        serde_json::from_value::<ProductRecord>(payload).map_err(|e| decode_error(e, &body))
    }

    /// Searches products by free text. The query is sent as one path segment.
    ///
    /// Every reserved character in the query is percent-encoded, so `/` goes
    /// out as `%2F` and `?` as `%3F`. Neither splits the path nor starts a
    /// query string.
    ///
    /// Unlike [`Client::get_product`], the body is plain JSON. A response
    /// without `products` yields an empty vec.
    pub async fn search(&self, query: &str) -> Result<Vec<ProductRecord>, Error> {
        let http = self.transport()?;
        let url = self.endpoint(&["productdiscovery", "search", query]);

        let body = match Self::fetch(http, url).await {
            Ok(body) => body,
            Err(Failure::Status(e)) => {
                tracing::error!("Search request failed: {}", e);
                return Err(Error::api_from(format!("Search request failed: {}", e), e));
            }
            Err(Failure::Transport(e)) => return Err(connection_error(e)),
        };

        let parsed = serde_json::from_str::<SearchResponse>(&body)
            .map_err(|e| decode_error(e, &body))?;
        Ok(parsed.into_products())
    }
}

impl Drop for Client {
    fn drop(&mut self) {
        self.close();
    }
}

fn connection_error(e: reqwest::Error) -> Error {
    tracing::error!("Connection error: {}", e);
    Error::api_from(format!("Connection error: {}", e), e)
}

fn decode_error(e: serde_json::Error, body: &str) -> Error {
    tracing::error!("Failed to decode response: {} | body: {}", e, truncate_body(body));
    Error::api_from(format!("Failed to decode JSON response: {}", e), e)
}

/// Decodes a body whose JSON value is a string holding the real JSON document.
fn decode_double_encoded(body: &str) -> Result<Value, Error> {
    let inner = serde_json::from_str::<String>(body).map_err(|e| decode_error(e, body))?;
    serde_json::from_str::<Value>(&inner).map_err(|e| decode_error(e, body))
}

/// Whether the API signalled "no such product" with an empty value.
fn is_empty_payload(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(a) => a.is_empty(),
        Value::Object(o) => o.is_empty(),
    }
}

fn truncate_body(body: &str) -> &str {
    const MAX: usize = 500;
    if body.len() <= MAX {
        return body;
    }
    let mut end = MAX;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    &body[..end]
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn endpoint_appends_segments_to_base_path() {
        let client = Client::with_base_url("https://mock-webhallen.com/api").unwrap();
        assert_eq!(
            client.endpoint(&["product", "370861"]).as_str(),
            "https://mock-webhallen.com/api/product/370861"
        );
    }

    #[test]
    fn endpoint_tolerates_trailing_slash() {
        let client = Client::with_base_url("https://mock-webhallen.com/api/").unwrap();
        assert_eq!(
            client.endpoint(&["productdiscovery", "search", "rtx"]).as_str(),
            "https://mock-webhallen.com/api/productdiscovery/search/rtx"
        );
    }

    #[test]
    fn endpoint_encodes_query_as_one_segment() {
        let client = Client::with_base_url("https://mock-webhallen.com/api").unwrap();
        assert_eq!(
            client
                .endpoint(&["productdiscovery", "search", "rtx 4080/super?"])
                .as_str(),
            "https://mock-webhallen.com/api/productdiscovery/search/rtx%204080%2Fsuper%3F"
        );
    }

    #[test]
    fn default_client_uses_production_root() {
        let client = Client::new().unwrap();
        assert_eq!(client.config().base_url, "https://www.webhallen.com/api");
        assert_eq!(client.config().timeout.as_secs(), 10);
    }

    #[test]
    fn invalid_base_url_is_rejected() {
        let err = Client::with_base_url("not a url").err().unwrap();
        assert!(!err.is_not_found());
        assert!(err.to_string().starts_with("Invalid base URL"));

        let err = Client::with_base_url("mailto:someone@example.com").err().unwrap();
        assert!(err.to_string().contains("cannot carry a path"));
    }

    #[test]
    fn close_is_idempotent() {
        let mut client = Client::with_base_url("https://mock-webhallen.com/api").unwrap();
        assert!(!client.is_closed());
        client.close();
        assert!(client.is_closed());
        client.close();
        assert!(client.is_closed());
    }

    #[test]
    fn double_encoded_body_is_unwrapped() {
        let body = serde_json::to_string(&json!({"product": {"id": 1}}).to_string()).unwrap();
        let value = decode_double_encoded(&body).unwrap();
        assert_eq!(value["product"]["id"], 1);
    }

    #[test]
    fn single_encoded_body_fails_to_decode() {
        let err = decode_double_encoded(r#"{"product": {"id": 1}}"#).unwrap_err();
        assert!(err.to_string().starts_with("Failed to decode JSON response: "));
    }

    #[test]
    fn inner_string_that_is_not_json_fails_to_decode() {
        let err = decode_double_encoded(r#""not json""#).unwrap_err();
        assert!(err.to_string().starts_with("Failed to decode JSON response: "));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn empty_payloads() {
        for value in [
            json!(null),
            json!(false),
            json!(0),
            json!(0.0),
            json!(""),
            json!([]),
            json!({}),
        ] {
            assert!(is_empty_payload(&value), "{} should be empty", value);
        }
        for value in [json!(true), json!(1), json!("x"), json!([1]), json!({"a": 1})] {
            assert!(!is_empty_payload(&value), "{} should not be empty", value);
        }
    }

    #[test]
    fn truncate_body_respects_char_boundaries() {
        let body = "å".repeat(400);
        let cut = truncate_body(&body);
        assert!(cut.len() <= 500);
        assert!(body.starts_with(cut));
    }
}
