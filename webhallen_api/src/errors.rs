//! Error types for the API client.

use reqwest::StatusCode;
use url::Url;

type Cause = Box<dyn std::error::Error + Send + Sync + 'static>;

/// A response arrived but its status was not 2xx (3xx included, since
/// redirects are not followed). Chained as the source of status failures.
#[derive(thiserror::Error, Debug)]
#[error("HTTP status {status} for url ({url})")]
pub struct StatusError {
    pub status: StatusCode,
    pub url: Url,
}

/// Errors that can occur when making API requests.
///
/// `Api` is the catch-all kind; `NotFound` is the narrower case of a product
/// that does not exist. Match on the whole enum to handle every client error
/// the same way, or on `NotFound` to treat a missing product separately.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The requested product does not exist (HTTP 404 or an empty payload).
    #[error("{message}")]
    NotFound {
        message: String,
        #[source]
        source: Option<Cause>,
    },
    /// Any other API or transport failure.
    #[error("{message}")]
    Api {
        message: String,
        #[source]
        source: Option<Cause>,
    },
}

impl Error {
    pub(crate) fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
            source: None,
        }
    }

    pub(crate) fn not_found_from<E>(message: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::NotFound {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    pub(crate) fn api(message: impl Into<String>) -> Self {
        Self::Api {
            message: message.into(),
            source: None,
        }
    }

    pub(crate) fn api_from<E>(message: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Api {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// The human-readable message, without the chained cause.
    pub fn message(&self) -> &str {
        match self {
            Self::NotFound { message, .. } | Self::Api { message, .. } => message,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// HTTP status code of the chained cause, if it was a status error.
    pub fn status(&self) -> Option<u16> {
        let source = match self {
            Self::NotFound { source, .. } | Self::Api { source, .. } => source.as_ref()?,
        };
        source
            .downcast_ref::<StatusError>()
            .map(|e| e.status.as_u16())
    }
}
