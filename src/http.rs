//! Outbound HTTP for loaders.
//!
//! The crate does not ship a transport. Hosts implement [`HttpClient`] over
//! whatever they have (browser `fetch`, a native client, a test double) and
//! loaders go through [`fetch_json`] so status and decoding failures map to
//! [`LoaderError`] the same way everywhere.

use futures_util::future::BoxFuture;
use serde::de::DeserializeOwned;
use tracing::trace;

use crate::error::LoaderError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Minimal GET-only client.
#[cfg_attr(test, mockall::automock)]
pub trait HttpClient: Send + Sync {
    /// Issue a GET. `Err` carries a transport failure description; any
    /// response, whatever its status, is `Ok`.
    fn get(&self, url: &str) -> BoxFuture<'static, Result<HttpResponse, String>>;
}

/// GET `url` and decode a JSON body.
///
/// Non-2xx responses are [`LoaderError::Status`], transport failures
/// [`LoaderError::Network`] and unexpected bodies [`LoaderError::Decode`].
pub async fn fetch_json<T: DeserializeOwned>(
    client: &dyn HttpClient,
    url: &str,
) -> Result<T, LoaderError> {
    let response = client.get(url).await.map_err(|reason| LoaderError::Network {
        url: url.to_string(),
        reason,
    })?;
    trace!(url, status = response.status, bytes = response.body.len(), "response");

    if !response.is_success() {
        return Err(LoaderError::Status {
            url: url.to_string(),
            status: response.status,
        });
    }

    serde_json::from_slice(&response.body).map_err(|e| LoaderError::Decode {
        url: url.to_string(),
        reason: e.to_string(),
    })
}
