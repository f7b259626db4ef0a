//! Blocking HTTP GET used by the resolvers.
//!
//! Uses the curl crate (libcurl). Each call owns its handle, so the
//! connection is released when the call returns, whichever way it exits.

use std::str;

use thiserror::Error;

const USER_AGENT: &str = concat!("comiclink/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("invalid URL {url}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: curl::Error,
    },
    #[error("GET {url} failed: {source}")]
    Transfer {
        url: String,
        #[source]
        source: curl::Error,
    },
}

/// Status and full body of a completed GET.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u32,
    pub body: Vec<u8>,
}

/// Transport seam for the resolvers.
pub trait HttpClient: Send + Sync {
    /// Issue a GET and read the whole body. Non-2xx statuses are not errors.
    fn get(&self, url: &str) -> Result<HttpResponse, FetchError>;
}

/// libcurl-backed client with transport-default timeouts.
#[derive(Debug, Clone, Copy, Default)]
pub struct CurlClient;

impl CurlClient {
    pub fn new() -> Self {
        Self
    }
}

impl HttpClient for CurlClient {
    /// Runs in the current thread; call from `spawn_blocking` if used from async code.
    fn get(&self, url: &str) -> Result<HttpResponse, FetchError> {
        let transfer_err = |source| FetchError::Transfer {
            url: url.to_string(),
            source,
        };

        let mut body = Vec::new();
        let mut easy = curl::easy::Easy::new();
        easy.url(url).map_err(|source| FetchError::InvalidUrl {
            url: url.to_string(),
            source,
        })?;
        easy.get(true).map_err(transfer_err)?;
        easy.follow_location(true).map_err(transfer_err)?;
        easy.useragent(USER_AGENT).map_err(transfer_err)?;

        {
            let mut transfer = easy.transfer();
            transfer
                .write_function(|data| {
                    body.extend_from_slice(data);
                    Ok(data.len())
                })
                .map_err(transfer_err)?;
            transfer.perform().map_err(transfer_err)?;
        }

        let status = easy.response_code().map_err(transfer_err)?;
        tracing::trace!(
            "GET {} -> HTTP {} ({} bytes, {})",
            url,
            status,
            body.len(),
            str::from_utf8(&body).map(|_| "utf-8").unwrap_or("binary")
        );
        Ok(HttpResponse { status, body })
    }
}
