//! Resolver interface for turning a comic reference into preview data.
//!
//! The hook only depends on this trait and does not know whether the data
//! came from the JSON endpoint or a scraped page.

mod html;
mod json;

use std::sync::Arc;

use thiserror::Error;

use crate::comic::ResolvedComic;
use crate::config::{PluginConfig, ResolverBackend};
use crate::http::{CurlClient, FetchError};
use crate::matcher::ComicReference;

pub use html::HtmlResolver;
pub use json::JsonResolver;

/// Failure class, for logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolveErrorKind {
    Network,
    Decode,
}

#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("network failure: {0}")]
    Network(#[from] FetchError),
    #[error("failed to decode comic JSON from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("no comic image in {url}: {reason}")]
    Markup { url: String, reason: &'static str },
}

impl ResolveError {
    pub fn kind(&self) -> ResolveErrorKind {
        match self {
            ResolveError::Network(_) => ResolveErrorKind::Network,
            ResolveError::Decode { .. } | ResolveError::Markup { .. } => ResolveErrorKind::Decode,
        }
    }
}

/// Implemented by each lookup strategy.
///
/// Calls block on network I/O; no retries.
pub trait Resolver: Send + Sync {
    fn resolve(&self, reference: &ComicReference) -> Result<ResolvedComic, ResolveError>;
}

/// Build the resolver selected by `cfg.resolver`, backed by libcurl.
pub fn resolver_for(cfg: &PluginConfig) -> Arc<dyn Resolver> {
    match cfg.resolver {
        ResolverBackend::Json => Arc::new(JsonResolver::with_client(CurlClient, &cfg.base_url)),
        ResolverBackend::Html => Arc::new(HtmlResolver::with_client(CurlClient, &cfg.base_url)),
    }
}
