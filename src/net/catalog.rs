//! Compiler list fetch over HTTP.
//!
//! Client-side (hydrate): a real GET via `gloo-net`.
//! Server-side (SSR): returns [`CatalogError::Unavailable`]; the page never
//! calls it there because the screen renders empty until hydration.
//!
//! ERROR HANDLING
//! ==============
//! Every failure comes back as a `CatalogError` value. Callers turn it into an
//! error-channel report; nothing here panics or propagates into rendering.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

use super::types::CompilerInfo;
use crate::state::catalog::CompilerCatalog;
use crate::state::error::ErrorReport;

/// Origin label used when reporting loader failures.
pub const CATALOG_ERROR_ORIGIN: &str = "compiler list";

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),

    /// The service answered with a non-2xx status.
    #[error("request failed with status {0}")]
    Status(u16),

    /// The body was not a compiler list.
    #[error("malformed compiler list: {0}")]
    Malformed(String),

    /// No browser fetch is available in this build.
    #[error("compiler list is only fetched in the browser")]
    Unavailable,
}

impl From<CatalogError> for ErrorReport {
    fn from(err: CatalogError) -> Self {
        ErrorReport::new(CATALOG_ERROR_ORIGIN, err.to_string())
    }
}

/// Parse a compiler list document.
///
/// # Errors
///
/// Returns [`CatalogError::Malformed`] when the body is not a JSON array of
/// compiler entries.
pub fn parse_catalog(body: &str) -> Result<CompilerCatalog, CatalogError> {
    serde_json::from_str::<Vec<CompilerInfo>>(body)
        .map(CompilerCatalog::new)
        .map_err(|e| CatalogError::Malformed(e.to_string()))
}

#[cfg(any(test, feature = "hydrate"))]
fn check_status(status: u16) -> Result<(), CatalogError> {
    if (200..300).contains(&status) { Ok(()) } else { Err(CatalogError::Status(status)) }
}

/// Fetch and parse the compiler list at `endpoint`.
///
/// # Errors
///
/// Returns a [`CatalogError`] for transport failures, non-success statuses,
/// and unparseable bodies.
pub async fn fetch_catalog(endpoint: &str) -> Result<CompilerCatalog, CatalogError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(endpoint)
            .send()
            .await
            .map_err(|e| CatalogError::Network(e.to_string()))?;
        check_status(resp.status())?;
        let body = resp.text().await.map_err(|e| CatalogError::Network(e.to_string()))?;
        parse_catalog(&body)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = endpoint;
        Err(CatalogError::Unavailable)
    }
}
