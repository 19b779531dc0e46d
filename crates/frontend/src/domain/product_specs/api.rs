//! Catalog loading.
//!
//! One fetch of the static spec catalog per page session. There is no retry,
//! no caching and no timeout; a hung request leaves initialization pending.

use contracts::domain::product_specs::Catalog;
use gloo_net::http::Request;
use thiserror::Error;

/// Fixed relative location of the catalog resource.
pub const CATALOG_URL: &str = "specs.json";

/// A failed catalog load. Transport failures, non-success statuses and
/// malformed payloads all collapse into this one class; the detail string is
/// kept for the diagnostic log.
#[derive(Debug, Error)]
#[error("failed to load product catalog: {0}")]
pub struct LoadError(String);

/// Fetch and decode the catalog.
pub async fn fetch_catalog() -> Result<Catalog, LoadError> {
    let response = Request::get(CATALOG_URL)
        .send()
        .await
        .map_err(|e| LoadError(format!("request failed: {}", e)))?;

    if !response.ok() {
        return Err(LoadError(format!("HTTP {}", response.status())));
    }

    response
        .json::<Catalog>()
        .await
        .map_err(|e| LoadError(format!("bad payload: {}", e)))
}
