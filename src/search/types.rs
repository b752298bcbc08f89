//! Search API Data Types
//!
//! DTOs for the search endpoint and the internal index-management routes.

use crate::catalog::types::Tour;
use serde::{Deserialize, Serialize};

/// Raw query parameters. `limit` and `offset` arrive as strings so that
/// malformed values can fall back to defaults instead of failing extraction.
#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub q: Option<String>,
    #[serde(default)]
    pub limit: Option<String>,
    #[serde(default)]
    pub offset: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    pub tours: Vec<Tour>,
    pub has_more: bool,
    pub total: usize,
}

impl SearchResponse {
    pub fn empty() -> Self {
        Self {
            tours: Vec::new(),
            has_more: false,
            total: 0,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Snapshot of the cached index for the status endpoint.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexStatusResponse {
    pub status: String,
    pub entries: usize,
    pub age_seconds: Option<u64>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ReindexResponse {
    pub status: String,
    pub entries: usize,
}
