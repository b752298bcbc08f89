use super::aliases::expand_query;
use super::engine::{parse_limit, parse_offset, run_query};
use super::service::IndexService;
use super::types::{
    ErrorResponse, IndexStatusResponse, ReindexResponse, SearchParams, SearchResponse,
};
use crate::catalog::client::TourSource;
use axum::extract::Query;
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::{Extension, Json};
use std::sync::Arc;

// Real searches are cheap to serve from the CDN for a minute; blank queries
// and error responses must never be cached.
const CACHE_SEARCH: &str = "s-maxage=60, stale-while-revalidate=300";
const CACHE_NONE: &str = "no-store";

pub async fn handle_search<S: TourSource + 'static>(
    Query(params): Query<SearchParams>,
    Extension(service): Extension<Arc<IndexService<S>>>,
) -> Response {
    let query = params.q.as_deref().unwrap_or("");
    if query.trim().is_empty() {
        return (
            StatusCode::OK,
            [(header::CACHE_CONTROL, CACHE_NONE)],
            Json(SearchResponse::empty()),
        )
            .into_response();
    }

    let limit = parse_limit(params.limit.as_deref());
    let offset = parse_offset(params.offset.as_deref());
    let terms = expand_query(query);

    match service.current().await {
        Ok(index) => {
            let outcome = run_query(&index.entries, &terms, limit, offset);
            tracing::debug!(
                "Search '{}': returning {} of {} matches",
                query,
                outcome.tours.len(),
                outcome.total
            );
            (
                StatusCode::OK,
                [(header::CACHE_CONTROL, CACHE_SEARCH)],
                Json(SearchResponse {
                    tours: outcome.tours,
                    has_more: outcome.has_more,
                    total: outcome.total,
                }),
            )
                .into_response()
        }
        Err(err) => {
            tracing::error!("Search '{}' failed to obtain index: {:?}", query, err);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                [(header::CACHE_CONTROL, CACHE_NONE)],
                Json(ErrorResponse {
                    error: "index rebuild failed".to_string(),
                }),
            )
                .into_response()
        }
    }
}

pub async fn handle_reindex<S: TourSource + 'static>(
    Extension(service): Extension<Arc<IndexService<S>>>,
) -> Response {
    match service.force_rebuild().await {
        Ok(index) => (
            StatusCode::OK,
            Json(ReindexResponse {
                status: "rebuilt".to_string(),
                entries: index.entries.len(),
            }),
        )
            .into_response(),
        Err(err) => {
            tracing::error!("Forced reindex failed: {:?}", err);
            (
                StatusCode::BAD_GATEWAY,
                Json(ErrorResponse {
                    error: "catalog fetch failed".to_string(),
                }),
            )
                .into_response()
        }
    }
}

pub async fn handle_index_status<S: TourSource + 'static>(
    Extension(service): Extension<Arc<IndexService<S>>>,
) -> (StatusCode, Json<IndexStatusResponse>) {
    let status = match service.peek().await {
        Some(index) => IndexStatusResponse {
            status: "ready".to_string(),
            entries: index.entries.len(),
            age_seconds: Some(index.built_at.elapsed().as_secs()),
        },
        None => IndexStatusResponse {
            status: "empty".to_string(),
            entries: 0,
            age_seconds: None,
        },
    };

    (StatusCode::OK, Json(status))
}
