//! HTTP server mode for REST API access to paged listings

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Serialize;
use serde_json::json;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::Dataset;
use crate::engine::{read_entries, read_ids, EntryRequest, IdRequest};
use crate::error::{Error, Result};

/// Response wrapper
#[derive(Debug, Serialize)]
struct ApiResponse<T> {
    success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl<T: Serialize> ApiResponse<T> {
    fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    fn error(msg: impl Into<String>) -> ApiResponse<()> {
        ApiResponse {
            success: false,
            data: None,
            error: Some(msg.into()),
        }
    }
}

/// Build the API router over a loaded dataset
pub fn router(dataset: Arc<Dataset>) -> Router {
    // Allow all origins for development
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health))
        .route("/dataset", get(dataset_info))
        .route("/entries", get(entries))
        .route("/ids", get(ids))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(dataset)
}

/// Start the HTTP server
pub async fn serve(dataset: Arc<Dataset>, port: u16) -> Result<()> {
    let app = router(dataset);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Starting HTTP server on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| Error::config(format!("Failed to bind to port {port}: {e}")))?;

    axum::serve(listener, app)
        .await
        .map_err(|e| Error::config(format!("Server error: {e}")))?;

    Ok(())
}

/// Health check endpoint
async fn health() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}

/// Describe the served dataset
async fn dataset_info(State(dataset): State<Arc<Dataset>>) -> impl IntoResponse {
    Json(ApiResponse::success(json!({
        "name": dataset.name,
        "entries": dataset.store.len(),
        "queries": dataset.conditions.len(),
        "paging": {
            "page_size": dataset.paging.page_size,
            "limit": dataset.paging.limit,
            "scan_window": dataset.paging.scan_window
        }
    })))
}

/// Next page of entries
async fn entries(
    State(dataset): State<Arc<Dataset>>,
    Query(request): Query<EntryRequest>,
) -> Response {
    respond(read_entries(&dataset, &request))
}

/// Next identifier pages
async fn ids(State(dataset): State<Arc<Dataset>>, Query(request): Query<IdRequest>) -> Response {
    respond(read_ids(&dataset, &request))
}

/// Wrap a paging result, mapping caller mistakes to 400
fn respond<T: Serialize>(result: Result<T>) -> Response {
    match result {
        Ok(data) => (StatusCode::OK, Json(ApiResponse::success(data))).into_response(),
        Err(e) => {
            let status = if e.is_cursor_error() || matches!(e, Error::Config { .. }) {
                StatusCode::BAD_REQUEST
            } else {
                StatusCode::INTERNAL_SERVER_ERROR
            };
            tracing::warn!("Request failed ({}): {}", status, e);
            (status, Json(ApiResponse::<()>::error(e.to_string()))).into_response()
        }
    }
}
