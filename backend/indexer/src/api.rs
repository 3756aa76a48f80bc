//! Axum REST API handlers.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use serde::Serialize;
use sqlx::SqlitePool;

use crate::db;
use crate::errors::Result;
use crate::events::{EventKind, EventRecord};

#[derive(Clone)]
pub struct ApiState {
    pub pool: SqlitePool,
}

// ─────────────────────────────────────────────────────────
// Response shapes
// ─────────────────────────────────────────────────────────

#[derive(Serialize)]
pub struct FilteredEventsResponse {
    /// `founder`, `product` or `kind`.
    pub filter: &'static str,
    pub value: String,
    pub count: usize,
    pub events: Vec<EventRecord>,
}

#[derive(Serialize)]
pub struct AllEventsResponse {
    pub count: usize,
    pub events: Vec<EventRecord>,
}

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

fn error_response(status: StatusCode, error: String) -> axum::response::Response {
    (status, Json(ErrorResponse { error })).into_response()
}

fn filtered(
    filter: &'static str,
    value: String,
    result: Result<Vec<EventRecord>>,
) -> axum::response::Response {
    match result {
        Ok(events) => {
            let count = events.len();
            (
                StatusCode::OK,
                Json(FilteredEventsResponse {
                    filter,
                    value,
                    count,
                    events,
                }),
            )
                .into_response()
        }
        Err(e) => error_response(StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
    }
}

/// The audit API: read-only views over the indexed ledger events.
pub fn router(pool: SqlitePool) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/events", get(get_all_events))
        .route("/events/kind/:kind", get(get_events_by_kind))
        .route("/founders/:id/events", get(get_founder_events))
        .route("/products/:id/events", get(get_product_events))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(Arc::new(ApiState { pool }))
}

// ─────────────────────────────────────────────────────────
// Handlers
// ─────────────────────────────────────────────────────────

/// `GET /health`
pub async fn health() -> impl IntoResponse {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// `GET /founders/:id/events`
///
/// Returns all indexed events for the given founder address.
pub async fn get_founder_events(
    State(state): State<Arc<ApiState>>,
    Path(founder): Path<String>,
) -> impl IntoResponse {
    let result = db::get_events_for_founder(&state.pool, &founder).await;
    filtered("founder", founder, result)
}

/// `GET /products/:id/events`
///
/// Returns all indexed events for the given product address.
pub async fn get_product_events(
    State(state): State<Arc<ApiState>>,
    Path(product): Path<String>,
) -> impl IntoResponse {
    let result = db::get_events_for_product(&state.pool, &product).await;
    filtered("product", product, result)
}

/// `GET /events/kind/:kind`
///
/// `kind` is a stored event name such as `rewards_claimed`.
pub async fn get_events_by_kind(
    State(state): State<Arc<ApiState>>,
    Path(kind): Path<String>,
) -> impl IntoResponse {
    if EventKind::from_stored(&kind).is_none() {
        return error_response(StatusCode::BAD_REQUEST, format!("unknown event kind: {kind}"));
    }
    let result = db::get_events_by_kind(&state.pool, &kind).await;
    filtered("kind", kind, result)
}

/// `GET /events`
///
/// Returns all indexed ledger events.
pub async fn get_all_events(State(state): State<Arc<ApiState>>) -> impl IntoResponse {
    match db::get_all_events(&state.pool).await {
        Ok(events) => {
            let count = events.len();
            (StatusCode::OK, Json(AllEventsResponse { count, events })).into_response()
        }
        Err(e) => error_response(StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
    }
}
