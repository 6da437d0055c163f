use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use serde_json::json;

use super::service::SelectionReportService;
use super::store::{SelectionStore, StoreError};

/// Router builder exposing the read-only reporting endpoints.
pub fn selection_router<S>(service: Arc<SelectionReportService<S>>) -> Router
where
    S: SelectionStore + 'static,
{
    Router::new()
        .route("/api/v1/selection/report", get(report_handler::<S>))
        .route(
            "/api/v1/selection/course-groups",
            get(course_groups_handler::<S>),
        )
        .route(
            "/api/v1/selection/overcommitted",
            get(overcommitted_handler::<S>),
        )
        .route("/api/v1/selection/stats", get(stats_handler::<S>))
        .with_state(service)
}

pub(crate) async fn report_handler<S>(
    State(service): State<Arc<SelectionReportService<S>>>,
) -> Response
where
    S: SelectionStore + 'static,
{
    match service.full_report() {
        Ok(report) => (StatusCode::OK, axum::Json(report)).into_response(),
        Err(error) => store_error_response(error),
    }
}

pub(crate) async fn course_groups_handler<S>(
    State(service): State<Arc<SelectionReportService<S>>>,
) -> Response
where
    S: SelectionStore + 'static,
{
    match service.course_groups() {
        Ok(groups) => (StatusCode::OK, axum::Json(groups)).into_response(),
        Err(error) => store_error_response(error),
    }
}

pub(crate) async fn overcommitted_handler<S>(
    State(service): State<Arc<SelectionReportService<S>>>,
) -> Response
where
    S: SelectionStore + 'static,
{
    match service.overcommitted() {
        Ok(candidates) => (StatusCode::OK, axum::Json(candidates)).into_response(),
        Err(error) => store_error_response(error),
    }
}

pub(crate) async fn stats_handler<S>(
    State(service): State<Arc<SelectionReportService<S>>>,
) -> Response
where
    S: SelectionStore + 'static,
{
    match service.selection_stats() {
        Ok(stats) => (StatusCode::OK, axum::Json(stats)).into_response(),
        Err(error) => store_error_response(error),
    }
}

fn store_error_response(error: StoreError) -> Response {
    let status = match error {
        StoreError::Unavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
        StoreError::Query(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    let payload = json!({ "error": error.to_string() });
    (status, axum::Json(payload)).into_response()
}
