use crate::infra::AppState;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use chrono::{NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;
use staffing::error::AppError;
use staffing::selection::report::views::SelectionReport;
use staffing::selection::{
    build_report, selection_router, DatasetImportError, DatasetImporter, SelectionReportService,
    SelectionStore,
};
use std::io::Cursor;
use std::sync::Arc;

#[derive(Debug, Deserialize)]
pub(crate) struct SelectionReportRequest {
    /// Inline applications export; when present the report runs over it
    /// instead of the seeded store.
    #[serde(default)]
    pub(crate) applications_csv: Option<String>,
    /// Inline selections export; only meaningful next to `applications_csv`.
    #[serde(default)]
    pub(crate) selections_csv: Option<String>,
}

#[derive(Debug, Serialize)]
pub(crate) struct SelectionReportResponse {
    pub(crate) generated_at: NaiveDateTime,
    pub(crate) data_source: SelectionDataSource,
    pub(crate) report: SelectionReport,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub(crate) enum SelectionDataSource {
    InlineCsv,
    SeededStore,
}

pub(crate) fn with_selection_routes<S>(
    service: Arc<SelectionReportService<S>>,
) -> axum::Router
where
    S: SelectionStore + 'static,
{
    selection_router(service.clone())
        .route(
            "/api/v1/selection/report",
            axum::routing::post(selection_report_endpoint::<S>),
        )
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
        .layer(Extension(service))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

/// Ad-hoc reporting: administrators can post raw portal exports and get the
/// report for them, or post an empty body to report over the seeded store.
pub(crate) async fn selection_report_endpoint<S>(
    Extension(service): Extension<Arc<SelectionReportService<S>>>,
    Json(payload): Json<SelectionReportRequest>,
) -> Result<Json<SelectionReportResponse>, AppError>
where
    S: SelectionStore + 'static,
{
    let SelectionReportRequest {
        applications_csv,
        selections_csv,
    } = payload;

    let (report, data_source) = match (applications_csv, selections_csv) {
        (Some(applications), selections) => {
            let applications = Cursor::new(applications.into_bytes());
            let selections = selections.map(|csv| Cursor::new(csv.into_bytes()));
            let dataset = DatasetImporter::from_readers(applications, selections)?;
            let report = build_report(&dataset.applications, &dataset.selection_records);
            (report, SelectionDataSource::InlineCsv)
        }
        (None, Some(_)) => {
            return Err(AppError::from(DatasetImportError::MissingApplications));
        }
        (None, None) => (service.full_report()?, SelectionDataSource::SeededStore),
    };

    Ok(Json(SelectionReportResponse {
        generated_at: Utc::now().naive_utc(),
        data_source,
        report,
    }))
}
