use crate::cli::ServeArgs;
use crate::demo::load_dataset_from_paths;
use crate::infra::{AppState, InMemorySelectionStore};
use crate::routes::with_selection_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use staffing::config::AppConfig;
use staffing::error::AppError;
use staffing::selection::SelectionReportService;
use staffing::telemetry;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let (dataset, imported) =
        load_dataset_from_paths(args.applications_csv.take(), args.selections_csv.take())?;
    let applications = dataset.applications.len();
    let selections = dataset.selection_records.len();

    let store = Arc::new(InMemorySelectionStore::new(dataset));
    let service = Arc::new(SelectionReportService::new(store));

    let app = with_selection_routes(service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        ?config.environment,
        %addr,
        applications,
        selections,
        imported,
        "selection analytics service ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
