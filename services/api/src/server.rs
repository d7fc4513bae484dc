use crate::cli::ServeArgs;
use crate::infra::{load_snapshot, AppState, InMemoryHiringStore};
use crate::routes::with_hiring_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use hiring_metrics::config::AppConfig;
use hiring_metrics::error::AppError;
use hiring_metrics::telemetry;
use hiring_metrics::workflows::hiring::{HiringMetricsService, HiringSnapshot};
use std::sync::atomic::{AtomicBool, Ordering};
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

    let snapshot = match &config.data.snapshot_path {
        Some(path) => {
            let snapshot = load_snapshot(path)?;
            info!(
                path = %path.display(),
                jobs = snapshot.jobs.len(),
                applications = snapshot.applications.len(),
                interviews = snapshot.interviews.len(),
                "hiring snapshot loaded"
            );
            snapshot
        }
        None => HiringSnapshot::default(),
    };

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let store = Arc::new(InMemoryHiringStore::from_snapshot(snapshot));
    let service = Arc::new(HiringMetricsService::new(store));

    let app = with_hiring_routes(service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "hiring metrics service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
