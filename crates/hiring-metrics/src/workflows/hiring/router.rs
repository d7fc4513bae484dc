use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    routing::{get, post},
    Json, Router,
};

use super::domain::{CompanyId, HiringSnapshot, Session};
use super::report::HiringReport;
use super::service::HiringMetricsService;
use super::store::HiringDataStore;
use crate::error::AppError;

/// Router builder exposing the hiring report endpoints.
pub fn hiring_router<S>(service: Arc<HiringMetricsService<S>>) -> Router
where
    S: HiringDataStore + 'static,
{
    Router::new()
        .route(
            "/api/v1/companies/:company_id/hiring-report",
            get(company_report_handler::<S>),
        )
        .route("/api/v1/hiring/report", post(snapshot_report_handler::<S>))
        .with_state(service)
}

pub(crate) async fn company_report_handler<S>(
    State(service): State<Arc<HiringMetricsService<S>>>,
    Path(company_id): Path<String>,
) -> Result<Json<HiringReport>, AppError>
where
    S: HiringDataStore + 'static,
{
    let session = Session::for_company(CompanyId(company_id));
    let report = service.company_report(&session)?;
    Ok(Json(report))
}

pub(crate) async fn snapshot_report_handler<S>(
    State(service): State<Arc<HiringMetricsService<S>>>,
    payload: Result<Json<HiringSnapshot>, JsonRejection>,
) -> Result<Json<HiringReport>, AppError>
where
    S: HiringDataStore + 'static,
{
    let Json(snapshot) = payload.map_err(|rejection| AppError::Payload(rejection.body_text()))?;
    Ok(Json(service.snapshot_report(&snapshot)))
}
