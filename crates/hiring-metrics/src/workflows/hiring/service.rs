use std::sync::Arc;

use tracing::{info, warn};

use super::domain::{ApplicationId, HiringSnapshot, JobId, Session};
use super::report::{AggregationOptions, HiringMetricsAggregator, HiringReport};
use super::store::{HiringDataStore, StoreError};

/// Service composing the data store lookups with the report aggregator.
pub struct HiringMetricsService<S> {
    store: Arc<S>,
    aggregator: HiringMetricsAggregator,
}

impl<S> HiringMetricsService<S>
where
    S: HiringDataStore + 'static,
{
    pub fn new(store: Arc<S>) -> Self {
        Self::with_options(store, AggregationOptions::default())
    }

    pub fn with_options(store: Arc<S>, options: AggregationOptions) -> Self {
        Self {
            store,
            aggregator: HiringMetricsAggregator::new(options),
        }
    }

    /// Load the session company's jobs, applications, and interviews and report on them.
    pub fn company_report(&self, session: &Session) -> Result<HiringReport, HiringServiceError> {
        let company_id = &session.company_id;

        let jobs = self
            .store
            .jobs_for_company(company_id)
            .inspect_err(|err| warn!(company = %company_id.0, %err, "job lookup failed"))?;
        let job_ids: Vec<JobId> = jobs.iter().map(|job| job.id.clone()).collect();

        let applications = self
            .store
            .applications_for_jobs(&job_ids)
            .inspect_err(|err| warn!(company = %company_id.0, %err, "application lookup failed"))?;
        let application_ids: Vec<ApplicationId> = applications
            .iter()
            .map(|application| application.id.clone())
            .collect();

        let interviews = self
            .store
            .interviews_for_applications(&application_ids)
            .inspect_err(|err| warn!(company = %company_id.0, %err, "interview lookup failed"))?;

        let report = self.aggregator.aggregate(&jobs, &applications, &interviews);

        info!(
            company = %company_id.0,
            user = session.user_email.as_deref().unwrap_or("anonymous"),
            jobs = jobs.len(),
            applications = report.total_applications,
            interviews = report.total_interviews,
            "hiring report generated"
        );

        Ok(report)
    }

    /// Report over rows supplied directly by the caller, bypassing the store.
    pub fn snapshot_report(&self, snapshot: &HiringSnapshot) -> HiringReport {
        self.aggregator.aggregate(
            &snapshot.jobs,
            &snapshot.applications,
            &snapshot.interviews,
        )
    }
}

/// Error raised by the hiring metrics service.
#[derive(Debug, thiserror::Error)]
pub enum HiringServiceError {
    #[error(transparent)]
    Store(#[from] StoreError),
}
