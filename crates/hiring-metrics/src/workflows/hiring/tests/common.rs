use std::sync::{Arc, Mutex};

use chrono::{DateTime, Duration, TimeZone, Utc};

use crate::workflows::hiring::domain::{
    Application, ApplicationId, ApplicationStatus, CompanyId, HiringSnapshot, Interview,
    InterviewId, Job, JobId,
};
use crate::workflows::hiring::service::HiringMetricsService;
use crate::workflows::hiring::store::{HiringDataStore, StoreError};

pub(super) fn t0() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 2, 9, 0, 0).unwrap()
}

pub(super) fn minutes(value: i64) -> Duration {
    Duration::minutes(value)
}

pub(super) fn job(id: &str, company: &str) -> Job {
    Job {
        id: JobId(id.to_string()),
        title: format!("Role {id}"),
        company_id: CompanyId(company.to_string()),
    }
}

pub(super) fn application(id: &str, job_id: &str) -> Application {
    Application {
        id: ApplicationId(id.to_string()),
        job_id: JobId(job_id.to_string()),
        candidate_name: format!("Candidate {id}"),
        candidate_email: format!("{id}@candidates.test"),
        status: ApplicationStatus::Submitted,
        score: None,
        created_at: t0(),
    }
}

pub(super) fn scored(id: &str, score: Option<f64>, created_at: DateTime<Utc>) -> Application {
    Application {
        score,
        created_at,
        ..application(id, "job-1")
    }
}

pub(super) fn with_status(mut application: Application, status: ApplicationStatus) -> Application {
    application.status = status;
    application
}

pub(super) fn interview(id: &str, application_id: &str, started_at: DateTime<Utc>) -> Interview {
    Interview {
        id: InterviewId(id.to_string()),
        application_id: ApplicationId(application_id.to_string()),
        started_at,
        completed_at: None,
    }
}

pub(super) fn two_company_snapshot() -> HiringSnapshot {
    HiringSnapshot {
        jobs: vec![
            job("job-1", "acme"),
            job("job-2", "acme"),
            job("job-9", "globex"),
        ],
        applications: vec![
            with_status(application("app-1", "job-1"), ApplicationStatus::Accepted),
            application("app-2", "job-2"),
            application("app-9", "job-9"),
        ],
        interviews: vec![
            interview("int-1", "app-1", t0() + minutes(45)),
            interview("int-9", "app-9", t0() + minutes(5)),
        ],
    }
}

#[derive(Debug, Clone, PartialEq)]
pub(super) enum Lookup {
    Jobs(CompanyId),
    Applications(Vec<JobId>),
    Interviews(Vec<ApplicationId>),
}

/// Store over a snapshot that records every lookup it answers.
pub(super) struct MemoryStore {
    snapshot: HiringSnapshot,
    lookups: Mutex<Vec<Lookup>>,
}

impl MemoryStore {
    pub(super) fn new(snapshot: HiringSnapshot) -> Self {
        Self {
            snapshot,
            lookups: Mutex::new(Vec::new()),
        }
    }

    pub(super) fn lookups(&self) -> Vec<Lookup> {
        self.lookups.lock().expect("lookup mutex poisoned").clone()
    }

    fn record(&self, lookup: Lookup) {
        self.lookups
            .lock()
            .expect("lookup mutex poisoned")
            .push(lookup);
    }
}

impl HiringDataStore for MemoryStore {
    fn jobs_for_company(&self, company_id: &CompanyId) -> Result<Vec<Job>, StoreError> {
        self.record(Lookup::Jobs(company_id.clone()));
        Ok(self
            .snapshot
            .jobs
            .iter()
            .filter(|job| &job.company_id == company_id)
            .cloned()
            .collect())
    }

    fn applications_for_jobs(&self, job_ids: &[JobId]) -> Result<Vec<Application>, StoreError> {
        self.record(Lookup::Applications(job_ids.to_vec()));
        Ok(self
            .snapshot
            .applications
            .iter()
            .filter(|application| job_ids.contains(&application.job_id))
            .cloned()
            .collect())
    }

    fn interviews_for_applications(
        &self,
        application_ids: &[ApplicationId],
    ) -> Result<Vec<Interview>, StoreError> {
        self.record(Lookup::Interviews(application_ids.to_vec()));
        Ok(self
            .snapshot
            .interviews
            .iter()
            .filter(|interview| application_ids.contains(&interview.application_id))
            .cloned()
            .collect())
    }
}

/// Store whose application lookup always fails.
pub(super) struct UnavailableStore;

impl HiringDataStore for UnavailableStore {
    fn jobs_for_company(&self, company_id: &CompanyId) -> Result<Vec<Job>, StoreError> {
        Ok(vec![job("job-1", &company_id.0)])
    }

    fn applications_for_jobs(&self, _job_ids: &[JobId]) -> Result<Vec<Application>, StoreError> {
        Err(StoreError::Unavailable("replica offline".to_string()))
    }

    fn interviews_for_applications(
        &self,
        _application_ids: &[ApplicationId],
    ) -> Result<Vec<Interview>, StoreError> {
        Ok(Vec::new())
    }
}

pub(super) fn build_service() -> (Arc<HiringMetricsService<MemoryStore>>, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::new(two_company_snapshot()));
    let service = Arc::new(HiringMetricsService::new(store.clone()));
    (service, store)
}
