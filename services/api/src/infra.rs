use hiring_metrics::error::AppError;
use hiring_metrics::workflows::hiring::{
    Application, ApplicationId, CompanyId, HiringDataStore, HiringSnapshot, Interview, Job, JobId,
    StoreError,
};
use metrics_exporter_prometheus::PrometheusHandle;
use std::collections::HashSet;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Snapshot-backed store standing in for the hosted database.
#[derive(Default, Clone)]
pub(crate) struct InMemoryHiringStore {
    snapshot: Arc<Mutex<HiringSnapshot>>,
}

impl InMemoryHiringStore {
    pub(crate) fn from_snapshot(snapshot: HiringSnapshot) -> Self {
        Self {
            snapshot: Arc::new(Mutex::new(snapshot)),
        }
    }
}

impl HiringDataStore for InMemoryHiringStore {
    fn jobs_for_company(&self, company_id: &CompanyId) -> Result<Vec<Job>, StoreError> {
        let guard = self.snapshot.lock().expect("store mutex poisoned");
        Ok(guard
            .jobs
            .iter()
            .filter(|job| &job.company_id == company_id)
            .cloned()
            .collect())
    }

    fn applications_for_jobs(&self, job_ids: &[JobId]) -> Result<Vec<Application>, StoreError> {
        let wanted: HashSet<&JobId> = job_ids.iter().collect();
        let guard = self.snapshot.lock().expect("store mutex poisoned");
        Ok(guard
            .applications
            .iter()
            .filter(|application| wanted.contains(&application.job_id))
            .cloned()
            .collect())
    }

    fn interviews_for_applications(
        &self,
        application_ids: &[ApplicationId],
    ) -> Result<Vec<Interview>, StoreError> {
        let wanted: HashSet<&ApplicationId> = application_ids.iter().collect();
        let guard = self.snapshot.lock().expect("store mutex poisoned");
        Ok(guard
            .interviews
            .iter()
            .filter(|interview| wanted.contains(&interview.application_id))
            .cloned()
            .collect())
    }
}

pub(crate) fn load_snapshot(path: &Path) -> Result<HiringSnapshot, AppError> {
    let file = File::open(path)?;
    let snapshot = HiringSnapshot::from_json_reader(BufReader::new(file))?;
    Ok(snapshot)
}
