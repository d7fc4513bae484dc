use super::domain::{Application, ApplicationId, CompanyId, Interview, Job, JobId};

/// Lookups the hiring report needs from the backing data store.
///
/// Each lookup returns an empty list when nothing matches; failures are reserved
/// for the store itself being unreachable.
pub trait HiringDataStore: Send + Sync {
    fn jobs_for_company(&self, company_id: &CompanyId) -> Result<Vec<Job>, StoreError>;
    fn applications_for_jobs(&self, job_ids: &[JobId]) -> Result<Vec<Application>, StoreError>;
    fn interviews_for_applications(
        &self,
        application_ids: &[ApplicationId],
    ) -> Result<Vec<Interview>, StoreError>;
}

/// Error enumeration for store failures.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("data store unavailable: {0}")]
    Unavailable(String),
}
