//! Hiring pipeline statistics for company dashboards.
//!
//! Rows are fetched through [`HiringDataStore`] and folded into a
//! [`HiringReport`] by the pure aggregator in [`report`].

pub mod domain;
pub mod report;
pub mod router;
pub mod service;
pub mod store;

#[cfg(test)]
mod tests;

pub use domain::{
    Application, ApplicationId, ApplicationStatus, CompanyId, HiringSnapshot, Interview,
    InterviewId, Job, JobId, Session, StatusTone,
};
pub use report::{
    aggregate, AggregationOptions, HiringMetricsAggregator, HiringReport, InterviewSelection,
    JobPipelineEntry, RankedApplicationView, StatusBreakdownEntry, DEFAULT_TOP_LIMIT,
};
pub use router::hiring_router;
pub use service::{HiringMetricsService, HiringServiceError};
pub use store::{HiringDataStore, StoreError};
