use super::super::domain::{ApplicationId, ApplicationStatus, JobId, StatusTone};
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatusBreakdownEntry {
    pub status: ApplicationStatus,
    pub status_label: &'static str,
    pub tone: StatusTone,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JobPipelineEntry {
    pub job_id: JobId,
    pub title: String,
    pub applications: usize,
    pub accepted: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedApplicationView {
    pub rank: usize,
    pub application_id: ApplicationId,
    pub job_id: JobId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_title: Option<String>,
    pub candidate_name: String,
    pub candidate_email: String,
    pub status: ApplicationStatus,
    pub status_label: &'static str,
    pub score: Option<f64>,
    pub created_at: DateTime<Utc>,
}

/// Dashboard statistics for one company's hiring pipeline.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HiringReport {
    pub total_applications: usize,
    pub total_interviews: usize,
    pub completed_interviews: usize,
    pub scored_applications: usize,
    /// Percentage of applications in the accepted state, `0.0` with no applications.
    pub acceptance_rate: f64,
    pub avg_time_to_interview_minutes: i64,
    pub status_breakdown: Vec<StatusBreakdownEntry>,
    pub job_pipeline: Vec<JobPipelineEntry>,
    pub top_applications: Vec<RankedApplicationView>,
}
