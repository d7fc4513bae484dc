use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Identifier wrapper for companies owning job postings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CompanyId(pub String);

/// Identifier wrapper for job postings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JobId(pub String);

/// Identifier wrapper for submitted applications.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ApplicationId(pub String);

/// Identifier wrapper for scheduled interviews.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InterviewId(pub String);

/// Job posting owned by a single company.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Job {
    pub id: JobId,
    pub title: String,
    pub company_id: CompanyId,
}

/// Candidate application against exactly one job.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Application {
    pub id: ApplicationId,
    pub job_id: JobId,
    pub candidate_name: String,
    pub candidate_email: String,
    pub status: ApplicationStatus,
    #[serde(default)]
    pub score: Option<f64>,
    pub created_at: DateTime<Utc>,
}

/// Interview scheduled for exactly one application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interview {
    pub id: InterviewId,
    pub application_id: ApplicationId,
    pub started_at: DateTime<Utc>,
    #[serde(default)]
    pub completed_at: Option<DateTime<Utc>>,
}

impl Interview {
    pub fn is_completed(&self) -> bool {
        self.completed_at.is_some()
    }
}

/// Pipeline position of an application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApplicationStatus {
    Submitted,
    Screened,
    Invited,
    Interviewed,
    Rejected,
    Accepted,
}

impl ApplicationStatus {
    /// Pipeline order used wherever statuses are listed.
    pub const fn ordered() -> [ApplicationStatus; 6] {
        [
            ApplicationStatus::Submitted,
            ApplicationStatus::Screened,
            ApplicationStatus::Invited,
            ApplicationStatus::Interviewed,
            ApplicationStatus::Rejected,
            ApplicationStatus::Accepted,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            ApplicationStatus::Submitted => "submitted",
            ApplicationStatus::Screened => "screened",
            ApplicationStatus::Invited => "invited",
            ApplicationStatus::Interviewed => "interviewed",
            ApplicationStatus::Rejected => "rejected",
            ApplicationStatus::Accepted => "accepted",
        }
    }

    pub const fn display_label(self) -> &'static str {
        match self {
            ApplicationStatus::Submitted => "Submitted",
            ApplicationStatus::Screened => "Screened",
            ApplicationStatus::Invited => "Invited to Interview",
            ApplicationStatus::Interviewed => "Interviewed",
            ApplicationStatus::Rejected => "Rejected",
            ApplicationStatus::Accepted => "Accepted",
        }
    }

    pub const fn tone(self) -> StatusTone {
        match self {
            ApplicationStatus::Submitted => StatusTone::Neutral,
            ApplicationStatus::Screened
            | ApplicationStatus::Invited
            | ApplicationStatus::Interviewed => StatusTone::Progress,
            ApplicationStatus::Rejected => StatusTone::Negative,
            ApplicationStatus::Accepted => StatusTone::Positive,
        }
    }
}

/// Presentation hint for status badges; the display layer picks the colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusTone {
    Neutral,
    Progress,
    Positive,
    Negative,
}

/// Identity of the caller requesting company data.
///
/// Passed explicitly into anything that scopes lookups to a company instead of
/// being read from process-wide state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub company_id: CompanyId,
    pub user_email: Option<String>,
}

impl Session {
    pub fn for_company(company_id: CompanyId) -> Self {
        Self {
            company_id,
            user_email: None,
        }
    }

    pub fn with_user_email(mut self, email: impl Into<String>) -> Self {
        self.user_email = Some(email.into());
        self
    }
}

/// Full data set as exported from the backing store.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HiringSnapshot {
    #[serde(default)]
    pub jobs: Vec<Job>,
    #[serde(default)]
    pub applications: Vec<Application>,
    #[serde(default)]
    pub interviews: Vec<Interview>,
}

impl HiringSnapshot {
    pub fn from_json_reader<R: std::io::Read>(reader: R) -> Result<Self, serde_json::Error> {
        serde_json::from_reader(reader)
    }
}
