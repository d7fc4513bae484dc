use super::super::domain::{Application, ApplicationId, ApplicationStatus, Interview, Job, JobId};
use super::ranking::shortlist;
use super::views::{HiringReport, JobPipelineEntry, RankedApplicationView, StatusBreakdownEntry};
use chrono::{DateTime, Utc};
use std::collections::HashMap;

pub const DEFAULT_TOP_LIMIT: usize = 10;

/// Which interview counts when an application has several.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InterviewSelection {
    /// Earliest start time; equal starts keep input order.
    #[default]
    EarliestStart,
    /// First interview encountered in the input list.
    FirstListed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AggregationOptions {
    pub top_limit: usize,
    pub interview_selection: InterviewSelection,
}

impl Default for AggregationOptions {
    fn default() -> Self {
        Self {
            top_limit: DEFAULT_TOP_LIMIT,
            interview_selection: InterviewSelection::default(),
        }
    }
}

/// Pure, total computation of [`HiringReport`] from already-loaded rows.
#[derive(Debug, Clone, Default)]
pub struct HiringMetricsAggregator {
    options: AggregationOptions,
}

impl HiringMetricsAggregator {
    pub fn new(options: AggregationOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> AggregationOptions {
        self.options
    }

    pub fn aggregate(
        &self,
        jobs: &[Job],
        applications: &[Application],
        interviews: &[Interview],
    ) -> HiringReport {
        let starts = interview_starts(interviews, self.options.interview_selection);

        HiringReport {
            total_applications: applications.len(),
            total_interviews: interviews.len(),
            completed_interviews: interviews.iter().filter(|i| i.is_completed()).count(),
            scored_applications: applications.iter().filter(|a| a.score.is_some()).count(),
            acceptance_rate: acceptance_rate(applications),
            avg_time_to_interview_minutes: avg_time_to_interview_minutes(applications, &starts),
            status_breakdown: status_breakdown(applications),
            job_pipeline: job_pipeline(jobs, applications),
            top_applications: top_applications(jobs, applications, self.options.top_limit),
        }
    }
}

/// Aggregates with the default options: earliest interview, top ten.
pub fn aggregate(
    jobs: &[Job],
    applications: &[Application],
    interviews: &[Interview],
) -> HiringReport {
    HiringMetricsAggregator::default().aggregate(jobs, applications, interviews)
}

pub(crate) fn acceptance_rate(applications: &[Application]) -> f64 {
    if applications.is_empty() {
        return 0.0;
    }

    let accepted = applications
        .iter()
        .filter(|application| application.status == ApplicationStatus::Accepted)
        .count();

    accepted as f64 / applications.len() as f64 * 100.0
}

fn interview_starts(
    interviews: &[Interview],
    selection: InterviewSelection,
) -> HashMap<&ApplicationId, DateTime<Utc>> {
    let mut starts: HashMap<&ApplicationId, DateTime<Utc>> = HashMap::new();

    for interview in interviews {
        starts
            .entry(&interview.application_id)
            .and_modify(|current| {
                if selection == InterviewSelection::EarliestStart && interview.started_at < *current
                {
                    *current = interview.started_at;
                }
            })
            .or_insert(interview.started_at);
    }

    starts
}

/// Whole minutes, rounded toward negative infinity.
fn elapsed_minutes(from: DateTime<Utc>, to: DateTime<Utc>) -> i64 {
    (to - from).num_milliseconds().div_euclid(60_000)
}

pub(crate) fn avg_time_to_interview_minutes(
    applications: &[Application],
    starts: &HashMap<&ApplicationId, DateTime<Utc>>,
) -> i64 {
    let (total, interviewed) = applications
        .iter()
        .filter_map(|application| {
            starts
                .get(&application.id)
                .map(|started_at| elapsed_minutes(application.created_at, *started_at))
        })
        .fold((0_i64, 0_i64), |(total, count), minutes| {
            (total + minutes, count + 1)
        });

    if interviewed == 0 {
        0
    } else {
        total.div_euclid(interviewed)
    }
}

fn status_breakdown(applications: &[Application]) -> Vec<StatusBreakdownEntry> {
    ApplicationStatus::ordered()
        .into_iter()
        .map(|status| StatusBreakdownEntry {
            status,
            status_label: status.display_label(),
            tone: status.tone(),
            count: applications
                .iter()
                .filter(|application| application.status == status)
                .count(),
        })
        .collect()
}

fn job_pipeline(jobs: &[Job], applications: &[Application]) -> Vec<JobPipelineEntry> {
    let mut per_job: HashMap<&JobId, (usize, usize)> = HashMap::new();
    for application in applications {
        let entry = per_job.entry(&application.job_id).or_default();
        entry.0 += 1;
        if application.status == ApplicationStatus::Accepted {
            entry.1 += 1;
        }
    }

    jobs.iter()
        .map(|job| {
            let (applications, accepted) = per_job.get(&job.id).copied().unwrap_or_default();
            JobPipelineEntry {
                job_id: job.id.clone(),
                title: job.title.clone(),
                applications,
                accepted,
            }
        })
        .collect()
}

fn top_applications(
    jobs: &[Job],
    applications: &[Application],
    limit: usize,
) -> Vec<RankedApplicationView> {
    let titles: HashMap<&JobId, &str> = jobs
        .iter()
        .map(|job| (&job.id, job.title.as_str()))
        .collect();

    shortlist(applications, limit)
        .into_iter()
        .enumerate()
        .map(|(index, application)| RankedApplicationView {
            rank: index + 1,
            application_id: application.id.clone(),
            job_id: application.job_id.clone(),
            job_title: titles.get(&application.job_id).map(|title| title.to_string()),
            candidate_name: application.candidate_name.clone(),
            candidate_email: application.candidate_email.clone(),
            status: application.status,
            status_label: application.status.display_label(),
            score: application.score,
            created_at: application.created_at,
        })
        .collect()
}
