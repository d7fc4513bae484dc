use crate::infra::{load_snapshot, InMemoryHiringStore};
use chrono::{DateTime, Duration, Utc};
use clap::Args;
use hiring_metrics::error::AppError;
use hiring_metrics::workflows::hiring::{
    Application, ApplicationId, ApplicationStatus, CompanyId, HiringMetricsService,
    HiringReport, HiringSnapshot, Interview, InterviewId, Job, JobId, Session,
};
use std::path::PathBuf;
use std::sync::Arc;

const DEMO_COMPANY: &str = "demo-co";

#[derive(Args, Debug)]
pub(crate) struct ReportArgs {
    /// JSON snapshot with `jobs`, `applications`, and `interviews` arrays
    #[arg(long)]
    pub(crate) snapshot: PathBuf,
    /// Company identifier whose jobs the report covers
    #[arg(long)]
    pub(crate) company: String,
    /// Print the report as JSON instead of a text summary
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Print the report as JSON instead of a text summary
    #[arg(long)]
    pub(crate) json: bool,
}

pub(crate) fn run_report(args: ReportArgs) -> Result<(), AppError> {
    let ReportArgs {
        snapshot,
        company,
        json,
    } = args;

    let snapshot = load_snapshot(&snapshot)?;
    let report = company_report(snapshot, Session::for_company(CompanyId(company.clone())))?;
    print_report(&company, &report, json)
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let snapshot = synthetic_snapshot(Utc::now());
    let report = company_report(
        snapshot,
        Session::for_company(CompanyId(DEMO_COMPANY.to_string())),
    )?;

    if !args.json {
        println!("Hiring metrics demo (synthetic pipeline)");
    }
    print_report(DEMO_COMPANY, &report, args.json)
}

fn company_report(snapshot: HiringSnapshot, session: Session) -> Result<HiringReport, AppError> {
    let store = Arc::new(InMemoryHiringStore::from_snapshot(snapshot));
    let service = HiringMetricsService::new(store);
    Ok(service.company_report(&session)?)
}

fn print_report(company: &str, report: &HiringReport, json: bool) -> Result<(), AppError> {
    if json {
        println!("{}", serde_json::to_string_pretty(report)?);
    } else {
        print!("{}", render_report(company, report));
    }
    Ok(())
}

pub(crate) fn render_report(company: &str, report: &HiringReport) -> String {
    let mut out = String::new();
    out.push_str(&format!("\nHiring report for {company}\n"));
    out.push_str(&format!(
        "- {} applications ({} scored) | {:.1}% accepted\n",
        report.total_applications, report.scored_applications, report.acceptance_rate
    ));
    out.push_str(&format!(
        "- {} interviews ({} completed) | {} min average time to interview\n",
        report.total_interviews, report.completed_interviews, report.avg_time_to_interview_minutes
    ));

    out.push_str("Pipeline:\n");
    for entry in &report.status_breakdown {
        out.push_str(&format!("  - {}: {}\n", entry.status_label, entry.count));
    }

    if !report.job_pipeline.is_empty() {
        out.push_str("Jobs:\n");
        for entry in &report.job_pipeline {
            out.push_str(&format!(
                "  - {} [{}]: {} applications, {} accepted\n",
                entry.title, entry.job_id.0, entry.applications, entry.accepted
            ));
        }
    }

    if report.top_applications.is_empty() {
        out.push_str("No applications yet.\n");
    } else {
        out.push_str("Top applications:\n");
        for entry in &report.top_applications {
            let score = entry
                .score
                .map(|score| format!("{score:.1}"))
                .unwrap_or_else(|| "unscored".to_string());
            out.push_str(&format!(
                "  {:>2}. {} <{}> | {} | {} | applied {}\n",
                entry.rank,
                entry.candidate_name,
                entry.candidate_email,
                entry.job_title.as_deref().unwrap_or(&entry.job_id.0),
                score,
                entry.created_at.format("%Y-%m-%d %H:%M")
            ));
        }
    }

    out
}

/// Small but varied pipeline: two roles, every status, one unscored tie.
pub(crate) fn synthetic_snapshot(now: DateTime<Utc>) -> HiringSnapshot {
    let company_id = CompanyId(DEMO_COMPANY.to_string());
    let jobs = vec![
        Job {
            id: JobId("platform-eng".to_string()),
            title: "Platform Engineer".to_string(),
            company_id: company_id.clone(),
        },
        Job {
            id: JobId("ux-research".to_string()),
            title: "UX Researcher".to_string(),
            company_id,
        },
    ];

    let people: [(&str, &str, ApplicationStatus, Option<f64>, i64); 8] = [
        ("Ines Duarte", "platform-eng", ApplicationStatus::Accepted, Some(94.0), 96),
        ("Kofi Mensah", "platform-eng", ApplicationStatus::Interviewed, Some(88.5), 80),
        ("Mei Tanaka", "platform-eng", ApplicationStatus::Rejected, Some(52.0), 72),
        ("Lars Berg", "platform-eng", ApplicationStatus::Submitted, None, 6),
        ("Amara Okafor", "ux-research", ApplicationStatus::Invited, Some(88.5), 30),
        ("Diego Ramos", "ux-research", ApplicationStatus::Screened, Some(71.0), 20),
        ("Sana Iqbal", "ux-research", ApplicationStatus::Submitted, None, 3),
        ("Tom Weber", "ux-research", ApplicationStatus::Rejected, Some(40.0), 50),
    ];

    let applications: Vec<Application> = people
        .iter()
        .enumerate()
        .map(|(index, (name, job, status, score, hours_ago))| Application {
            id: ApplicationId(format!("app-{:03}", index + 1)),
            job_id: JobId(job.to_string()),
            candidate_name: name.to_string(),
            candidate_email: format!(
                "{}@candidates.example",
                name.to_ascii_lowercase().replace(' ', ".")
            ),
            status: *status,
            score: *score,
            created_at: now - Duration::hours(*hours_ago),
        })
        .collect();

    let interview = |id: &str, application: &str, hours_ago: i64, done: bool| {
        let started_at = now - Duration::hours(hours_ago);
        Interview {
            id: InterviewId(id.to_string()),
            application_id: ApplicationId(application.to_string()),
            started_at,
            completed_at: done.then(|| started_at + Duration::minutes(45)),
        }
    };

    let interviews = vec![
        interview("int-001", "app-001", 48, true),
        interview("int-002", "app-002", 60, true),
        interview("int-003", "app-003", 70, true),
        interview("int-005", "app-005", 2, false),
    ];

    HiringSnapshot {
        jobs,
        applications,
        interviews,
    }
}
