use super::super::domain::Application;
use std::cmp::Ordering;

/// Scored applications first, higher scores first, then most recent first.
pub(crate) fn shortlist_order(left: &Application, right: &Application) -> Ordering {
    let by_score = match (left.score, right.score) {
        // finite scores always compare; -0.0 and 0.0 count as equal
        (Some(l), Some(r)) => r.partial_cmp(&l).unwrap_or(Ordering::Equal),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    };

    by_score.then_with(|| right.created_at.cmp(&left.created_at))
}

/// Stable: applications with identical keys keep their input order.
pub(crate) fn shortlist(applications: &[Application], limit: usize) -> Vec<&Application> {
    let mut ranked: Vec<&Application> = applications.iter().collect();
    ranked.sort_by(|left, right| shortlist_order(left, right));
    ranked.truncate(limit);
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflows::hiring::domain::{ApplicationId, ApplicationStatus, JobId};
    use chrono::{DateTime, Duration, TimeZone, Utc};

    fn base() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 4, 1, 8, 0, 0).unwrap()
    }

    fn application(id: &str, score: Option<f64>, created_at: DateTime<Utc>) -> Application {
        Application {
            id: ApplicationId(id.to_string()),
            job_id: JobId("job-1".to_string()),
            candidate_name: id.to_string(),
            candidate_email: format!("{id}@example.com"),
            status: ApplicationStatus::Submitted,
            score,
            created_at,
        }
    }

    fn ids(ranked: &[&Application]) -> Vec<String> {
        ranked.iter().map(|app| app.id.0.clone()).collect()
    }

    #[test]
    fn scored_before_unscored_even_when_older() {
        let old_scored = application("scored", Some(1.0), base());
        let new_unscored = application("unscored", None, base() + Duration::days(3));
        assert_eq!(
            shortlist_order(&old_scored, &new_unscored),
            Ordering::Less
        );
        assert_eq!(
            shortlist_order(&new_unscored, &old_scored),
            Ordering::Greater
        );
    }

    #[test]
    fn negative_scores_still_rank_above_missing_scores() {
        let applications = vec![
            application("missing", None, base()),
            application("negative", Some(-5.0), base()),
        ];
        assert_eq!(ids(&shortlist(&applications, 10)), ["negative", "missing"]);
    }

    #[test]
    fn unscored_ties_break_by_recency() {
        let applications = vec![
            application("older", None, base()),
            application("newer", None, base() + Duration::minutes(1)),
        ];
        assert_eq!(ids(&shortlist(&applications, 10)), ["newer", "older"]);
    }

    #[test]
    fn identical_keys_keep_input_order() {
        let applications = vec![
            application("first", Some(7.0), base()),
            application("second", Some(7.0), base()),
            application("third", Some(7.0), base()),
        ];
        assert_eq!(
            ids(&shortlist(&applications, 10)),
            ["first", "second", "third"]
        );
    }

    #[test]
    fn signed_zero_scores_tie_and_break_by_recency() {
        let applications = vec![
            application("older_positive_zero", Some(0.0), base()),
            application("newer_negative_zero", Some(-0.0), base() + Duration::minutes(5)),
        ];
        assert_eq!(
            ids(&shortlist(&applications, 10)),
            ["newer_negative_zero", "older_positive_zero"]
        );
    }

    #[test]
    fn zero_limit_yields_empty_shortlist() {
        let applications = vec![application("only", Some(3.0), base())];
        assert!(shortlist(&applications, 0).is_empty());
    }
}
