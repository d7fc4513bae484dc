mod aggregate;
mod ranking;
pub mod views;

pub use aggregate::{
    aggregate, AggregationOptions, HiringMetricsAggregator, InterviewSelection, DEFAULT_TOP_LIMIT,
};
pub use views::{HiringReport, JobPipelineEntry, RankedApplicationView, StatusBreakdownEntry};
