pub mod error;
pub mod goal;
pub mod health;
pub mod ingest;
pub mod models;
pub mod report;
pub mod running;
pub mod telemetry;
pub mod trend;
pub mod types;
pub mod weekly;

#[cfg(feature = "python")]
mod py;

pub use error::WeightError;
pub use health::RoundTo;
pub use ingest::{parse_records_json, records_to_json};
pub use models::{ActivityLevel, Goal, Profile, Sex, WeightLog, WeightSample};
pub use report::{analyze_weight_json, build_report};
pub use trend::compute_trend;
pub use types::{
    Cfg, GoalEstimate, GoalProgress, Milestone, TrendOutcome, TrendResult, WeeklyAverages,
    WeightReport,
};
pub use weekly::compute_weekly_averages;
