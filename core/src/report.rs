use chrono::NaiveDate;
use serde_path_to_error as spte;

use crate::error::WeightError;
use crate::goal::{estimate_from_trend, estimate_time_to_goal};
use crate::health::{RoundTo, MAX_ROUND_DECIMALS};
use crate::ingest::{parse_date, parse_records_json};
use crate::models::WeightLog;
use crate::trend::compute_trend;
use crate::types::{Cfg, TrendInfo, TrendOutcome, WeeklyAverages, WeightReport};
use crate::weekly::compute_weekly_averages;

fn round_opt(x: Option<f64>, dp: Option<u32>) -> Option<f64> {
    match dp {
        Some(dp) => x.map(|v| v.round_to(dp)),
        None => x,
    }
}

pub fn parse_cfg(cfg_json: Option<&str>) -> Result<Cfg, WeightError> {
    match cfg_json {
        None => Ok(Cfg::default()),
        Some(s) if s.trim().is_empty() => Ok(Cfg::default()),
        Some(s) => {
            let mut de = serde_json::Deserializer::from_str(s);
            let cfg: Cfg = spte::deserialize(&mut de).map_err(WeightError::from_path_error)?;
            de.end()?;
            if let Some(dp) = cfg.round_decimals {
                if dp > MAX_ROUND_DECIMALS {
                    return Err(WeightError::Parse {
                        path: "round_decimals".into(),
                        message: format!("must be at most {MAX_ROUND_DECIMALS}, got {dp}"),
                    });
                }
            }
            Ok(cfg)
        }
    }
}

/// Samlet rapport for én bruker på dagen `today`.
pub fn build_report(
    weights: &WeightLog,
    today: NaiveDate,
    cfg: &Cfg,
) -> Result<WeightReport, WeightError> {
    let dp = cfg.round_decimals;

    let weekly = compute_weekly_averages(weights.samples(), today)?;
    let net = weekly.net_change();
    let outcome = compute_trend(weights.samples())?;

    let trend = match &outcome {
        TrendOutcome::Fitted(t) => TrendInfo {
            status: "fitted".into(),
            daily_change: round_opt(Some(t.daily_change), dp.map(|d| d.max(4))),
            weekly_change: round_opt(Some(t.weekly_change()), dp),
            r_squared: round_opt(Some(t.r_squared), dp.map(|d| d.max(4))),
            fitted_values: t
                .fitted_values
                .iter()
                .map(|v| dp.map_or(*v, |d| v.round_to(d)))
                .collect(),
        },
        TrendOutcome::InsufficientData { .. } => TrendInfo {
            status: "insufficient_data".into(),
            ..Default::default()
        },
    };

    let (goal, goal_projected_date) = match cfg.goal_weight {
        Some(g) => (
            Some(estimate_time_to_goal(weights, g)),
            outcome.fitted().and_then(|t| estimate_from_trend(t, g)),
        ),
        None => (None, None),
    };

    Ok(WeightReport {
        today,
        entries: weights.len(),
        latest_weight: weights.latest().map(|s| s.weight),
        weekly: WeeklyAverages {
            current_week_avg: round_opt(weekly.current_week_avg, dp),
            previous_week_avg: round_opt(weekly.previous_week_avg, dp),
        },
        net_weekly_change: round_opt(net, dp),
        trend,
        goal,
        goal_projected_date,
    })
}

/// JSON inn (veiinger, dato, valgfri cfg) → JSON-rapport.
pub fn analyze_weight_json(
    records_json: &str,
    today: &str,
    cfg_json: Option<&str>,
) -> Result<String, WeightError> {
    let cfg = parse_cfg(cfg_json)?;
    let today = parse_date(today)?;
    let weights = parse_records_json(records_json, &cfg)?;
    let report = build_report(&weights, today, &cfg)?;
    log::debug!(
        "report: entries={} trend={}",
        report.entries,
        report.trend.status
    );
    Ok(serde_json::to_string(&report)?)
}
