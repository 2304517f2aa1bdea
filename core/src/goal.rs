use chrono::{Duration, NaiveDate};

use crate::models::{Goal, WeightLog};
use crate::types::{GoalEstimate, GoalProgress, Milestone, TrendResult};

/// Snittlengde på en måned (dager)
pub const DAYS_PER_MONTH: f64 = 30.44;

/// Tid til målvekt ut fra endepunktene i loggen (første vs siste veiing).
/// Avstanden tas med `abs()`: står man allerede på eller under målet, gis
/// fortsatt et positivt estimat (tiden det ville tatt å nå målet fra siste veiing).
pub fn estimate_time_to_goal(log: &WeightLog, goal_weight: f64) -> GoalEstimate {
    let (first, last) = match (log.first(), log.latest()) {
        (Some(f), Some(l)) if log.len() >= 2 => (f, l),
        _ => return GoalEstimate::NotEnoughData,
    };

    let span_days = (last.date - first.date).num_days();
    if span_days <= 0 {
        return GoalEstimate::NotEnoughData;
    }

    // positiv = vektnedgang per dag
    let loss_per_day = (first.weight - last.weight) / span_days as f64;
    if loss_per_day <= 0.0 {
        return GoalEstimate::NoLossTrend;
    }

    let days = ((goal_weight - last.weight) / loss_per_day).abs();
    GoalEstimate::Estimate {
        days,
        months: (days / DAYS_PER_MONTH).floor() as u32,
        remaining_days: (days % DAYS_PER_MONTH).floor() as u32,
    }
}

/// Forlenger trendlinja til den treffer målvekta.
/// `None` hvis linja er flat eller peker bort fra målet.
pub fn estimate_from_trend(trend: &TrendResult, goal_weight: f64) -> Option<NaiveDate> {
    let last_date = *trend.dates.last()?;
    let current = *trend.fitted_values.last()?;
    let remaining = goal_weight - current;

    if remaining == 0.0 {
        return Some(last_date);
    }
    if trend.daily_change == 0.0 || remaining.signum() != trend.daily_change.signum() {
        return None;
    }

    let days = (remaining / trend.daily_change).ceil();
    // tak på ~270 år
    if !days.is_finite() || days > 100_000.0 {
        return None;
    }
    last_date.checked_add_signed(Duration::days(days as i64))
}

/// Hvor langt man har kommet fra første veiing mot målet, klemt til 0–100 %.
/// `None` for tom logg.
pub fn goal_progress(log: &WeightLog, goal: &Goal) -> Option<GoalProgress> {
    let start = log.first()?.weight;
    let current = log.latest()?.weight;
    let total = start - goal.goal_weight;

    let pct = if total == 0.0 {
        // startet på målet: ferdig så lenge man ikke har gått bort fra det
        if current == goal.goal_weight {
            100.0
        } else {
            0.0
        }
    } else {
        ((start - current) / total * 100.0).clamp(0.0, 100.0)
    };

    let level = Milestone::ALL
        .iter()
        .rev()
        .find(|m| pct >= m.threshold_pct())
        .copied();
    let next_milestone = Milestone::ALL
        .iter()
        .find(|m| pct < m.threshold_pct())
        .copied();

    Some(GoalProgress {
        pct,
        level,
        next_milestone,
    })
}

/// Dager fra `today` til måldatoen. Negativt når datoen er passert.
pub fn days_until(goal: &Goal, today: NaiveDate) -> Option<i64> {
    goal.target_date.map(|t| (t - today).num_days())
}
