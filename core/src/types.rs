use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Konfig fra JSON. Alle felt valgfrie; `Default` gir 30–200 kg og 2 desimaler.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Cfg {
    pub min_weight_kg: f64,
    pub max_weight_kg: f64,
    pub round_decimals: Option<u32>,
    pub goal_weight: Option<f64>,
}

impl Default for Cfg {
    fn default() -> Self {
        Self {
            min_weight_kg: 30.0,
            max_weight_kg: 200.0,
            round_decimals: Some(2),
            goal_weight: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct WeeklyAverages {
    pub current_week_avg: Option<f64>,
    pub previous_week_avg: Option<f64>,
}

impl WeeklyAverages {
    /// Denne uka minus forrige uke (negativ = ned i vekt).
    pub fn net_change(&self) -> Option<f64> {
        match (self.current_week_avg, self.previous_week_avg) {
            (Some(c), Some(p)) => Some(c - p),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendResult {
    pub dates: Vec<NaiveDate>,
    pub weights: Vec<f64>,
    pub fitted_values: Vec<f64>,
    pub intercept: f64,
    /// kg/dag (stigningstallet)
    pub daily_change: f64,
    pub r_squared: f64,
}

impl TrendResult {
    pub fn weekly_change(&self) -> f64 {
        self.daily_change * 7.0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum TrendOutcome {
    Fitted(TrendResult),
    InsufficientData { samples: usize, distinct_dates: usize },
}

impl TrendOutcome {
    pub fn fitted(&self) -> Option<&TrendResult> {
        match self {
            TrendOutcome::Fitted(t) => Some(t),
            TrendOutcome::InsufficientData { .. } => None,
        }
    }

    pub fn is_insufficient(&self) -> bool {
        matches!(self, TrendOutcome::InsufficientData { .. })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum GoalEstimate {
    NotEnoughData,
    NoLossTrend,
    Estimate {
        days: f64,
        months: u32,
        remaining_days: u32,
    },
}

/// Milepæler for målframdrift (prosent av veien fra start til mål).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Milestone {
    Bronze,
    Silver,
    Gold,
    Champion,
}

impl Milestone {
    pub const ALL: [Milestone; 4] = [
        Milestone::Bronze,
        Milestone::Silver,
        Milestone::Gold,
        Milestone::Champion,
    ];

    pub fn threshold_pct(self) -> f64 {
        match self {
            Milestone::Bronze => 25.0,
            Milestone::Silver => 50.0,
            Milestone::Gold => 75.0,
            Milestone::Champion => 100.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GoalProgress {
    /// 0–100
    pub pct: f64,
    pub level: Option<Milestone>,
    pub next_milestone: Option<Milestone>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TrendInfo {
    pub status: String,
    pub daily_change: Option<f64>,
    pub weekly_change: Option<f64>,
    pub r_squared: Option<f64>,
    pub fitted_values: Vec<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeightReport {
    pub today: NaiveDate,
    pub entries: usize,
    pub latest_weight: Option<f64>,
    pub weekly: WeeklyAverages,
    pub net_weekly_change: Option<f64>,
    pub trend: TrendInfo,
    pub goal: Option<GoalEstimate>,
    pub goal_projected_date: Option<NaiveDate>,
}
