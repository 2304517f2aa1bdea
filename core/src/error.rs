use chrono::NaiveDate;

/// Feil som stopper en beregning. "For lite data" og tomme uker er ikke feil,
/// de rapporteres som egne utfall (`TrendOutcome::InsufficientData` / `None`).
#[derive(Debug, thiserror::Error)]
pub enum WeightError {
    #[error("invalid weight {weight} on {date}: must be finite and positive")]
    InvalidWeight { date: NaiveDate, weight: f64 },

    #[error("weight {weight} on {date} outside accepted range [{min}, {max}] kg")]
    OutOfRange {
        date: NaiveDate,
        weight: f64,
        min: f64,
        max: f64,
    },

    #[error("invalid date: {0}")]
    InvalidDate(String),

    #[error("invalid measurement: {0}")]
    InvalidMeasurement(String),

    #[error("invalid race time '{0}': expected h:m:s")]
    InvalidRaceTime(String),

    #[error("parse error at {path}: {message}")]
    Parse { path: String, message: String },

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl WeightError {
    pub(crate) fn from_path_error(e: serde_path_to_error::Error<serde_json::Error>) -> Self {
        WeightError::Parse {
            path: e.path().to_string(),
            message: e.inner().to_string(),
        }
    }
}
