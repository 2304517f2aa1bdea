use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use serde_path_to_error as spte;

use crate::error::WeightError;
use crate::health::RoundTo;
use crate::models::{WeightLog, WeightSample};
use crate::telemetry;
use crate::types::Cfg;

// Tolerant inngang: aksepter både CSV-kolonnenavn (Date/Weight) og snake_case
#[derive(Debug, Deserialize)]
struct RecordIn {
    #[serde(alias = "Date")]
    date: String,
    #[serde(alias = "Weight", alias = "weight_kg")]
    weight: f64,
}

#[derive(Debug, Serialize)]
struct RecordOut {
    date: NaiveDate,
    weight: f64,
}

/// "2024-01-01", "2024-01-01T07:30:00" og "2024-01-01 07:30:00" gir samme dato.
pub fn parse_date(raw: &str) -> Result<NaiveDate, WeightError> {
    let s = raw.trim();
    if let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Ok(d);
    }
    for fmt in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Ok(dt.date());
        }
    }
    Err(WeightError::InvalidDate(raw.to_string()))
}

/// Sjekker at vekten er gyldig og innenfor `[cfg.min_weight_kg, cfg.max_weight_kg]`.
pub fn validate_sample(sample: &WeightSample, cfg: &Cfg) -> Result<(), WeightError> {
    sample.validate()?;
    if sample.weight < cfg.min_weight_kg || sample.weight > cfg.max_weight_kg {
        return Err(WeightError::OutOfRange {
            date: sample.date,
            weight: sample.weight,
            min: cfg.min_weight_kg,
            max: cfg.max_weight_kg,
        });
    }
    Ok(())
}

/// JSON-array av `{date, weight}` → validert `WeightLog`.
/// Første ugyldige post avbryter hele innlesingen.
pub fn parse_records_json(json_str: &str, cfg: &Cfg) -> Result<WeightLog, WeightError> {
    let mut de = serde_json::Deserializer::from_str(json_str);
    let records: Vec<RecordIn> =
        spte::deserialize(&mut de).map_err(WeightError::from_path_error)?;
    de.end()?;

    let mut out = WeightLog::new();
    for (i, r) in records.into_iter().enumerate() {
        let date = parse_date(&r.date).map_err(|e| {
            telemetry::inc_ingest_rejected();
            WeightError::Parse {
                path: format!("[{i}].date"),
                message: e.to_string(),
            }
        })?;
        let sample = WeightSample {
            date,
            weight: r.weight,
        };
        if let Err(e) = validate_sample(&sample, cfg) {
            telemetry::inc_ingest_rejected();
            log::warn!("ingest: rejected record {i}: {e}");
            return Err(e);
        }
        if let Some(prev) = out.upsert(sample) {
            log::debug!(
                "ingest: {date} overwritten ({} -> {})",
                prev.weight,
                sample.weight
            );
        }
    }

    log::debug!("ingest: {} records accepted", out.len());
    Ok(out)
}

/// Serialiserer loggen som `[{date, weight}]`, vekt rundet til 2 desimaler.
pub fn records_to_json(weights: &WeightLog) -> Result<String, WeightError> {
    let out: Vec<RecordOut> = weights
        .samples()
        .iter()
        .map(|s| RecordOut {
            date: s.date,
            weight: s.weight.round_to(2),
        })
        .collect();
    Ok(serde_json::to_string(&out)?)
}
