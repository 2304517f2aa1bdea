use serde::{Deserialize, Serialize};

use crate::error::WeightError;

/// Riegel-eksponent
pub const RIEGEL_EXPONENT: f64 = 1.06;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RaceDistance {
    FiveK,
    TenK,
    HalfMarathon,
    Marathon,
}

impl RaceDistance {
    pub const ALL: [RaceDistance; 4] = [
        RaceDistance::FiveK,
        RaceDistance::TenK,
        RaceDistance::HalfMarathon,
        RaceDistance::Marathon,
    ];

    pub fn km(self) -> f64 {
        match self {
            RaceDistance::FiveK => 5.0,
            RaceDistance::TenK => 10.0,
            RaceDistance::HalfMarathon => 21.1,
            RaceDistance::Marathon => 42.2,
        }
    }
}

/// "h:m:s" → sekunder
pub fn parse_race_time(raw: &str) -> Result<u32, WeightError> {
    let parts: Vec<&str> = raw.trim().split(':').collect();
    if parts.len() != 3 {
        return Err(WeightError::InvalidRaceTime(raw.to_string()));
    }
    let mut vals = [0u32; 3];
    for (v, p) in vals.iter_mut().zip(&parts) {
        *v = p
            .trim()
            .parse()
            .map_err(|_| WeightError::InvalidRaceTime(raw.to_string()))?;
    }
    let [h, m, s] = vals;
    if m >= 60 || s >= 60 {
        return Err(WeightError::InvalidRaceTime(raw.to_string()));
    }
    h.checked_mul(3600)
        .and_then(|x| x.checked_add(m * 60 + s))
        .ok_or_else(|| WeightError::InvalidRaceTime(raw.to_string()))
}

/// Sekunder per km
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrainingPaces {
    pub race: f64,
    pub easy: f64,
    pub tempo: f64,
    pub interval: f64,
    pub recovery: f64,
}

pub fn training_paces(total_secs: u32, distance: RaceDistance) -> TrainingPaces {
    let race = f64::from(total_secs) / distance.km();
    TrainingPaces {
        race,
        easy: race * 1.3,
        tempo: race * 1.1,
        interval: race * 0.9,
        recovery: race * 1.4,
    }
}

/// Riegel: t2 = t1 * (d2/d1)^1.06
pub fn predict_time(base_secs: f64, base_km: f64, target_km: f64) -> f64 {
    base_secs * (target_km / base_km).powf(RIEGEL_EXPONENT)
}

/// Prediksjon for de andre standarddistansene (selve inngangsdistansen hoppes over).
pub fn predict_all(total_secs: u32, from: RaceDistance) -> Vec<(RaceDistance, f64)> {
    RaceDistance::ALL
        .iter()
        .filter(|d| **d != from)
        .map(|d| (*d, predict_time(f64::from(total_secs), from.km(), d.km())))
        .collect()
}

/// Nødvendig tempo (sek/km) for å løpe `distance_km` på `total_secs`.
pub fn target_pace(total_secs: u32, distance_km: f64) -> Option<f64> {
    if distance_km > 0.0 {
        Some(f64::from(total_secs) / distance_km)
    } else {
        None
    }
}

/// 330.0 → "5:30"
pub fn format_pace(secs_per_km: f64) -> String {
    let total = secs_per_km.round() as u64;
    format!("{}:{:02}", total / 60, total % 60)
}
