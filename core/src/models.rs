use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::WeightError;

/// Én veiing: dato + vekt i kg.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeightSample {
    pub date: NaiveDate,
    pub weight: f64, // kg
}

impl WeightSample {
    /// Avviser NaN/inf og vekt <= 0. Fysiologisk intervall sjekkes i ingest.
    pub fn new(date: NaiveDate, weight: f64) -> Result<Self, WeightError> {
        let s = Self { date, weight };
        s.validate()?;
        Ok(s)
    }

    pub fn validate(&self) -> Result<(), WeightError> {
        if self.weight.is_finite() && self.weight > 0.0 {
            Ok(())
        } else {
            Err(WeightError::InvalidWeight {
                date: self.date,
                weight: self.weight,
            })
        }
    }
}

/// Vektlogg for én bruker. Alltid sortert på dato, maks én veiing per dato.
/// Kun `Serialize`: innlesing går via `WeightLog::from_samples` / ingest.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct WeightLog {
    samples: Vec<WeightSample>,
}

impl WeightLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bygger logg fra vilkårlig rekkefølge. Senere duplikater vinner.
    pub fn from_samples<I>(samples: I) -> Self
    where
        I: IntoIterator<Item = WeightSample>,
    {
        let mut log = Self::new();
        for s in samples {
            log.upsert(s);
        }
        log
    }

    /// Setter inn eller overskriver veiingen for datoen (last write wins).
    pub fn upsert(&mut self, sample: WeightSample) -> Option<WeightSample> {
        match self.samples.binary_search_by_key(&sample.date, |s| s.date) {
            Ok(idx) => Some(std::mem::replace(&mut self.samples[idx], sample)),
            Err(idx) => {
                self.samples.insert(idx, sample);
                None
            }
        }
    }

    pub fn remove(&mut self, date: NaiveDate) -> Option<WeightSample> {
        self.samples
            .binary_search_by_key(&date, |s| s.date)
            .ok()
            .map(|idx| self.samples.remove(idx))
    }

    pub fn clear(&mut self) {
        self.samples.clear();
    }

    pub fn get(&self, date: NaiveDate) -> Option<&WeightSample> {
        self.samples
            .binary_search_by_key(&date, |s| s.date)
            .ok()
            .map(|idx| &self.samples[idx])
    }

    pub fn samples(&self) -> &[WeightSample] {
        &self.samples
    }

    pub fn first(&self) -> Option<&WeightSample> {
        self.samples.first()
    }

    pub fn latest(&self) -> Option<&WeightSample> {
        self.samples.last()
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Goal {
    pub goal_weight: f64,
    #[serde(default)]
    pub target_date: Option<NaiveDate>,
}

impl Goal {
    /// Positiv = kilo igjen å gå ned, negativ = under målet.
    pub fn remaining_kg(&self, current_weight: f64) -> f64 {
        current_weight - self.goal_weight
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sex {
    Male,
    Female,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    Sedentary,
    LightlyActive,
    #[default]
    ModeratelyActive,
    VeryActive,
    ExtraActive,
}

impl ActivityLevel {
    /// TDEE-multiplikator
    pub fn multiplier(self) -> f64 {
        match self {
            ActivityLevel::Sedentary => 1.2,
            ActivityLevel::LightlyActive => 1.375,
            ActivityLevel::ModeratelyActive => 1.55,
            ActivityLevel::VeryActive => 1.725,
            ActivityLevel::ExtraActive => 1.9,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub height_cm: f64,
    pub age_years: u32,
    pub sex: Sex,
    #[serde(default)]
    pub activity: ActivityLevel,
}
