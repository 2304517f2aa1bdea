use serde::{Deserialize, Serialize};

use crate::error::WeightError;
use crate::models::{ActivityLevel, Profile, Sex};

/// Energi i 1 kg kroppsfett (kcal)
pub const KCAL_PER_KG_FAT: f64 = 7700.0;

/// Flere desimaler enn dette har ikke f64 å gi; 10^dp går mot inf.
pub const MAX_ROUND_DECIMALS: u32 = 15;

// --- RoundTo trait (offentlig, brukt av report/ingest) ---
pub trait RoundTo {
    fn round_to(self, dp: u32) -> f64;
}

impl RoundTo for f64 {
    #[inline]
    fn round_to(self, dp: u32) -> f64 {
        if dp == 0 {
            return self.round();
        }
        let factor = 10_f64.powi(dp.min(MAX_ROUND_DECIMALS) as i32);
        (self * factor).round() / factor
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BmiCategory {
    Underweight,
    Normal,
    Overweight,
    Obese,
}

impl BmiCategory {
    pub fn from_bmi(bmi: f64) -> Self {
        if bmi < 18.5 {
            BmiCategory::Underweight
        } else if bmi < 25.0 {
            BmiCategory::Normal
        } else if bmi < 30.0 {
            BmiCategory::Overweight
        } else {
            BmiCategory::Obese
        }
    }
}

/// BMI = kg / m²
pub fn bmi(weight_kg: f64, height_cm: f64) -> Result<f64, WeightError> {
    if !(height_cm.is_finite() && height_cm > 0.0) {
        return Err(WeightError::InvalidMeasurement(format!(
            "height must be positive, got {height_cm}"
        )));
    }
    let m = height_cm / 100.0;
    Ok(weight_kg / (m * m))
}

/// Vekt (kg) som gir BMI 18.5–24.9 for gitt høyde.
pub fn healthy_weight_range(height_cm: f64) -> Result<(f64, f64), WeightError> {
    if !(height_cm.is_finite() && height_cm > 0.0) {
        return Err(WeightError::InvalidMeasurement(format!(
            "height must be positive, got {height_cm}"
        )));
    }
    let m2 = (height_cm / 100.0).powi(2);
    Ok((18.5 * m2, 24.9 * m2))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BodyFatCategory {
    EssentialFat,
    Athletes,
    Fitness,
    Average,
    Obese,
}

impl BodyFatCategory {
    pub fn classify(sex: Sex, pct: f64) -> Self {
        let limits = match sex {
            Sex::Male => [6.0, 13.0, 17.0, 25.0],
            Sex::Female => [14.0, 21.0, 25.0, 32.0],
        };
        if pct < limits[0] {
            BodyFatCategory::EssentialFat
        } else if pct < limits[1] {
            BodyFatCategory::Athletes
        } else if pct < limits[2] {
            BodyFatCategory::Fitness
        } else if pct < limits[3] {
            BodyFatCategory::Average
        } else {
            BodyFatCategory::Obese
        }
    }
}

/// US Navy-formelen (cm), rundet til 1 desimal. Hofte kreves for kvinner.
pub fn body_fat_pct(
    sex: Sex,
    height_cm: f64,
    waist_cm: f64,
    neck_cm: f64,
    hip_cm: Option<f64>,
) -> Result<f64, WeightError> {
    if height_cm.is_nan() || height_cm <= 0.0 {
        return Err(WeightError::InvalidMeasurement(format!(
            "height must be positive, got {height_cm}"
        )));
    }

    let pct = match sex {
        Sex::Male => {
            let girth = waist_cm - neck_cm;
            if girth.is_nan() || girth <= 0.0 {
                return Err(WeightError::InvalidMeasurement(
                    "waist must be larger than neck".into(),
                ));
            }
            495.0 / (1.0324 - 0.19077 * girth.log10() + 0.15456 * height_cm.log10()) - 450.0
        }
        Sex::Female => {
            let hip = hip_cm.ok_or_else(|| {
                WeightError::InvalidMeasurement("hip measurement required for women".into())
            })?;
            let girth = waist_cm + hip - neck_cm;
            if girth.is_nan() || girth <= 0.0 {
                return Err(WeightError::InvalidMeasurement(
                    "waist + hip must be larger than neck".into(),
                ));
            }
            495.0 / (1.29579 - 0.35004 * girth.log10() + 0.22100 * height_cm.log10()) - 450.0
        }
    };

    if !pct.is_finite() {
        return Err(WeightError::InvalidMeasurement(
            "body fat formula produced a non-finite value".into(),
        ));
    }
    Ok(pct.round_to(1))
}

/// Mifflin–St Jeor (kcal/dag)
pub fn bmr(sex: Sex, weight_kg: f64, height_cm: f64, age_years: u32) -> f64 {
    let base = 10.0 * weight_kg + 6.25 * height_cm - 5.0 * f64::from(age_years);
    match sex {
        Sex::Male => base + 5.0,
        Sex::Female => base - 161.0,
    }
}

pub fn bmr_for(profile: &Profile, weight_kg: f64) -> f64 {
    bmr(profile.sex, weight_kg, profile.height_cm, profile.age_years)
}

pub fn tdee(bmr: f64, activity: ActivityLevel) -> f64 {
    bmr * activity.multiplier()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum FatLossRate {
    /// 0.25 kg/uke
    Slow,
    /// 0.5 kg/uke
    #[default]
    Moderate,
    /// 1 kg/uke
    Aggressive,
}

impl FatLossRate {
    pub fn daily_deficit(self) -> f64 {
        match self {
            FatLossRate::Slow => 275.0,
            FatLossRate::Moderate => 550.0,
            FatLossRate::Aggressive => 1100.0,
        }
    }
}

pub fn target_calories(tdee: f64, rate: FatLossRate) -> f64 {
    tdee - rate.daily_deficit()
}

/// Hele dager til målvekt ved fast kaloriinntak.
/// `None` når det ikke er noe å gå ned, eller inntaket ikke gir underskudd.
pub fn days_to_goal_by_deficit(
    current_kg: f64,
    target_kg: f64,
    tdee: f64,
    daily_calories: f64,
) -> Option<u32> {
    let kg_to_lose = current_kg - target_kg;
    let deficit = tdee - daily_calories;
    if kg_to_lose <= 0.0 || deficit <= 0.0 {
        return None;
    }
    Some((kg_to_lose * KCAL_PER_KG_FAT / deficit).floor() as u32)
}
