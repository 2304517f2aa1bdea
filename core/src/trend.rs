use crate::error::WeightError;
use crate::models::WeightSample;
use crate::telemetry;
use crate::types::{TrendOutcome, TrendResult};

/// Minste kvadraters rette linje `vekt ≈ intercept + daily_change * dager`,
/// der dager telles fra tidligste dato i serien.
///
/// Serien trenger ikke være sortert. Færre enn 2 veiinger eller kun én unik
/// dato gir `InsufficientData`. Konstant vekt gir `r_squared = 1.0`.
pub fn compute_trend(samples: &[WeightSample]) -> Result<TrendOutcome, WeightError> {
    for s in samples {
        s.validate()?;
    }

    let mut sorted = samples.to_vec();
    sorted.sort_by_key(|s| s.date);

    let distinct_dates = {
        let mut dates: Vec<_> = sorted.iter().map(|s| s.date).collect();
        dates.dedup();
        dates.len()
    };

    if sorted.len() < 2 || distinct_dates < 2 {
        log::debug!(
            "trend: insufficient data (samples={}, distinct_dates={distinct_dates})",
            sorted.len()
        );
        telemetry::inc_trend_insufficient();
        return Ok(TrendOutcome::InsufficientData {
            samples: sorted.len(),
            distinct_dates,
        });
    }

    let origin = sorted[0].date;
    let xs: Vec<f64> = sorted
        .iter()
        .map(|s| (s.date - origin).num_days() as f64)
        .collect();
    let ys: Vec<f64> = sorted.iter().map(|s| s.weight).collect();

    let (intercept, slope) = fit_line(&xs, &ys);
    let fitted_values: Vec<f64> = xs.iter().map(|x| intercept + slope * x).collect();
    let r_squared = r_squared(&ys, &fitted_values);

    log::debug!(
        "trend: n={} daily_change={slope:.4} r2={r_squared:.4}",
        sorted.len()
    );
    telemetry::inc_trend_fit();

    Ok(TrendOutcome::Fitted(TrendResult {
        dates: sorted.iter().map(|s| s.date).collect(),
        weights: ys,
        fitted_values,
        intercept,
        daily_change: slope,
        r_squared,
    }))
}

/// (intercept, slope). Forutsetter minst to ulike x-verdier.
fn fit_line(xs: &[f64], ys: &[f64]) -> (f64, f64) {
    // Konstant y: eksakt flat linje, unngår avrundingsstøy i snittet
    if ys.iter().all(|y| *y == ys[0]) {
        return (ys[0], 0.0);
    }

    let n = xs.len() as f64;
    let mx = xs.iter().sum::<f64>() / n;
    let my = ys.iter().sum::<f64>() / n;

    let mut sxx = 0.0;
    let mut sxy = 0.0;
    for (x, y) in xs.iter().zip(ys) {
        sxx += (x - mx) * (x - mx);
        sxy += (x - mx) * (y - my);
    }

    let slope = sxy / sxx;
    (my - slope * mx, slope)
}

fn r_squared(ys: &[f64], fitted: &[f64]) -> f64 {
    let my = ys.iter().sum::<f64>() / ys.len() as f64;
    let ss_tot: f64 = ys.iter().map(|y| (y - my).powi(2)).sum();
    let ss_res: f64 = ys
        .iter()
        .zip(fitted)
        .map(|(y, f)| (y - f).powi(2))
        .sum();

    if ss_res == 0.0 || ss_tot == 0.0 {
        // perfekt (eller triviell) tilpasning
        return 1.0;
    }
    (1.0 - ss_res / ss_tot).clamp(0.0, 1.0)
}
