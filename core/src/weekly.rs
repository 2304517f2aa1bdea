use chrono::{Datelike, Duration, NaiveDate};

use crate::error::WeightError;
use crate::models::WeightSample;
use crate::types::WeeklyAverages;

/// Mandagen i uka som inneholder `day`.
pub fn monday_of(day: NaiveDate) -> NaiveDate {
    day - Duration::days(i64::from(day.weekday().num_days_from_monday()))
}

fn mean(xs: &[f64]) -> Option<f64> {
    if xs.is_empty() {
        None
    } else {
        Some(xs.iter().sum::<f64>() / xs.len() as f64)
    }
}

/// Ukessnitt: denne uka = [mandag, i dag], forrige uke = hele mandag–søndag før.
/// Tom uke gir `None`. Veiinger etter `today` telles ikke.
pub fn compute_weekly_averages(
    samples: &[WeightSample],
    today: NaiveDate,
) -> Result<WeeklyAverages, WeightError> {
    let current_start = monday_of(today);
    let previous_start = current_start - Duration::days(7);
    let previous_end = current_start - Duration::days(1);

    let mut current = Vec::new();
    let mut previous = Vec::new();

    for s in samples {
        s.validate()?;
        if s.date >= current_start && s.date <= today {
            current.push(s.weight);
        } else if s.date >= previous_start && s.date <= previous_end {
            previous.push(s.weight);
        }
    }

    log::debug!(
        "weekly averages: today={today} current_start={current_start} current_n={} previous_n={}",
        current.len(),
        previous.len()
    );

    Ok(WeeklyAverages {
        current_week_avg: mean(&current),
        previous_week_avg: mean(&previous),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn monday_of_is_stable_across_the_week() {
        // 2024-03-11 er en mandag
        for day in 11..=17 {
            assert_eq!(monday_of(d(2024, 3, day)), d(2024, 3, 11));
        }
        assert_eq!(monday_of(d(2024, 3, 10)), d(2024, 3, 4));
    }

    #[test]
    fn sunday_before_belongs_to_previous_week() {
        let samples = vec![
            WeightSample::new(d(2024, 3, 10), 81.0).unwrap(),
            WeightSample::new(d(2024, 3, 3), 99.0).unwrap(),
        ];
        let out = compute_weekly_averages(&samples, d(2024, 3, 11)).unwrap();
        assert_eq!(out.current_week_avg, None);
        assert_eq!(out.previous_week_avg, Some(81.0));
    }
}
