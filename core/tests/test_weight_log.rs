use chrono::NaiveDate;
use weighttrend_core::{Goal, WeightError, WeightLog, WeightSample};

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

fn s(date: NaiveDate, weight: f64) -> WeightSample {
    WeightSample::new(date, weight).unwrap()
}

#[test]
fn sample_rejects_non_positive_and_non_finite() {
    for w in [0.0, -1.0, f64::NAN, f64::INFINITY] {
        assert!(
            matches!(
                WeightSample::new(d(2024, 1, 1), w),
                Err(WeightError::InvalidWeight { .. })
            ),
            "vekt {w} skulle vært avvist"
        );
    }
    // 250 kg er gyldig i kjernen, intervallet sjekkes i ingest
    assert!(WeightSample::new(d(2024, 1, 1), 250.0).is_ok());
}

#[test]
fn upsert_keeps_dates_sorted_and_last_write_wins() {
    let mut log = WeightLog::new();
    assert!(log.upsert(s(d(2024, 1, 3), 80.0)).is_none());
    assert!(log.upsert(s(d(2024, 1, 1), 82.0)).is_none());
    assert!(log.upsert(s(d(2024, 1, 2), 81.0)).is_none());

    let replaced = log.upsert(s(d(2024, 1, 2), 80.5));
    assert_eq!(replaced.map(|r| r.weight), Some(81.0));

    let dates: Vec<_> = log.samples().iter().map(|x| x.date).collect();
    assert_eq!(dates, vec![d(2024, 1, 1), d(2024, 1, 2), d(2024, 1, 3)]);
    assert_eq!(log.get(d(2024, 1, 2)).map(|x| x.weight), Some(80.5));
    assert_eq!(log.first().map(|x| x.weight), Some(82.0));
    assert_eq!(log.latest().map(|x| x.weight), Some(80.0));
}

#[test]
fn from_samples_later_duplicates_overwrite() {
    let log = WeightLog::from_samples(vec![
        s(d(2024, 1, 5), 79.0),
        s(d(2024, 1, 4), 80.0),
        s(d(2024, 1, 5), 78.5),
    ]);
    assert_eq!(log.len(), 2);
    assert_eq!(log.get(d(2024, 1, 5)).map(|x| x.weight), Some(78.5));
}

#[test]
fn remove_and_clear() {
    let mut log = WeightLog::from_samples(vec![s(d(2024, 1, 1), 80.0), s(d(2024, 1, 2), 79.0)]);

    assert_eq!(log.remove(d(2024, 1, 1)).map(|x| x.weight), Some(80.0));
    assert!(log.remove(d(2024, 1, 1)).is_none());
    assert_eq!(log.len(), 1);

    log.clear();
    assert!(log.is_empty());
    assert!(log.latest().is_none());
}

#[test]
fn goal_remaining_kg() {
    let goal = Goal {
        goal_weight: 75.0,
        target_date: None,
    };
    assert!((goal.remaining_kg(80.0) - 5.0).abs() < 1e-12);
    assert!(goal.remaining_kg(74.0) < 0.0);
}
