use serde_json::json;
use weighttrend_core::report::parse_cfg;
use weighttrend_core::*;

#[test]
fn smoke_two_weeks_with_goal() {
    // 14 dager, 0.1 kg ned per dag fra 82.0
    let records: Vec<_> = (0..14i32)
        .map(|i| {
            json!({
                "Date": format!("2024-03-{:02}", i + 1),
                "Weight": 82.0 - 0.1 * f64::from(i)
            })
        })
        .collect();

    let cfg = json!({ "goal_weight": 78.0, "round_decimals": 2 });

    let out = analyze_weight_json(
        &serde_json::to_string(&records).unwrap(),
        "2024-03-13",
        Some(&cfg.to_string()),
    )
    .unwrap();

    let v: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(v["today"], "2024-03-13");
    assert_eq!(v["entries"], 14);
    assert_eq!(v["trend"]["status"], "fitted");
    assert!((v["trend"]["daily_change"].as_f64().unwrap() - (-0.1)).abs() < 1e-9);
    assert!((v["trend"]["weekly_change"].as_f64().unwrap() - (-0.7)).abs() < 1e-9);
    assert_eq!(v["trend"]["r_squared"].as_f64(), Some(1.0));
    assert_eq!(v["trend"]["fitted_values"].as_array().unwrap().len(), 14);

    // denne uka 11–13: 81.0, 80.9, 80.8 ; forrige 4–10: 81.7..81.1
    assert_eq!(v["weekly"]["current_week_avg"].as_f64(), Some(80.9));
    assert_eq!(v["weekly"]["previous_week_avg"].as_f64(), Some(81.4));
    assert_eq!(v["net_weekly_change"].as_f64(), Some(-0.5));

    assert_eq!(v["goal"]["status"], "estimate");
    assert!(v["goal_projected_date"].is_string());
}

#[test]
fn smoke_empty_history() {
    let out = analyze_weight_json("[]", "2024-03-13", None).unwrap();
    let v: serde_json::Value = serde_json::from_str(&out).unwrap();

    assert_eq!(v["entries"], 0);
    assert!(v["latest_weight"].is_null());
    assert!(v["weekly"]["current_week_avg"].is_null());
    assert!(v["weekly"]["previous_week_avg"].is_null());
    assert!(v["net_weekly_change"].is_null());
    assert_eq!(v["trend"]["status"], "insufficient_data");
    assert!(v["goal"].is_null());
}

#[test]
fn report_struct_without_rounding() {
    let log = WeightLog::from_samples(vec![
        WeightSample::new(chrono::NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(), 80.0).unwrap(),
        WeightSample::new(chrono::NaiveDate::from_ymd_opt(2024, 1, 8).unwrap(), 78.0).unwrap(),
    ]);
    let cfg = Cfg {
        round_decimals: None,
        ..Cfg::default()
    };
    let today = chrono::NaiveDate::from_ymd_opt(2024, 1, 9).unwrap();
    let report = build_report(&log, today, &cfg).unwrap();

    let daily = report.trend.daily_change.unwrap();
    assert!((daily - (-2.0 / 7.0)).abs() < 1e-12);
    assert_eq!(report.weekly.current_week_avg, Some(78.0));
    assert_eq!(report.weekly.previous_week_avg, Some(80.0));
    assert_eq!(report.latest_weight, Some(78.0));
}

#[test]
fn cfg_parsing() {
    let cfg = parse_cfg(None).unwrap();
    assert_eq!(cfg.min_weight_kg, 30.0);
    assert_eq!(cfg.max_weight_kg, 200.0);
    assert_eq!(cfg.round_decimals, Some(2));

    let cfg = parse_cfg(Some(r#"{"max_weight_kg": 250}"#)).unwrap();
    assert_eq!(cfg.max_weight_kg, 250.0);
    assert_eq!(cfg.min_weight_kg, 30.0);

    assert!(matches!(
        parse_cfg(Some(r#"{"round_decimals": "two"}"#)),
        Err(WeightError::Parse { .. })
    ));
}

#[test]
fn too_many_decimals_is_rejected() {
    let records = r#"[{"date":"2024-03-11","weight":80.0},{"date":"2024-03-12","weight":79.5}]"#;
    match analyze_weight_json(records, "2024-03-13", Some(r#"{"round_decimals":400}"#)) {
        Err(WeightError::Parse { path, .. }) => assert_eq!(path, "round_decimals"),
        other => panic!("forventet Parse-feil, fikk {other:?}"),
    }

    // 15 er grensen, og gir fortsatt tall (ikke null)
    let out = analyze_weight_json(records, "2024-03-13", Some(r#"{"round_decimals":15}"#)).unwrap();
    let v: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(v["weekly"]["current_week_avg"].as_f64(), Some(79.75));
    assert!(v["trend"]["daily_change"].is_f64());
    assert!(v["trend"]["r_squared"].is_f64());
}

#[test]
fn huge_round_decimals_in_struct_cfg_stays_finite() {
    let log = WeightLog::from_samples(vec![
        WeightSample::new(chrono::NaiveDate::from_ymd_opt(2024, 3, 11).unwrap(), 80.0).unwrap(),
        WeightSample::new(chrono::NaiveDate::from_ymd_opt(2024, 3, 12).unwrap(), 79.5).unwrap(),
    ]);
    let cfg = Cfg {
        round_decimals: Some(400),
        ..Cfg::default()
    };
    let today = chrono::NaiveDate::from_ymd_opt(2024, 3, 13).unwrap();
    let report = build_report(&log, today, &cfg).unwrap();
    assert_eq!(report.weekly.current_week_avg, Some(79.75));
    assert!(report.trend.daily_change.unwrap().is_finite());
    assert!(report.trend.fitted_values.iter().all(|v| v.is_finite()));
}

#[test]
fn invalid_today_is_an_error() {
    assert!(matches!(
        analyze_weight_json("[]", "neste uke", None),
        Err(WeightError::InvalidDate(_))
    ));
}
