use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::wrap_pyfunction;

use crate::error::WeightError;
use crate::ingest::{parse_date, parse_records_json};
use crate::trend::compute_trend;
use crate::types::Cfg;
use crate::weekly::compute_weekly_averages;

fn to_py_err(e: WeightError) -> PyErr {
    PyValueError::new_err(e.to_string())
}

// ──────────────────────────────────────────────────────────────────────────────
// PyO3-funksjoner: JSON inn, JSON ut (unngår pyo3 serde-feature)
// ──────────────────────────────────────────────────────────────────────────────

#[pyfunction]
#[pyo3(name = "analyze_weight_json", signature = (records_json, today, cfg_json=None))]
fn py_analyze_weight_json(
    records_json: &str,
    today: &str,
    cfg_json: Option<&str>,
) -> PyResult<String> {
    crate::report::analyze_weight_json(records_json, today, cfg_json).map_err(to_py_err)
}

#[pyfunction]
fn compute_trend_json(records_json: &str) -> PyResult<String> {
    let weights = parse_records_json(records_json, &Cfg::default()).map_err(to_py_err)?;
    let outcome = compute_trend(weights.samples()).map_err(to_py_err)?;
    serde_json::to_string(&outcome).map_err(|e| PyValueError::new_err(e.to_string()))
}

#[pyfunction]
fn compute_weekly_averages_json(records_json: &str, today: &str) -> PyResult<String> {
    let today = parse_date(today).map_err(to_py_err)?;
    let weights = parse_records_json(records_json, &Cfg::default()).map_err(to_py_err)?;
    let weekly = compute_weekly_averages(weights.samples(), today).map_err(to_py_err)?;
    serde_json::to_string(&weekly).map_err(|e| PyValueError::new_err(e.to_string()))
}

#[pymodule]
fn weighttrend_core(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(py_analyze_weight_json, m)?)?;
    m.add_function(wrap_pyfunction!(compute_trend_json, m)?)?;
    m.add_function(wrap_pyfunction!(compute_weekly_averages_json, m)?)?;
    Ok(())
}
