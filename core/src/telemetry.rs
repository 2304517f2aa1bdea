use once_cell::sync::Lazy;
use prometheus::{Encoder, IntCounter, Registry, TextEncoder};

/// Tellere for motoren, i et eget register (ikke prometheus sitt default-register).
pub struct Metrics {
    registry: Registry,
    pub trend_fits_total: IntCounter,
    pub trend_insufficient_total: IntCounter,
    pub ingest_rejected_total: IntCounter,
}

impl Metrics {
    pub fn new() -> Result<Self, prometheus::Error> {
        let registry = Registry::new();

        let trend_fits_total = IntCounter::new(
            "weighttrend_trend_fits_total",
            "Trend lines fitted",
        )?;
        let trend_insufficient_total = IntCounter::new(
            "weighttrend_trend_insufficient_total",
            "Trend requests answered with insufficient data",
        )?;
        let ingest_rejected_total = IntCounter::new(
            "weighttrend_ingest_rejected_total",
            "Weight records rejected at the ingest boundary",
        )?;

        registry.register(Box::new(trend_fits_total.clone()))?;
        registry.register(Box::new(trend_insufficient_total.clone()))?;
        registry.register(Box::new(ingest_rejected_total.clone()))?;

        Ok(Self {
            registry,
            trend_fits_total,
            trend_insufficient_total,
            ingest_rejected_total,
        })
    }

    /// Prometheus tekstformat
    pub fn render(&self) -> Result<String, prometheus::Error> {
        let mut buf = Vec::new();
        TextEncoder::new().encode(&self.registry.gather(), &mut buf)?;
        String::from_utf8(buf).map_err(|e| prometheus::Error::Msg(e.to_string()))
    }
}

static METRICS: Lazy<Option<Metrics>> = Lazy::new(|| match Metrics::new() {
    Ok(m) => Some(m),
    Err(e) => {
        log::warn!("metrics disabled: {e}");
        None
    }
});

pub fn metrics() -> Option<&'static Metrics> {
    METRICS.as_ref()
}

pub(crate) fn inc_trend_fit() {
    if let Some(m) = metrics() {
        m.trend_fits_total.inc();
    }
}

pub(crate) fn inc_trend_insufficient() {
    if let Some(m) = metrics() {
        m.trend_insufficient_total.inc();
    }
}

pub(crate) fn inc_ingest_rejected() {
    if let Some(m) = metrics() {
        m.ingest_rejected_total.inc();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_registry_renders_all_counters() {
        let m = Metrics::new().unwrap();
        m.trend_fits_total.inc();
        let text = m.render().unwrap();
        assert!(text.contains("weighttrend_trend_fits_total 1"));
        assert!(text.contains("weighttrend_trend_insufficient_total 0"));
        assert!(text.contains("weighttrend_ingest_rejected_total 0"));
    }
}
