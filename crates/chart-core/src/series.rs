// File: crates/chart-core/src/series.rs
// Summary: Immutable sample series with cached (or forced) value bounds.
// Notes:
// - A series is loaded once and never mutated; new data means a new series.
// - Forced bounds pin the y-scale (e.g. to zero) independently of the data.

use crate::error::{ChartError, Result};

#[derive(Clone, Debug, PartialEq)]
pub struct SampleSeries {
    values: Vec<f64>,
    min_value: f64,
    max_value: f64,
}

impl SampleSeries {
    /// Load a series, computing min/max over all samples.
    pub fn load(values: impl Into<Vec<f64>>) -> Result<Self> {
        Self::load_with_bounds(values, None, None)
    }

    /// Load a series with optional forced bounds. An unset bound falls back to
    /// the one computed from the data.
    pub fn load_with_bounds(
        values: impl Into<Vec<f64>>,
        forced_min: Option<f64>,
        forced_max: Option<f64>,
    ) -> Result<Self> {
        let values = values.into();
        if values.len() < 2 {
            return Err(ChartError::InvalidInput { count: values.len() });
        }
        if let Some(index) = values.iter().position(|v| !v.is_finite()) {
            return Err(ChartError::NonFiniteSample { index });
        }

        let (lo, hi) = values
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| (lo.min(v), hi.max(v)));
        let min_value = forced_min.unwrap_or(lo);
        let max_value = forced_max.unwrap_or(hi);
        if !min_value.is_finite() || !max_value.is_finite() || min_value > max_value {
            return Err(ChartError::InvalidBounds { min: min_value, max: max_value });
        }
        if min_value == max_value {
            log::warn!(
                "series of {} samples has a degenerate range at {}; rendering as a flat line",
                values.len(),
                min_value
            );
        }

        Ok(Self { values, min_value, max_value })
    }

    /// Re-load the same samples with forced bounds.
    pub fn with_bounds(self, forced_min: Option<f64>, forced_max: Option<f64>) -> Result<Self> {
        Self::load_with_bounds(self.values, forced_min, forced_max)
    }

    pub fn count(&self) -> usize { self.values.len() }

    pub fn value_at(&self, index: usize) -> Option<f64> { self.values.get(index).copied() }

    pub fn values(&self) -> &[f64] { &self.values }

    pub fn min_value(&self) -> f64 { self.min_value }

    pub fn max_value(&self) -> f64 { self.max_value }

    /// Normalizing span for the y-scale; a zero span is treated as 1.
    pub fn value_span(&self) -> f64 {
        let span = self.max_value - self.min_value;
        if span == 0.0 { 1.0 } else { span }
    }
}
