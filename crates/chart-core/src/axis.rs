// File: crates/chart-core/src/axis.rs
// Summary: Y-axis tick labels for a trace, placed with the same mapping as the trace itself.

use serde::Serialize;

use crate::geometry::PlotRect;
use crate::grid::linspace;
use crate::scale::value_to_y;
use crate::series::SampleSeries;

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct AxisTick {
    pub value: f64,
    /// Plot-local screen y of `value`.
    pub y: f64,
}

/// `count` ticks from `min_value` to `max_value` inclusive. A constant series
/// gets a single tick.
pub fn axis_ticks(series: &SampleSeries, rect: PlotRect, flip: bool, count: usize) -> Vec<AxisTick> {
    let (lo, hi) = (series.min_value(), series.max_value());
    let count = if lo == hi { count.min(1) } else { count };
    linspace(lo, hi, count)
        .into_iter()
        .map(|value| AxisTick { value, y: value_to_y(series, value, rect, flip) })
        .collect()
}
