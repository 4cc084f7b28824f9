// File: crates/chart-core/src/scale.rs
// Summary: Geometry mapper from sample index to screen point within a plot rect.
// Notes:
// - The y-scale normalizes by (max - min), clamped to 1 for constant series.

use crate::geometry::{PlotRect, Point};
use crate::series::SampleSeries;

/// Horizontal distance between consecutive samples.
#[inline]
pub fn step_width(series: &SampleSeries, rect: PlotRect) -> f64 {
    rect.width / (series.count() - 1) as f64
}

/// Map a value to screen y. `flip` mirrors the trace so higher values sit lower.
#[inline]
pub fn value_to_y(series: &SampleSeries, value: f64, rect: PlotRect, flip: bool) -> f64 {
    let norm = (value - series.min_value()) / series.value_span();
    if flip { norm * rect.height } else { (1.0 - norm) * rect.height }
}

/// Screen point of sample `index`.
///
/// # Panics
/// If `index >= series.count()`, like slice indexing.
pub fn point_for(series: &SampleSeries, index: usize, rect: PlotRect, flip: bool) -> Point {
    let value = series.values()[index];
    Point {
        x: index as f64 * step_width(series, rect),
        y: value_to_y(series, value, rect, flip),
    }
}

/// Polyline through every sample, in index order.
pub fn path_points(series: &SampleSeries, rect: PlotRect, flip: bool) -> Vec<Point> {
    let step = step_width(series, rect);
    series
        .values()
        .iter()
        .enumerate()
        .map(|(i, &v)| Point { x: i as f64 * step, y: value_to_y(series, v, rect, flip) })
        .collect()
}
