// File: crates/chart-core/src/resolve.rs
// Summary: Nearest-sample resolver; inverse of the geometry mapper along x.

use crate::geometry::{PlotRect, Point};
use crate::scale::{point_for, step_width};
use crate::series::SampleSeries;

/// Sample nearest to a pointer position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Resolution {
    pub index: usize,
    pub value: f64,
    pub point: Point,
}

/// Resolve `pointer_x` (plot-local) to the nearest sample of an unflipped trace.
pub fn resolve(series: &SampleSeries, rect: PlotRect, pointer_x: f64) -> Option<Resolution> {
    resolve_flipped(series, rect, pointer_x, false)
}

/// Resolve `pointer_x` to the nearest sample; ties go to the larger index.
/// Returns `None` when the pointer lies outside the addressable sample range.
pub fn resolve_flipped(
    series: &SampleSeries,
    rect: PlotRect,
    pointer_x: f64,
    flip: bool,
) -> Option<Resolution> {
    let step = step_width(series, rect);
    if !pointer_x.is_finite() || !(step > 0.0) {
        return None;
    }
    let nearest = (pointer_x / step + 0.5).floor();
    if nearest < 0.0 || nearest >= series.count() as f64 {
        log::trace!("pointer x={pointer_x} resolves outside 0..{}", series.count());
        return None;
    }
    let index = nearest as usize;
    let value = series.value_at(index)?;
    Some(Resolution { index, value, point: point_for(series, index, rect, flip) })
}
