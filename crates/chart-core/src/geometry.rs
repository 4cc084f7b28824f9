// File: crates/chart-core/src/geometry.rs
// Summary: Lightweight geometry types for plot-space math (points, plot rects, pointer regions).

use serde::{Deserialize, Serialize};

/// A point in screen space; y grows downward.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self { Self { x, y } }

    pub fn offset(self, dx: f64, dy: f64) -> Self { Self { x: self.x + dx, y: self.y + dy } }
}

/// Size of the drawable area for one series, supplied by the host every pass.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlotRect {
    pub width: f64,
    pub height: f64,
}

impl PlotRect {
    pub const fn new(width: f64, height: f64) -> Self { Self { width, height } }
}

/// Region of the pointer surface owned by one trace, in widget-local coordinates.
/// Contains its top/left edges but not its bottom/right ones, so regions
/// stacked edge to edge never both claim a point.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Region {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Region {
    pub const fn from_ltwh(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self { left, top, width, height }
    }
    pub fn right(&self) -> f64 { self.left + self.width }
    pub fn bottom(&self) -> f64 { self.top + self.height }
    pub fn plot_rect(&self) -> PlotRect { PlotRect::new(self.width, self.height) }

    pub fn is_empty(&self) -> bool { !(self.width > 0.0 && self.height > 0.0) }

    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.left && p.x < self.right() && p.y >= self.top && p.y < self.bottom()
    }

    pub fn overlaps(&self, other: &Region) -> bool {
        self.left < other.right()
            && other.left < self.right()
            && self.top < other.bottom()
            && other.top < self.bottom()
    }

    /// Convert a widget-local point into this region's local space.
    pub fn to_local(&self, p: Point) -> Point { p.offset(-self.left, -self.top) }
}
