// File: crates/chart-core/src/types.rs
// Summary: Shared types and constants (card frame size per trace).

use serde::{Deserialize, Serialize};

/// Default trace width in points (the medium card form).
pub const FRAME_WIDTH: f64 = 360.0;
/// Default trace height in points.
pub const FRAME_HEIGHT: f64 = 140.0;

/// Size of one trace's plotting area.
/// Contract: both fields are positive.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct FrameSize {
    pub width: f64,
    pub height: f64,
}

impl FrameSize {
    pub const fn new(width: f64, height: f64) -> Self { Self { width, height } }
}

impl Default for FrameSize {
    fn default() -> Self { Self::new(FRAME_WIDTH, FRAME_HEIGHT) }
}
