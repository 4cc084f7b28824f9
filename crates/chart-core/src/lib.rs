// File: crates/chart-core/src/lib.rs
// Summary: Core library entry point; exports series loading, geometry mapping, nearest-sample
//          resolution, and the scrub chart with its render description.

pub mod axis;
pub mod chart;
pub mod config;
pub mod error;
pub mod format;
pub mod geometry;
pub mod grid;
pub mod resolve;
pub mod scale;
pub mod series;
pub mod session;
pub mod types;

pub use axis::{axis_ticks, AxisTick};
pub use chart::{Header, Indicator, RenderFrame, ScrubChart, Trace, TraceFrame};
pub use config::{ChartConfig, TraceConfig};
pub use error::ChartError;
pub use format::ValueFormat;
pub use geometry::{PlotRect, Point, Region};
pub use resolve::{resolve, resolve_flipped, Resolution};
pub use scale::{path_points, point_for};
pub use series::SampleSeries;
pub use session::{ScrubSession, ScrubState, SelectionChange, SelectionObserver};
pub use types::FrameSize;
