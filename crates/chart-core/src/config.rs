// File: crates/chart-core/src/config.rs
// Summary: JSON chart configuration (title, value specifier, frame, traces) and chart assembly.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::chart::{ScrubChart, Trace};
use crate::error::Result;
use crate::format::{ValueFormat, DEFAULT_VALUE_SPECIFIER};
use crate::geometry::Region;
use crate::series::SampleSeries;
use crate::types::FrameSize;

/// Host-supplied description of a chart. Traces stack top to bottom, each in a
/// `frame`-sized region.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartConfig {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub legend: Option<String>,
    #[serde(default = "default_value_specifier")]
    pub value_specifier: String,
    #[serde(default)]
    pub frame: FrameSize,
    pub traces: Vec<TraceConfig>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TraceConfig {
    pub name: String,
    pub values: Vec<f64>,
    /// Forced lower bound of the y-scale.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    /// Forced upper bound of the y-scale.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    #[serde(default)]
    pub flip: bool,
    #[serde(default)]
    pub axis_ticks: usize,
}

fn default_value_specifier() -> String { DEFAULT_VALUE_SPECIFIER.to_string() }

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            title: "Line chart".into(),
            legend: Some("Basic".into()),
            value_specifier: default_value_specifier(),
            frame: FrameSize::default(),
            traces: vec![
                TraceConfig {
                    name: "eye".into(),
                    values: vec![8.0, 23.0, 54.0, 32.0, 12.0, 37.0, 7.0, 23.0, 43.0],
                    min: None,
                    max: None,
                    flip: false,
                    axis_ticks: 0,
                },
                TraceConfig {
                    name: "head".into(),
                    values: vec![12.0, 18.0, 9.0, 27.0, 33.0, 21.0, 15.0, 30.0, 24.0],
                    min: None,
                    max: None,
                    flip: true,
                    axis_ticks: 0,
                },
            ],
        }
    }
}

impl ChartConfig {
    pub fn from_json_str(s: &str) -> Result<Self> {
        Ok(serde_json::from_str(s)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path.as_ref())?;
        log::debug!("loaded chart config from {}", path.as_ref().display());
        Self::from_json_str(&text)
    }

    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Validate every trace and assemble the chart.
    pub fn build(&self) -> Result<ScrubChart> {
        let format = ValueFormat::parse(&self.value_specifier)?;
        let mut chart = ScrubChart::new(self.title.clone()).with_value_format(format);
        chart.legend = self.legend.clone();

        let FrameSize { width, height } = self.frame;
        for (i, tc) in self.traces.iter().enumerate() {
            let series = SampleSeries::load_with_bounds(tc.values.clone(), tc.min, tc.max)?;
            let region = Region::from_ltwh(0.0, i as f64 * height, width, height);
            chart.add_trace(
                Trace::new(tc.name.clone(), series, region)
                    .flipped(tc.flip)
                    .with_axis_ticks(tc.axis_ticks),
            )?;
        }
        log::debug!("built chart '{}' with {} trace(s)", self.title, self.traces.len());
        Ok(chart)
    }
}
