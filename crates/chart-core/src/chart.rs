// File: crates/chart-core/src/chart.rs
// Summary: Multi-trace scrub chart: routes one pointer stream to per-trace sessions and
//          produces a flat render description (points + indicator + header).

use serde::Serialize;

use crate::axis::{axis_ticks, AxisTick};
use crate::error::{ChartError, Result};
use crate::format::ValueFormat;
use crate::geometry::{Point, Region};
use crate::scale::{path_points, point_for};
use crate::series::SampleSeries;
use crate::session::{ScrubSession, SelectionChange, SelectionObserver};

/// One series drawn in its own region of the widget.
#[derive(Clone, Debug)]
pub struct Trace {
    pub name: String,
    series: SampleSeries,
    region: Region,
    flip: bool,
    tick_count: usize,
    session: ScrubSession,
}

impl Trace {
    pub fn new(name: impl Into<String>, series: SampleSeries, region: Region) -> Self {
        Self {
            name: name.into(),
            series,
            region,
            flip: false,
            tick_count: 0,
            session: ScrubSession::new(),
        }
    }

    /// Mirror the trace vertically (the "head" trace under the "eye" trace).
    pub fn flipped(mut self, flip: bool) -> Self {
        self.flip = flip;
        self
    }

    /// Emit `count` y-axis ticks per render; 0 disables them.
    pub fn with_axis_ticks(mut self, count: usize) -> Self {
        self.tick_count = count;
        self
    }

    pub fn series(&self) -> &SampleSeries { &self.series }
    pub fn region(&self) -> Region { self.region }
    pub fn is_flipped(&self) -> bool { self.flip }
    pub fn session(&self) -> &ScrubSession { &self.session }

    fn frame(&self, format: &ValueFormat) -> TraceFrame {
        let rect = self.region.plot_rect();
        let indicator = match (self.session.indicator_visible(), self.session.current_index()) {
            (true, Some(index)) => {
                let value = self.series.values()[index];
                Some(Indicator {
                    position: point_for(&self.series, index, rect, self.flip),
                    value,
                    label: format.format(value),
                })
            }
            _ => None,
        };
        TraceFrame {
            name: self.name.clone(),
            region: self.region,
            flip: self.flip,
            points: path_points(&self.series, rect, self.flip),
            indicator,
            ticks: if self.tick_count > 0 {
                axis_ticks(&self.series, rect, self.flip, self.tick_count)
            } else {
                Vec::new()
            },
        }
    }
}

/// Marker over the scrubbed sample; `position` is region-local.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Indicator {
    pub position: Point,
    pub value: f64,
    pub label: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TraceFrame {
    pub name: String,
    pub region: Region,
    pub flip: bool,
    /// Region-local polyline through every sample.
    pub points: Vec<Point>,
    pub indicator: Option<Indicator>,
    pub ticks: Vec<AxisTick>,
}

/// Card header: title while idle, the scrubbed value while dragging.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Header {
    Title { title: String, legend: Option<String> },
    Value { trace: String, text: String },
}

/// Everything the host needs to draw one pass.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RenderFrame {
    pub width: f64,
    pub height: f64,
    pub header: Header,
    pub traces: Vec<TraceFrame>,
}

/// Line chart with one or more traces sharing a single pointer stream.
pub struct ScrubChart {
    pub title: String,
    pub legend: Option<String>,
    value_format: ValueFormat,
    traces: Vec<Trace>,
    pointer: Option<Point>,
    dragging: bool,
    owner: Option<usize>,
    observer: Option<Box<dyn SelectionObserver>>,
}

impl ScrubChart {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            legend: None,
            value_format: ValueFormat::default(),
            traces: Vec::new(),
            pointer: None,
            dragging: false,
            owner: None,
            observer: None,
        }
    }

    pub fn with_legend(mut self, legend: impl Into<String>) -> Self {
        self.legend = Some(legend.into());
        self
    }

    pub fn with_value_format(mut self, format: ValueFormat) -> Self {
        self.value_format = format;
        self
    }

    pub fn set_observer(&mut self, observer: impl SelectionObserver + 'static) {
        self.observer = Some(Box::new(observer));
    }

    /// Add a trace. Its region must have area and must not overlap any other.
    pub fn add_trace(&mut self, trace: Trace) -> Result<()> {
        self.check_region(None, &trace.name, &trace.region)?;
        self.traces.push(trace);
        Ok(())
    }

    pub fn traces(&self) -> &[Trace] { &self.traces }
    pub fn trace(&self, index: usize) -> Option<&Trace> { self.traces.get(index) }
    pub fn trace_index(&self, name: &str) -> Option<usize> { self.traces.iter().position(|t| t.name == name) }

    /// Last pointer position seen, in widget-local coordinates.
    pub fn pointer(&self) -> Option<Point> { self.pointer }

    /// Trace that owns the drag in progress.
    pub fn active_trace(&self) -> Option<usize> { self.owner }

    /// Whether a gesture is in progress, owned by a trace or not.
    pub fn is_dragging(&self) -> bool { self.dragging }

    /// Replace a trace's data wholesale; its session starts over. A drag it
    /// owned keeps going without an owner until the pointer is released.
    pub fn set_series(&mut self, index: usize, series: SampleSeries) -> Result<()> {
        let trace = self.traces.get_mut(index).ok_or(ChartError::UnknownTrace { index })?;
        trace.series = series;
        trace.session.reset();
        if self.owner == Some(index) {
            self.owner = None;
        }
        Ok(())
    }

    /// Move or resize a trace's region (e.g. after rotation).
    pub fn set_region(&mut self, index: usize, region: Region) -> Result<()> {
        let name = self.traces.get(index).map(|t| t.name.clone()).ok_or(ChartError::UnknownTrace { index })?;
        self.check_region(Some(index), &name, &region)?;
        self.traces[index].region = region;
        Ok(())
    }

    /// Drag start. Claims the trace whose region contains `pos` for the whole drag.
    pub fn on_pointer_down(&mut self, pos: Point) -> Option<SelectionChange> {
        self.pointer = Some(pos);
        self.dragging = true;
        self.owner = self.traces.iter().position(|t| t.region.contains(pos));
        match self.owner {
            Some(i) => {
                log::debug!("drag started at ({}, {}) on trace '{}'", pos.x, pos.y, self.traces[i].name);
                self.scrub_owner(pos)
            }
            None => {
                log::debug!("drag started at ({}, {}) outside every trace region", pos.x, pos.y);
                None
            }
        }
    }

    /// Drag move. Goes to the owning trace even outside its region; without a
    /// drag in progress this starts one. An ownerless drag only tracks the pointer.
    pub fn on_pointer_move(&mut self, pos: Point) -> Option<SelectionChange> {
        if !self.dragging {
            return self.on_pointer_down(pos);
        }
        self.pointer = Some(pos);
        self.scrub_owner(pos)
    }

    /// Drag end.
    pub fn on_pointer_up(&mut self) {
        self.dragging = false;
        if let Some(i) = self.owner.take() {
            self.traces[i].session.end();
        }
    }

    pub fn render(&self) -> RenderFrame {
        let header = self
            .owner
            .and_then(|i| {
                let trace = &self.traces[i];
                let value = trace.session.current_value().filter(|_| trace.session.indicator_visible())?;
                Some(Header::Value { trace: trace.name.clone(), text: self.value_format.format(value) })
            })
            .unwrap_or_else(|| Header::Title { title: self.title.clone(), legend: self.legend.clone() });

        RenderFrame {
            width: self.traces.iter().map(|t| t.region.right()).fold(0.0, f64::max),
            height: self.traces.iter().map(|t| t.region.bottom()).fold(0.0, f64::max),
            header,
            traces: self.traces.iter().map(|t| t.frame(&self.value_format)).collect(),
        }
    }

    fn scrub_owner(&mut self, pos: Point) -> Option<SelectionChange> {
        let i = self.owner?;
        let trace = &mut self.traces[i];
        let local = trace.region.to_local(pos);
        let (index, value) = trace.session.drag(&trace.series, trace.region.plot_rect(), local.x, trace.flip)?;
        let change = SelectionChange { trace: i, name: trace.name.clone(), index, value };
        if let Some(observer) = self.observer.as_mut() {
            observer.selection_changed(&change);
        }
        Some(change)
    }

    fn check_region(&self, skip: Option<usize>, name: &str, region: &Region) -> Result<()> {
        if region.is_empty() {
            return Err(ChartError::EmptyRegion { name: name.to_string() });
        }
        for (i, other) in self.traces.iter().enumerate() {
            if Some(i) != skip && other.region.overlaps(region) {
                return Err(ChartError::OverlappingRegions { first: other.name.clone(), second: name.to_string() });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chart() -> ScrubChart {
        let mut c = ScrubChart::new("Line chart").with_legend("Basic");
        let eye = SampleSeries::load(vec![8.0, 23.0, 54.0, 32.0, 12.0, 37.0, 7.0, 23.0, 43.0]).unwrap();
        let head = SampleSeries::load(vec![1.0, 2.0, 3.0]).unwrap();
        c.add_trace(Trace::new("eye", eye, Region::from_ltwh(0.0, 0.0, 360.0, 140.0))).unwrap();
        c.add_trace(Trace::new("head", head, Region::from_ltwh(0.0, 140.0, 360.0, 140.0)).flipped(true))
            .unwrap();
        c
    }

    #[test]
    fn rejects_overlapping_and_empty_regions() {
        let mut c = chart();
        let s = SampleSeries::load(vec![1.0, 2.0]).unwrap();
        let err = c.add_trace(Trace::new("x", s.clone(), Region::from_ltwh(0.0, 100.0, 10.0, 10.0))).unwrap_err();
        assert!(matches!(err, ChartError::OverlappingRegions { .. }));
        let err = c.add_trace(Trace::new("y", s, Region::from_ltwh(0.0, 400.0, 0.0, 10.0))).unwrap_err();
        assert!(matches!(err, ChartError::EmptyRegion { .. }));
    }

    #[test]
    fn header_switches_between_title_and_value() {
        let mut c = chart();
        assert!(matches!(c.render().header, Header::Title { .. }));
        c.on_pointer_down(Point::new(180.0, 50.0));
        assert_eq!(c.render().header, Header::Value { trace: "eye".into(), text: "12.0".into() });
        c.on_pointer_up();
        assert!(matches!(c.render().header, Header::Title { .. }));
    }

    #[test]
    fn down_outside_regions_claims_nothing() {
        let mut c = chart();
        assert_eq!(c.on_pointer_down(Point::new(500.0, 50.0)), None);
        assert_eq!(c.active_trace(), None);
        assert_eq!(c.pointer(), Some(Point::new(500.0, 50.0)));
    }

    #[test]
    fn set_series_resets_the_session() {
        let mut c = chart();
        c.on_pointer_down(Point::new(180.0, 50.0));
        c.set_series(0, SampleSeries::load(vec![0.0, 1.0]).unwrap()).unwrap();
        assert_eq!(c.active_trace(), None);
        assert_eq!(c.traces()[0].session().current_value(), None);
        assert!(c.render().traces[0].indicator.is_none());
    }

    #[test]
    fn set_region_rechecks_overlap() {
        let mut c = chart();
        let err = c.set_region(1, Region::from_ltwh(0.0, 100.0, 360.0, 140.0)).unwrap_err();
        assert!(matches!(err, ChartError::OverlappingRegions { .. }));
        c.set_region(1, Region::from_ltwh(0.0, 140.0, 640.0, 100.0)).unwrap();
        assert_eq!(c.render().width, 640.0);
    }

    #[test]
    fn unknown_trace_index_is_an_error() {
        let mut c = chart();
        let s = SampleSeries::load(vec![1.0, 2.0]).unwrap();
        assert!(matches!(c.set_series(2, s), Err(ChartError::UnknownTrace { index: 2 })));
        let err = c.set_region(5, Region::from_ltwh(0.0, 400.0, 10.0, 10.0)).unwrap_err();
        assert!(matches!(err, ChartError::UnknownTrace { index: 5 }));
    }

    #[test]
    fn trace_index_finds_by_name() {
        let c = chart();
        assert_eq!(c.trace_index("head"), Some(1));
        assert_eq!(c.trace_index("tail"), None);
    }

    #[test]
    fn frame_size_covers_all_regions() {
        let f = chart().render();
        assert_eq!((f.width, f.height), (360.0, 280.0));
        assert_eq!(f.traces.len(), 2);
        assert_eq!(f.traces[0].points.len(), 9);
    }
}
