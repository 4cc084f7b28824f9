// File: crates/chart-core/src/session.rs
// Summary: Per-series scrub session (Idle/Scrubbing) and the selection observer hook.

use crate::geometry::PlotRect;
use crate::resolve::resolve_flipped;
use crate::series::SampleSeries;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ScrubState {
    #[default]
    Idle,
    Scrubbing,
}

/// Notification that the scrubbed value of a trace changed.
#[derive(Clone, Debug, PartialEq)]
pub struct SelectionChange {
    pub trace: usize,
    pub name: String,
    pub index: usize,
    pub value: f64,
}

/// Host-side collaborator for selection feedback (haptics, sound, labels).
pub trait SelectionObserver {
    fn selection_changed(&mut self, change: &SelectionChange);
}

impl<F: FnMut(&SelectionChange)> SelectionObserver for F {
    fn selection_changed(&mut self, change: &SelectionChange) { self(change) }
}

/// Transient scrub state for one series. The last resolved sample survives
/// both out-of-range moves and the end of a drag.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrubSession {
    state: ScrubState,
    current_index: Option<usize>,
    current_value: Option<f64>,
}

impl ScrubSession {
    pub fn new() -> Self { Self::default() }

    pub fn state(&self) -> ScrubState { self.state }
    pub fn is_active(&self) -> bool { self.state == ScrubState::Scrubbing }
    pub fn current_index(&self) -> Option<usize> { self.current_index }
    pub fn current_value(&self) -> Option<f64> { self.current_value }

    /// Whether a marker should be drawn: scrubbing and something resolved.
    pub fn indicator_visible(&self) -> bool { self.is_active() && self.current_index.is_some() }

    /// Handle a drag start or move at plot-local `pointer_x`.
    /// Returns `(index, value)` when the selected value changed.
    pub fn drag(
        &mut self,
        series: &SampleSeries,
        rect: PlotRect,
        pointer_x: f64,
        flip: bool,
    ) -> Option<(usize, f64)> {
        if self.state == ScrubState::Idle {
            log::debug!("scrub session: Idle -> Scrubbing at x={pointer_x}");
            self.state = ScrubState::Scrubbing;
        }
        let hit = resolve_flipped(series, rect, pointer_x, flip)?;
        let changed = self.current_value != Some(hit.value);
        self.current_index = Some(hit.index);
        self.current_value = Some(hit.value);
        changed.then_some((hit.index, hit.value))
    }

    /// Handle a drag end. The value is retained; the indicator is cleared.
    pub fn end(&mut self) {
        if self.state == ScrubState::Scrubbing {
            log::debug!("scrub session: Scrubbing -> Idle (value {:?})", self.current_value);
        }
        self.state = ScrubState::Idle;
    }

    /// Forget everything, e.g. after the series was replaced.
    pub fn reset(&mut self) { *self = Self::default(); }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series() -> SampleSeries {
        SampleSeries::load(vec![8.0, 23.0, 54.0, 32.0, 12.0, 37.0, 7.0, 23.0, 43.0]).unwrap()
    }
    const RECT: PlotRect = PlotRect::new(360.0, 140.0);

    #[test]
    fn drag_activates_and_resolves() {
        let mut s = ScrubSession::new();
        assert_eq!(s.state(), ScrubState::Idle);
        assert_eq!(s.drag(&series(), RECT, 180.0, false), Some((4, 12.0)));
        assert!(s.is_active());
        assert!(s.indicator_visible());
        assert_eq!(s.current_index(), Some(4));
    }

    #[test]
    fn out_of_range_keeps_last_value() {
        let mut s = ScrubSession::new();
        s.drag(&series(), RECT, 90.0, false);
        assert_eq!(s.drag(&series(), RECT, 1000.0, false), None);
        assert!(s.is_active());
        assert_eq!(s.current_value(), Some(54.0));
        assert_eq!(s.current_index(), Some(2));
    }

    #[test]
    fn out_of_range_first_move_scrubs_without_indicator() {
        let mut s = ScrubSession::new();
        assert_eq!(s.drag(&series(), RECT, -100.0, false), None);
        assert!(s.is_active());
        assert!(!s.indicator_visible());
    }

    #[test]
    fn same_value_does_not_notify() {
        let mut s = ScrubSession::new();
        assert!(s.drag(&series(), RECT, 45.0, false).is_some());
        assert_eq!(s.drag(&series(), RECT, 50.0, false), None);
        // index 7 holds the same value (23) as index 1
        assert_eq!(s.drag(&series(), RECT, 315.0, false), None);
        assert_eq!(s.current_index(), Some(7));
    }

    #[test]
    fn end_retains_value_and_hides_indicator() {
        let mut s = ScrubSession::new();
        s.drag(&series(), RECT, 0.0, false);
        s.end();
        assert_eq!(s.state(), ScrubState::Idle);
        assert!(!s.indicator_visible());
        assert_eq!(s.current_value(), Some(8.0));
    }
}
