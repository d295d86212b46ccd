//! Shared viewport state.
//!
//! One instance per map, mutated only by the coordinator inside its
//! critical section. Bounds only grow; a filter hiding markers does not
//! shrink them back (only a full rebuild would reset the accumulator).

use crate::core::{catalog::LocationId, geo::{LatLng, LatLngBounds}};

#[derive(Debug, Clone, Default)]
pub struct ViewportState {
    /// Running bounding region of every materialized marker so far.
    pub bounds: Option<LatLngBounds>,
    /// The marker currently bouncing, at most one.
    pub focused: Option<LocationId>,
    /// The marker whose info panel is open, at most one.
    pub open_panel: Option<LocationId>,
    /// Bumped on every focus; stale bounce timers compare against it so
    /// they never cancel a newer bounce.
    pub focus_epoch: u64,
}

impl ViewportState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Folds a position into the accumulator and returns the new bounds.
    pub fn extend(&mut self, position: LatLng) -> LatLngBounds {
        match self.bounds.as_mut() {
            Some(bounds) => {
                bounds.extend(&position);
                bounds.clone()
            }
            None => {
                let bounds = LatLngBounds::from_point(position);
                self.bounds = Some(bounds.clone());
                bounds
            }
        }
    }

    /// Records a new focus target and returns the epoch that guards its
    /// bounce timer.
    pub fn begin_focus(&mut self, id: LocationId) -> u64 {
        self.focus_epoch += 1;
        self.focused = Some(id);
        self.open_panel = Some(id);
        self.focus_epoch
    }
}
