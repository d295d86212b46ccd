//! Boundary to the host's map widget.
//!
//! The library never renders anything itself; it drives a widget the host
//! supplies through this trait. Implementations must tolerate being called
//! from spawned pipeline tasks.

use crate::{
    core::geo::{LatLng, LatLngBounds},
    map::marker::IconKind,
    providers::enrichment::SupplementaryContent,
};

/// Opaque handle to a pin the widget created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MarkerHandle(pub u64);

/// The only marker animation the pipeline drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerAnimation {
    Bounce,
}

pub trait MapView: Send + Sync {
    /// Creates a pin and returns its handle.
    fn add_marker(&self, position: LatLng, icon: IconKind, title: &str) -> MarkerHandle;

    fn set_marker_visible(&self, handle: MarkerHandle, visible: bool);

    /// `None` stops any running animation.
    fn set_marker_animation(&self, handle: MarkerHandle, animation: Option<MarkerAnimation>);

    /// Opens the info panel anchored at the given pin. The widget shows at
    /// most one panel; opening implies closing any previous one on its side.
    fn open_info_panel(&self, handle: MarkerHandle, content: &SupplementaryContent);

    fn close_info_panel(&self);

    /// Recomputes center and zoom so the given bounds are fully in view.
    fn fit_bounds(&self, bounds: &LatLngBounds);

    fn set_zoom(&self, level: f64);

    /// Surfaces a page-level error banner.
    fn show_banner(&self, message: &str);
}
