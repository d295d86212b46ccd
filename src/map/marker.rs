//! Per-location marker record.

use crate::{
    core::{catalog::{Category, LocationId}, geo::LatLng},
    map::view::MarkerHandle,
    providers::enrichment::SupplementaryContent,
};

/// Which pin image the widget should use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconKind {
    Default,
    /// Parks get the green pin.
    Park,
}

impl IconKind {
    pub fn for_category(category: Category) -> Self {
        match category {
            Category::Park => Self::Park,
            Category::Neighborhood => Self::Default,
        }
    }

    /// Asset path of the pin image, when the widget wants one.
    pub fn asset(&self) -> Option<&'static str> {
        match self {
            Self::Default => None,
            Self::Park => Some("img/darkgreen_MarkerP.png"),
        }
    }
}

/// The visual pin plus its attached supplementary content. Created once
/// per location when its pipeline completes and never recreated.
#[derive(Debug, Clone)]
pub struct Marker {
    pub location_id: LocationId,
    pub handle: MarkerHandle,
    pub position: LatLng,
    pub title: String,
    pub icon: IconKind,
    pub content: SupplementaryContent,
    pub visible: bool,
}
