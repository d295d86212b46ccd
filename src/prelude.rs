//! Prelude module for common nyc-pinboard types and traits
//!
//! Re-exports the most commonly used types, traits, and functions for easy
//! importing with `use nyc_pinboard::prelude::*;`

pub use crate::core::{
    catalog::{default_catalog, Category, Location, LocationId},
    config::AppConfig,
    geo::{LatLng, LatLngBounds},
};

pub use crate::providers::{
    enrichment::{ContentLink, ContentProvider, EnrichmentClient, SupplementaryContent},
    news::NytProvider,
    place::{LookupOutcome, PlaceFinder, ResolvedPlace, TextSearchFinder},
    wiki::WikiProvider,
};

pub use crate::map::{
    coordinator::{MarkerCoordinator, PipelineState},
    marker::{IconKind, Marker},
    view::{MapView, MarkerAnimation, MarkerHandle},
    viewport::ViewportState,
};

pub use crate::app::{
    filter::{FilterEngine, FilterOutcome},
    view_model::ViewModel,
};

pub use crate::{Error, Result};

pub use std::{
    sync::Arc,
    time::Duration,
};
