//! # nyc-pinboard
//!
//! A small library that plots a fixed catalog of New York City
//! neighborhoods and parks on a host-supplied map widget, enriches each
//! pin with content fetched from external APIs, and filters the visible
//! pins by a typed search query.
//!
//! The host provides the rendering widget behind the [`MapView`] trait;
//! this crate owns the asynchronous lookup → enrichment → marker pipeline
//! and the shared viewport state it feeds.

pub mod app;
pub mod core;
pub mod map;
pub mod prelude;
pub mod providers;
pub use crate::core::constants;

// Re-export public API
pub use crate::core::{
    catalog::{default_catalog, Category, Location, LocationId},
    config::AppConfig,
    geo::{LatLng, LatLngBounds},
};

pub use map::{
    coordinator::MarkerCoordinator,
    marker::{IconKind, Marker},
    view::{MapView, MarkerAnimation, MarkerHandle},
    viewport::ViewportState,
};

pub use providers::{
    enrichment::{ContentLink, ContentProvider, EnrichmentClient, SupplementaryContent},
    place::{LookupOutcome, PlaceFinder, ResolvedPlace, TextSearchFinder},
};

pub use app::{filter::FilterEngine, view_model::ViewModel};

/// Result type used throughout the library
pub type Result<T> = std::result::Result<T, Error>;

/// Common error types
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Provider error: {0}")]
    Provider(String),

    #[error("Invalid coordinates: {0}")]
    InvalidCoordinates(String),

    #[error("Unknown location: {0}")]
    UnknownLocation(String),
}
