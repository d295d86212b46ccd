//! Headless end-to-end run of the marker pipeline.
//!
//! Uses in-process fake providers and a MapView that logs every call, so
//! the whole flow is observable without a map widget or network access:
//!
//! ```sh
//! RUST_LOG=debug cargo run --example headless
//! ```

use async_trait::async_trait;
use nyc_pinboard::prelude::*;
use std::sync::atomic::{AtomicU64, Ordering};

/// MapView that logs instead of drawing.
#[derive(Default)]
struct LoggingView {
    next_handle: AtomicU64,
}

impl MapView for LoggingView {
    fn add_marker(&self, position: LatLng, icon: IconKind, title: &str) -> MarkerHandle {
        let handle = MarkerHandle(self.next_handle.fetch_add(1, Ordering::SeqCst) + 1);
        log::info!(
            "add marker {:?} at ({:.4}, {:.4}) [{:?}] {:?}",
            handle,
            position.lat,
            position.lng,
            icon,
            title
        );
        handle
    }

    fn set_marker_visible(&self, handle: MarkerHandle, visible: bool) {
        log::info!("marker {:?} visible={}", handle, visible);
    }

    fn set_marker_animation(&self, handle: MarkerHandle, animation: Option<MarkerAnimation>) {
        log::info!("marker {:?} animation={:?}", handle, animation);
    }

    fn open_info_panel(&self, handle: MarkerHandle, content: &SupplementaryContent) {
        log::info!("open panel at {:?}: {:?}", handle, content);
    }

    fn close_info_panel(&self) {
        log::info!("close panel");
    }

    fn fit_bounds(&self, bounds: &LatLngBounds) {
        log::info!(
            "fit bounds sw=({:.4}, {:.4}) ne=({:.4}, {:.4})",
            bounds.south_west.lat,
            bounds.south_west.lng,
            bounds.north_east.lat,
            bounds.north_east.lng
        );
    }

    fn set_zoom(&self, level: f64) {
        log::info!("set zoom {}", level);
    }

    fn show_banner(&self, message: &str) {
        log::warn!("banner: {}", message);
    }
}

/// Deterministic stand-in for the place search: puts every catalog entry on
/// a small grid around Manhattan.
struct GridFinder;

#[async_trait]
impl PlaceFinder for GridFinder {
    async fn text_search(&self, query: &str) -> Result<LookupOutcome> {
        let name = query.trim_end_matches(", NY").to_string();
        let slot = name.len() as f64;
        Ok(LookupOutcome::Resolved(ResolvedPlace {
            position: LatLng::new(40.7 + slot * 0.01, -74.0 + slot * 0.01),
            canonical_name: format!("{}, NY, USA", name),
            raw_name: name,
        }))
    }
}

struct CannedContent;

#[async_trait]
impl ContentProvider for CannedContent {
    async fn fetch_links(&self, name: &str) -> Result<Vec<ContentLink>> {
        Ok(vec![ContentLink::new(
            name,
            format!("https://example.org/{}", name.replace(' ', "_")),
        )
        .with_description(format!("All about {}", name))])
    }
}

#[tokio::main]
async fn main() {
    env_logger::init();

    let config = AppConfig::from_env();
    let view = Arc::new(LoggingView::default());
    let enrichment = Arc::new(EnrichmentClient::new(
        Arc::new(CannedContent),
        Arc::new(CannedContent),
        config.park_lookup_timeout,
    ));
    let coordinator = MarkerCoordinator::new(
        view,
        Arc::new(GridFinder),
        enrichment,
        &config,
    );

    let mut vm = ViewModel::new(default_catalog(), coordinator.clone());
    vm.subscribe(|| log::debug!("view model changed"));
    vm.start().await;

    log::info!("materialized {} markers", coordinator.marker_count());

    vm.on_query_changed("park");
    log::info!(
        "filter \"park\": {} visible entries",
        vm.visible_locations().len()
    );

    if let Some(first) = vm.visible_locations().first() {
        vm.on_location_clicked(first.id);
    }
    tokio::time::sleep(Duration::from_millis(2100)).await;

    vm.on_reset();
    coordinator.refit();
    log::info!("done; {} markers visible", coordinator.visible_marker_count());
}
