//! The marker pipeline coordinator.
//!
//! Owns the marker table and the shared [`ViewportState`], and runs one
//! independent lookup → enrichment → materialization pipeline per catalog
//! location. Pipelines complete in unpredictable order; every write into
//! the shared state happens inside a single critical section so the map
//! always presents one consistent story.

use crate::{
    constants::LOOKUP_FAILURE_BANNER,
    core::{
        catalog::{Category, Location, LocationId},
        config::AppConfig,
    },
    map::{
        marker::{IconKind, Marker},
        view::{MapView, MarkerAnimation, MarkerHandle},
        viewport::ViewportState,
    },
    providers::{
        enrichment::{EnrichmentClient, SupplementaryContent},
        place::{LookupOutcome, PlaceFinder, ResolvedPlace},
    },
    Error, Result,
};
use futures::future::join_all;
use std::{
    collections::HashMap,
    sync::{Arc, Mutex, MutexGuard, PoisonError},
    time::Duration,
};

/// Per-location pipeline state. Terminal states never re-enter `Pending`;
/// no retries are issued automatically.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineState {
    Pending,
    Resolving,
    NotFoundTerminal,
    Enriching,
    Materialized,
}

struct Inner {
    markers: HashMap<LocationId, Marker>,
    states: HashMap<LocationId, PipelineState>,
    viewport: ViewportState,
    /// Visibility requested by the filter, applied even when it arrives
    /// before the location's marker exists.
    desired_visibility: HashMap<LocationId, bool>,
    banner_scheduled: bool,
}

pub struct MarkerCoordinator {
    view: Arc<dyn MapView>,
    finder: Arc<dyn PlaceFinder>,
    enrichment: Arc<EnrichmentClient>,
    banner_grace_delay: Duration,
    bounce_duration: Duration,
    single_marker_zoom: f64,
    inner: Mutex<Inner>,
}

impl MarkerCoordinator {
    pub fn new(
        view: Arc<dyn MapView>,
        finder: Arc<dyn PlaceFinder>,
        enrichment: Arc<EnrichmentClient>,
        config: &AppConfig,
    ) -> Arc<Self> {
        Arc::new(Self {
            view,
            finder,
            enrichment,
            banner_grace_delay: config.banner_grace_delay,
            bounce_duration: config.bounce_duration,
            single_marker_zoom: config.single_marker_zoom,
            inner: Mutex::new(Inner {
                markers: HashMap::new(),
                states: HashMap::new(),
                viewport: ViewportState::new(),
                desired_visibility: HashMap::new(),
                banner_scheduled: false,
            }),
        })
    }

    fn inner(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Starts one independent pipeline per location and waits for the batch
    /// to settle. With `bounce_all_immediately` each marker is focused as
    /// soon as it materializes, which is only useful for single-result
    /// "jump to this location" batches.
    pub async fn materialize_all(
        self: &Arc<Self>,
        locations: &[Location],
        bounce_all_immediately: bool,
    ) {
        {
            let mut inner = self.inner();
            for loc in locations {
                inner
                    .states
                    .entry(loc.id)
                    .or_insert(PipelineState::Pending);
            }
        }

        let handles: Vec<_> = locations
            .iter()
            .map(|loc| {
                let this = Arc::clone(self);
                let id = loc.id;
                let query = loc.query();
                let category = loc.category;
                tokio::spawn(async move {
                    this.run_pipeline(id, query, category, bounce_all_immediately)
                        .await;
                })
            })
            .collect();

        for join in join_all(handles).await {
            if let Err(e) = join {
                log::warn!("pipeline task panicked: {}", e);
            }
        }
    }

    async fn run_pipeline(
        self: Arc<Self>,
        id: LocationId,
        query: String,
        category: Category,
        bounce_immediately: bool,
    ) {
        {
            // Once a pipeline has started it never restarts; re-invoking the
            // batch for an in-flight or terminal location is a no-op.
            let mut inner = self.inner();
            match inner.states.get(&id) {
                Some(PipelineState::Pending) | None => {
                    inner.states.insert(id, PipelineState::Resolving);
                }
                _ => return,
            }
        }
        log::debug!("resolving {:?} ({:?})", query, id);

        let outcome = match self.finder.text_search(&query).await {
            Ok(outcome) => outcome,
            Err(e) => {
                log::warn!("lookup failed for {:?}: {}", query, e);
                LookupOutcome::NotFound
            }
        };

        let place = match outcome {
            LookupOutcome::Resolved(place) => place,
            LookupOutcome::NotFound => {
                self.inner()
                    .states
                    .insert(id, PipelineState::NotFoundTerminal);
                self.schedule_lookup_banner();
                return;
            }
        };

        self.inner().states.insert(id, PipelineState::Enriching);
        let content = self.enrichment.fetch(&place.raw_name, category).await;
        self.materialize(id, category, place, content, bounce_immediately);
    }

    /// Builds the marker, folds its position into the shared bounds and
    /// refits the viewport. Runs entirely inside the critical section so
    /// concurrent pipelines never interleave their bounds updates.
    fn materialize(
        self: &Arc<Self>,
        id: LocationId,
        category: Category,
        place: ResolvedPlace,
        content: SupplementaryContent,
        bounce_immediately: bool,
    ) {
        let bounce = {
            let mut inner = self.inner();
            if inner.markers.contains_key(&id) {
                log::warn!("marker for {:?} already materialized, ignoring", id);
                return;
            }

            let icon = IconKind::for_category(category);
            let handle = self
                .view
                .add_marker(place.position, icon, &place.canonical_name);
            let visible = inner.desired_visibility.get(&id).copied().unwrap_or(true);
            if !visible {
                self.view.set_marker_visible(handle, false);
            }

            inner.markers.insert(
                id,
                Marker {
                    location_id: id,
                    handle,
                    position: place.position,
                    title: place.canonical_name,
                    icon,
                    content,
                    visible,
                },
            );
            inner.states.insert(id, PipelineState::Materialized);

            let bounds = inner.viewport.extend(place.position);
            self.view.fit_bounds(&bounds);
            if inner.markers.values().filter(|m| m.visible).count() == 1 {
                // Auto-fit of single-point bounds would zoom out to the
                // world; pick a fixed close-in level instead.
                self.view.set_zoom(self.single_marker_zoom);
            }

            log::info!("materialized marker for {:?}", id);
            bounce_immediately.then(|| self.begin_focus(&mut inner, id))
        };

        if let Some((handle, epoch)) = bounce {
            self.spawn_bounce_timer(handle, epoch);
        }
    }

    /// Focuses a marker: bounce it and open its info panel, cancelling any
    /// previous focus first. Idempotent; refocusing restarts the bounce.
    pub fn focus(self: &Arc<Self>, id: LocationId) -> Result<()> {
        let (handle, epoch) = {
            let mut inner = self.inner();
            if !inner.markers.contains_key(&id) {
                return Err(Error::UnknownLocation(format!("{:?}", id)));
            }
            self.begin_focus(&mut inner, id)
        };

        self.spawn_bounce_timer(handle, epoch);
        Ok(())
    }

    fn begin_focus(&self, inner: &mut Inner, id: LocationId) -> (MarkerHandle, u64) {
        if let Some(prev) = inner.viewport.focused {
            if let Some(marker) = inner.markers.get(&prev) {
                self.view.set_marker_animation(marker.handle, None);
            }
        }
        self.view.close_info_panel();

        let epoch = inner.viewport.begin_focus(id);
        let marker = &inner.markers[&id];
        self.view
            .set_marker_animation(marker.handle, Some(MarkerAnimation::Bounce));
        self.view.open_info_panel(marker.handle, &marker.content);
        (marker.handle, epoch)
    }

    /// Bounce self-cancels after `bounce_duration`, unless a newer focus
    /// already took over: the epoch comparison keeps a stale timer from
    /// cancelling a newer bounce.
    fn spawn_bounce_timer(self: &Arc<Self>, handle: MarkerHandle, epoch: u64) {
        let this = Arc::clone(self);
        let duration = self.bounce_duration;
        tokio::spawn(async move {
            tokio::time::sleep(duration).await;
            let inner = this.inner();
            if inner.viewport.focus_epoch == epoch {
                this.view.set_marker_animation(handle, None);
            }
        });
    }

    /// Surfaces the lookup-failure banner at most once per batch, after a
    /// grace delay so it does not flash while other locations are still in
    /// flight.
    fn schedule_lookup_banner(self: &Arc<Self>) {
        {
            let mut inner = self.inner();
            if inner.banner_scheduled {
                return;
            }
            inner.banner_scheduled = true;
        }

        let this = Arc::clone(self);
        tokio::spawn(async move {
            tokio::time::sleep(this.banner_grace_delay).await;
            this.view.show_banner(LOOKUP_FAILURE_BANNER);
        });
    }

    /// Shows or hides a marker. Bounds are not recomputed; they only grow
    /// (a narrowed filter keeps the wider viewport).
    pub fn set_visibility(&self, id: LocationId, visible: bool) {
        let mut inner = self.inner();
        inner.desired_visibility.insert(id, visible);
        if let Some(marker) = inner.markers.get_mut(&id) {
            if marker.visible != visible {
                marker.visible = visible;
                self.view.set_marker_visible(marker.handle, visible);
            }
        }
    }

    /// Re-applies the accumulated bounds, e.g. after the host window
    /// resized.
    pub fn refit(&self) {
        let inner = self.inner();
        if let Some(bounds) = inner.viewport.bounds.as_ref() {
            self.view.fit_bounds(bounds);
        }
    }

    /// Resolves a widget click on a pin back to its location and focuses it.
    pub fn handle_marker_click(self: &Arc<Self>, handle: MarkerHandle) -> Result<()> {
        let id = {
            let inner = self.inner();
            inner
                .markers
                .values()
                .find(|m| m.handle == handle)
                .map(|m| m.location_id)
        };
        match id {
            Some(id) => self.focus(id),
            None => Err(Error::UnknownLocation(format!("handle {:?}", handle))),
        }
    }

    pub fn state(&self, id: LocationId) -> Option<PipelineState> {
        self.inner().states.get(&id).copied()
    }

    pub fn marker(&self, id: LocationId) -> Option<Marker> {
        self.inner().markers.get(&id).cloned()
    }

    pub fn marker_count(&self) -> usize {
        self.inner().markers.len()
    }

    pub fn visible_marker_count(&self) -> usize {
        self.inner().markers.values().filter(|m| m.visible).count()
    }

    pub fn viewport(&self) -> ViewportState {
        self.inner().viewport.clone()
    }
}
