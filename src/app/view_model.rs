//! Coordination surface for the list UI.
//!
//! Owns the catalog and the current query, projects the visible list, and
//! dispatches UI actions into the filter engine and the coordinator. The
//! host subscribes for change notifications instead of binding observables.

use crate::{
    app::filter::{FilterEngine, FilterOutcome},
    core::catalog::{Location, LocationId},
    map::coordinator::MarkerCoordinator,
};
use std::sync::Arc;

type ChangeListener = Box<dyn Fn() + Send + Sync>;

pub struct ViewModel {
    catalog: Vec<Location>,
    query: String,
    panel_collapsed: bool,
    show_filter_error: bool,
    filter: FilterEngine,
    coordinator: Arc<MarkerCoordinator>,
    listeners: Vec<ChangeListener>,
}

impl ViewModel {
    pub fn new(catalog: Vec<Location>, coordinator: Arc<MarkerCoordinator>) -> Self {
        Self {
            catalog,
            query: String::new(),
            panel_collapsed: false,
            show_filter_error: false,
            filter: FilterEngine::new(),
            coordinator,
            listeners: Vec::new(),
        }
    }

    /// Kicks off the marker pipeline for the whole catalog and waits for
    /// the batch to settle.
    pub async fn start(&self) {
        self.coordinator.materialize_all(&self.catalog, false).await;
    }

    /// Registers a change listener, called after every state-changing
    /// dispatch.
    pub fn subscribe(&mut self, listener: impl Fn() + Send + Sync + 'static) {
        self.listeners.push(Box::new(listener));
    }

    fn notify(&self) {
        for listener in &self.listeners {
            listener();
        }
    }

    /// Re-filters on every keystroke and pushes visibility changes to the
    /// map.
    pub fn on_query_changed(&mut self, query: &str) {
        self.query = query.to_string();
        let outcome = self.filter.apply(&self.query, &mut self.catalog);
        self.push_visibility(&outcome);
        self.show_filter_error = outcome.is_empty;
        self.notify();
    }

    /// Clears the query and the error indicator and restores full
    /// visibility.
    pub fn on_reset(&mut self) {
        self.query.clear();
        let outcome = self.filter.apply("", &mut self.catalog);
        self.push_visibility(&outcome);
        self.show_filter_error = false;
        self.notify();
    }

    /// A click on a list entry focuses that location's marker. Clicks on
    /// entries whose pipeline has not materialized yet are ignored.
    pub fn on_location_clicked(&self, id: LocationId) {
        if let Err(e) = self.coordinator.focus(id) {
            log::debug!("ignoring click on unmaterialized location: {}", e);
        }
    }

    /// Collapses or expands the list panel. Layout only; marker and map
    /// state are untouched.
    pub fn on_toggle_panel(&mut self) {
        self.panel_collapsed = !self.panel_collapsed;
        self.notify();
    }

    fn push_visibility(&self, outcome: &FilterOutcome) {
        for id in &outcome.changed {
            let visible = self.catalog[id.0].visible;
            self.coordinator.set_visibility(*id, visible);
        }
    }

    /// Derived view: the catalog entries currently visible, in order.
    pub fn visible_locations(&self) -> Vec<&Location> {
        self.catalog.iter().filter(|loc| loc.visible).collect()
    }

    pub fn catalog(&self) -> &[Location] {
        &self.catalog
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn panel_collapsed(&self) -> bool {
        self.panel_collapsed
    }

    pub fn show_filter_error(&self) -> bool {
        self.show_filter_error
    }
}
