//! Free-text place lookup.
//!
//! Turns a query like "Brooklyn, NY" into coordinates plus a canonical
//! display name, or a not-found outcome. No retries are attempted here;
//! the caller decides what a failed lookup means for its batch.

use crate::{core::geo::LatLng, providers::HTTP_CLIENT, Error, Result};
use async_trait::async_trait;
use serde::Deserialize;

/// A successfully resolved place.
///
/// `canonical_name` is the formatted address used as the marker title;
/// `raw_name` is the provider's short name, which is the best thing to hand
/// to the content APIs.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedPlace {
    pub position: LatLng,
    pub canonical_name: String,
    pub raw_name: String,
}

/// Outcome of a single text search.
#[derive(Debug, Clone, PartialEq)]
pub enum LookupOutcome {
    Resolved(ResolvedPlace),
    NotFound,
}

/// Boundary to the external place-lookup service.
#[async_trait]
pub trait PlaceFinder: Send + Sync {
    async fn text_search(&self, query: &str) -> Result<LookupOutcome>;
}

#[derive(Debug, Deserialize)]
struct TextSearchResponse {
    status: String,
    #[serde(default)]
    results: Vec<PlaceResult>,
}

#[derive(Debug, Deserialize)]
struct PlaceResult {
    geometry: Geometry,
    formatted_address: String,
    name: String,
}

#[derive(Debug, Deserialize)]
struct Geometry {
    location: LatLng,
}

/// reqwest-backed [`PlaceFinder`] against a Places-style text search
/// endpoint.
pub struct TextSearchFinder {
    endpoint: String,
    api_key: String,
}

impl TextSearchFinder {
    pub const DEFAULT_ENDPOINT: &'static str =
        "https://maps.googleapis.com/maps/api/place/textsearch/json";

    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            endpoint: Self::DEFAULT_ENDPOINT.to_string(),
            api_key: api_key.into(),
        }
    }

    /// Points the finder at a different endpoint (used against test servers).
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    fn outcome_from(&self, body: TextSearchResponse) -> Result<LookupOutcome> {
        if body.status != "OK" {
            log::debug!("text search returned status {}", body.status);
            return Ok(LookupOutcome::NotFound);
        }
        let first = match body.results.into_iter().next() {
            Some(result) => result,
            None => return Ok(LookupOutcome::NotFound),
        };
        if !first.geometry.location.is_valid() {
            return Err(Error::InvalidCoordinates(format!(
                "{:?} for {}",
                first.geometry.location, first.name
            )));
        }
        Ok(LookupOutcome::Resolved(ResolvedPlace {
            position: first.geometry.location,
            canonical_name: first.formatted_address,
            raw_name: first.name,
        }))
    }
}

#[async_trait]
impl PlaceFinder for TextSearchFinder {
    async fn text_search(&self, query: &str) -> Result<LookupOutcome> {
        log::debug!("text search for {:?}", query);
        let response = HTTP_CLIENT
            .get(&self.endpoint)
            .query(&[("query", query), ("key", self.api_key.as_str())])
            .send()
            .await?;

        if !response.status().is_success() {
            // Provider-level failure reads as not-found; the rest of the
            // batch proceeds independently.
            log::warn!("text search HTTP {} for {:?}", response.status(), query);
            return Ok(LookupOutcome::NotFound);
        }

        let body: TextSearchResponse = response.json().await?;
        self.outcome_from(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn finder() -> TextSearchFinder {
        TextSearchFinder::new("test-key")
    }

    #[test]
    fn test_ok_response_resolves_first_result() {
        let body: TextSearchResponse = serde_json::from_str(
            r#"{
                "status": "OK",
                "results": [
                    {
                        "geometry": {"location": {"lat": 40.6782, "lng": -73.9442}},
                        "formatted_address": "Brooklyn, NY, USA",
                        "name": "Brooklyn"
                    },
                    {
                        "geometry": {"location": {"lat": 0.0, "lng": 0.0}},
                        "formatted_address": "elsewhere",
                        "name": "ignored"
                    }
                ]
            }"#,
        )
        .unwrap();

        match finder().outcome_from(body).unwrap() {
            LookupOutcome::Resolved(place) => {
                assert_eq!(place.raw_name, "Brooklyn");
                assert_eq!(place.canonical_name, "Brooklyn, NY, USA");
                assert_eq!(place.position, LatLng::new(40.6782, -73.9442));
            }
            other => panic!("expected resolved place, got {:?}", other),
        }
    }

    #[test]
    fn test_zero_results_is_not_found() {
        let body: TextSearchResponse =
            serde_json::from_str(r#"{"status": "ZERO_RESULTS"}"#).unwrap();
        assert_eq!(finder().outcome_from(body).unwrap(), LookupOutcome::NotFound);
    }

    #[test]
    fn test_invalid_coordinates_are_rejected() {
        let body: TextSearchResponse = serde_json::from_str(
            r#"{
                "status": "OK",
                "results": [{
                    "geometry": {"location": {"lat": 120.0, "lng": -73.9}},
                    "formatted_address": "nowhere",
                    "name": "nowhere"
                }]
            }"#,
        )
        .unwrap();
        assert!(matches!(
            finder().outcome_from(body),
            Err(Error::InvalidCoordinates(_))
        ));
    }
}
