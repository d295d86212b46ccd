//! Configuration for providers and pipeline timing.
//!
//! API keys are supplied by the host or the environment, never embedded in
//! the source.

use crate::core::constants::{
    BANNER_GRACE_DELAY, BOUNCE_DURATION, PARK_LOOKUP_TIMEOUT, SINGLE_MARKER_ZOOM,
};
use serde::Deserialize;
use std::time::Duration;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Key for the place text-search endpoint.
    pub places_api_key: String,
    /// Key for the news article-search endpoint.
    pub news_api_key: String,
    /// Park-content race timeout.
    pub park_lookup_timeout: Duration,
    /// Grace delay before the lookup-failure banner shows.
    pub banner_grace_delay: Duration,
    /// How long a focused marker bounces.
    pub bounce_duration: Duration,
    /// Zoom level forced when exactly one marker is visible.
    pub single_marker_zoom: f64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            places_api_key: String::new(),
            news_api_key: String::new(),
            park_lookup_timeout: PARK_LOOKUP_TIMEOUT,
            banner_grace_delay: BANNER_GRACE_DELAY,
            bounce_duration: BOUNCE_DURATION,
            single_marker_zoom: SINGLE_MARKER_ZOOM,
        }
    }
}

impl AppConfig {
    /// Reads the API keys from `PINBOARD_PLACES_KEY` and `PINBOARD_NYT_KEY`,
    /// leaving the timing defaults in place.
    pub fn from_env() -> Self {
        Self {
            places_api_key: std::env::var("PINBOARD_PLACES_KEY").unwrap_or_default(),
            news_api_key: std::env::var("PINBOARD_NYT_KEY").unwrap_or_default(),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_carry_constants() {
        let config = AppConfig::default();
        assert_eq!(config.park_lookup_timeout, Duration::from_secs(8));
        assert_eq!(config.banner_grace_delay, Duration::from_secs(4));
        assert_eq!(config.bounce_duration, Duration::from_secs(2));
        assert!(config.places_api_key.is_empty());
    }
}
