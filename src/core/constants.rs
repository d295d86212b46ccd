//! Timing and zoom constants shared by the pipeline.
//! Keeping them in a single place makes it easier to tweak the magic numbers.

use std::time::Duration;

/// How long the park-content race waits before assuming the provider failed.
pub const PARK_LOOKUP_TIMEOUT: Duration = Duration::from_secs(8);

/// Grace delay before surfacing a lookup-failure banner, so the error does
/// not flash while other locations are still in flight.
pub const BANNER_GRACE_DELAY: Duration = Duration::from_secs(4);

/// How long a focused marker bounces before the animation self-cancels.
pub const BOUNCE_DURATION: Duration = Duration::from_secs(2);

/// Zoom forced when exactly one visible marker exists, instead of the
/// degenerate auto-fit of single-point bounds.
pub const SINGLE_MARKER_ZOOM: f64 = 15.0;

/// How many news articles an info panel shows per neighborhood.
pub const NEWS_ARTICLE_LIMIT: usize = 3;

/// Fallback text when park content cannot be fetched in time.
pub const PARK_CONTENT_FAIL_TEXT: &str = "Failed to get wikipedia resources.";

/// Fallback text when neighborhood articles cannot be fetched.
pub const NEWS_CONTENT_FAIL_TEXT: &str = "Failed to load articles.";

/// Banner shown when the place lookup fails for part of a batch.
pub const LOOKUP_FAILURE_BANNER: &str = "No results from the place lookup service.";
