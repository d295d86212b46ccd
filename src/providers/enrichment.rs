//! Supplementary-content fetching.
//!
//! Both content providers are normalized into [`SupplementaryContent`]: a
//! fetch always resolves to links or to an unavailable notice within
//! bounded time, never to a pending state.

use crate::{
    constants::{NEWS_CONTENT_FAIL_TEXT, PARK_CONTENT_FAIL_TEXT},
    core::catalog::Category,
    Result,
};
use async_trait::async_trait;
use std::{sync::Arc, time::Duration};

/// One article or resource link shown in an info panel.
#[derive(Debug, Clone, PartialEq)]
pub struct ContentLink {
    pub title: String,
    pub url: String,
    /// Snippet text, when the provider supplies one.
    pub description: Option<String>,
}

impl ContentLink {
    pub fn new(title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// The resolved content for one marker's info panel.
#[derive(Debug, Clone, PartialEq)]
pub enum SupplementaryContent {
    Links(Vec<ContentLink>),
    Unavailable(String),
}

/// Boundary to one external content API.
#[async_trait]
pub trait ContentProvider: Send + Sync {
    async fn fetch_links(&self, name: &str) -> Result<Vec<ContentLink>>;
}

/// Chooses a provider per category and normalizes every outcome, including
/// the park-path timeout race.
pub struct EnrichmentClient {
    parks: Arc<dyn ContentProvider>,
    news: Arc<dyn ContentProvider>,
    park_timeout: Duration,
}

impl EnrichmentClient {
    pub fn new(
        parks: Arc<dyn ContentProvider>,
        news: Arc<dyn ContentProvider>,
        park_timeout: Duration,
    ) -> Self {
        Self {
            parks,
            news,
            park_timeout,
        }
    }

    /// Fetches content for a resolved place.
    ///
    /// Park content races the provider against `park_timeout`; the first
    /// resolution wins and the loser is dropped, so a late provider
    /// response can never overwrite a timeout outcome (or vice versa).
    /// The news path carries no local timeout and relies on the transport's
    /// own failure signaling.
    pub async fn fetch(&self, raw_name: &str, category: Category) -> SupplementaryContent {
        match category {
            Category::Park => {
                match tokio::time::timeout(self.park_timeout, self.parks.fetch_links(raw_name))
                    .await
                {
                    Ok(Ok(links)) => SupplementaryContent::Links(links),
                    Ok(Err(e)) => {
                        log::warn!("park content fetch failed for {:?}: {}", raw_name, e);
                        SupplementaryContent::Unavailable(PARK_CONTENT_FAIL_TEXT.to_string())
                    }
                    Err(_) => {
                        log::warn!("park content fetch timed out for {:?}", raw_name);
                        SupplementaryContent::Unavailable(PARK_CONTENT_FAIL_TEXT.to_string())
                    }
                }
            }
            Category::Neighborhood => match self.news.fetch_links(raw_name).await {
                Ok(links) => SupplementaryContent::Links(links),
                Err(e) => {
                    log::warn!("article fetch failed for {:?}: {}", raw_name, e);
                    SupplementaryContent::Unavailable(NEWS_CONTENT_FAIL_TEXT.to_string())
                }
            },
        }
    }
}
