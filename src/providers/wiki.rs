//! Wikipedia opensearch provider for park content.
//!
//! The opensearch endpoint answers with a positional JSON array:
//! `[query, titles[], descriptions[], urls[]]`. Titles and urls are paired
//! by index and kept in provider order.

use crate::{
    providers::{
        enrichment::{ContentLink, ContentProvider},
        HTTP_CLIENT,
    },
    Error, Result,
};
use async_trait::async_trait;
use serde_json::Value;

pub struct WikiProvider {
    endpoint: String,
}

impl Default for WikiProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl WikiProvider {
    pub const DEFAULT_ENDPOINT: &'static str = "https://en.wikipedia.org/w/api.php";

    pub fn new() -> Self {
        Self {
            endpoint: Self::DEFAULT_ENDPOINT.to_string(),
        }
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    fn links_from(body: &Value) -> Result<Vec<ContentLink>> {
        let titles = body
            .get(1)
            .and_then(Value::as_array)
            .ok_or_else(|| Error::Provider("opensearch response missing titles".into()))?;
        let urls = body
            .get(3)
            .and_then(Value::as_array)
            .ok_or_else(|| Error::Provider("opensearch response missing urls".into()))?;

        Ok(titles
            .iter()
            .zip(urls.iter())
            .filter_map(|(title, url)| match (title.as_str(), url.as_str()) {
                (Some(title), Some(url)) => Some(ContentLink::new(title, url)),
                _ => None,
            })
            .collect())
    }
}

#[async_trait]
impl ContentProvider for WikiProvider {
    async fn fetch_links(&self, name: &str) -> Result<Vec<ContentLink>> {
        let response = HTTP_CLIENT
            .get(&self.endpoint)
            .query(&[("action", "opensearch"), ("search", name), ("format", "json")])
            .send()
            .await?
            .error_for_status()?;

        let body: Value = response.json().await?;
        Self::links_from(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_links_pair_titles_with_urls_in_order() {
        let body: Value = serde_json::from_str(
            r#"[
                "Central Park",
                ["Central Park", "Central Park Zoo"],
                ["", ""],
                ["https://en.wikipedia.org/wiki/Central_Park",
                 "https://en.wikipedia.org/wiki/Central_Park_Zoo"]
            ]"#,
        )
        .unwrap();

        let links = WikiProvider::links_from(&body).unwrap();
        assert_eq!(links.len(), 2);
        assert_eq!(links[0].title, "Central Park");
        assert_eq!(links[0].url, "https://en.wikipedia.org/wiki/Central_Park");
        assert_eq!(links[1].title, "Central Park Zoo");
    }

    #[test]
    fn test_missing_sections_are_a_provider_error() {
        let body: Value = serde_json::from_str(r#"["Central Park"]"#).unwrap();
        assert!(matches!(
            WikiProvider::links_from(&body),
            Err(Error::Provider(_))
        ));
    }

    #[test]
    fn test_empty_result_set_yields_no_links() {
        let body: Value = serde_json::from_str(r#"["zzz", [], [], []]"#).unwrap();
        assert!(WikiProvider::links_from(&body).unwrap().is_empty());
    }
}
