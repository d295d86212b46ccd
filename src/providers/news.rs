//! NYT article-search provider for neighborhood content.

use crate::{
    constants::NEWS_ARTICLE_LIMIT,
    providers::{
        enrichment::{ContentLink, ContentProvider},
        HTTP_CLIENT,
    },
    Result,
};
use async_trait::async_trait;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct ArticleSearchResponse {
    response: ArticleSearchBody,
}

#[derive(Debug, Deserialize)]
struct ArticleSearchBody {
    #[serde(default)]
    docs: Vec<ArticleDoc>,
}

#[derive(Debug, Deserialize)]
struct ArticleDoc {
    web_url: String,
    headline: Headline,
    #[serde(default)]
    snippet: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Headline {
    main: String,
}

pub struct NytProvider {
    endpoint: String,
    api_key: String,
}

impl NytProvider {
    pub const DEFAULT_ENDPOINT: &'static str =
        "https://api.nytimes.com/svc/search/v2/articlesearch.json";

    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            endpoint: Self::DEFAULT_ENDPOINT.to_string(),
            api_key: api_key.into(),
        }
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// The first three newest articles, headline as title and snippet as
    /// description. Shorter result sets yield what exists.
    fn links_from(body: ArticleSearchResponse) -> Vec<ContentLink> {
        body.response
            .docs
            .into_iter()
            .take(NEWS_ARTICLE_LIMIT)
            .map(|doc| {
                let link = ContentLink::new(doc.headline.main, doc.web_url);
                match doc.snippet {
                    Some(snippet) if !snippet.is_empty() => link.with_description(snippet),
                    _ => link,
                }
            })
            .collect()
    }
}

#[async_trait]
impl ContentProvider for NytProvider {
    async fn fetch_links(&self, name: &str) -> Result<Vec<ContentLink>> {
        let response = HTTP_CLIENT
            .get(&self.endpoint)
            .query(&[
                ("q", name),
                ("sort", "newest"),
                ("api-key", self.api_key.as_str()),
            ])
            .send()
            .await?
            .error_for_status()?;

        let body: ArticleSearchResponse = response.json().await?;
        Ok(Self::links_from(body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> ArticleSearchResponse {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_takes_first_three_articles() {
        let body = parse(
            r#"{"response": {"docs": [
                {"web_url": "https://example.org/1", "headline": {"main": "One"}, "snippet": "first"},
                {"web_url": "https://example.org/2", "headline": {"main": "Two"}, "snippet": ""},
                {"web_url": "https://example.org/3", "headline": {"main": "Three"}},
                {"web_url": "https://example.org/4", "headline": {"main": "Four"}}
            ]}}"#,
        );

        let links = NytProvider::links_from(body);
        assert_eq!(links.len(), 3);
        assert_eq!(links[0].title, "One");
        assert_eq!(links[0].description.as_deref(), Some("first"));
        assert_eq!(links[1].description, None);
        assert_eq!(links[2].url, "https://example.org/3");
    }

    #[test]
    fn test_short_result_set_yields_what_exists() {
        let body = parse(
            r#"{"response": {"docs": [
                {"web_url": "https://example.org/1", "headline": {"main": "Only"}}
            ]}}"#,
        );
        assert_eq!(NytProvider::links_from(body).len(), 1);
    }

    #[test]
    fn test_empty_docs_yield_no_links() {
        let body = parse(r#"{"response": {"docs": []}}"#);
        assert!(NytProvider::links_from(body).is_empty());
    }
}
