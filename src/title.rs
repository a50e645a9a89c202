//! Story title lookup.

use std::collections::HashMap;
use std::time::Duration;

use crate::types::{GraphError, GraphResult};

/// Resolves a story id to its human-readable title.
pub trait TitleResolver {
    fn resolve_title(&self, story_id: &str) -> GraphResult<String>;
}

/// Looks titles up over HTTP.
///
/// The request URL is `base_url` followed by the story id. The service answers
/// with a short text body whose second line is the title.
pub struct HttpTitleResolver {
    base_url: String,
    client: reqwest::blocking::Client,
}

impl HttpTitleResolver {
    /// Request timeout.
    const TIMEOUT: Duration = Duration::from_secs(10);

    /// Create a resolver for the given URL prefix.
    pub fn new(base_url: impl Into<String>) -> GraphResult<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Self::TIMEOUT)
            .build()
            .map_err(|e| GraphError::Network(e.to_string()))?;
        Ok(Self {
            base_url: base_url.into(),
            client,
        })
    }

    /// Full lookup URL for a story.
    pub fn url_for(&self, story_id: &str) -> String {
        format!("{}{}", self.base_url, story_id)
    }
}

impl TitleResolver for HttpTitleResolver {
    fn resolve_title(&self, story_id: &str) -> GraphResult<String> {
        let url = self.url_for(story_id);
        log::debug!("GET {}", url);
        let response = self
            .client
            .get(&url)
            .send()
            .map_err(|e| GraphError::Network(format!("{url}: {e}")))?;
        let status = response.status();
        if !status.is_success() {
            return Err(GraphError::Network(format!("{url}: HTTP {status}")));
        }
        let body = response
            .text()
            .map_err(|e| GraphError::Network(format!("{url}: {e}")))?;
        title_from_body(&body)
            .ok_or_else(|| GraphError::Network(format!("{url}: response has no title line")))
    }
}

/// Extract the title (second line) from a lookup response body.
pub fn title_from_body(body: &str) -> Option<String> {
    body.lines().nth(1).map(|line| line.trim().to_string())
}

/// In-memory titles, for offline runs and tests.
#[derive(Debug, Default, Clone)]
pub struct MapTitleResolver {
    titles: HashMap<String, String>,
}

impl MapTitleResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a title.
    pub fn insert(&mut self, story_id: impl Into<String>, title: impl Into<String>) -> &mut Self {
        self.titles.insert(story_id.into(), title.into());
        self
    }
}

impl TitleResolver for MapTitleResolver {
    fn resolve_title(&self, story_id: &str) -> GraphResult<String> {
        self.titles
            .get(story_id)
            .cloned()
            .ok_or_else(|| GraphError::Network(format!("no title for story {story_id}")))
    }
}
