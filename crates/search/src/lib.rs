//! Legal reference web search.
//!
//! Provides the `SearchBackend` trait and a Programmable Search (Google
//! Custom Search JSON API) implementation restricted to an allow-list of
//! legal reference sites. Results the user selects can be kept in a
//! `CitationList`; none of this feeds back into the case report.

use serde::{Deserialize, Serialize};
use std::future::Future;
use thiserror::Error;

/// Errors from search operations.
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("Search is not configured: missing {0}")]
    MissingCredentials(&'static str),

    #[error("Connection failed: {0}")]
    Connection(String),

    #[error("Search request failed: HTTP {status}: {body}")]
    Http { status: u16, body: String },

    #[error("Parse error: {0}")]
    ParseError(String),
}

/// A single search hit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    pub title: String,
    pub link: String,
    #[serde(default)]
    pub display_link: String,
    #[serde(default)]
    pub snippet: String,
}

/// Trait for search backends.
pub trait SearchBackend {
    /// Search for results matching `query`.
    fn search(
        &self,
        query: &str,
    ) -> impl Future<Output = Result<Vec<SearchResult>, SearchError>> + Send;

    /// Get the backend name for logging.
    fn name(&self) -> &'static str;
}

/// Search configuration.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// API key
    pub api_key: Option<String>,
    /// Programmable Search engine id (cx)
    pub engine_id: Option<String>,
    /// Sites results are restricted to
    pub allowed_domains: Vec<String>,
    /// Endpoint URL
    pub endpoint: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// Results requested per search (capped at 10 by the API)
    pub max_results: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            engine_id: None,
            allowed_domains: vec![
                "lawphil.net".to_string(),
                "elibrary.judiciary.gov.ph".to_string(),
                "sc.judiciary.gov.ph".to_string(),
                "officialgazette.gov.ph".to_string(),
            ],
            endpoint: "https://www.googleapis.com/customsearch/v1".to_string(),
            timeout_secs: 30,
            max_results: 5,
        }
    }
}

/// The API returns at most this many results per request.
const MAX_PAGE_SIZE: usize = 10;

#[derive(Debug, Deserialize)]
struct ResponseBody {
    // Absent when nothing matched
    #[serde(default)]
    items: Vec<SearchResult>,
}

/// Programmable Search backend.
pub struct CustomSearchBackend {
    config: SearchConfig,
    client: reqwest::Client,
}

impl CustomSearchBackend {
    /// Create a new backend.
    pub fn new(config: SearchConfig) -> Result<Self, SearchError> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| SearchError::Connection(e.to_string()))?;

        Ok(Self { config, client })
    }

    fn credentials(&self) -> Result<(&str, &str), SearchError> {
        let key = self
            .config
            .api_key
            .as_deref()
            .filter(|k| !k.trim().is_empty())
            .ok_or(SearchError::MissingCredentials("API key"))?;
        let cx = self
            .config
            .engine_id
            .as_deref()
            .filter(|k| !k.trim().is_empty())
            .ok_or(SearchError::MissingCredentials("search engine id"))?;
        Ok((key, cx))
    }

    /// Restrict the query text to the allowed sites.
    fn build_query(&self, text: &str) -> String {
        if self.config.allowed_domains.is_empty() {
            return text.trim().to_string();
        }

        let sites = self
            .config
            .allowed_domains
            .iter()
            .map(|d| format!("site:{}", d))
            .collect::<Vec<_>>()
            .join(" OR ");

        format!("{} ({})", text.trim(), sites)
    }

    /// Number of results to request.
    fn page_size(&self) -> usize {
        self.config.max_results.clamp(1, MAX_PAGE_SIZE)
    }

    /// Parse an API response into results.
    fn parse_response(&self, response: serde_json::Value) -> Result<Vec<SearchResult>, SearchError> {
        let body: ResponseBody =
            serde_json::from_value(response).map_err(|e| SearchError::ParseError(e.to_string()))?;
        Ok(body.items)
    }
}

impl SearchBackend for CustomSearchBackend {
    async fn search(&self, query: &str) -> Result<Vec<SearchResult>, SearchError> {
        let (key, cx) = self.credentials()?;
        let q = self.build_query(query);
        let num = self.page_size().to_string();

        tracing::debug!(query = %q, num = %num, "Executing web search");

        let response = self
            .client
            .get(&self.config.endpoint)
            .query(&[("key", key), ("cx", cx), ("q", q.as_str()), ("num", num.as_str())])
            .send()
            .await
            .map_err(|e| SearchError::Connection(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(SearchError::Http { status, body });
        }

        let json: serde_json::Value = response
            .json()
            .await
            .map_err(|e| SearchError::ParseError(e.to_string()))?;

        let results = self.parse_response(json)?;
        tracing::info!(results = results.len(), "Web search completed");
        Ok(results)
    }

    fn name(&self) -> &'static str {
        "custom-search"
    }
}

/// Search results kept as citations, in the order they were added.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CitationList {
    items: Vec<SearchResult>,
}

impl CitationList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a citation. Returns false if its link is already listed.
    pub fn add(&mut self, result: SearchResult) -> bool {
        if self.items.iter().any(|c| c.link == result.link) {
            return false;
        }
        self.items.push(result);
        true
    }

    pub fn iter(&self) -> impl Iterator<Item = &SearchResult> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn backend(api_key: Option<&str>) -> CustomSearchBackend {
        CustomSearchBackend::new(SearchConfig {
            api_key: api_key.map(str::to_string),
            engine_id: Some("engine".to_string()),
            ..Default::default()
        })
        .unwrap()
    }

    fn result(link: &str) -> SearchResult {
        SearchResult {
            title: "Article 308".to_string(),
            link: link.to_string(),
            display_link: "lawphil.net".to_string(),
            snippet: String::new(),
        }
    }

    #[test]
    fn test_build_query_restricts_sites() {
        let q = backend(Some("key")).build_query("  qualified theft carabao ");
        assert!(q.starts_with("qualified theft carabao (site:lawphil.net OR "));
        assert!(q.ends_with("site:officialgazette.gov.ph)"));
    }

    #[test]
    fn test_build_query_without_allow_list() {
        let backend = CustomSearchBackend::new(SearchConfig {
            allowed_domains: Vec::new(),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(backend.build_query("oral defamation"), "oral defamation");
    }

    #[test]
    fn test_page_size_follows_max_results() {
        assert_eq!(backend(Some("key")).page_size(), 5);

        let wide = CustomSearchBackend::new(SearchConfig {
            max_results: 50,
            ..Default::default()
        })
        .unwrap();
        assert_eq!(wide.page_size(), 10);

        let zero = CustomSearchBackend::new(SearchConfig {
            max_results: 0,
            ..Default::default()
        })
        .unwrap();
        assert_eq!(zero.page_size(), 1);
    }

    #[tokio::test]
    async fn test_missing_credentials() {
        let err = backend(None).search("theft").await.unwrap_err();
        assert!(matches!(err, SearchError::MissingCredentials("API key")));

        let blank = backend(Some("  ")).search("theft").await.unwrap_err();
        assert!(matches!(blank, SearchError::MissingCredentials(_)));
    }

    #[test]
    fn test_parse_response() {
        let json = serde_json::json!({
            "kind": "customsearch#search",
            "items": [{
                "title": "Revised Penal Code - Act No. 3815",
                "link": "https://lawphil.net/statutes/acts/act1930/act_3815_1930.html",
                "displayLink": "lawphil.net",
                "snippet": "Art. 308. Who are liable for theft."
            }]
        });
        let results = backend(Some("key")).parse_response(json).unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].display_link, "lawphil.net");
    }

    #[test]
    fn test_parse_response_without_items() {
        let json = serde_json::json!({ "kind": "customsearch#search" });
        assert!(backend(Some("key")).parse_response(json).unwrap().is_empty());
    }

    #[test]
    fn test_citation_list_ignores_duplicate_links() {
        let mut citations = CitationList::new();
        assert!(citations.add(result("https://lawphil.net/a")));
        assert!(citations.add(result("https://lawphil.net/b")));
        assert!(!citations.add(result("https://lawphil.net/a")));
        let links: Vec<_> = citations.iter().map(|c| c.link.as_str()).collect();
        assert_eq!(links, vec!["https://lawphil.net/a", "https://lawphil.net/b"]);
    }

    #[test]
    fn test_citation_list_serializes_as_array() {
        let mut citations = CitationList::new();
        citations.add(result("https://lawphil.net/a"));
        let json = serde_json::to_string(&citations).unwrap();
        assert!(json.starts_with('['));
        let parsed: CitationList = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, citations);
    }
}
