//! Blocking client for the mem0 hosted API.

use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

/// Default mem0 API endpoint.
pub const DEFAULT_BASE_URL: &str = "https://api.mem0.ai";

/// Request timeout. Hooks run inline with the prompt flow, so a hung
/// request must not stall the editor for long.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Errors from the mem0 API.
#[derive(Debug, Error)]
pub enum Mem0Error {
    #[error("mem0 request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("mem0 returned status {status}")]
    Api { status: reqwest::StatusCode },
}

/// A memory returned by semantic search.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemoryHit {
    #[serde(default)]
    pub memory: String,

    /// Similarity score; the hosted service may omit it.
    #[serde(default)]
    pub score: Option<f64>,

    #[serde(default)]
    pub categories: Vec<String>,
}

/// A role-tagged message submitted to the add endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemoryMessage {
    pub role: String,
    pub content: String,
}

impl MemoryMessage {
    pub fn new(role: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            role: role.into(),
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new("user", content)
    }
}

#[derive(Serialize)]
struct SearchRequest<'a> {
    query: &'a str,
    filters: Filters<'a>,
    top_k: usize,
    threshold: f64,
}

#[derive(Serialize)]
struct Filters<'a> {
    user_id: &'a str,
}

/// The search endpoint has returned both a wrapped object and a bare list
/// across API versions; accept either.
#[derive(Deserialize)]
#[serde(untagged)]
enum SearchResponse {
    Wrapped { results: Vec<MemoryHit> },
    Bare(Vec<MemoryHit>),
}

#[derive(Serialize)]
struct AddRequest<'a> {
    messages: &'a [MemoryMessage],
    user_id: &'a str,
}

/// Client for the mem0 hosted memory service.
#[derive(Debug, Clone)]
pub struct Mem0Client {
    http: reqwest::blocking::Client,
    base_url: String,
    api_key: String,
    user_id: String,
}

impl Mem0Client {
    pub fn new(api_key: impl Into<String>, user_id: impl Into<String>) -> Result<Self, Mem0Error> {
        let http = reqwest::blocking::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self {
            http,
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: api_key.into(),
            user_id: user_id.into(),
        })
    }

    /// Override the base URL (useful for testing or proxies).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Search memories semantically related to `query`, scoped to this
    /// client's user.
    pub fn search(
        &self,
        query: &str,
        top_k: usize,
        threshold: f64,
    ) -> Result<Vec<MemoryHit>, Mem0Error> {
        let request = SearchRequest {
            query,
            filters: Filters {
                user_id: &self.user_id,
            },
            top_k,
            threshold,
        };

        let response = self
            .http
            .post(self.url("/v1/memories/search/"))
            .header("Authorization", format!("Token {}", self.api_key))
            .json(&request)
            .send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(Mem0Error::Api { status });
        }

        let parsed: SearchResponse = response.json()?;
        Ok(match parsed {
            SearchResponse::Wrapped { results } => results,
            SearchResponse::Bare(results) => results,
        })
    }

    /// Store messages as a new memory for this client's user.
    pub fn add(&self, messages: &[MemoryMessage]) -> Result<(), Mem0Error> {
        let request = AddRequest {
            messages,
            user_id: &self.user_id,
        };

        let response = self
            .http
            .post(self.url("/v1/memories/"))
            .header("Authorization", format!("Token {}", self.api_key))
            .json(&request)
            .send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(Mem0Error::Api { status });
        }

        Ok(())
    }
}
