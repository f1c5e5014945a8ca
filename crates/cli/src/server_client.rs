//! HTTP client for the suggest-server analytics endpoints.

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

use suggest_analytics::UsageAggregate;

/// Client for the suggest-server REST API.
pub struct ServerClient {
    base_url: String,
    http: reqwest::Client,
}

#[derive(Serialize)]
struct RecordSearchBody<'a> {
    query: &'a str,
    components: &'a [String],
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordSearchReply {
    pub record_id: String,
}

impl ServerClient {
    pub fn new(base_url: &str) -> Self {
        let base_url = base_url.trim_end_matches('/').to_string();
        let http = reqwest::Client::new();
        Self { base_url, http }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Report a search and the components suggested for it.
    pub async fn record_search(&self, query: &str, components: &[String]) -> Result<RecordSearchReply> {
        let url = format!("{}/api/search-analytics", self.base_url);
        let resp = self
            .http
            .post(&url)
            .json(&RecordSearchBody { query, components })
            .send()
            .await
            .with_context(|| format!("server not reachable at {}", self.base_url))?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            bail!("server returned {}: {}", status, body);
        }

        resp.json().await.context("failed to parse record response")
    }

    /// Fetch the current usage aggregate.
    pub async fn stats(&self) -> Result<UsageAggregate> {
        let url = format!("{}/api/search-analytics", self.base_url);
        let resp = self
            .http
            .get(&url)
            .send()
            .await
            .with_context(|| format!("server not reachable at {}", self.base_url))?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            bail!("server returned {}: {}", status, body);
        }

        resp.json().await.context("failed to parse usage statistics")
    }
}
