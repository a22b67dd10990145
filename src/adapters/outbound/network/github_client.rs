use super::response_cache::ResponseCache;
use crate::portfolio::domain::{LanguageBreakdown, RawRepository};
use crate::portfolio::services::RepositoryFilter;
use crate::ports::outbound::RepositorySource;
use crate::shared::Result;
use async_trait::async_trait;
use reqwest::header::{ACCEPT, AUTHORIZATION};
use serde::de::DeserializeOwned;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

/// Public GitHub REST API
pub const DEFAULT_API_BASE_URL: &str = "https://api.github.com";

const ACCEPT_GITHUB_V3: &str = "application/vnd.github.v3+json";

/// Repositories requested per listing call
const REPOS_PER_PAGE: u32 = 10;

/// GitHubRepositoryClient adapter for the GitHub REST API
///
/// Implements the RepositorySource port with read-only requests. Successful
/// bodies go through the shared `ResponseCache`, so a fresh entry answers a
/// request without touching the network.
///
/// # Failure policy
/// Non-success statuses, transport errors and undecodable bodies are logged
/// and turned into empty results. Callers cannot tell "no data" from "error".
pub struct GitHubRepositoryClient {
    client: reqwest::Client,
    base_url: String,
    token: Option<String>,
    cache: Arc<ResponseCache>,
}

impl GitHubRepositoryClient {
    const TIMEOUT_SECONDS: u64 = 10;

    /// Creates a client against the public API without credentials
    pub fn new(cache: Arc<ResponseCache>) -> Result<Self> {
        let version = env!("CARGO_PKG_VERSION");
        let user_agent = format!("portfolio-feed/{}", version);
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(Self::TIMEOUT_SECONDS))
            .user_agent(user_agent)
            .build()?;

        Ok(Self {
            client,
            base_url: DEFAULT_API_BASE_URL.to_string(),
            token: None,
            cache,
        })
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Sets the access token; empty strings count as no token
    pub fn with_token(mut self, token: Option<String>) -> Self {
        self.token = token.filter(|t| !t.trim().is_empty());
        self
    }

    pub fn has_token(&self) -> bool {
        self.token.is_some()
    }

    pub fn repositories_url(&self, user: &str) -> String {
        format!(
            "{}/users/{}/repos?sort=updated&per_page={}&type=public",
            self.base_url,
            urlencoding::encode(user),
            REPOS_PER_PAGE
        )
    }

    /// `full_name` is `owner/name`; each segment is encoded on its own
    pub fn languages_url(&self, full_name: &str) -> String {
        let path = full_name
            .split('/')
            .map(|segment| urlencoding::encode(segment).into_owned())
            .collect::<Vec<_>>()
            .join("/");
        format!("{}/repos/{}/languages", self.base_url, path)
    }

    fn authorization_header(&self) -> Option<String> {
        self.token.as_ref().map(|token| format!("token {}", token))
    }

    /// Fetches and decodes `url`, answering from the cache when possible.
    ///
    /// Only bodies that decode successfully are cached.
    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        if let Some(body) = self.cache.get(url) {
            tracing::debug!(url, "response cache hit");
            return Ok(serde_json::from_str(&body)?);
        }
        tracing::debug!(url, "response cache miss");

        let mut request = self.client.get(url).header(ACCEPT, ACCEPT_GITHUB_V3);
        if let Some(authorization) = self.authorization_header() {
            request = request.header(AUTHORIZATION, authorization);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            anyhow::bail!("GitHub API returned status code {}", status);
        }

        let body = response.text().await?;
        let value: T = serde_json::from_str(&body)?;
        self.cache.insert(url, body);
        Ok(value)
    }
}

#[async_trait]
impl RepositorySource for GitHubRepositoryClient {
    async fn list_repositories(&self, user: &str) -> Result<Vec<RawRepository>> {
        let url = self.repositories_url(user);
        match self.get_json::<Vec<RawRepository>>(&url).await {
            Ok(repos) => Ok(RepositoryFilter::retain_showcase(repos)),
            Err(e) => {
                tracing::warn!(user, error = %e, "error fetching GitHub repositories");
                Ok(Vec::new())
            }
        }
    }

    async fn get_languages(&self, full_name: &str) -> Result<LanguageBreakdown> {
        let url = self.languages_url(full_name);
        match self.get_json::<HashMap<String, u64>>(&url).await {
            Ok(languages) => Ok(LanguageBreakdown::from(languages)),
            Err(e) => {
                tracing::warn!(repo = full_name, error = %e, "error fetching repository languages");
                Ok(LanguageBreakdown::empty())
            }
        }
    }
}
