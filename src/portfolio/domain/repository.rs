use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Visibility label the provider uses for public repositories
pub const PUBLIC_VISIBILITY: &str = "public";

/// Repository record as returned by `GET /users/{user}/repos`.
///
/// Only the fields the portfolio needs are modelled; everything else in the
/// provider payload is ignored during deserialization.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawRepository {
    pub id: u64,
    pub name: String,
    pub full_name: String,
    pub html_url: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub languages_url: String,
    #[serde(default)]
    pub topics: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// `null` for repositories that never received a push
    #[serde(default)]
    pub pushed_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub size: u64,
    #[serde(default)]
    pub stargazers_count: u32,
    #[serde(default)]
    pub watchers_count: u32,
    #[serde(default)]
    pub forks_count: u32,
    #[serde(default)]
    pub archived: bool,
    #[serde(default)]
    pub disabled: bool,
    #[serde(default)]
    pub visibility: String,
    #[serde(default)]
    pub default_branch: String,
    #[serde(default)]
    pub fork: bool,
}

impl RawRepository {
    /// Whether this repository may appear in the portfolio.
    ///
    /// Archived, disabled, forked and non-public repositories never qualify.
    pub fn is_showcase_eligible(&self) -> bool {
        !self.archived && !self.disabled && !self.fork && self.visibility == PUBLIC_VISIBILITY
    }

    /// Description with empty strings treated as absent
    pub fn description_text(&self) -> Option<&str> {
        self.description.as_deref().filter(|d| !d.is_empty())
    }
}
