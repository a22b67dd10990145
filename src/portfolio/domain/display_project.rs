use chrono::{DateTime, Utc};
use serde::Serialize;

/// Synthesized display metrics.
///
/// Neither value is measured; see `MetricsGenerator`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectMetrics {
    pub pagespeed: u8,
    pub delivery_days: u8,
}

/// Repository facts shown alongside a project card
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GithubSummary {
    pub name: String,
    pub stars: u32,
    pub language: String,
    pub updated_at: DateTime<Utc>,
}

/// Presentation-ready project card derived from one repository.
///
/// Built once per fetch cycle and never mutated; the next cycle replaces the
/// whole list.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayProject {
    pub id: u64,
    pub client: String,
    pub title: String,
    #[serde(rename = "type")]
    pub project_type: String,
    pub description: String,
    pub url: String,
    pub thumbnail: String,
    pub technologies: Vec<String>,
    pub metrics: ProjectMetrics,
    pub category: String,
    pub github: GithubSummary,
}
