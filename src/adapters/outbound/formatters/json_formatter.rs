use crate::application::dto::ProjectFeedState;
use crate::portfolio::domain::DisplayProject;
use crate::ports::outbound::ProjectFormatter;
use crate::shared::Result;
use serde::Serialize;

/// Wire shape consumed by the web front end: the same
/// `{ projects, loading, error }` triple its data hook exposes.
#[derive(Debug, Serialize)]
struct FeedDocument<'a> {
    projects: &'a [DisplayProject],
    loading: bool,
    error: Option<&'a str>,
}

impl<'a> From<&'a ProjectFeedState> for FeedDocument<'a> {
    fn from(state: &'a ProjectFeedState) -> Self {
        match state {
            ProjectFeedState::Loading => Self {
                projects: &[],
                loading: true,
                error: None,
            },
            ProjectFeedState::Loaded { projects } => Self {
                projects,
                loading: false,
                error: None,
            },
            ProjectFeedState::Errored { message } => Self {
                projects: &[],
                loading: false,
                error: Some(message.as_str()),
            },
        }
    }
}

/// JsonFormatter adapter rendering the feed as pretty-printed JSON
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProjectFormatter for JsonFormatter {
    fn format(&self, state: &ProjectFeedState) -> Result<String> {
        let document = FeedDocument::from(state);
        let mut json = serde_json::to_string_pretty(&document)?;
        json.push('\n');
        Ok(json)
    }
}
