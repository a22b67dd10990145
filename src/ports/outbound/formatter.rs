use crate::application::dto::ProjectFeedState;
use crate::shared::Result;

/// ProjectFormatter port for rendering the project feed
///
/// Formatters render every state of the feed: the loading placeholder, the
/// errored message and the loaded project list.
pub trait ProjectFormatter {
    /// # Errors
    /// Returns an error if serialization fails
    fn format(&self, state: &ProjectFeedState) -> Result<String>;
}
