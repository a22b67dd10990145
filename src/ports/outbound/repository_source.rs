use crate::portfolio::domain::{LanguageBreakdown, RawRepository};
use crate::shared::Result;
use async_trait::async_trait;

/// RepositorySource port for reading repositories from the code host
///
/// Implementations must be `Send + Sync` so the provider can run the
/// pipeline on a spawned task.
#[async_trait]
pub trait RepositorySource: Send + Sync {
    /// Lists the public repositories of `user`, most recently updated first,
    /// with archived, disabled, forked and non-public entries removed.
    ///
    /// # Errors
    /// The GitHub adapter absorbs provider failures into an empty list, so an
    /// error here means something unexpected (test doubles use it to
    /// simulate that).
    async fn list_repositories(&self, user: &str) -> Result<Vec<RawRepository>>;

    /// Fetches the language byte breakdown of `full_name` (`owner/name`).
    ///
    /// # Errors
    /// As above: provider failures surface as an empty breakdown. The
    /// transformer skips the repository when this returns an error.
    async fn get_languages(&self, full_name: &str) -> Result<LanguageBreakdown>;
}
