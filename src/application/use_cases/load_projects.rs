use crate::application::dto::{FeedRequest, ProjectFeedState};
use crate::portfolio::services::ProjectTransformer;
use crate::ports::outbound::{MetricsGenerator, ProgressReporter, RepositorySource};
use crate::shared::cancel::unless_cancelled;
use crate::shared::error::PortfolioError;
use crate::shared::Result;
use tokio_util::sync::CancellationToken;

/// Shown when the repository listing comes back empty.
///
/// An account without public repositories and a failed request look the
/// same here.
pub const EMPTY_REPOSITORIES_MESSAGE: &str = "No se pudieron cargar los repositorios de GitHub";

/// Shown when anything unexpected fails while building the feed
pub const LOAD_FAILURE_MESSAGE: &str = "Error al cargar los proyectos desde GitHub";

/// LoadProjectsUseCase - fetch, transform and settle the project feed
///
/// # Type Parameters
/// * `RS` - RepositorySource implementation
/// * `MG` - MetricsGenerator implementation
/// * `PR` - ProgressReporter implementation
pub struct LoadProjectsUseCase<RS, MG, PR> {
    repository_source: RS,
    metrics_generator: MG,
    progress_reporter: PR,
}

impl<RS, MG, PR> LoadProjectsUseCase<RS, MG, PR>
where
    RS: RepositorySource,
    MG: MetricsGenerator,
    PR: ProgressReporter,
{
    /// Creates a new LoadProjectsUseCase with injected dependencies
    pub fn new(repository_source: RS, metrics_generator: MG, progress_reporter: PR) -> Self {
        Self {
            repository_source,
            metrics_generator,
            progress_reporter,
        }
    }

    /// Runs the feed pipeline once and returns the settled state.
    ///
    /// # Errors
    /// Only `PortfolioError::Cancelled`. Every other failure is folded into
    /// `ProjectFeedState::Errored`.
    pub async fn execute(
        &self,
        request: FeedRequest,
        cancel: &CancellationToken,
    ) -> Result<ProjectFeedState> {
        self.progress_reporter.report(&format!(
            "🔍 Fetching public repositories for: {}",
            request.user
        ));

        let listing = unless_cancelled(
            cancel,
            self.repository_source.list_repositories(&request.user),
        )
        .await?;

        let repos = match listing {
            Ok(repos) => repos,
            Err(e) => {
                tracing::error!(user = %request.user, error = %e, "error loading GitHub projects");
                return Ok(ProjectFeedState::errored(LOAD_FAILURE_MESSAGE));
            }
        };

        if repos.is_empty() {
            self.progress_reporter
                .report_error(&format!("❌ {}", EMPTY_REPOSITORIES_MESSAGE));
            return Ok(ProjectFeedState::errored(EMPTY_REPOSITORIES_MESSAGE));
        }

        self.progress_reporter
            .report(&format!("✅ Found {} showcase repositories", repos.len()));

        let transformer =
            ProjectTransformer::new(&self.repository_source, &self.metrics_generator)
                .with_progress(&self.progress_reporter);

        match transformer.transform(&repos, cancel).await {
            Ok(projects) => {
                self.progress_reporter.report_completion(&format!(
                    "✅ Project feed ready: {} project(s)",
                    projects.len()
                ));
                Ok(ProjectFeedState::Loaded { projects })
            }
            Err(e) if PortfolioError::is_cancellation(&e) => Err(e),
            Err(e) => {
                tracing::error!(user = %request.user, error = %e, "error loading GitHub projects");
                Ok(ProjectFeedState::errored(LOAD_FAILURE_MESSAGE))
            }
        }
    }
}
