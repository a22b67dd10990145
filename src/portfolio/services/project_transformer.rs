use crate::portfolio::domain::{
    DisplayProject, GithubSummary, LanguageBreakdown, ProjectMetrics, RawRepository,
};
use crate::portfolio::policies::{CategoryPolicy, DisplayNaming, ProjectTypePolicy, TechnologyNames};
use crate::ports::outbound::{MetricsGenerator, ProgressReporter, RepositorySource};
use crate::shared::cancel::unless_cancelled;
use crate::shared::Result;
use tokio_util::sync::CancellationToken;

/// Maximum number of project cards produced per fetch cycle
pub const MAX_PROJECTS: usize = 6;

/// ProjectTransformer - turns repositories into project cards
///
/// Language breakdowns are fetched one repository at a time, in input order.
/// A repository whose breakdown cannot be fetched is skipped without
/// affecting the others.
///
/// # Type Parameters
/// * `RS` - RepositorySource implementation
/// * `MG` - MetricsGenerator implementation
pub struct ProjectTransformer<'a, RS: ?Sized, MG: ?Sized> {
    source: &'a RS,
    metrics: &'a MG,
    progress: Option<&'a dyn ProgressReporter>,
}

impl<'a, RS, MG> ProjectTransformer<'a, RS, MG>
where
    RS: RepositorySource + ?Sized,
    MG: MetricsGenerator + ?Sized,
{
    pub fn new(source: &'a RS, metrics: &'a MG) -> Self {
        Self {
            source,
            metrics,
            progress: None,
        }
    }

    /// Reports one progress step per processed repository
    pub fn with_progress(mut self, reporter: &'a dyn ProgressReporter) -> Self {
        self.progress = Some(reporter);
        self
    }

    /// Transforms at most the first `MAX_PROJECTS` repositories.
    ///
    /// The output keeps input order minus skipped entries.
    ///
    /// # Errors
    /// Only `PortfolioError::Cancelled`, when `cancel` fires mid-run.
    pub async fn transform(
        &self,
        repos: &[RawRepository],
        cancel: &CancellationToken,
    ) -> Result<Vec<DisplayProject>> {
        let selected = &repos[..repos.len().min(MAX_PROJECTS)];
        let total = selected.len();
        let mut projects = Vec::with_capacity(total);

        for (idx, repo) in selected.iter().enumerate() {
            if let Some(progress) = self.progress {
                progress.report_progress(idx + 1, total, Some(&repo.name));
            }

            let languages =
                unless_cancelled(cancel, self.source.get_languages(&repo.full_name)).await?;

            match languages {
                Ok(languages) => {
                    tracing::debug!(
                        repo = %repo.full_name,
                        languages = languages.len(),
                        bytes = languages.total_bytes(),
                        "language breakdown fetched"
                    );
                    projects.push(self.build_project(repo, &languages));
                }
                Err(e) => {
                    tracing::warn!(repo = %repo.full_name, error = %e, "skipping repository");
                    if let Some(progress) = self.progress {
                        progress.report_error(&format!(
                            "⚠️  Warning: Skipped {}: {}",
                            repo.full_name, e
                        ));
                    }
                }
            }
        }

        Ok(projects)
    }

    /// Derives one project card from a repository and its languages
    pub fn build_project(&self, repo: &RawRepository, languages: &LanguageBreakdown) -> DisplayProject {
        DisplayProject {
            id: repo.id,
            client: DisplayNaming::client_name(&repo.name),
            title: DisplayNaming::title(repo),
            project_type: ProjectTypePolicy::classify(languages).to_string(),
            description: DisplayNaming::description(repo),
            url: repo.html_url.clone(),
            thumbnail: DisplayNaming::thumbnail(&repo.full_name),
            technologies: TechnologyNames::from_breakdown(languages),
            metrics: ProjectMetrics {
                pagespeed: self.metrics.pagespeed(),
                delivery_days: self.metrics.delivery_days(),
            },
            category: CategoryPolicy::categorize(repo).to_string(),
            github: GithubSummary {
                name: repo.name.clone(),
                stars: repo.stargazers_count,
                language: DisplayNaming::language_label(repo),
                updated_at: repo.updated_at,
            },
        }
    }
}
