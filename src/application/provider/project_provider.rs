use crate::application::dto::{FeedRequest, ProjectFeedState};
use crate::application::use_cases::LoadProjectsUseCase;
use crate::ports::outbound::{MetricsGenerator, ProgressReporter, RepositorySource};
use crate::shared::error::PortfolioError;
use crate::shared::Result;
use std::future::Future;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

/// ProjectProvider - owns one fetch cycle of the project feed
///
/// Starts in `Loading` and settles exactly once to `Loaded` or `Errored`.
/// After `dispose` nothing is published anymore, so a disposed provider
/// that had not settled stays in `Loading`.
pub struct ProjectProvider {
    state: watch::Receiver<ProjectFeedState>,
    cancel: CancellationToken,
    task: JoinHandle<()>,
}

impl ProjectProvider {
    /// Spawns the fetch cycle on the current tokio runtime.
    pub fn spawn<RS, MG, PR>(use_case: LoadProjectsUseCase<RS, MG, PR>, request: FeedRequest) -> Self
    where
        RS: RepositorySource + 'static,
        MG: MetricsGenerator + 'static,
        PR: ProgressReporter + 'static,
    {
        let (tx, rx) = watch::channel(ProjectFeedState::Loading);
        let cancel = CancellationToken::new();
        let task_cancel = cancel.clone();

        let task = tokio::spawn(async move {
            match use_case.execute(request, &task_cancel).await {
                Ok(state) if !task_cancel.is_cancelled() => {
                    let _ = tx.send(state);
                }
                Ok(_) => tracing::debug!("provider disposed before settling; result dropped"),
                Err(e) => tracing::debug!(error = %e, "project feed cycle aborted"),
            }
        });

        Self {
            state: rx,
            cancel,
            task,
        }
    }

    /// Snapshot of the current state
    pub fn state(&self) -> ProjectFeedState {
        self.state.borrow().clone()
    }

    pub fn is_loading(&self) -> bool {
        self.state.borrow().is_loading()
    }

    /// Waits until the feed settles.
    ///
    /// Returns the current state when the cycle ends without publishing,
    /// which only happens after `dispose`.
    pub async fn settled(&self) -> ProjectFeedState {
        let mut rx = self.state.clone();
        let settled = match rx.wait_for(ProjectFeedState::is_settled).await {
            Ok(state) => state.clone(),
            Err(_) => self.state(),
        };
        settled
    }

    /// Cancels the in-flight cycle. Idempotent.
    pub fn dispose(&self) {
        self.cancel.cancel();
    }

    pub fn is_disposed(&self) -> bool {
        self.cancel.is_cancelled()
    }

    /// Waits for the feed to settle unless `interrupt` fires first, in which
    /// case the provider is disposed.
    ///
    /// An interrupt source that fails (for example a signal handler that
    /// cannot be installed) is ignored and the feed still settles.
    pub async fn settled_unless<F>(&self, interrupt: F) -> Result<ProjectFeedState>
    where
        F: Future<Output = std::io::Result<()>>,
    {
        tokio::select! {
            state = self.settled() => Ok(state),
            Ok(()) = interrupt => {
                self.dispose();
                Err(PortfolioError::Cancelled.into())
            }
        }
    }

    /// Whether the background cycle has ended, settled or not
    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }
}

impl Drop for ProjectProvider {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::use_cases::EMPTY_REPOSITORIES_MESSAGE;
    use crate::portfolio::domain::{LanguageBreakdown, RawRepository};
    use async_trait::async_trait;
    use std::sync::Arc;
    use std::time::Duration;
    use tokio::sync::Notify;

    struct GatedSource {
        repos: Vec<RawRepository>,
        gate: Option<Arc<Notify>>,
    }

    #[async_trait]
    impl RepositorySource for GatedSource {
        async fn list_repositories(&self, _user: &str) -> Result<Vec<RawRepository>> {
            if let Some(gate) = &self.gate {
                gate.notified().await;
            }
            Ok(self.repos.clone())
        }

        async fn get_languages(&self, _full_name: &str) -> Result<LanguageBreakdown> {
            Ok(LanguageBreakdown::new([("Python", 10)]))
        }
    }

    struct FixedMetrics;

    impl MetricsGenerator for FixedMetrics {
        fn pagespeed(&self) -> u8 {
            85
        }

        fn delivery_days(&self) -> u8 {
            3
        }
    }

    struct SilentReporter;

    impl ProgressReporter for SilentReporter {
        fn report(&self, _message: &str) {}
        fn report_progress(&self, _current: usize, _total: usize, _message: Option<&str>) {}
        fn report_error(&self, _message: &str) {}
        fn report_completion(&self, _message: &str) {}
    }

    fn repo() -> RawRepository {
        serde_json::from_value(serde_json::json!({
            "id": 7,
            "name": "ml-lab",
            "full_name": "octocat/ml-lab",
            "html_url": "https://github.com/octocat/ml-lab",
            "created_at": "2024-02-01T00:00:00Z",
            "updated_at": "2024-03-01T00:00:00Z",
            "visibility": "public"
        }))
        .unwrap()
    }

    fn provider(repos: Vec<RawRepository>, gate: Option<Arc<Notify>>) -> ProjectProvider {
        let use_case =
            LoadProjectsUseCase::new(GatedSource { repos, gate }, FixedMetrics, SilentReporter);
        ProjectProvider::spawn(use_case, FeedRequest::new("octocat"))
    }

    #[tokio::test]
    async fn test_settles_to_loaded() {
        let provider = provider(vec![repo()], None);

        let state = provider.settled().await;

        assert_eq!(state.projects().len(), 1);
        assert_eq!(state.projects()[0].project_type, "Aplicación Backend");
        assert!(!provider.is_loading());
    }

    #[tokio::test]
    async fn test_settles_to_errored_on_empty_listing() {
        let provider = provider(vec![], None);

        let state = provider.settled().await;

        assert_eq!(state.error(), Some(EMPTY_REPOSITORIES_MESSAGE));
        assert!(state.projects().is_empty());
    }

    #[tokio::test]
    async fn test_starts_loading() {
        let gate = Arc::new(Notify::new());
        let provider = provider(vec![repo()], Some(gate.clone()));

        assert!(provider.is_loading());
        gate.notify_one();
        assert!(provider.settled().await.is_settled());
    }

    #[tokio::test]
    async fn test_dispose_before_settling_keeps_loading() {
        let gate = Arc::new(Notify::new());
        let provider = provider(vec![repo()], Some(gate.clone()));

        provider.dispose();
        gate.notify_one();

        let state = provider.settled().await;
        assert!(state.is_loading());
        assert!(provider.is_disposed());

        tokio::time::sleep(Duration::from_millis(20)).await;
        assert!(provider.is_loading());
        assert!(provider.is_finished());
    }

    #[tokio::test]
    async fn test_failed_interrupt_source_still_settles() {
        let provider = provider(vec![repo()], None);

        let state = provider
            .settled_unless(async { Err(std::io::Error::other("no signal handler")) })
            .await
            .unwrap();

        assert_eq!(state.projects().len(), 1);
        assert!(!provider.is_disposed());
    }

    #[tokio::test]
    async fn test_interrupt_disposes_before_settling() {
        let gate = Arc::new(Notify::new());
        let provider = provider(vec![repo()], Some(gate));

        let err = provider.settled_unless(async { Ok(()) }).await.unwrap_err();

        assert!(PortfolioError::is_cancellation(&err));
        assert!(provider.is_disposed());
        assert!(provider.is_loading());
    }

    #[tokio::test]
    async fn test_dispose_is_idempotent() {
        let provider = provider(vec![], None);
        provider.dispose();
        provider.dispose();
        assert!(provider.is_disposed());
    }
}
