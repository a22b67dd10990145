use async_trait::async_trait;
use portfolio_feed::prelude::*;
use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Mock RepositorySource serving canned repositories and language breakdowns
#[derive(Default)]
pub struct MockRepositorySource {
    pub repositories: Vec<RawRepository>,
    pub languages: HashMap<String, Vec<(String, u64)>>,
    pub failing_languages: HashSet<String>,
    pub should_fail_listing: bool,
    pub language_calls: Arc<AtomicUsize>,
}

impl MockRepositorySource {
    pub fn new(repositories: Vec<RawRepository>) -> Self {
        Self {
            repositories,
            ..Default::default()
        }
    }

    pub fn with_languages(mut self, full_name: &str, languages: &[(&str, u64)]) -> Self {
        self.languages.insert(
            full_name.to_string(),
            languages
                .iter()
                .map(|(name, bytes)| (name.to_string(), *bytes))
                .collect(),
        );
        self
    }

    pub fn with_language_failure(mut self, full_name: &str) -> Self {
        self.failing_languages.insert(full_name.to_string());
        self
    }

    pub fn with_listing_failure() -> Self {
        Self {
            should_fail_listing: true,
            ..Default::default()
        }
    }

    pub fn language_call_count(&self) -> usize {
        self.language_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RepositorySource for MockRepositorySource {
    async fn list_repositories(&self, _user: &str) -> Result<Vec<RawRepository>> {
        if self.should_fail_listing {
            anyhow::bail!("Mock repository source failure");
        }
        Ok(self.repositories.clone())
    }

    async fn get_languages(&self, full_name: &str) -> Result<LanguageBreakdown> {
        self.language_calls.fetch_add(1, Ordering::SeqCst);
        if self.failing_languages.contains(full_name) {
            anyhow::bail!("Mock language fetch failure for {}", full_name);
        }
        let languages = self.languages.get(full_name).cloned().unwrap_or_default();
        Ok(LanguageBreakdown::new(languages))
    }
}
