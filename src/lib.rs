//! portfolio-feed - portfolio project cards from public GitHub repositories
//!
//! Fetches a developer's public repositories, keeps the showcase-worthy ones
//! and turns each into a `DisplayProject` card with a type label, top
//! technologies, a category and presentation metrics.
//!
//! # Architecture
//!
//! - **Domain Layer** (`portfolio`): repository model, mapping tables and the transformer
//! - **Application Layer** (`application`): the load use case and the feed provider
//! - **Ports** (`ports`): interface definitions for infrastructure
//! - **Adapters** (`adapters`): GitHub client, response cache, formatters, console and files
//! - **Shared** (`shared`): error types, cancellation helpers and security checks
//!
//! # Example
//!
//! ```no_run
//! use portfolio_feed::prelude::*;
//! use std::sync::Arc;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<()> {
//! let cache = Arc::new(ResponseCache::default());
//! let client = GitHubRepositoryClient::new(cache)?;
//! let use_case = LoadProjectsUseCase::new(
//!     client,
//!     RandomMetricsGenerator::new(),
//!     StderrProgressReporter::new(),
//! );
//!
//! let provider = ProjectProvider::spawn(use_case, FeedRequest::new("octocat"));
//! let state = provider.settled().await;
//!
//! println!("{}", JsonFormatter::new().format(&state)?);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod config;
pub mod portfolio;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{FileSystemWriter, StdoutPresenter};
    pub use crate::adapters::outbound::formatters::{JsonFormatter, MarkdownFormatter};
    pub use crate::adapters::outbound::metrics::RandomMetricsGenerator;
    pub use crate::adapters::outbound::network::{GitHubRepositoryClient, ResponseCache};
    pub use crate::application::dto::{FeedRequest, OutputFormat, ProjectFeedState};
    pub use crate::application::provider::ProjectProvider;
    pub use crate::application::use_cases::LoadProjectsUseCase;
    pub use crate::portfolio::domain::{
        DisplayProject, GithubSummary, LanguageBreakdown, ProjectMetrics, RawRepository,
    };
    pub use crate::portfolio::policies::{Category, CategoryPolicy, ProjectTypePolicy, TechnologyNames};
    pub use crate::portfolio::services::{ProjectTransformer, RepositoryFilter, MAX_PROJECTS};
    pub use crate::ports::outbound::{
        MetricsGenerator, OutputPresenter, ProgressReporter, ProjectFormatter, RepositorySource,
    };
    pub use crate::shared::error::PortfolioError;
    pub use crate::shared::Result;
}
