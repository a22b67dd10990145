pub mod display_project;
pub mod language_breakdown;
pub mod repository;

pub use display_project::{DisplayProject, GithubSummary, ProjectMetrics};
pub use language_breakdown::LanguageBreakdown;
pub use repository::RawRepository;
