/// Mock implementations for testing
mod mock_metrics_generator;
mod mock_progress_reporter;
mod mock_repository_source;

pub use mock_metrics_generator::MockMetricsGenerator;
pub use mock_progress_reporter::MockProgressReporter;
pub use mock_repository_source::MockRepositorySource;
