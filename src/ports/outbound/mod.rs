/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (provider API, clock, RNG, console, files).
pub mod clock;
pub mod formatter;
pub mod metrics_generator;
pub mod output_presenter;
pub mod progress_reporter;
pub mod repository_source;

pub use clock::Clock;
pub use formatter::ProjectFormatter;
pub use metrics_generator::MetricsGenerator;
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
pub use repository_source::RepositorySource;
