/// Metric generators for project cards
mod random_metrics;

pub use random_metrics::RandomMetricsGenerator;
