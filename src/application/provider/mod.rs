/// Stateful project feed provider backed by a background task
mod project_provider;

pub use project_provider::ProjectProvider;
