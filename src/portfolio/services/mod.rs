/// Domain services
///
/// Stateless operations over repositories and project cards.
pub mod project_transformer;
pub mod repository_filter;

pub use project_transformer::{ProjectTransformer, MAX_PROJECTS};
pub use repository_filter::RepositoryFilter;
