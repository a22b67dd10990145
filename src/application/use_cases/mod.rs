/// Use cases module containing application business logic orchestration
mod load_projects;

pub use load_projects::{LoadProjectsUseCase, EMPTY_REPOSITORIES_MESSAGE, LOAD_FAILURE_MESSAGE};
