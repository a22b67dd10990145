/// Network adapters for the code-hosting provider
mod github_client;
mod response_cache;

pub use github_client::{GitHubRepositoryClient, DEFAULT_API_BASE_URL};
pub use response_cache::{ResponseCache, SystemClock, DEFAULT_CACHE_TTL};
