/// FeedRequest - Input DTO for loading the project feed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedRequest {
    /// Account whose public repositories are showcased
    pub user: String,
}

impl FeedRequest {
    pub fn new(user: impl Into<String>) -> Self {
        Self { user: user.into() }
    }
}
