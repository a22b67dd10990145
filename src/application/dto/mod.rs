/// Data Transfer Objects for application layer
///
/// DTOs carry requests into the use case and the feed state out to the
/// formatters, keeping the domain layer isolated.
mod feed_request;
mod output_format;
mod project_feed_state;

pub use feed_request::FeedRequest;
pub use output_format::OutputFormat;
pub use project_feed_state::ProjectFeedState;
