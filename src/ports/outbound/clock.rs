use std::time::Instant;

/// Clock port used for cache expiry, so tests can move time forward
pub trait Clock: Send + Sync {
    fn now(&self) -> Instant;
}
