/// Shared kernel: error types, result alias, cancellation and filesystem
/// safety checks
pub mod cancel;
pub mod error;
pub mod result;
pub mod security;

pub use result::Result;
