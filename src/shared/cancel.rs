use crate::shared::error::PortfolioError;
use crate::shared::Result;
use std::future::Future;
use tokio_util::sync::CancellationToken;

/// Awaits `future` unless `cancel` fires first.
///
/// Cancellation wins ties, so a disposed provider never observes a result
/// that completed in the same poll.
pub async fn unless_cancelled<F>(cancel: &CancellationToken, future: F) -> Result<F::Output>
where
    F: Future,
{
    tokio::select! {
        biased;
        _ = cancel.cancelled() => Err(PortfolioError::Cancelled.into()),
        output = future => Ok(output),
    }
}
