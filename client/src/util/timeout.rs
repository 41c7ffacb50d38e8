//! Deadlines for remote calls.
//!
//! DESIGN
//! ======
//! [`race_timeout`] is runtime-agnostic: it races any future against any
//! deadline future. [`with_timeout`] supplies a browser timer under `hydrate`;
//! off the browser there is no timer and the call is awaited as-is.

#[cfg(test)]
#[path = "timeout_test.rs"]
mod timeout_test;

use std::future::Future;
use std::time::Duration;

use futures::future::{Either, select};

use crate::net::error::ApiError;

/// Race `fut` against `deadline`. `None` means the deadline fired first.
///
/// When both are ready on the same poll, `fut` wins.
pub async fn race_timeout<F, D>(fut: F, deadline: D) -> Option<F::Output>
where
    F: Future,
    D: Future<Output = ()>,
{
    let fut = std::pin::pin!(fut);
    let deadline = std::pin::pin!(deadline);
    match select(fut, deadline).await {
        Either::Left((output, _)) => Some(output),
        Either::Right(((), _)) => None,
    }
}

/// Await a fallible remote call for at most `limit`.
///
/// # Errors
///
/// Returns [`ApiError::Timeout`] when `limit` elapses first, otherwise the
/// call's own result.
pub async fn with_timeout<T, F>(fut: F, limit: Duration) -> Result<T, ApiError>
where
    F: Future<Output = Result<T, ApiError>>,
{
    #[cfg(feature = "hydrate")]
    {
        let millis = u32::try_from(limit.as_millis()).unwrap_or(u32::MAX);
        let deadline = gloo_timers::future::TimeoutFuture::new(millis);
        race_timeout(fut, deadline).await.unwrap_or(Err(ApiError::Timeout))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = limit;
        fut.await
    }
}
