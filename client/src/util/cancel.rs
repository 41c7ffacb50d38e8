//! Cancellation for screen-level async work.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages start remote operations with `spawn_local`. Wrapping them with
//! [`cancellable`] and parking the token in a [`CancelSlot`] lets the page
//! abort the work from `on_cleanup` when it unmounts. An aborted future is
//! dropped at its next suspension point, so nothing after that point runs.

#[cfg(test)]
#[path = "cancel_test.rs"]
mod cancel_test;

use std::future::Future;
use std::sync::{Arc, Mutex, PoisonError};

use futures::future::{AbortHandle, Abortable};

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[error("operation cancelled")]
pub struct Cancelled;

/// Handle that aborts one [`cancellable`] future.
#[derive(Clone, Debug)]
pub struct CancelToken {
    handle: AbortHandle,
}

impl CancelToken {
    pub fn cancel(&self) {
        self.handle.abort();
    }

    pub fn is_cancelled(&self) -> bool {
        self.handle.is_aborted()
    }
}

/// Wrap `fut` so it can be aborted through the returned token.
pub fn cancellable<F>(fut: F) -> (impl Future<Output = Result<F::Output, Cancelled>>, CancelToken)
where
    F: Future,
{
    let (handle, registration) = AbortHandle::new_pair();
    let wrapped = Abortable::new(fut, registration);
    (async move { wrapped.await.map_err(|_| Cancelled) }, CancelToken { handle })
}

/// Holds the token of a screen's current in-flight operation.
#[derive(Clone, Debug, Default)]
pub struct CancelSlot {
    current: Arc<Mutex<Option<CancelToken>>>,
}

impl CancelSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Track `token`, cancelling whatever was tracked before.
    pub fn replace(&self, token: CancelToken) {
        let previous = self.lock().replace(token);
        if let Some(previous) = previous {
            previous.cancel();
        }
    }

    /// Cancel the tracked operation, if any.
    pub fn cancel(&self) {
        if let Some(token) = self.lock().take() {
            token.cancel();
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Option<CancelToken>> {
        self.current.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Run `fut` on the local executor, cancelling the slot's previous operation.
///
/// Off the browser there is no local executor and `fut` is dropped unpolled.
pub fn spawn_cancellable<F>(slot: &CancelSlot, fut: F)
where
    F: Future<Output = ()> + 'static,
{
    let (task, token) = cancellable(fut);
    slot.replace(token);
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let _ = task.await;
    });
    #[cfg(not(feature = "hydrate"))]
    drop(task);
}
