use super::*;
use futures::executor::block_on;
use futures::future::ready;

#[test]
fn uncancelled_future_completes() {
    let (fut, token) = cancellable(ready(5));
    assert_eq!(block_on(fut), Ok(5));
    assert!(!token.is_cancelled());
}

#[test]
fn cancelled_future_resolves_to_cancelled() {
    let (fut, token) = cancellable(ready(5));
    token.cancel();
    assert!(token.is_cancelled());
    assert_eq!(block_on(fut), Err(Cancelled));
}

#[test]
fn cancelled_future_never_runs_its_body() {
    let ran = Arc::new(Mutex::new(false));
    let flag = ran.clone();
    let (fut, token) = cancellable(async move {
        *flag.lock().unwrap() = true;
    });
    token.cancel();
    assert_eq!(block_on(fut), Err(Cancelled));
    assert!(!*ran.lock().unwrap());
}

#[test]
fn slot_replace_cancels_previous_token() {
    let slot = CancelSlot::new();
    let (_first, first) = cancellable(ready(()));
    let (_second, second) = cancellable(ready(()));
    slot.replace(first.clone());
    slot.replace(second.clone());
    assert!(first.is_cancelled());
    assert!(!second.is_cancelled());
}

#[test]
fn slot_cancel_aborts_and_clears() {
    let slot = CancelSlot::new();
    let (_fut, token) = cancellable(ready(()));
    slot.replace(token.clone());
    slot.cancel();
    assert!(token.is_cancelled());
    slot.cancel();
}

#[test]
fn spawn_cancellable_tracks_new_operation() {
    let slot = CancelSlot::new();
    let (_fut, earlier) = cancellable(ready(()));
    slot.replace(earlier.clone());
    spawn_cancellable(&slot, async {});
    assert!(earlier.is_cancelled());
}
