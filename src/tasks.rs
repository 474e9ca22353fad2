use tokio::sync::mpsc::Sender;

/// Like [`factorial_channel`](crate::factorial_channel), but each step is a tokio task instead of
/// a thread. `back` should be a fresh `tokio::sync::mpsc::channel(1)`. The receiver's `recv`
/// returns `Some(x! * progress)` once and then `None`.
///
/// This calls `tokio::spawn`, so it panics if it's called outside of a tokio runtime.
pub fn factorial_task(x: u64, progress: u64, back: Sender<u64>) {
    debug_assert!(x >= 1, "factorial of {x}");
    if x == 1 {
        log::debug!("task chain finished with {progress}");
        // The channel is fresh and only this task ever sends, so there's always room.
        if back.try_send(progress).is_err() {
            log::warn!("nobody is listening for the result {progress}");
        }
        return;
    }
    log::trace!("task step {x}, progress {progress}");
    // Spawning the plain fn from inside an async block keeps the future type non-recursive.
    tokio::task::spawn(async move { factorial_task(x - 1, x * progress, back) });
}
