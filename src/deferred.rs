use crate::defer::DeferStack;
use std::sync::mpsc::SyncSender;

/// Factorial where each step schedules the next one to run when its own scope exits, like a Go
/// `defer`. Nothing here is concurrent. The whole chain runs on the caller's thread before this
/// returns, and the bottom of the chain sends `x! * progress` into `back` and closes it.
///
/// Because the caller can't read until this returns, `back` needs room for the result. Use
/// `sync_channel(1)` or bigger; a rendezvous channel (`sync_channel(0)`) deadlocks.
pub fn factorial_defer(x: u64, progress: u64, back: SyncSender<u64>) {
    debug_assert!(x >= 1, "factorial of {x}");
    if x == 1 {
        crate::complete(back, progress);
        return;
    }
    let mut defers = DeferStack::new();
    defers.push(move || factorial_defer(x - 1, x * progress, back));
    log::trace!("deferred step {x}, progress {progress}");
    // The next step runs here, as `defers` goes out of scope.
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc::{TryRecvError, sync_channel};

    #[test]
    fn test_result_is_ready_on_return() {
        let (sender, receiver) = sync_channel(1);
        factorial_defer(6, 1, sender);
        // No blocking needed, the chain finished before factorial_defer returned.
        assert_eq!(receiver.try_recv(), Ok(720));
        assert_eq!(receiver.try_recv(), Err(TryRecvError::Disconnected));
    }

    #[test]
    fn test_base_case_sends_progress() {
        let (sender, receiver) = sync_channel(1);
        factorial_defer(1, 42, sender);
        assert_eq!(receiver.recv(), Ok(42));
        assert!(receiver.recv().is_err());
    }

    #[test]
    fn test_dropped_receiver_is_not_a_panic() {
        let (sender, receiver) = sync_channel(1);
        drop(receiver);
        factorial_defer(5, 1, sender);
    }
}
