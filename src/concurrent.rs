use crate::defer::defer;
use std::sync::mpsc::SyncSender;
use std::thread;

/// Factorial where every step spawns a new thread for the next step and returns without waiting
/// for it, like a chain of goroutines. The last thread sends `x! * progress` into `back` and
/// closes it. Read the result from the receiver, which blocks until it arrives.
///
/// This works with a rendezvous channel (`sync_channel(0)`). In that case the last thread waits
/// in `send` until the caller reads. The send never happens on the caller's thread, even when
/// `x == 1`, so this always returns without waiting for the reader.
pub fn factorial_channel(x: u64, progress: u64, back: SyncSender<u64>) {
    debug_assert!(x >= 1, "factorial of {x}");
    if x == 1 {
        // The caller is the reader, and it can't read until we return.
        spawn_step(1, progress, back);
        return;
    }
    step(x, progress, back);
}

fn step(x: u64, progress: u64, back: SyncSender<u64>) {
    if x == 1 {
        crate::complete(back, progress);
        return;
    }
    log::trace!("thread step {x}, progress {progress}");
    spawn_step(x - 1, x * progress, back);
}

fn spawn_step(x: u64, progress: u64, back: SyncSender<u64>) {
    let spawned = thread::Builder::new()
        .name(format!("factorial-{x}"))
        .spawn(move || {
            let _guard = defer(move || log::trace!("thread step {x} exiting"));
            step(x, progress, back);
        });
    // If the spawn failed, the closure and the sender inside it are already gone, so the reader
    // sees a closed channel instead of hanging.
    if let Err(e) = spawned {
        log::error!("failed to spawn thread step {x}: {e}");
    }
}
