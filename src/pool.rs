use std::sync::mpsc::SyncSender;

/// Like [`factorial_channel`](crate::factorial_channel), but each step is a job on rayon's
/// global thread pool instead of a brand new thread.
///
/// Give `back` a buffer of at least one (`sync_channel(1)`), so that the last job doesn't tie up
/// a pool thread waiting for the reader.
pub fn factorial_pool(x: u64, progress: u64, back: SyncSender<u64>) {
    debug_assert!(x >= 1, "factorial of {x}");
    if x == 1 {
        crate::complete(back, progress);
        return;
    }
    log::trace!("pool step {x}, progress {progress}");
    rayon::spawn(move || factorial_pool(x - 1, x * progress, back));
}
