//! Four ways to write the same recursive factorial: plain recursion, tail recursion with an
//! accumulator, recursion that's deferred until the current scope exits, and recursion where
//! every step is a new concurrent task. The last two don't return anything. Instead, the bottom
//! of the chain sends the result into a channel and then closes it, and the caller reads the
//! result from the other end.
//!
//! All of these require `x >= 1`, and none of them check for overflow. `u64` holds factorials up
//! to 20!.

use std::sync::mpsc::SyncSender;

pub mod boxed;
pub mod concurrent;
pub mod defer;
pub mod deferred;
pub mod plain;
pub mod pool;
pub mod tail;
pub mod tasks;

pub use boxed::factorial_async;
pub use concurrent::factorial_channel;
pub use deferred::factorial_defer;
pub use plain::factorial;
pub use pool::factorial_pool;
pub use tail::factorial_tail;
pub use tasks::factorial_task;

// The bottom of every channel chain: send the one result, then close the channel by dropping the
// last sender.
fn complete(back: SyncSender<u64>, progress: u64) {
    log::debug!("chain finished with {progress}");
    if back.send(progress).is_err() {
        log::warn!("nobody is listening for the result {progress}");
    }
    drop(back);
}
