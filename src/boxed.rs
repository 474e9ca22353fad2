use futures::future::{BoxFuture, FutureExt};

/// Async version of [`factorial`](crate::factorial). An async fn can't hold its own future by
/// value, because then the future would contain itself. Returning a boxed future breaks the
/// cycle, and it's also `Send`, so it can be spawned on a multithreaded runtime.
pub fn factorial_async(x: u64) -> BoxFuture<'static, u64> {
    debug_assert!(x >= 1, "factorial of {x}");
    async move {
        if x == 1 {
            1
        } else {
            factorial_async(x - 1).await * x
        }
    }
    .boxed()
}
