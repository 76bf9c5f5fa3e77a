use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

/// A future that returns control to the scheduler exactly once.
struct YieldNow {
    yielded: bool,
}

impl Future for YieldNow {
    type Output = ();

    /// Polls the yield future.
    ///
    /// On the first poll, the task re-queues itself and suspends; on
    /// the second poll, the future completes.
    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        if !self.yielded {
            self.yielded = true;
            cx.waker().wake_by_ref();
            return Poll::Pending;
        }

        Poll::Ready(())
    }
}

/// Yields execution back to the scheduler.
///
/// This inserts an explicit suspension point: every job already in
/// the queue — resumptions and settled continuations alike — runs
/// before the current task continues. Useful in tests to observe
/// handlers that were scheduled but have not had their turn yet.
///
/// # Examples
///
/// ```rust,ignore
/// async fn task() {
///     // Let queued continuations run
///     yield_now().await;
/// }
/// ```
pub async fn yield_now() {
    YieldNow { yielded: false }.await
}
