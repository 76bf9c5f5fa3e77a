/// Task is queued for execution.
///
/// The task is waiting in the run queue (or about to run its eager
/// first stretch) and will be polled when its turn arrives.
pub(crate) const QUEUED: u8 = 0;

/// Task is currently being polled.
///
/// At most one poll is in progress at a time; the runtime is
/// single-threaded and never polls reentrantly.
pub(crate) const RUNNING: u8 = 1;

/// Task is suspended on a pending promise.
///
/// Its waker sits on a continuation list and will move the task back
/// to `QUEUED` when the awaited settlement arrives.
pub(crate) const SUSPENDED: u8 = 2;

/// Task was woken while it was being polled.
///
/// The settlement landed mid-poll; the task must be re-queued once
/// the current poll returns instead of suspending.
pub(crate) const NOTIFIED: u8 = 3;

/// Task has completed execution.
///
/// The body has returned and settled its promise; the task will not
/// be polled again. Late wake-ups are ignored.
pub(crate) const COMPLETED: u8 = 4;
