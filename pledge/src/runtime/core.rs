use crate::runtime::context::{RejectionHook, enter_context};
use crate::runtime::scheduler::{Job, Scheduler};
use crate::runtime::task::Task;

use std::cell::RefCell;
use std::future::Future;
use std::rc::Rc;

/// The main runtime handle.
///
/// `Runtime` is responsible for:
/// - driving task execution through a single FIFO job queue,
/// - dispatching promise continuations in registration order,
/// - reporting unhandled rejections through the configured hook,
/// - providing a synchronous entry point via [`block_on`](Self::block_on).
///
/// The runtime is single-threaded and cooperative: exactly one job
/// runs at a time, suspension points are the only places where tasks
/// interleave, and no synchronous stretch is ever preempted.
pub struct Runtime {
    /// The shared FIFO job queue.
    scheduler: Scheduler,

    /// Observer for rejections nobody handled, if configured.
    hook: Option<RejectionHook>,
}

impl Runtime {
    /// Creates a new runtime instance.
    ///
    /// `hook` is the unhandled-rejection observer configured through
    /// [`RuntimeBuilder`](crate::RuntimeBuilder); `None` falls back to
    /// the `log` facade.
    pub(crate) fn new(hook: Option<RejectionHook>) -> Self {
        Self {
            scheduler: Scheduler::new(),
            hook,
        }
    }

    /// Spawns a fire-and-forget future onto the runtime.
    ///
    /// The future is queued and runs during the next
    /// [`block_on`](Self::block_on) call (or the current one, if the
    /// runtime is already being driven). Use
    /// [`promise::spawn`](crate::promise::spawn) instead when the
    /// outcome matters.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// runtime.spawn(async {
    ///     // background work
    /// });
    /// ```
    pub fn spawn<F>(&self, future: F)
    where
        F: Future<Output = ()> + 'static,
    {
        let task = Rc::new(Task::new(future, self.scheduler.clone()));
        self.scheduler.push(Job::Resume(task));
    }

    /// Runs a future to completion, blocking the current thread.
    ///
    /// This is the synchronous entry point of the runtime (e.g. in
    /// `main` or tests). The runtime context is installed for the
    /// duration of the call, the root future runs as the first task,
    /// and the job queue is then driven to quiescence so spawned
    /// tasks and late continuations finish before this returns.
    ///
    /// # Panics
    ///
    /// Panics if the queue drains while the root task is still
    /// suspended — every remaining task is then awaiting a settlement
    /// that can no longer arrive.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let result = runtime.block_on(async {
    ///     42
    /// });
    /// assert_eq!(result, 42);
    /// ```
    pub fn block_on<F>(&self, future: F) -> F::Output
    where
        F: Future + 'static,
        F::Output: 'static,
    {
        enter_context(self.scheduler.clone(), self.hook.clone(), || {
            let result = Rc::new(RefCell::new(None));
            let slot = result.clone();

            let root = Rc::new(Task::new(
                async move {
                    *slot.borrow_mut() = Some(future.await);
                },
                self.scheduler.clone(),
            ));

            self.scheduler.push(Job::Resume(root.clone()));

            while !root.is_completed() {
                let Some(job) = self.scheduler.pop() else {
                    panic!(
                        "runtime stalled: the main task is suspended on a promise that can no longer settle"
                    );
                };

                job.run();
            }

            // Let spawned tasks and continuations registered by the
            // root's final stretch run out.
            while let Some(job) = self.scheduler.pop() {
                job.run();
            }

            let output = result.borrow_mut().take();
            output.expect("root task completed without storing its result")
        })
    }
}
