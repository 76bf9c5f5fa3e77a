use super::state::{COMPLETED, NOTIFIED, QUEUED, RUNNING, SUSPENDED};
use crate::runtime::scheduler::{Job, Scheduler};
use crate::runtime::task::waker::make_waker;

use std::cell::{Cell, RefCell};
use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;
use std::task::{Context, Poll};

/// One invocation of a wrapped routine, managed by the runtime.
///
/// A `Task` is the container for an async body. It coordinates the
/// body's lifecycle across suspension points: each poll runs one
/// synchronous stretch, each pending await parks the task until the
/// awaited settlement wakes it, and completion is terminal.
///
/// Settlement of the routine's own promise happens inside the body
/// (the wrapper fulfills or rejects as its last act), so the task
/// itself carries no result slot.
pub(crate) struct Task {
    /// The underlying body.
    ///
    /// Wrapped in `RefCell` for interior mutability during `poll`, and
    /// `Pin<Box<...>>` to keep the body pinned in memory.
    future: RefCell<Pin<Box<dyn Future<Output = ()>>>>,

    /// The current lifecycle state of the task (QUEUED, RUNNING, ...).
    state: Cell<u8>,

    /// Handle to the run queue for rescheduling after a wake-up.
    scheduler: Scheduler,
}

impl Task {
    /// Creates a new task from an async body.
    ///
    /// The task starts in the `QUEUED` state, ready for its first
    /// stretch to be run — eagerly by the wrapper, or from the queue.
    pub(crate) fn new<F>(future: F, scheduler: Scheduler) -> Self
    where
        F: Future<Output = ()> + 'static,
    {
        Self {
            future: RefCell::new(Box::pin(future)),
            state: Cell::new(QUEUED),
            scheduler,
        }
    }

    /// Runs one synchronous stretch of the body.
    ///
    /// The task transitions to `RUNNING`, the body is polled, and the
    /// resulting `Poll` decides the next state:
    /// - `Poll::Pending`: suspend, or re-queue if a settlement landed
    ///   mid-poll (`NOTIFIED`),
    /// - `Poll::Ready`: the invocation is complete.
    pub(crate) fn run(self: Rc<Self>) {
        let current = self.state.get();

        if current != QUEUED && current != NOTIFIED {
            return;
        }

        self.state.set(RUNNING);

        let waker = make_waker(self.clone());
        let mut cx = Context::from_waker(&waker);

        // The RUNNING state guarantees this borrow is exclusive: the
        // runtime is single-threaded and wake() never touches the body.
        let poll = self.future.borrow_mut().as_mut().poll(&mut cx);

        match poll {
            Poll::Pending => {
                if self.state.get() == NOTIFIED {
                    // Woken during the poll; go straight back to the queue.
                    self.state.set(QUEUED);
                    self.scheduler.push(Job::Resume(self.clone()));
                } else {
                    self.state.set(SUSPENDED);
                }
            }
            Poll::Ready(()) => {
                self.state.set(COMPLETED);
            }
        }
    }

    /// Signals the task to be resumed.
    ///
    /// If the task is `SUSPENDED`, it moves to `QUEUED` and joins the
    /// run queue. If it is `RUNNING`, it moves to `NOTIFIED` so the
    /// current poll re-queues it on return. Queued and completed
    /// tasks ignore the signal.
    pub(crate) fn wake(self: Rc<Self>) {
        match self.state.get() {
            SUSPENDED => {
                self.state.set(QUEUED);
                self.scheduler.push(Job::Resume(self.clone()));
            }
            RUNNING => {
                self.state.set(NOTIFIED);
            }
            _ => {}
        }
    }

    /// Returns `true` once the body has run to completion.
    pub(crate) fn is_completed(&self) -> bool {
        self.state.get() == COMPLETED
    }
}
