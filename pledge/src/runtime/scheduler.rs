use crate::runtime::task::Task;

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

/// A unit of work on the runtime queue.
///
/// Everything the runtime does between suspension points is a job:
/// resuming a suspended task, or dispatching a continuation of a
/// settled promise. Jobs run to completion, one at a time, in FIFO
/// order — that single queue is what gives continuations their
/// registration-order guarantee.
pub(crate) enum Job {
    /// Resume a task that was woken by a settlement.
    Resume(Rc<Task>),

    /// Run one handler of a settled promise.
    Continuation(Box<dyn FnOnce()>),
}

impl Job {
    /// Executes the job.
    pub(crate) fn run(self) {
        match self {
            Job::Resume(task) => task.run(),
            Job::Continuation(dispatch) => dispatch(),
        }
    }
}

/// Handle to the runtime's FIFO job queue.
///
/// The scheduler is single-threaded and cooperative: jobs are pushed
/// by settlements and wake-ups, and popped by the runtime loop in
/// [`block_on`](crate::Runtime::block_on). Cloning the handle shares
/// the same queue.
#[derive(Clone)]
pub(crate) struct Scheduler {
    queue: Rc<RefCell<VecDeque<Job>>>,
}

impl Scheduler {
    /// Creates an empty queue.
    pub(crate) fn new() -> Self {
        Self {
            queue: Rc::new(RefCell::new(VecDeque::new())),
        }
    }

    /// Appends a job at the back of the queue.
    pub(crate) fn push(&self, job: Job) {
        self.queue.borrow_mut().push_back(job);
    }

    /// Removes and returns the job at the front of the queue.
    pub(crate) fn pop(&self) -> Option<Job> {
        self.queue.borrow_mut().pop_front()
    }
}
