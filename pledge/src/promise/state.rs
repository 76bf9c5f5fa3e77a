use crate::error::SettleError;
use crate::runtime::context;
use crate::runtime::scheduler::Job;

use std::cell::{Cell, RefCell};
use std::fmt::Display;
use std::mem;
use std::rc::Rc;
use std::task::{Poll, Waker};

/// Settlement state of a promise.
///
/// A promise starts out `Pending`, accumulating continuations, and
/// transitions exactly once to `Fulfilled` or `Rejected`. The
/// transition is monotonic; once settled, the state never changes
/// again.
pub(crate) enum State<T, E> {
    /// Not yet settled. Holds every continuation registered so far,
    /// in registration order.
    Pending(Vec<Continuation<T, E>>),

    /// Settled with a value.
    Fulfilled(T),

    /// Settled with a fault.
    Rejected(E),
}

/// A record waiting for settlement.
///
/// Continuations are dispatched in registration order once the
/// promise settles, each as its own job on the runtime queue.
pub(crate) enum Continuation<T, E> {
    /// A value handler, run only if the promise fulfills.
    Value(Box<dyn FnOnce(&T)>),

    /// A fault handler, run only if the promise rejects.
    Fault(Box<dyn FnOnce(&E)>),

    /// The waker of a task suspended on this promise.
    Waker(Waker),
}

/// Shared record behind a promise/resolver pair.
///
/// The record is reference-counted; promise handles, resolver handles,
/// and queued continuation jobs all keep it alive. It is only ever
/// touched from the runtime's single thread, so plain `RefCell`/`Cell`
/// interior mutability suffices.
///
/// The `E: Display` bound exists so that a rejection that was never
/// observed can be reported through the unhandled-rejection hook when
/// the record is dropped.
pub(crate) struct Shared<T, E: Display> {
    /// Current settlement state plus pending continuations.
    state: RefCell<State<T, E>>,

    /// Whether any rejection observer (a fault handler or an awaiting
    /// task) was ever attached.
    observed: Cell<bool>,
}

impl<T: 'static, E: Display + 'static> Shared<T, E> {
    /// Creates a fresh, pending record with no continuations.
    pub(crate) fn pending() -> Self {
        Self {
            state: RefCell::new(State::Pending(Vec::new())),
            observed: Cell::new(false),
        }
    }

    /// Creates a record that is already settled.
    pub(crate) fn settled(outcome: Result<T, E>) -> Self {
        let state = match outcome {
            Ok(value) => State::Fulfilled(value),
            Err(fault) => State::Rejected(fault),
        };

        Self {
            state: RefCell::new(state),
            observed: Cell::new(false),
        }
    }

    /// Marks the rejection channel as observed.
    ///
    /// Called when a fault handler is registered or when a task starts
    /// awaiting this promise. An observed rejection is never reported
    /// as unhandled.
    pub(crate) fn mark_observed(&self) {
        self.observed.set(true);
    }

    /// Settles the record, first-wins.
    ///
    /// On the first call the state transitions to `Fulfilled` or
    /// `Rejected` and every registered continuation is moved, in
    /// registration order, onto the runtime queue. Nothing runs
    /// reentrantly from inside this call; handlers only execute once
    /// the current synchronous stretch has returned to the scheduler.
    ///
    /// Any later call leaves the state untouched and reports
    /// [`SettleError::AlreadySettled`].
    ///
    /// # Panics
    ///
    /// Panics if handler continuations are pending and no runtime
    /// context is installed on the current thread.
    pub(crate) fn settle(self: Rc<Self>, outcome: Result<T, E>) -> Result<(), SettleError> {
        // Probe with a shared borrow first so a handler observing an
        // already-settled promise can call this without conflicting
        // with the dispatch borrow.
        if !matches!(&*self.state.borrow(), State::Pending(_)) {
            return Err(SettleError::AlreadySettled);
        }

        let drained = {
            let mut state = self.state.borrow_mut();

            let State::Pending(continuations) = &mut *state else {
                return Err(SettleError::AlreadySettled);
            };

            let drained = mem::take(continuations);

            *state = match outcome {
                Ok(value) => State::Fulfilled(value),
                Err(fault) => State::Rejected(fault),
            };

            drained
        };

        for continuation in drained {
            self.clone().schedule(continuation);
        }

        Ok(())
    }

    /// Registers a continuation.
    ///
    /// While pending, the continuation is appended to the ordered
    /// list. After settlement it is scheduled immediately, so a late
    /// registration still runs — just never synchronously from inside
    /// this call.
    pub(crate) fn register(self: Rc<Self>, continuation: Continuation<T, E>) {
        let pending = matches!(&*self.state.borrow(), State::Pending(_));

        if pending {
            let mut state = self.state.borrow_mut();
            if let State::Pending(continuations) = &mut *state {
                continuations.push(continuation);
                return;
            }
        }

        self.schedule(continuation);
    }

    /// Moves one continuation onto the runtime queue.
    ///
    /// Wakers reschedule their task directly; handlers become a queued
    /// job that re-reads the settled state when its turn arrives.
    fn schedule(self: Rc<Self>, continuation: Continuation<T, E>) {
        match continuation {
            Continuation::Waker(waker) => waker.wake(),
            continuation => {
                context::current_scheduler().push(Job::Continuation(Box::new(move || {
                    self.dispatch(continuation);
                })));
            }
        }
    }

    /// Runs a handler against the settled state.
    ///
    /// A handler registered on the channel that did not settle is
    /// silently dropped, mirroring the two-channel contract.
    fn dispatch(&self, continuation: Continuation<T, E>) {
        match (&*self.state.borrow(), continuation) {
            (State::Fulfilled(value), Continuation::Value(handler)) => handler(value),
            (State::Rejected(fault), Continuation::Fault(handler)) => handler(fault),
            _ => {}
        }
    }
}

impl<T: Clone + 'static, E: Clone + Display + 'static> Shared<T, E> {
    /// Polls the record on behalf of an awaiting task.
    ///
    /// If settled, the outcome is cloned out immediately. Otherwise
    /// the task's waker joins the continuation list and the task
    /// suspends until settlement wakes it.
    pub(crate) fn poll_settled(&self, waker: &Waker) -> Poll<Result<T, E>> {
        let mut state = self.state.borrow_mut();

        match &mut *state {
            State::Pending(continuations) => {
                continuations.push(Continuation::Waker(waker.clone()));
                Poll::Pending
            }
            State::Fulfilled(value) => Poll::Ready(Ok(value.clone())),
            State::Rejected(fault) => Poll::Ready(Err(fault.clone())),
        }
    }
}

impl<T, E: Display> Drop for Shared<T, E> {
    /// Reports a rejection that nobody ever observed.
    ///
    /// Runs once the last promise handle, resolver, and continuation
    /// referencing this record are gone. A record that settled
    /// rejected without a fault handler or an await reaches the
    /// unhandled-rejection hook here.
    fn drop(&mut self) {
        if self.observed.get() {
            return;
        }

        if let State::Rejected(fault) = &*self.state.get_mut() {
            context::report_unhandled(fault);
        }
    }
}
