use crate::error::SettleError;
use crate::promise::state::{Continuation, Shared};

use std::fmt::Display;
use std::pin::Pin;
use std::rc::Rc;
use std::task::{Context, Poll};

/// A handle to a deferred computation.
///
/// A `Promise` represents a value of type `T`, or a fault of type
/// `E`, that becomes available at some later point. It starts out
/// *pending* and settles exactly once, to *fulfilled* or *rejected*;
/// the transition is monotonic and every continuation registered on
/// the handle — before or after settlement — runs in registration
/// order once the outcome is known.
///
/// There are two ways to consume a promise:
///
/// - **Awaiting.** `Promise` implements [`Future`], so inside an
///   async body `promise.await` suspends the enclosing task until
///   settlement and then evaluates to `Ok(value)` or `Err(fault)` at
///   the await site, where `?` and `match` handle it like any local
///   error.
/// - **Registering.** [`then`](Self::then) and [`catch`](Self::catch)
///   attach value and fault handlers to the two settlement channels.
///
/// A promise whose rejection is never observed — no await, no fault
/// handler — fails silently from the caller's perspective; the
/// runtime's unhandled-rejection hook is the only place such a fault
/// surfaces. This mirrors the underlying deferred-computation
/// contract and is deliberate.
///
/// Cloning a promise clones the handle, not the computation; all
/// clones observe the same settlement.
pub struct Promise<T, E: Display> {
    pub(crate) shared: Rc<Shared<T, E>>,
}

/// The producer half of a promise.
///
/// A `Resolver` settles its promise through [`fulfill`](Self::fulfill)
/// or [`reject`](Self::reject). Resolvers are cloneable so several
/// producers can race; the first settlement wins and every later
/// attempt reports [`SettleError::AlreadySettled`] without touching
/// the state.
pub struct Resolver<T, E: Display> {
    shared: Rc<Shared<T, E>>,
}

impl<T: 'static, E: Display + 'static> Promise<T, E> {
    /// Creates a pending promise together with its resolver.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let (promise, resolver) = Promise::pair();
    ///
    /// runtime.spawn(async move {
    ///     let _ = resolver.fulfill(42);
    /// });
    /// ```
    pub fn pair() -> (Self, Resolver<T, E>) {
        let shared = Rc::new(Shared::pending());

        (
            Self {
                shared: shared.clone(),
            },
            Resolver { shared },
        )
    }

    /// Creates a promise that is already fulfilled with `value`.
    pub fn fulfilled(value: T) -> Self {
        Self {
            shared: Rc::new(Shared::settled(Ok(value))),
        }
    }

    /// Creates a promise that is already rejected with `fault`.
    ///
    /// Like any other rejected promise, it reaches the
    /// unhandled-rejection hook if dropped without an observer.
    pub fn rejected(fault: E) -> Self {
        Self {
            shared: Rc::new(Shared::settled(Err(fault))),
        }
    }

    /// Registers a value handler.
    ///
    /// The handler runs once the promise fulfills, after the current
    /// synchronous stretch has returned to the scheduler — never from
    /// inside the settling call, and never if the promise rejects.
    /// Handlers run in registration order.
    ///
    /// # Panics
    ///
    /// May panic if the promise is already settled and no runtime
    /// context is installed on the current thread.
    pub fn then<F>(&self, handler: F)
    where
        F: FnOnce(&T) + 'static,
    {
        self.shared
            .clone()
            .register(Continuation::Value(Box::new(handler)));
    }

    /// Registers a fault handler.
    ///
    /// The handler runs once the promise rejects, with the same
    /// scheduling rules as [`then`](Self::then). Registering a fault
    /// handler marks the rejection as observed, so it will not be
    /// reported through the unhandled-rejection hook.
    ///
    /// # Panics
    ///
    /// May panic if the promise is already settled and no runtime
    /// context is installed on the current thread.
    pub fn catch<F>(&self, handler: F)
    where
        F: FnOnce(&E) + 'static,
    {
        self.shared.mark_observed();
        self.shared
            .clone()
            .register(Continuation::Fault(Box::new(handler)));
    }
}

impl<T: 'static, E: Display + 'static> Resolver<T, E> {
    /// Fulfills the promise with `value`.
    ///
    /// First settlement wins; a promise that is already settled stays
    /// as it is and [`SettleError::AlreadySettled`] is reported.
    pub fn fulfill(&self, value: T) -> Result<(), SettleError> {
        self.shared.clone().settle(Ok(value))
    }

    /// Rejects the promise with `fault`.
    ///
    /// First settlement wins; a promise that is already settled stays
    /// as it is and [`SettleError::AlreadySettled`] is reported.
    pub fn reject(&self, fault: E) -> Result<(), SettleError> {
        self.shared.clone().settle(Err(fault))
    }
}

impl<T, E: Display> Clone for Promise<T, E> {
    fn clone(&self) -> Self {
        Self {
            shared: self.shared.clone(),
        }
    }
}

impl<T, E: Display> Clone for Resolver<T, E> {
    fn clone(&self) -> Self {
        Self {
            shared: self.shared.clone(),
        }
    }
}

impl<T: Clone + 'static, E: Clone + Display + 'static> Future for Promise<T, E> {
    /// The settled outcome: `Ok(value)` or `Err(fault)`.
    type Output = Result<T, E>;

    /// Polls the promise as the suspension operator.
    ///
    /// A settled promise resolves immediately; a pending one parks
    /// the task's waker on the continuation list and suspends. The
    /// task resumes only after settlement wakes it and its turn
    /// arrives in the scheduler queue.
    ///
    /// Awaiting observes both channels, so an awaited rejection is
    /// never reported as unhandled.
    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        self.shared.mark_observed();
        self.shared.poll_settled(cx.waker())
    }
}
