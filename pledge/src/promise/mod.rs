//! Deferred computation handles.
//!
//! This module defines the promise abstraction at the heart of the
//! runtime:
//!
//! - [`Promise`] — the consumer handle: awaitable, with two-channel
//!   handler registration,
//! - [`Resolver`] — the producer handle: first-wins settlement,
//! - [`spawn`] — the asynchronous-function wrapper, turning a
//!   fallible async body into a promise-returning invocation.
//!
//! Most users will call [`spawn`] and either await the returned
//! promise or attach [`then`](Promise::then)/[`catch`](Promise::catch)
//! handlers; [`Promise::pair`] is the lower-level surface for writing
//! producers by hand.

pub(crate) mod state;

mod handle;
mod spawn;

pub use handle::{Promise, Resolver};
pub use spawn::spawn;
