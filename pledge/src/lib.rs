//! # Pledge
//!
//! **Pledge** is a single-threaded promise runtime for Rust: deferred
//! computation handles with cooperative, queue-ordered settlement.
//!
//! Unlike general-purpose runtimes, Pledge models the behavioral
//! contract of a promise abstraction precisely. A [`Promise`] settles
//! exactly once — fulfilled with a value or rejected with a fault —
//! and every consumer, whether it awaits the handle or registers
//! handlers on its two channels, observes that single settlement in
//! registration order, never reentrantly from inside the settling
//! call.
//!
//! The runtime offers:
//!
//! - A **promise handle** ([`Promise`]/[`Resolver`]) with monotonic,
//!   first-wins settlement and ordered continuations
//! - An **asynchronous-function wrapper** ([`promise::spawn`]) that
//!   always returns a promise and turns every body fault — even one
//!   raised before the first suspension point — into a rejection
//!   rather than a caller-visible error
//! - A **cooperative scheduler** with a single FIFO job queue; tasks
//!   interleave only at suspension points
//! - A configurable **unhandled-rejection hook** for rejections that
//!   were never awaited or handled
//! - **Combinator macros** [`all!`] and [`race!`]
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use pledge::{RuntimeBuilder, promise};
//!
//! let runtime = RuntimeBuilder::new().build();
//!
//! let greeting = runtime.block_on(async {
//!     let promise = promise::spawn(async {
//!         Ok::<_, String>("hello".to_string())
//!     });
//!
//!     promise.await
//! });
//!
//! assert_eq!(greeting.unwrap(), "hello");
//! ```
//!
//! ## Modules
//!
//! - [`promise`] — Promise handles, resolvers, and the async wrapper
//! - [`error`] — Settlement errors
//!
//! ## The unhandled-rejection gap
//!
//! Calling a wrapped routine without awaiting the result and without
//! a fault handler means a later rejection is invisible to every
//! structured error-handling construct in the caller. Pledge
//! reproduces this gap faithfully — it is the defining quirk of the
//! abstraction — and routes such rejections to the hook configured
//! through [`RuntimeBuilder::unhandled_rejection`], defaulting to
//! `log::error!`.

mod runtime;

pub mod error;
pub mod promise;

pub use promise::{Promise, Resolver};
pub use runtime::Runtime;
pub use runtime::builder::RuntimeBuilder;
pub use runtime::yield_now::yield_now;

pub use pledge_macros::*;
