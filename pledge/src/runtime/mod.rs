//! The single-threaded cooperative runtime.
//!
//! This module wires the scheduler queue, the runtime context, and
//! the task machinery together:
//!
//! - one FIFO job queue shared by task resumptions and promise
//!   continuations,
//! - a thread-local context installed for the duration of
//!   [`Runtime::block_on`],
//! - the per-invocation task state machine.

pub(crate) mod context;
pub(crate) mod scheduler;
pub(crate) mod task;

pub mod builder;
pub mod yield_now;

mod core;

pub use self::core::Runtime;
