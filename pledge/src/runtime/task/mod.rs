//! Cooperative task primitives.
//!
//! This module defines the abstractions the runtime uses to represent
//! and resume one invocation of a wrapped routine:
//!
//! - the per-invocation state machine (queued, running, suspended,
//!   notified, completed),
//! - custom waker integration bridging promise settlements back to
//!   the run queue,
//! - the task container itself.
//!
//! Tasks are internal; users reach them only through
//! [`promise::spawn`](crate::promise::spawn) and
//! [`Runtime::spawn`](crate::Runtime::spawn).

pub(crate) mod core;
pub(crate) mod state;
pub(crate) mod waker;

pub(crate) use self::core::Task;
