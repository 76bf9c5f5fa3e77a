use super::Runtime;
use crate::runtime::context::RejectionHook;

use std::fmt::Display;
use std::rc::Rc;

/// Builder for configuring and creating a runtime.
///
/// `RuntimeBuilder` allows customizing runtime behavior before
/// constructing the runtime. Currently, it supports configuring the
/// unhandled-rejection observer.
///
/// # Examples
///
/// ```rust,ignore
/// let runtime = RuntimeBuilder::new()
///     .unhandled_rejection(|fault| eprintln!("dropped rejection: {fault}"))
///     .build();
/// ```
pub struct RuntimeBuilder {
    /// Observer for rejections nobody handled.
    hook: Option<RejectionHook>,
}

impl RuntimeBuilder {
    /// Creates a new `RuntimeBuilder` with default configuration.
    ///
    /// By default, unhandled rejections are reported through
    /// `log::error!`.
    pub fn new() -> Self {
        Self { hook: None }
    }

    /// Sets the observer invoked when a rejected promise is dropped
    /// without anyone having awaited it or registered a fault handler.
    ///
    /// The observer receives the fault by reference. What to do with
    /// it — log, count, panic — is the caller's policy; the runtime
    /// itself never does more than invoke the observer once per
    /// unhandled rejection.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let builder = RuntimeBuilder::new()
    ///     .unhandled_rejection(|fault| panic!("unhandled: {fault}"));
    /// ```
    pub fn unhandled_rejection<F>(mut self, hook: F) -> Self
    where
        F: Fn(&dyn Display) + 'static,
    {
        self.hook = Some(Rc::new(hook));
        self
    }

    /// Builds the runtime with the configured options.
    pub fn build(self) -> Runtime {
        Runtime::new(self.hook)
    }
}

impl Default for RuntimeBuilder {
    /// Creates a default `RuntimeBuilder`.
    fn default() -> Self {
        Self::new()
    }
}
