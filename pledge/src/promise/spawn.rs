use crate::promise::Promise;
use crate::runtime::context;
use crate::runtime::task::Task;

use std::fmt::Display;
use std::future::Future;
use std::rc::Rc;

/// Wraps an asynchronous body into a promise-returning invocation.
///
/// `spawn` is the asynchronous-function wrapper: it always hands back
/// a [`Promise`] immediately and never surfaces the body's fault to
/// the caller directly. A body ending in `Ok(v)` fulfills the promise
/// with `v`; a body ending in `Err(f)` rejects it with `f` — including
/// an `Err` produced before the first suspension point, which still
/// becomes a rejection rather than an error on the call itself.
///
/// The body starts eagerly: it runs synchronously, in program order,
/// up to its first suspension point (or to completion) during this
/// call. Every later resumption goes through the scheduler queue, so
/// independent invocations interleave only at suspension points.
///
/// Dropping the returned promise does not stop the body; it only
/// discards the ability to observe the outcome. A rejection left
/// unobserved reaches the unhandled-rejection hook.
///
/// # Panics
///
/// Panics if called outside the context of a running runtime.
///
/// # Examples
///
/// ```rust,ignore
/// let promise = promise::spawn(async {
///     let user = lookup_user(id).await?;
///     Ok(user.name)
/// });
///
/// match promise.await {
///     Ok(name) => println!("{name}"),
///     Err(fault) => eprintln!("lookup failed: {fault}"),
/// }
/// ```
pub fn spawn<F, T, E>(future: F) -> Promise<T, E>
where
    F: Future<Output = Result<T, E>> + 'static,
    T: 'static,
    E: Display + 'static,
{
    let scheduler = context::current_scheduler();

    let (promise, resolver) = Promise::pair();

    let task = Rc::new(Task::new(
        async move {
            match future.await {
                Ok(value) => {
                    let _ = resolver.fulfill(value);
                }
                Err(fault) => {
                    let _ = resolver.reject(fault);
                }
            }
        },
        scheduler,
    ));

    // Run the first synchronous stretch of the body right now, so its
    // side effects up to the first suspension happen during the call.
    task.run();

    promise
}
