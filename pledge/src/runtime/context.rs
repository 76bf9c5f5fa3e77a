use crate::runtime::scheduler::Scheduler;

use std::cell::RefCell;
use std::fmt::Display;
use std::rc::Rc;

/// Observer invoked for rejections that were never handled.
pub(crate) type RejectionHook = Rc<dyn Fn(&dyn Display)>;

thread_local! {
    /// Thread-local handle to the current scheduler queue.
    ///
    /// This is set when entering the runtime context and allows
    /// promises and tasks to reach the queue without explicit
    /// parameter passing.
    pub(crate) static CURRENT_SCHEDULER: RefCell<Option<Scheduler>> =
        const { RefCell::new(None) };

    /// Thread-local unhandled-rejection hook.
    ///
    /// Installed alongside the scheduler from the runtime's
    /// configuration. When absent, unhandled rejections fall back to
    /// the `log` facade.
    pub(crate) static CURRENT_REJECTION_HOOK: RefCell<Option<RejectionHook>> =
        const { RefCell::new(None) };
}

/// Enters the runtime execution context for the current thread.
///
/// This temporarily installs the thread-local runtime state (scheduler
/// queue and rejection hook) for the duration of the closure `f`.
/// After the closure completes, the previous context is restored.
///
/// This mechanism lets deeply nested components — promise settlement,
/// task wake-ups — reach shared execution state without passing
/// handles through every API.
pub(crate) fn enter_context<R>(
    scheduler: Scheduler,
    hook: Option<RejectionHook>,
    f: impl FnOnce() -> R,
) -> R {
    CURRENT_SCHEDULER.with(|s| {
        CURRENT_REJECTION_HOOK.with(|h| {
            let prev_s = s.replace(Some(scheduler));
            let prev_h = h.replace(hook);

            let out = f();

            h.replace(prev_h);
            s.replace(prev_s);

            out
        })
    })
}

/// Returns the scheduler of the current runtime context.
///
/// # Panics
///
/// Panics if called outside the context of a running runtime.
pub(crate) fn current_scheduler() -> Scheduler {
    CURRENT_SCHEDULER.with(|cell| {
        cell.borrow()
            .as_ref()
            .expect("must be called within the context of a runtime")
            .clone()
    })
}

/// Reports a rejection that was never observed.
///
/// The configured hook receives the fault if a runtime context is
/// installed; otherwise the fault goes to `log::error!`. Promises can
/// outlive the runtime that produced them, so the fallback keeps late
/// drops from disappearing entirely.
pub(crate) fn report_unhandled(fault: &dyn Display) {
    let hook = CURRENT_REJECTION_HOOK.with(|cell| cell.borrow().as_ref().cloned());

    match hook {
        Some(hook) => hook(fault),
        None => log::error!("unhandled promise rejection: {fault}"),
    }
}
