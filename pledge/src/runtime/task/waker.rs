use crate::runtime::task::Task;

use std::mem;
use std::rc::Rc;
use std::task::{RawWaker, RawWakerVTable, Waker};

/// The `RawWakerVTable` shared by all task wakers.
///
/// The vtable defines how the runtime interacts with the task when:
/// - cloning the waker,
/// - waking the task,
/// - waking by reference,
/// - dropping the waker.
///
/// # Safety
///
/// All functions in the vtable must uphold the invariants required by
/// [`RawWaker`], in particular:
/// - reference counts must be correctly managed,
/// - the task must remain valid for the lifetime of the waker.
static VTABLE: RawWakerVTable = RawWakerVTable::new(clone_raw, wake_raw, wake_by_ref_raw, drop_raw);

/// Creates a [`Waker`] associated with a runtime task.
///
/// The returned waker will reschedule the task when woken.
///
/// # Safety
///
/// The `RawWaker` is backed by an `Rc<Task>`, so the waker is **not**
/// thread-safe. This is sound here because the runtime is
/// single-threaded by construction: wakers only ever sit on promise
/// continuation lists owned by the same thread, and nothing in this
/// crate is `Send`, so a waker can never leave the thread it was
/// created on.
///
/// The pointer stored inside the `RawWaker` originates from
/// `Rc::into_raw` and every vtable function restores it with
/// `Rc::from_raw`, keeping the reference count balanced.
pub(crate) fn make_waker(task: Rc<Task>) -> Waker {
    unsafe { Waker::from_raw(RawWaker::new(Rc::into_raw(task) as *const (), &VTABLE)) }
}

/// Clones the raw waker.
///
/// This increments the reference count of the underlying `Rc<Task>`
/// and returns a new `RawWaker` pointing to the same task.
fn clone_raw(ptr: *const ()) -> RawWaker {
    let rc = unsafe { Rc::<Task>::from_raw(ptr as *const Task) };
    let cloned = rc.clone();
    mem::forget(rc);

    RawWaker::new(Rc::into_raw(cloned) as *const (), &VTABLE)
}

/// Wakes the task and consumes the waker.
///
/// This transfers ownership of the `Rc<Task>` and calls
/// [`Task::wake`], potentially scheduling the task for execution.
fn wake_raw(ptr: *const ()) {
    let rc = unsafe { Rc::<Task>::from_raw(ptr as *const Task) };
    rc.wake();
}

/// Wakes the task without consuming the waker.
///
/// The underlying `Rc<Task>` is cloned to preserve the original
/// reference count.
fn wake_by_ref_raw(ptr: *const ()) {
    let rc = unsafe { Rc::<Task>::from_raw(ptr as *const Task) };
    rc.clone().wake();
    mem::forget(rc);
}

/// Drops the raw waker.
///
/// This decrements the reference count of the underlying `Rc<Task>`.
/// No other action is performed.
fn drop_raw(ptr: *const ()) {
    unsafe { Rc::<Task>::from_raw(ptr as *const Task) };
}
