use pledge::{RuntimeBuilder, promise};

use std::cell::RefCell;
use std::rc::Rc;

#[test]
fn test_body_returning_value_fulfills() {
    let rt = RuntimeBuilder::new().build();

    let result = rt.block_on(async {
        let promise = promise::spawn(async { Ok::<_, String>(42) });
        promise.await
    });

    assert_eq!(result, Ok(42));
}

#[test]
fn test_body_fault_becomes_rejection_not_call_error() {
    let rt = RuntimeBuilder::new().build();

    let result = rt.block_on(async {
        // The fault is produced before any suspension point; the call
        // still returns a promise rather than failing.
        let promise = promise::spawn(async { Err::<i32, String>("boom".to_string()) });
        promise.await
    });

    assert_eq!(result, Err("boom".to_string()));
}

#[test]
fn test_catch_records_the_fault() {
    let rt = RuntimeBuilder::new().build();
    let recorded = Rc::new(RefCell::new(None::<String>));

    let slot = recorded.clone();
    rt.block_on(async move {
        let promise = promise::spawn(async { Err::<(), String>("E".to_string()) });
        promise.catch(move |fault| *slot.borrow_mut() = Some(fault.clone()));
    });

    assert_eq!(recorded.borrow().as_deref(), Some("E"));
}

#[test]
fn test_call_site_sees_no_fault_without_await() {
    let rt = RuntimeBuilder::new().build();

    let caller_outcome = rt.block_on(async {
        let caller = || -> Result<&'static str, String> {
            let promise = promise::spawn(async { Err::<(), String>("E".to_string()) });
            // Silence the unhandled report; the point is that no
            // structured path in this caller ever saw the fault.
            promise.catch(|_| {});
            Ok("caller finished cleanly")
        };

        caller()
    });

    assert_eq!(caller_outcome, Ok("caller finished cleanly"));
}

#[test]
fn test_body_runs_eagerly_up_to_first_suspension() {
    let rt = RuntimeBuilder::new().build();
    let events = Rc::new(RefCell::new(Vec::new()));

    let outer = events.clone();
    rt.block_on(async move {
        let inner = outer.clone();
        let promise = promise::spawn(async move {
            inner.borrow_mut().push("body");
            pledge::yield_now().await;
            inner.borrow_mut().push("resumed");
            Ok::<(), String>(())
        });

        // The first stretch of the body already ran during the call.
        outer.borrow_mut().push("after-call");

        let _ = promise.await;
    });

    assert_eq!(*events.borrow(), vec!["body", "after-call", "resumed"]);
}

#[test]
fn test_fulfillment_value_shared_by_all_clones() {
    let rt = RuntimeBuilder::new().build();

    let (a, b) = rt.block_on(async {
        let promise = promise::spawn(async { Ok::<_, String>("shared".to_string()) });
        let clone = promise.clone();

        (promise.await, clone.await)
    });

    assert_eq!(a, Ok("shared".to_string()));
    assert_eq!(b, Ok("shared".to_string()));
}
