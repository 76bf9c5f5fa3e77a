use pledge::{RuntimeBuilder, promise};

use std::cell::RefCell;
use std::rc::Rc;

fn recording_runtime() -> (pledge::Runtime, Rc<RefCell<Vec<String>>>) {
    let faults = Rc::new(RefCell::new(Vec::new()));

    let sink = faults.clone();
    let rt = RuntimeBuilder::new()
        .unhandled_rejection(move |fault| sink.borrow_mut().push(format!("{fault}")))
        .build();

    (rt, faults)
}

#[test]
fn test_dropped_rejection_reaches_the_hook_once() {
    let (rt, faults) = recording_runtime();

    rt.block_on(async {
        let _ = promise::spawn(async { Err::<(), String>("lost".to_string()) });
    });

    assert_eq!(*faults.borrow(), vec!["lost"]);
}

#[test]
fn test_caller_error_handling_never_observes_the_gap() {
    let (rt, faults) = recording_runtime();

    let caller_result = rt.block_on(async {
        let caller = || -> Result<i32, String> {
            let promise = promise::spawn(async { Err::<(), String>("silent".to_string()) });
            drop(promise);

            // Nothing above returned Err; the fault travelled only
            // through the promise's own channel.
            Ok(99)
        };

        caller()
    });

    assert_eq!(caller_result, Ok(99));
    assert_eq!(*faults.borrow(), vec!["silent"]);
}

#[test]
fn test_awaiting_marks_the_rejection_handled() {
    let (rt, faults) = recording_runtime();

    let result = rt.block_on(async {
        let promise = promise::spawn(async { Err::<i32, String>("seen".to_string()) });
        promise.await
    });

    assert_eq!(result, Err("seen".to_string()));
    assert!(faults.borrow().is_empty());
}

#[test]
fn test_catch_marks_the_rejection_handled() {
    let (rt, faults) = recording_runtime();

    rt.block_on(async {
        let promise = promise::spawn(async { Err::<i32, String>("seen".to_string()) });
        promise.catch(|_| {});
    });

    assert!(faults.borrow().is_empty());
}

#[test]
fn test_fulfilled_promises_never_reach_the_hook() {
    let (rt, faults) = recording_runtime();

    rt.block_on(async {
        let _ = promise::spawn(async { Ok::<i32, String>(1) });
    });

    assert!(faults.borrow().is_empty());
}

#[test]
fn test_pre_rejected_constructor_counts_as_unhandled() {
    let (rt, faults) = recording_runtime();

    rt.block_on(async {
        let promise = pledge::Promise::<i32, String>::rejected("orphaned".to_string());
        drop(promise);
    });

    assert_eq!(*faults.borrow(), vec!["orphaned"]);
}
