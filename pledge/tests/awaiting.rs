use pledge::{Promise, RuntimeBuilder, promise, yield_now};

use std::cell::RefCell;
use std::rc::Rc;

#[test]
fn test_await_yields_fulfilled_value() {
    let rt = RuntimeBuilder::new().build();

    let result = rt.block_on(async {
        let (promise, resolver) = Promise::<i32, String>::pair();

        promise::spawn(async move {
            yield_now().await;
            let _ = resolver.fulfill(7);
            Ok::<(), String>(())
        });

        promise.await
    });

    assert_eq!(result, Ok(7));
}

#[test]
fn test_awaited_rejection_is_caught_at_the_await_site() {
    let rt = RuntimeBuilder::new().build();

    let handled = rt.block_on(async {
        let (promise, resolver) = Promise::<i32, String>::pair();

        promise::spawn(async move {
            yield_now().await;
            let _ = resolver.reject("denied".to_string());
            Ok::<(), String>(())
        });

        match promise.await {
            Ok(_) => "value".to_string(),
            Err(fault) => format!("caught: {fault}"),
        }
    });

    assert_eq!(handled, "caught: denied");
}

#[test]
fn test_question_mark_propagates_awaited_rejection() {
    let rt = RuntimeBuilder::new().build();

    let result = rt.block_on(async {
        let outer = promise::spawn(async {
            let inner = promise::spawn(async { Err::<i32, String>("inner fault".to_string()) });

            let value = inner.await?;
            Ok(value * 2)
        });

        outer.await
    });

    assert_eq!(result, Err("inner fault".to_string()));
}

#[test]
fn test_two_sequential_awaits_run_in_program_order() {
    let rt = RuntimeBuilder::new().build();
    let events = Rc::new(RefCell::new(Vec::new()));

    let outer = events.clone();
    rt.block_on(async move {
        let (first, first_resolver) = Promise::<i32, String>::pair();
        let (second, second_resolver) = Promise::<i32, String>::pair();

        promise::spawn(async move {
            let _ = first_resolver.fulfill(1);
            yield_now().await;
            let _ = second_resolver.fulfill(2);
            Ok::<(), String>(())
        });

        let log = outer.clone();
        let routine = promise::spawn(async move {
            log.borrow_mut().push("before first".to_string());
            let a = first.await?;
            log.borrow_mut().push(format!("got {a}"));
            let b = second.await?;
            log.borrow_mut().push(format!("got {b}"));
            Ok::<_, String>(a + b)
        });

        assert_eq!(routine.await, Ok(3));
    });

    assert_eq!(
        *events.borrow(),
        vec!["before first", "got 1", "got 2"]
    );
}

#[test]
fn test_invocations_interleave_only_at_suspension_points() {
    let rt = RuntimeBuilder::new().build();
    let events = Rc::new(RefCell::new(Vec::new()));

    let outer = events.clone();
    rt.block_on(async move {
        let a_log = outer.clone();
        let a = promise::spawn(async move {
            a_log.borrow_mut().push("a1");
            yield_now().await;
            a_log.borrow_mut().push("a2");
            Ok::<(), String>(())
        });

        let b_log = outer.clone();
        let b = promise::spawn(async move {
            b_log.borrow_mut().push("b1");
            yield_now().await;
            b_log.borrow_mut().push("b2");
            Ok::<(), String>(())
        });

        let _ = a.await;
        let _ = b.await;
    });

    // Each first stretch ran eagerly at its call; the second
    // stretches ran in queue order after the suspensions.
    assert_eq!(*events.borrow(), vec!["a1", "b1", "a2", "b2"]);
}
