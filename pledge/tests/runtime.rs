use pledge::{Promise, RuntimeBuilder, promise, yield_now};

use std::cell::Cell;
use std::rc::Rc;

#[test]
fn test_block_on_returns_the_root_output() {
    let rt = RuntimeBuilder::new().build();

    let result = rt.block_on(async { 42 });

    assert_eq!(result, 42);
}

#[test]
fn test_spawned_background_task_runs_during_block_on() {
    let rt = RuntimeBuilder::new().build();
    let ran = Rc::new(Cell::new(false));

    let flag = ran.clone();
    rt.spawn(async move {
        flag.set(true);
    });

    rt.block_on(async {});

    assert!(ran.get());
}

#[test]
fn test_yield_now_lets_queued_work_run() {
    let rt = RuntimeBuilder::new().build();
    let ran = Rc::new(Cell::new(false));

    let flag = ran.clone();
    rt.spawn(async move {
        flag.set(true);
    });

    let observed = rt.block_on(async move {
        yield_now().await;
        true
    });

    assert!(observed);
    assert!(ran.get());
}

#[test]
fn test_block_on_drains_work_spawned_by_the_root() {
    let rt = RuntimeBuilder::new().build();
    let ran = Rc::new(Cell::new(false));

    let flag = ran.clone();
    rt.block_on(async move {
        promise::spawn(async move {
            yield_now().await;
            flag.set(true);
            Ok::<(), String>(())
        });
    });

    assert!(ran.get());
}

#[test]
#[should_panic(expected = "runtime stalled")]
fn test_block_on_panics_when_nothing_can_settle() {
    let rt = RuntimeBuilder::new().build();

    rt.block_on(async {
        let (promise, _resolver) = Promise::<i32, String>::pair();
        let _ = promise.await;
    });
}

#[test]
#[should_panic(expected = "within the context of a runtime")]
fn test_promise_spawn_requires_runtime_context() {
    let _ = promise::spawn(async { Ok::<i32, String>(1) });
}
