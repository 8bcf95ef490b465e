use super::*;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

#[test]
fn frame_callback_runs_once_with_frame_time() {
    let runtime = Runtime::new();
    let handle = runtime.handle();
    let seen = Rc::new(RefCell::new(Vec::new()));

    let seen_in_callback = Rc::clone(&seen);
    let _registration = handle
        .frame_clock()
        .with_frame_nanos(move |time| seen_in_callback.borrow_mut().push(time));

    assert!(runtime.needs_frame());
    handle.drain_frame_callbacks(16_000_000);
    handle.drain_frame_callbacks(32_000_000);

    assert_eq!(seen.borrow().as_slice(), &[16_000_000]);
    assert!(!runtime.needs_frame());
    assert_eq!(handle.last_frame_nanos(), Some(32_000_000));
}

#[test]
fn dropping_registration_cancels_callback() {
    let runtime = Runtime::new();
    let handle = runtime.handle();
    let fired = Rc::new(Cell::new(false));

    let fired_flag = Rc::clone(&fired);
    let registration = handle
        .frame_clock()
        .with_frame_nanos(move |_| fired_flag.set(true));
    assert!(registration.is_active());
    drop(registration);

    handle.drain_frame_callbacks(0);
    assert!(!fired.get());
    assert!(!handle.has_frame_callbacks());
}

#[test]
fn callbacks_registered_during_drain_wait_for_next_frame() {
    let runtime = Runtime::new();
    let handle = runtime.handle();
    let frames = Rc::new(RefCell::new(Vec::new()));
    let keep_alive = Rc::new(RefCell::new(Vec::new()));

    {
        let frames = Rc::clone(&frames);
        let keep_alive_inner = Rc::clone(&keep_alive);
        let clock = handle.frame_clock();
        let registration = handle.frame_clock().with_frame_millis(move |millis| {
            frames.borrow_mut().push(millis);
            let frames = Rc::clone(&frames);
            let next = clock.with_frame_millis(move |millis| frames.borrow_mut().push(millis));
            keep_alive_inner.borrow_mut().push(next);
        });
        keep_alive.borrow_mut().push(registration);
    }

    handle.drain_frame_callbacks(16_000_000);
    assert_eq!(frames.borrow().as_slice(), &[16]);
    assert!(handle.has_frame_callbacks());

    handle.drain_frame_callbacks(32_000_000);
    assert_eq!(frames.borrow().as_slice(), &[16, 32]);
}

#[test]
fn dead_runtime_yields_inactive_registration() {
    let handle = Runtime::new().handle();
    assert!(!handle.is_alive());
    let registration = handle.frame_clock().with_frame_nanos(|_| {});
    assert!(!registration.is_active());
}

#[test]
fn state_writes_bump_version_and_request_frame() {
    let runtime = Runtime::new();
    let state = MutableState::with_runtime(0.0f32, runtime.handle());
    let read = state.as_state();

    assert!(!runtime.needs_frame());
    state.set_value(4.0);
    state.update(|value| *value += 1.0);

    assert_eq!(read.get(), 5.0);
    assert_eq!(read.version(), 2);
    assert!(runtime.needs_frame());
}
