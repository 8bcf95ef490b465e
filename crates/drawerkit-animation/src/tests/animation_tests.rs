use super::*;

use drawerkit_core::Runtime;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

const FRAME_NANOS: u64 = 16_666_667;

fn run_frames(runtime: &Runtime, start: u64, max_frames: usize) -> u64 {
    let handle = runtime.handle();
    let mut frame_time = start;
    for _ in 0..max_frames {
        if !handle.has_frame_callbacks() {
            break;
        }
        frame_time += FRAME_NANOS;
        handle.drain_frame_callbacks(frame_time);
    }
    frame_time
}

#[test]
fn spring_publishes_intermediate_values() {
    let runtime = Runtime::new();
    let animatable = Animatable::new(0.0f32, runtime.handle());
    let samples = Rc::new(RefCell::new(Vec::new()));
    {
        let samples = Rc::clone(&samples);
        animatable.add_listener(move |value| samples.borrow_mut().push(*value));
    }

    animatable.animateTo(1.0, SpringSpec::stiff());
    assert!(animatable.is_running());
    assert_eq!(animatable.spring(), SpringSpec::stiff());
    run_frames(&runtime, 0, 600);

    let samples = samples.borrow();
    assert!(samples.iter().any(|value| *value > 0.0 && *value < 1.0));
    assert_eq!(samples.last().copied(), Some(1.0));
    assert!(!animatable.is_running());
    assert_eq!(animatable.state().get(), 1.0);
}

#[test]
fn spring_settles_on_target_and_reports_finished() {
    let runtime = Runtime::new();
    let animatable = Animatable::new(-300.0f32, runtime.handle());
    let reason = Rc::new(Cell::new(None));

    {
        let reason = Rc::clone(&reason);
        animatable.animateToWithVelocity(
            0.0,
            SpringSpec::medium_low().with_position_threshold(0.01),
            0.0,
            move |end| reason.set(Some(end)),
        );
    }
    run_frames(&runtime, 0, 600);

    assert_eq!(reason.get(), Some(AnimationEndReason::Finished));
    assert_eq!(animatable.value(), 0.0);
    assert_eq!(animatable.velocity(), 0.0);
    assert!(!runtime.handle().has_frame_callbacks());
}

#[test]
fn initial_velocity_moves_spring_faster_at_first() {
    let first_frame_value = |velocity: f32| {
        let runtime = Runtime::new();
        let handle = runtime.handle();
        let animatable = Animatable::new(0.0f32, handle.clone());
        animatable.animateToWithVelocity(
            300.0,
            SpringSpec::medium_low(),
            velocity,
            |_| {},
        );
        handle.drain_frame_callbacks(0);
        handle.drain_frame_callbacks(FRAME_NANOS);
        animatable.value()
    };

    let at_rest = first_frame_value(0.0);
    let flung = first_frame_value(3_000.0);
    assert!(at_rest > 0.0);
    assert!(flung > at_rest, "flung {flung} should lead resting start {at_rest}");
}

#[test]
fn new_target_interrupts_running_animation() {
    let runtime = Runtime::new();
    let handle = runtime.handle();
    let animatable = Animatable::new(0.0f32, handle.clone());
    let ends = Rc::new(RefCell::new(Vec::new()));

    for target in [100.0, 0.0] {
        let ends = Rc::clone(&ends);
        animatable.animateToWithVelocity(
            target,
            SpringSpec::default(),
            0.0,
            move |end| ends.borrow_mut().push((target, end)),
        );
    }
    run_frames(&runtime, 0, 600);

    assert_eq!(
        ends.borrow().as_slice(),
        &[
            (100.0, AnimationEndReason::Interrupted),
            (0.0, AnimationEndReason::Finished)
        ]
    );
    assert_eq!(animatable.target(), 0.0);
}

#[test]
fn snap_to_cancels_and_publishes() {
    let runtime = Runtime::new();
    let handle = runtime.handle();
    let animatable = Animatable::new(0.0f32, handle.clone());
    let interrupted = Rc::new(Cell::new(false));
    let published = Rc::new(Cell::new(0.0f32));

    {
        let published = Rc::clone(&published);
        animatable.add_listener(move |value| published.set(*value));
    }
    {
        let interrupted = Rc::clone(&interrupted);
        animatable.animateToWithVelocity(
            50.0,
            SpringSpec::default(),
            0.0,
            move |end| interrupted.set(end == AnimationEndReason::Interrupted),
        );
    }
    animatable.snapTo(20.0);

    assert!(interrupted.get());
    assert_eq!(published.get(), 20.0);
    assert!(!animatable.is_running());
    assert!(!handle.has_frame_callbacks());
}

#[test]
fn spring_presets() {
    assert_eq!(SpringSpec::default().damping_ratio, 1.0);
    assert!(SpringSpec::bouncy().damping_ratio < 1.0);
    assert!(SpringSpec::stiff().stiffness > SpringSpec::default().stiffness);
    assert!(SpringSpec::medium_low().stiffness < SpringSpec::default().stiffness);
}
