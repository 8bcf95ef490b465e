use drawerkit_testing::robot_assertions::{
    assert_approx_eq, assert_rect_approx_eq, assert_settled_closed, assert_settled_open,
    assert_slides_in_range, state_changes,
};
use drawerkit_testing::{DrawerRobot, RecordedEvent};
use drawerkit_ui::{
    DrawerAnimationOptions, DrawerConfig, DrawerConfigBuilder, DrawerSide, DrawerState, LockMode,
};
use drawerkit_ui_graphics::Rect;

fn builder() -> DrawerConfigBuilder<()> {
    DrawerConfig::builder().children(|| ()).render_panel(|| ())
}

fn robot(builder: DrawerConfigBuilder<()>) -> DrawerRobot<()> {
    DrawerRobot::new(builder.build().expect("config"), 400.0, 800.0).expect("robot")
}

#[test]
fn drag_open_then_tap_strip_to_close() {
    let mut robot = robot(builder());

    robot.drag_and_hold(10.0, 200.0);
    robot.wait_for_idle();
    assert_settled_open(&robot);

    let render = robot.render_state();
    assert_rect_approx_eq(
        render.edge_strip,
        Rect::new(300.0, 0.0, 300.0, 800.0),
        1e-3,
        "open edge strip",
    );

    robot.log().take();
    assert!(robot.tap(350.0, 400.0));
    robot.wait_for_idle();
    assert_settled_closed(&robot);
    assert_eq!(
        state_changes(&robot.log().take()),
        vec![(DrawerState::Settling, false), (DrawerState::Idle, false)]
    );
}

#[test]
fn quick_flick_opens_with_short_travel() {
    let mut robot = robot(builder()).with_step_ms(8).with_drag_steps(4);
    robot.drag(10.0, 90.0);
    assert!(robot.drawer().is_shown());
    robot.wait_for_idle();
    assert_settled_open(&robot);
}

#[test]
fn slow_short_drag_springs_back() {
    let mut robot = robot(builder());
    robot.drag_and_hold(10.0, 120.0);
    assert!(!robot.drawer().is_shown());
    robot.wait_for_idle();
    assert_settled_closed(&robot);
}

#[test]
fn full_cycle_reports_slides_in_range() {
    let mut robot = robot(builder());
    robot.drag_and_hold(10.0, 700.0);
    robot.wait_for_idle();
    robot.drag_and_hold(290.0, -300.0);
    robot.wait_for_idle();
    assert_settled_closed(&robot);

    let events = robot.log().events();
    assert_slides_in_range(&events, "full cycle");
    assert!(events.contains(&RecordedEvent::Opened));
    assert!(events.contains(&RecordedEvent::Closed));
    assert_eq!(robot.log().slides().last().copied(), Some(0.0));
}

#[test]
fn right_drawer_opens_and_closes_from_its_edge() {
    let mut robot = robot(builder().side(DrawerSide::Right));
    assert_approx_eq(robot.render_state().translate_x, 300.0, 1e-3, "closed translate");

    robot.drag_and_hold(390.0, 200.0);
    robot.wait_for_idle();
    assert_settled_open(&robot);
    assert_approx_eq(robot.render_state().panel.x, 100.0, 1e-3, "open panel x");

    robot.drag_and_hold(150.0, 380.0);
    robot.wait_for_idle();
    assert_settled_closed(&robot);
}

#[test]
fn container_resize_moves_right_panel() {
    let mut robot = robot(builder().side(DrawerSide::Right));
    robot.drawer().open_drawer(DrawerAnimationOptions::default());
    robot.wait_for_idle();

    robot.set_container_size(600.0, 900.0);
    let render = robot.render_state();
    assert_rect_approx_eq(
        render.panel,
        Rect::new(300.0, 0.0, 300.0, 900.0),
        1e-3,
        "resized panel",
    );
}

#[test]
fn cancelled_drag_settles_back() {
    let mut robot = robot(builder());
    robot.press(10.0, 400.0);
    robot.move_by_steps(250.0, 10);
    assert!(robot.openness() > 0.5);
    robot.cancel();
    robot.wait_for_idle();
    assert_settled_closed(&robot);
}

#[test]
fn programmatic_close_with_velocity_settles() {
    let mut robot = robot(builder());
    robot.drawer().open_drawer(DrawerAnimationOptions::default());
    robot.advance_frames(3);
    robot
        .drawer()
        .close_drawer(DrawerAnimationOptions::with_velocity(-1200.0));
    let frames = robot.wait_for_idle();
    assert!(frames > 0);
    assert_settled_closed(&robot);
}

#[test]
fn unlocking_restores_dragging() {
    let mut robot = robot(builder().lock_mode(LockMode::LockedClosed));
    robot.drag_and_hold(10.0, 250.0);
    robot.wait_for_idle();
    assert_settled_closed(&robot);
    assert!(robot.log().take().is_empty());

    robot.drawer().set_lock_mode(LockMode::Unlocked);
    robot.drag_and_hold(10.0, 250.0);
    robot.wait_for_idle();
    assert_settled_open(&robot);
}

#[test]
fn locked_open_drawer_stays_open() {
    let mut robot = robot(builder().lock_mode(LockMode::LockedOpen));
    assert_settled_open(&robot);
    assert!(!robot.tap(350.0, 400.0));
    robot.drag_and_hold(250.0, 0.0);
    robot.wait_for_idle();
    assert_settled_open(&robot);
}
