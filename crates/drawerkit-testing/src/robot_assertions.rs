//! Assertion utilities for robot testing
//!
//! Helpers for validating drawer geometry and listener traffic in robot
//! tests.

use crate::robot::{DrawerRobot, RecordedEvent};
use drawerkit_ui::DrawerState;
use drawerkit_ui_graphics::Rect;

/// Assert that a value is within `tolerance` of `expected`.
pub fn assert_approx_eq(actual: f32, expected: f32, tolerance: f32, msg: &str) {
    let diff = (actual - expected).abs();
    assert!(
        diff <= tolerance,
        "{}: expected {} (±{}), got {} (diff: {})",
        msg,
        expected,
        tolerance,
        actual,
        diff
    );
}

/// Assert that two rectangles match edge for edge.
pub fn assert_rect_approx_eq(actual: Rect, expected: Rect, tolerance: f32, msg: &str) {
    assert_approx_eq(actual.x, expected.x, tolerance, &format!("{} - x", msg));
    assert_approx_eq(actual.y, expected.y, tolerance, &format!("{} - y", msg));
    assert_approx_eq(
        actual.width,
        expected.width,
        tolerance,
        &format!("{} - width", msg),
    );
    assert_approx_eq(
        actual.height,
        expected.height,
        tolerance,
        &format!("{} - height", msg),
    );
}

/// Assert that the drawer is at rest, fully open.
pub fn assert_settled_open<L>(robot: &DrawerRobot<L>) {
    assert!(robot.drawer().is_shown(), "drawer should be shown");
    assert!(robot.is_idle(), "drawer should be idle, is {}", robot.drawer().state());
    assert_approx_eq(robot.openness(), 1.0, 1e-4, "openness");
    assert_approx_eq(robot.render_state().translate_x, 0.0, 1e-2, "translate_x");
}

/// Assert that the drawer is at rest, fully closed.
pub fn assert_settled_closed<L>(robot: &DrawerRobot<L>) {
    assert!(!robot.drawer().is_shown(), "drawer should be hidden");
    assert!(robot.is_idle(), "drawer should be idle, is {}", robot.drawer().state());
    assert_approx_eq(robot.openness(), 0.0, 1e-4, "openness");
    assert!(!robot.render_state().overlay_visible, "overlay should be hidden");
}

/// Assert that every slide reported so far lies in [0, 1].
pub fn assert_slides_in_range(events: &[RecordedEvent], msg: &str) {
    for event in events {
        if let RecordedEvent::Slide(openness) = event {
            assert!(
                (0.0..=1.0).contains(openness),
                "{}: slide {} out of range",
                msg,
                openness
            );
        }
    }
}

/// Extract the state-change callbacks, in order.
pub fn state_changes(events: &[RecordedEvent]) -> Vec<(DrawerState, bool)> {
    events
        .iter()
        .filter_map(|event| match event {
            RecordedEvent::StateChanged(state, will_show) => Some((*state, *will_show)),
            _ => None,
        })
        .collect()
}
