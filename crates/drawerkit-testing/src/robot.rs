//! Robot testing harness for drawers
//!
//! [`DrawerRobot`] owns a runtime and a [`Drawer`], synthesizes pointer
//! sequences with a deterministic clock, and pumps frames until the settle
//! spring finishes.
//!
//! # Example
//!
//! ```
//! use drawerkit_testing::DrawerRobot;
//! use drawerkit_ui::DrawerConfig;
//!
//! let config = DrawerConfig::builder()
//!     .children(|| ())
//!     .render_panel(|| ())
//!     .build()
//!     .unwrap();
//! let mut robot = DrawerRobot::new(config, 400.0, 800.0).unwrap();
//!
//! robot.drag(10.0, 200.0);
//! robot.wait_for_idle();
//! assert!(robot.drawer().is_shown());
//! ```

use drawerkit_core::Runtime;
use drawerkit_foundation::{PointerEvent, PointerEventKind, PointerId};
use drawerkit_ui::{
    Drawer, DrawerConfig, DrawerConfigError, DrawerListener, DrawerRenderState, DrawerState,
};
use drawerkit_ui_graphics::{Point, Size};
use std::cell::RefCell;
use std::rc::Rc;

/// Nanoseconds per frame at 60 Hz.
pub const FRAME_NANOS: u64 = 16_666_667;

/// Upper bound on frames pumped by [`DrawerRobot::wait_for_idle`].
pub const MAX_IDLE_FRAMES: usize = 1_000;

/// Pause before a release that makes the tracked velocity read zero.
const HOLD_MS: i64 = 100;

/// A listener callback as seen by a test.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RecordedEvent {
    Slide(f32),
    Opened,
    Closed,
    StateChanged(DrawerState, bool),
    KeyboardDismissRequested,
}

/// Listener that appends every callback to a shared log.
#[derive(Debug, Default)]
pub struct EventLog {
    events: RefCell<Vec<RecordedEvent>>,
}

impl EventLog {
    pub fn events(&self) -> Vec<RecordedEvent> {
        self.events.borrow().clone()
    }

    /// Drain the log.
    pub fn take(&self) -> Vec<RecordedEvent> {
        std::mem::take(&mut *self.events.borrow_mut())
    }

    /// Drain the log, dropping slide events.
    pub fn take_transitions(&self) -> Vec<RecordedEvent> {
        self.take()
            .into_iter()
            .filter(|event| !matches!(event, RecordedEvent::Slide(_)))
            .collect()
    }

    pub fn slides(&self) -> Vec<f32> {
        self.events
            .borrow()
            .iter()
            .filter_map(|event| match event {
                RecordedEvent::Slide(openness) => Some(*openness),
                _ => None,
            })
            .collect()
    }

    fn push(&self, event: RecordedEvent) {
        self.events.borrow_mut().push(event);
    }
}

impl DrawerListener for EventLog {
    fn on_drawer_slide(&self, openness: f32) {
        self.push(RecordedEvent::Slide(openness));
    }

    fn on_drawer_open(&self) {
        self.push(RecordedEvent::Opened);
    }

    fn on_drawer_close(&self) {
        self.push(RecordedEvent::Closed);
    }

    fn on_drawer_state_changed(&self, state: DrawerState, will_show: bool) {
        self.push(RecordedEvent::StateChanged(state, will_show));
    }

    fn on_keyboard_dismiss_requested(&self) {
        self.push(RecordedEvent::KeyboardDismissRequested);
    }
}

/// Programmatic control over a single drawer.
///
/// The robot keeps its own pointer clock so velocities are reproducible:
/// every synthesized move advances it by `step_ms`.
pub struct DrawerRobot<L: 'static> {
    runtime: Runtime,
    drawer: Drawer<L>,
    log: Rc<EventLog>,
    frame_nanos: u64,
    uptime_ms: i64,
    step_ms: i64,
    drag_steps: usize,
    pointer: PointerId,
    cursor: Point,
    pressed: bool,
}

impl<L: 'static> DrawerRobot<L> {
    /// Create a drawer laid out in a `width` by `height` container.
    pub fn new(config: DrawerConfig<L>, width: f32, height: f32) -> Result<Self, DrawerConfigError> {
        let runtime = Runtime::new();
        let drawer = Drawer::new(config, runtime.handle())?;
        drawer.set_container_size(Size::new(width, height));
        let log = Rc::new(EventLog::default());
        drawer.add_listener(log.clone());

        Ok(Self {
            runtime,
            drawer,
            log,
            frame_nanos: 0,
            uptime_ms: 0,
            step_ms: 16,
            drag_steps: 10,
            pointer: 0,
            cursor: Point::ZERO,
            pressed: false,
        })
    }

    /// Milliseconds between synthesized moves.
    pub fn with_step_ms(mut self, step_ms: i64) -> Self {
        self.step_ms = step_ms.max(1);
        self
    }

    /// Number of moves in [`DrawerRobot::drag`] and friends.
    pub fn with_drag_steps(mut self, steps: usize) -> Self {
        self.drag_steps = steps.max(1);
        self
    }

    pub fn drawer(&self) -> &Drawer<L> {
        &self.drawer
    }

    pub fn runtime(&self) -> &Runtime {
        &self.runtime
    }

    pub fn log(&self) -> &EventLog {
        &self.log
    }

    pub fn openness(&self) -> f32 {
        self.drawer.openness()
    }

    pub fn render_state(&self) -> DrawerRenderState {
        self.drawer.render_state()
    }

    /// Resize the container (simulates a window resize).
    pub fn set_container_size(&mut self, width: f32, height: f32) {
        self.drawer.set_container_size(Size::new(width, height));
    }

    fn dispatch(&mut self, kind: PointerEventKind, x: f32) -> bool {
        self.cursor = Point::new(x, self.cursor.y);
        let event = PointerEvent::new(kind, self.cursor)
            .with_id(self.pointer)
            .with_uptime_ms(self.uptime_ms);
        self.drawer.on_pointer_event(&event)
    }

    /// Press at (x, y). Returns whether the drawer consumed the press.
    pub fn press(&mut self, x: f32, y: f32) -> bool {
        if self.pressed {
            log::warn!("robot press while already pressed; releasing first");
            self.release();
        }
        self.pointer += 1;
        self.pressed = true;
        self.cursor = Point::new(x, y);
        self.dispatch(PointerEventKind::Down, x)
    }

    /// Move the pressed pointer horizontally to `x`, advancing the clock one step.
    pub fn move_to(&mut self, x: f32) -> bool {
        self.uptime_ms += self.step_ms;
        self.dispatch(PointerEventKind::Move, x)
    }

    /// Move to `x` in `steps` even moves.
    pub fn move_by_steps(&mut self, x: f32, steps: usize) {
        let from = self.cursor.x;
        let steps = steps.max(1);
        for step in 1..=steps {
            let t = step as f32 / steps as f32;
            self.move_to(from + (x - from) * t);
        }
    }

    /// Release one step after the last move, keeping the pointer's momentum.
    pub fn release(&mut self) -> bool {
        self.uptime_ms += self.step_ms;
        self.pressed = false;
        self.dispatch(PointerEventKind::Up, self.cursor.x)
    }

    /// Hold the pointer still, then release with zero velocity.
    pub fn release_after_hold(&mut self) -> bool {
        self.uptime_ms += HOLD_MS;
        self.pressed = false;
        self.dispatch(PointerEventKind::Up, self.cursor.x)
    }

    pub fn cancel(&mut self) -> bool {
        self.uptime_ms += self.step_ms;
        self.pressed = false;
        self.dispatch(PointerEventKind::Cancel, self.cursor.x)
    }

    /// Press, move and release with the momentum of the moves.
    pub fn drag(&mut self, from_x: f32, to_x: f32) {
        self.press(from_x, self.cursor.y);
        self.move_by_steps(to_x, self.drag_steps);
        self.release();
    }

    /// Press, move, hold and release, so only the travel decides the outcome.
    pub fn drag_and_hold(&mut self, from_x: f32, to_x: f32) {
        self.press(from_x, self.cursor.y);
        self.move_by_steps(to_x, self.drag_steps);
        self.release_after_hold();
    }

    /// Press and release in place. Returns whether the release was consumed.
    pub fn tap(&mut self, x: f32, y: f32) -> bool {
        self.press(x, y);
        self.uptime_ms += self.step_ms;
        self.pressed = false;
        self.dispatch(PointerEventKind::Up, x)
    }

    /// Advance frame time by one frame and run the frame callbacks.
    pub fn advance_frame(&mut self) {
        self.frame_nanos += FRAME_NANOS;
        self.runtime.handle().drain_frame_callbacks(self.frame_nanos);
    }

    pub fn advance_frames(&mut self, frames: usize) {
        for _ in 0..frames {
            self.advance_frame();
        }
    }

    /// Pump frames until no callbacks are pending. Returns the frames used.
    pub fn wait_for_idle(&mut self) -> usize {
        let handle = self.runtime.handle();
        let mut frames = 0;
        while handle.has_frame_callbacks() && frames < MAX_IDLE_FRAMES {
            self.advance_frame();
            frames += 1;
        }
        if handle.has_frame_callbacks() {
            log::warn!("drawer still animating after {} frames", frames);
        }
        frames
    }

    /// Whether the drawer is at rest with no spring running.
    pub fn is_idle(&self) -> bool {
        self.drawer.state() == DrawerState::Idle && !self.drawer.is_settling()
    }
}
