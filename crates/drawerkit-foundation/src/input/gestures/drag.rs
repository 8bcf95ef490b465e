//! Single-axis pan recognizer.
//!
//! The recognizer tracks one pointer from `Down`, activates once it has
//! travelled `min_distance` along its axis, and reports translation relative
//! to the press position. `Down` is never consumed so nested recognizers
//! (taps) can track the same press; moves are consumed once the pan is active.

use crate::gesture_constants::{MAX_FLING_VELOCITY, PAN_MIN_DISTANCE};
use crate::input::types::{PointerEvent, PointerEventKind, PointerId};
use crate::velocity_tracker::VelocityTracker1D;
use drawerkit_ui_graphics::Point;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    fn axis(self, point: Point) -> f32 {
        match self {
            Orientation::Horizontal => point.x,
            Orientation::Vertical => point.y,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragEvent {
    /// The pointer passed the activation distance.
    Started { start: Point },
    /// Translation along the axis since the press, emitted on every active move.
    Moved { translation: f32 },
    Ended {
        translation: f32,
        /// Release velocity along the axis in px/s.
        velocity: f32,
    },
    Cancelled { translation: f32 },
}

#[derive(Debug, Clone, Copy)]
struct Tracking {
    pointer: PointerId,
    start: Point,
    active: bool,
}

#[derive(Debug, Clone)]
pub struct DragGesture {
    orientation: Orientation,
    min_distance: f32,
    max_velocity: f32,
    enabled: bool,
    tracking: Option<Tracking>,
    translation: f32,
    velocity_tracker: VelocityTracker1D,
}

impl DragGesture {
    pub fn new(orientation: Orientation) -> Self {
        Self {
            orientation,
            min_distance: PAN_MIN_DISTANCE,
            max_velocity: MAX_FLING_VELOCITY,
            enabled: true,
            tracking: None,
            translation: 0.0,
            velocity_tracker: VelocityTracker1D::new(),
        }
    }

    pub fn with_min_distance(mut self, min_distance: f32) -> Self {
        self.min_distance = min_distance.max(0.0);
        self
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Disabling drops any gesture in progress without reporting it.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
        if !enabled {
            self.reset();
        }
    }

    pub fn is_tracking(&self) -> bool {
        self.tracking.is_some()
    }

    pub fn is_active(&self) -> bool {
        self.tracking.is_some_and(|tracking| tracking.active)
    }

    pub fn translation(&self) -> f32 {
        self.translation
    }

    pub fn reset(&mut self) {
        self.tracking = None;
        self.translation = 0.0;
        self.velocity_tracker.reset();
    }

    /// Feed one pointer event; returns the recognizer's transition, if any.
    pub fn on_pointer_event(&mut self, event: &PointerEvent) -> Option<DragEvent> {
        if !self.enabled {
            return None;
        }

        match event.kind {
            PointerEventKind::Down => {
                if event.is_consumed() || self.tracking.is_some() {
                    return None;
                }
                self.translation = 0.0;
                self.velocity_tracker.reset();
                self.velocity_tracker
                    .add_data_point(event.uptime_ms, self.orientation.axis(event.position));
                self.tracking = Some(Tracking {
                    pointer: event.id,
                    start: event.position,
                    active: false,
                });
                None
            }
            PointerEventKind::Move => {
                let mut tracking = self.tracking.filter(|t| t.pointer == event.id)?;
                if event.is_consumed() && !tracking.active {
                    return None;
                }

                let axis_position = self.orientation.axis(event.position);
                self.velocity_tracker
                    .add_data_point(event.uptime_ms, axis_position);
                self.translation = axis_position - self.orientation.axis(tracking.start);

                if tracking.active {
                    event.consume();
                    return Some(DragEvent::Moved {
                        translation: self.translation,
                    });
                }

                if self.translation.abs() >= self.min_distance && self.translation != 0.0 {
                    tracking.active = true;
                    self.tracking = Some(tracking);
                    event.consume();
                    log::trace!(
                        "pan activated after {:.1}px at {:?}",
                        self.translation,
                        event.position
                    );
                    return Some(DragEvent::Started {
                        start: tracking.start,
                    });
                }
                None
            }
            PointerEventKind::Up => {
                let tracking = self.tracking.filter(|t| t.pointer == event.id)?;
                let axis_position = self.orientation.axis(event.position);
                self.velocity_tracker
                    .add_data_point(event.uptime_ms, axis_position);
                let translation = axis_position - self.orientation.axis(tracking.start);
                let velocity = self
                    .velocity_tracker
                    .calculate_velocity_with_max(self.max_velocity);
                self.reset();

                if tracking.active {
                    event.consume();
                    Some(DragEvent::Ended {
                        translation,
                        velocity,
                    })
                } else {
                    None
                }
            }
            PointerEventKind::Cancel => {
                let tracking = self.tracking.filter(|t| t.pointer == event.id)?;
                let translation = self.translation;
                self.reset();
                tracking
                    .active
                    .then_some(DragEvent::Cancelled { translation })
            }
        }
    }
}
