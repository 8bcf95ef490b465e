//! Discrete tap recognizer.
//!
//! A tap is a press and release of the same pointer that neither travels past
//! the touch slop nor outlasts [`MAX_TAP_DURATION_MS`]. Any recognizer that
//! consumes a move or the release of the press cancels the tap.

use crate::gesture_constants::{DRAG_THRESHOLD, MAX_TAP_DURATION_MS};
use crate::input::types::{PointerEvent, PointerEventKind, PointerId};
use drawerkit_ui_graphics::Point;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TapEvent {
    Tapped { position: Point },
    /// A press that began tracking will not produce a tap.
    Cancelled,
}

#[derive(Debug, Clone, Copy)]
struct Press {
    pointer: PointerId,
    position: Point,
    uptime_ms: i64,
}

#[derive(Debug, Clone)]
pub struct TapGesture {
    slop: f32,
    max_duration_ms: i64,
    press: Option<Press>,
}

impl Default for TapGesture {
    fn default() -> Self {
        Self::new()
    }
}

impl TapGesture {
    pub fn new() -> Self {
        Self {
            slop: DRAG_THRESHOLD,
            max_duration_ms: MAX_TAP_DURATION_MS,
            press: None,
        }
    }

    pub fn is_pressed(&self) -> bool {
        self.press.is_some()
    }

    pub fn reset(&mut self) {
        self.press = None;
    }

    /// Feed one pointer event. `in_bounds` says whether a `Down` landed on the
    /// recognizer's hit region; later events of the same press are tracked
    /// wherever they land.
    pub fn on_pointer_event(&mut self, event: &PointerEvent, in_bounds: bool) -> Option<TapEvent> {
        match event.kind {
            PointerEventKind::Down => {
                if in_bounds && !event.is_consumed() && self.press.is_none() {
                    self.press = Some(Press {
                        pointer: event.id,
                        position: event.position,
                        uptime_ms: event.uptime_ms,
                    });
                }
                None
            }
            PointerEventKind::Move => {
                let press = self.press.filter(|press| press.pointer == event.id)?;
                let dx = event.position.x - press.position.x;
                let dy = event.position.y - press.position.y;
                if event.is_consumed() || (dx * dx + dy * dy).sqrt() > self.slop {
                    self.press = None;
                    return Some(TapEvent::Cancelled);
                }
                None
            }
            PointerEventKind::Up => {
                let press = self.press.filter(|press| press.pointer == event.id)?;
                self.press = None;
                let held_ms = event.uptime_ms - press.uptime_ms;
                if event.is_consumed() || held_ms > self.max_duration_ms {
                    return Some(TapEvent::Cancelled);
                }
                event.consume();
                Some(TapEvent::Tapped {
                    position: event.position,
                })
            }
            PointerEventKind::Cancel => {
                self.press.filter(|press| press.pointer == event.id)?;
                self.press = None;
                Some(TapEvent::Cancelled)
            }
        }
    }
}
