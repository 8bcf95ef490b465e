use drawerkit_ui_graphics::Point;
use std::cell::Cell;
use std::rc::Rc;
use std::sync::OnceLock;
use web_time::Instant;

pub type PointerId = u64;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerPhase {
    Start,
    Move,
    End,
    Cancel,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerEventKind {
    Down,
    Move,
    Up,
    Cancel,
}

impl PointerEventKind {
    pub fn phase(self) -> PointerPhase {
        match self {
            PointerEventKind::Down => PointerPhase::Start,
            PointerEventKind::Move => PointerPhase::Move,
            PointerEventKind::Up => PointerPhase::End,
            PointerEventKind::Cancel => PointerPhase::Cancel,
        }
    }
}

fn process_uptime_ms() -> i64 {
    static EPOCH: OnceLock<Instant> = OnceLock::new();
    EPOCH.get_or_init(Instant::now).elapsed().as_millis() as i64
}

/// Pointer event with consumption tracking for gesture disambiguation.
///
/// Consumption is shared across clones, so a recognizer that claims an event
/// is visible to every other recognizer handed the same event.
#[derive(Clone, Debug)]
pub struct PointerEvent {
    pub id: PointerId,
    pub kind: PointerEventKind,
    /// Position in the receiving widget's coordinate space.
    pub position: Point,
    /// Milliseconds on a monotonic clock; only differences are meaningful.
    pub uptime_ms: i64,
    consumed: Rc<Cell<bool>>,
}

impl PointerEvent {
    /// Create an event stamped with the current monotonic time.
    pub fn new(kind: PointerEventKind, position: Point) -> Self {
        Self {
            id: 0,
            kind,
            position,
            uptime_ms: process_uptime_ms(),
            consumed: Rc::new(Cell::new(false)),
        }
    }

    pub fn with_id(mut self, id: PointerId) -> Self {
        self.id = id;
        self
    }

    pub fn with_uptime_ms(mut self, uptime_ms: i64) -> Self {
        self.uptime_ms = uptime_ms;
        self
    }

    pub fn phase(&self) -> PointerPhase {
        self.kind.phase()
    }

    pub fn consume(&self) {
        self.consumed.set(true);
    }

    pub fn is_consumed(&self) -> bool {
        self.consumed.get()
    }

    /// Copy with a new local position, sharing the consumption state.
    pub fn copy_with_local_position(&self, position: Point) -> Self {
        Self {
            id: self.id,
            kind: self.kind,
            position,
            uptime_ms: self.uptime_ms,
            consumed: self.consumed.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn consumption_is_shared_between_copies() {
        let event = PointerEvent::new(PointerEventKind::Move, Point::new(1.0, 2.0));
        let local = event.copy_with_local_position(Point::new(-9.0, 2.0));
        local.consume();
        assert!(event.is_consumed());
        assert_eq!(local.phase(), PointerPhase::Move);
    }

    #[test]
    fn uptime_is_monotonic() {
        let first = PointerEvent::new(PointerEventKind::Down, Point::ZERO);
        let second = PointerEvent::new(PointerEventKind::Up, Point::ZERO);
        assert!(second.uptime_ms >= first.uptime_ms);
        assert_eq!(second.with_uptime_ms(42).uptime_ms, 42);
    }
}
