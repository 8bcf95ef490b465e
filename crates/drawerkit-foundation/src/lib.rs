//! Input foundation for drawerkit: pointer events, velocity tracking and the
//! pan/tap recognizers widgets build their gestures from.

pub mod gesture_constants;
pub mod input;
pub mod velocity_tracker;

pub use gesture_constants::*;
pub use input::gestures::{DragEvent, DragGesture, Orientation, TapEvent, TapGesture};
pub use input::{PointerEvent, PointerEventKind, PointerId, PointerPhase};
pub use velocity_tracker::VelocityTracker1D;

pub mod prelude {
    pub use crate::gesture_constants::*;
    pub use crate::input::gestures::{DragEvent, DragGesture, Orientation, TapEvent, TapGesture};
    pub use crate::input::prelude::*;
    pub use crate::velocity_tracker::VelocityTracker1D;
}
