pub mod drag;
pub mod tap;

pub use drag::{DragEvent, DragGesture, Orientation};
pub use tap::{TapEvent, TapGesture};
