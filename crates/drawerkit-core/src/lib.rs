//! Core runtime for drawerkit
//!
//! Provides the single-threaded frame-callback runtime that drives animations,
//! the [`FrameClock`] used to request frames, and the [`MutableState`] cells
//! widgets keep their animated values in.

mod frame_clock;
mod runtime;
mod state;

pub use frame_clock::{FrameCallbackRegistration, FrameClock};
pub use runtime::{FrameCallbackId, Runtime, RuntimeHandle};
pub use state::{MutableState, State};

pub mod prelude {
    pub use crate::frame_clock::{FrameCallbackRegistration, FrameClock};
    pub use crate::runtime::{Runtime, RuntimeHandle};
    pub use crate::state::{MutableState, State};
}

#[cfg(test)]
#[path = "tests/runtime_tests.rs"]
mod runtime_tests;
