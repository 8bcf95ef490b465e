//! Animation primitives for drawerkit
//!
//! [`Animatable`] springs a value toward a target on the runtime's frame
//! clock, optionally seeded with an initial velocity.
//! [`Interpolation`] maps an animated input onto an output range, the way the
//! drawer turns its offset into openness, translation and overlay opacity.

#![allow(non_snake_case)]

mod animation;
mod interpolation;

pub use animation::*;
pub use interpolation::*;

pub mod prelude {
    pub use crate::animation::{Animatable, AnimationEndReason, Lerp, SpringScalar, SpringSpec};
    pub use crate::interpolation::{Extrapolate, Interpolation, InterpolationError};
}
