//! UI widget components

pub mod drawer;

pub use drawer::*;
