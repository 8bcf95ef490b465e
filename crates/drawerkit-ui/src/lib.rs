//! Widgets for drawerkit
//!
//! The main export is [`Drawer`], a panel that slides in from a screen edge.
//! It consumes pointer events and runtime frames and exposes a pure
//! [`DrawerRenderState`] for the host to draw.

pub mod widgets;

pub use widgets::*;

pub mod prelude {
    pub use crate::widgets::drawer::{
        Drawer, DrawerAnimationOptions, DrawerCallbacks, DrawerConfig, DrawerConfigBuilder,
        DrawerConfigError, DrawerListener, DrawerRenderState, DrawerSide, DrawerState,
        DrawerTree, FlexDirection, KeyboardDismissMode, LockMode,
    };
}

#[cfg(test)]
#[path = "tests/drawer_tests.rs"]
mod drawer_tests;
