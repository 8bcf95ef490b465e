mod config;
mod geometry;
mod listener;
mod release;
mod render;
mod widget;

pub use config::*;
pub use geometry::DrawerGeometry;
pub use listener::*;
pub use release::*;
pub use render::*;
pub use widget::*;
