use super::config::{DrawerConfig, DrawerSide};
use super::geometry::DrawerGeometry;
use drawerkit_ui_graphics::{Color, Rect, Size};

/// Main-axis order of the panel and its edge strip inside the drawer container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FlexDirection {
    Row,
    RowReverse,
}

impl FlexDirection {
    /// Keeps the edge strip on the side of the panel away from the screen edge.
    pub fn for_side(side: DrawerSide) -> Self {
        match side {
            DrawerSide::Left => FlexDirection::Row,
            DrawerSide::Right => FlexDirection::RowReverse,
        }
    }
}

/// Everything a host needs to draw one frame of the drawer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawerRenderState {
    pub openness: f32,
    pub shown: bool,
    pub translate_x: f32,
    pub overlay_opacity: f32,
    /// Overlay color with `overlay_opacity` applied.
    pub overlay_color: Color,
    /// The overlay is drawn, and intercepts pointers, only while any part of
    /// the panel is visible.
    pub overlay_visible: bool,
    pub flex_direction: FlexDirection,
    pub panel: Rect,
    pub edge_strip: Rect,
    pub background_color: Color,
    pub status_bar_background: Option<Color>,
    pub native_layer: bool,
}

impl DrawerRenderState {
    /// Pure mapping from openness and configuration to visual properties.
    pub fn compute<L>(
        openness: f32,
        shown: bool,
        geometry: &DrawerGeometry,
        config: &DrawerConfig<L>,
        container: Size,
    ) -> Self {
        let openness = openness.clamp(0.0, 1.0);
        let translate_x = geometry.translate_x(openness);
        let overlay_opacity = geometry.overlay_opacity(openness);
        let (panel, edge_strip) = layout_rects(
            geometry,
            translate_x,
            edge_strip_width(shown, geometry.width(), config.edge_width),
            container,
        );

        Self {
            openness,
            shown,
            translate_x,
            overlay_opacity,
            overlay_color: config.overlay_color.with_alpha(overlay_opacity),
            overlay_visible: openness > 0.0,
            flex_direction: FlexDirection::for_side(geometry.side()),
            panel,
            edge_strip,
            background_color: config.background_color,
            status_bar_background: config.status_bar_background,
            native_layer: config.use_native_animations,
        }
    }
}

/// The strip is a thin grab handle while closed and spans a full drawer
/// width past the panel while open, so taps on the overlay reach it.
pub fn edge_strip_width(shown: bool, width: f32, edge_width: f32) -> f32 {
    if shown {
        width
    } else {
        edge_width
    }
}

/// Panel and edge-strip rectangles in container coordinates.
pub fn layout_rects(
    geometry: &DrawerGeometry,
    translate_x: f32,
    strip_width: f32,
    container: Size,
) -> (Rect, Rect) {
    let width = geometry.width();
    let height = container.height;
    match geometry.side() {
        DrawerSide::Left => {
            let panel = Rect::new(translate_x, 0.0, width, height);
            let strip = Rect::new(panel.right(), 0.0, strip_width, height);
            (panel, strip)
        }
        DrawerSide::Right => {
            let panel = Rect::new(container.width - width + translate_x, 0.0, width, height);
            let strip = Rect::new(panel.x - strip_width, 0.0, strip_width, height);
            (panel, strip)
        }
    }
}

/// Host nodes produced for one composition of the drawer, bottom to top:
/// main content, dimming overlay (described by `render`), panel.
#[derive(Debug)]
pub struct DrawerTree<L> {
    pub content: L,
    pub panel: L,
    pub render: DrawerRenderState,
}
