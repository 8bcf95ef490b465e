use drawerkit_animation::{InterpolationError, SpringSpec};
use drawerkit_ui_graphics::Color;
use std::fmt;
use std::rc::Rc;

/// Width of the edge strip that stays on screen while the drawer is closed.
pub const EDGE_STRIP_WIDTH: f32 = 25.0;

/// Default panel width in logical pixels.
pub const DEFAULT_DRAWER_WIDTH: f32 = 300.0;

/// Overlay opacity when the drawer is fully open.
pub const MAX_OVERLAY_OPACITY: f32 = 0.7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DrawerSide {
    #[default]
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LockMode {
    #[default]
    Unlocked,
    /// Gestures cannot open the drawer. Programmatic calls still can.
    LockedClosed,
    /// Gestures and edge-strip taps cannot close the drawer. Programmatic calls still can.
    LockedOpen,
}

impl LockMode {
    pub fn allows_drag(self) -> bool {
        self == LockMode::Unlocked
    }

    pub fn allows_tap_to_close(self) -> bool {
        self != LockMode::LockedOpen
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum KeyboardDismissMode {
    #[default]
    None,
    /// Ask listeners to dismiss the keyboard when a drag activates.
    OnDrag,
}

/// Renders a piece of the drawer's content into the host's node type.
pub type ContentRenderer<L> = Rc<dyn Fn() -> L>;

#[derive(Debug, Clone, PartialEq)]
pub enum DrawerConfigError {
    MissingPanelRenderer,
    MissingContent,
    InvalidWidth(f32),
    InvalidEdgeWidth(f32),
    Interpolation(InterpolationError),
}

impl fmt::Display for DrawerConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DrawerConfigError::MissingPanelRenderer => {
                write!(f, "drawer needs a panel renderer")
            }
            DrawerConfigError::MissingContent => write!(f, "drawer needs children content"),
            DrawerConfigError::InvalidWidth(width) => {
                write!(f, "drawer width must be finite and non-negative, got {width}")
            }
            DrawerConfigError::InvalidEdgeWidth(width) => {
                write!(f, "edge strip width must be finite and non-negative, got {width}")
            }
            DrawerConfigError::Interpolation(err) => write!(f, "drawer geometry: {err}"),
        }
    }
}

impl std::error::Error for DrawerConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DrawerConfigError::Interpolation(err) => Some(err),
            _ => None,
        }
    }
}

impl From<InterpolationError> for DrawerConfigError {
    fn from(err: InterpolationError) -> Self {
        DrawerConfigError::Interpolation(err)
    }
}

/// Validated drawer configuration. Build one with [`DrawerConfig::builder`].
pub struct DrawerConfig<L> {
    pub side: DrawerSide,
    pub width: f32,
    pub edge_width: f32,
    pub lock_mode: LockMode,
    pub background_color: Color,
    pub overlay_color: Color,
    pub status_bar_background: Option<Color>,
    /// Hint that the host may run the panel's motion on its compositor layer.
    pub use_native_animations: bool,
    pub keyboard_dismiss_mode: KeyboardDismissMode,
    pub spring: SpringSpec,
    pub children: ContentRenderer<L>,
    pub render_panel: ContentRenderer<L>,
}

impl<L> Clone for DrawerConfig<L> {
    fn clone(&self) -> Self {
        Self {
            side: self.side,
            width: self.width,
            edge_width: self.edge_width,
            lock_mode: self.lock_mode,
            background_color: self.background_color,
            overlay_color: self.overlay_color,
            status_bar_background: self.status_bar_background,
            use_native_animations: self.use_native_animations,
            keyboard_dismiss_mode: self.keyboard_dismiss_mode,
            spring: self.spring,
            children: Rc::clone(&self.children),
            render_panel: Rc::clone(&self.render_panel),
        }
    }
}

impl<L> fmt::Debug for DrawerConfig<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DrawerConfig")
            .field("side", &self.side)
            .field("width", &self.width)
            .field("edge_width", &self.edge_width)
            .field("lock_mode", &self.lock_mode)
            .field("use_native_animations", &self.use_native_animations)
            .field("keyboard_dismiss_mode", &self.keyboard_dismiss_mode)
            .finish_non_exhaustive()
    }
}

impl<L> DrawerConfig<L> {
    pub fn builder() -> DrawerConfigBuilder<L> {
        DrawerConfigBuilder::new()
    }
}

pub struct DrawerConfigBuilder<L> {
    side: DrawerSide,
    width: f32,
    edge_width: f32,
    lock_mode: LockMode,
    background_color: Color,
    overlay_color: Color,
    status_bar_background: Option<Color>,
    use_native_animations: bool,
    keyboard_dismiss_mode: KeyboardDismissMode,
    spring: SpringSpec,
    children: Option<ContentRenderer<L>>,
    render_panel: Option<ContentRenderer<L>>,
}

impl<L> Default for DrawerConfigBuilder<L> {
    fn default() -> Self {
        Self::new()
    }
}

impl<L> DrawerConfigBuilder<L> {
    pub fn new() -> Self {
        Self {
            side: DrawerSide::Left,
            width: DEFAULT_DRAWER_WIDTH,
            edge_width: EDGE_STRIP_WIDTH,
            lock_mode: LockMode::Unlocked,
            background_color: Color::WHITE,
            overlay_color: Color::BLACK,
            status_bar_background: None,
            use_native_animations: true,
            keyboard_dismiss_mode: KeyboardDismissMode::None,
            spring: SpringSpec::medium_low().with_position_threshold(0.01),
            children: None,
            render_panel: None,
        }
    }

    pub fn side(mut self, side: DrawerSide) -> Self {
        self.side = side;
        self
    }

    pub fn width(mut self, width: f32) -> Self {
        self.width = width;
        self
    }

    pub fn edge_width(mut self, edge_width: f32) -> Self {
        self.edge_width = edge_width;
        self
    }

    pub fn lock_mode(mut self, lock_mode: LockMode) -> Self {
        self.lock_mode = lock_mode;
        self
    }

    pub fn background_color(mut self, color: Color) -> Self {
        self.background_color = color;
        self
    }

    pub fn overlay_color(mut self, color: Color) -> Self {
        self.overlay_color = color;
        self
    }

    pub fn status_bar_background(mut self, color: Color) -> Self {
        self.status_bar_background = Some(color);
        self
    }

    pub fn use_native_animations(mut self, enabled: bool) -> Self {
        self.use_native_animations = enabled;
        self
    }

    pub fn keyboard_dismiss_mode(mut self, mode: KeyboardDismissMode) -> Self {
        self.keyboard_dismiss_mode = mode;
        self
    }

    pub fn spring(mut self, spring: SpringSpec) -> Self {
        self.spring = spring;
        self
    }

    pub fn children(mut self, children: impl Fn() -> L + 'static) -> Self {
        self.children = Some(Rc::new(children));
        self
    }

    pub fn render_panel(mut self, render_panel: impl Fn() -> L + 'static) -> Self {
        self.render_panel = Some(Rc::new(render_panel));
        self
    }

    pub fn build(self) -> Result<DrawerConfig<L>, DrawerConfigError> {
        if !self.width.is_finite() || self.width < 0.0 {
            return Err(DrawerConfigError::InvalidWidth(self.width));
        }
        if !self.edge_width.is_finite() || self.edge_width < 0.0 {
            return Err(DrawerConfigError::InvalidEdgeWidth(self.edge_width));
        }
        let render_panel = self
            .render_panel
            .ok_or(DrawerConfigError::MissingPanelRenderer)?;
        let children = self.children.ok_or(DrawerConfigError::MissingContent)?;

        Ok(DrawerConfig {
            side: self.side,
            width: self.width,
            edge_width: self.edge_width,
            lock_mode: self.lock_mode,
            background_color: self.background_color,
            overlay_color: self.overlay_color,
            status_bar_background: self.status_bar_background,
            use_native_animations: self.use_native_animations,
            keyboard_dismiss_mode: self.keyboard_dismiss_mode,
            spring: self.spring,
            children,
            render_panel,
        })
    }
}
