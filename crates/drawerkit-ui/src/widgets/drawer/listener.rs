use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DrawerState {
    Idle,
    Dragging,
    Settling,
}

impl fmt::Display for DrawerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DrawerState::Idle => "Idle",
            DrawerState::Dragging => "Dragging",
            DrawerState::Settling => "Settling",
        };
        f.write_str(name)
    }
}

/// Observer for drawer transitions.
///
/// Callbacks run synchronously on the UI thread. State changes, opens and
/// closes are reported when a transition starts, not when the panel stops
/// moving; `Idle` is the only notification tied to the settle finishing.
/// Listeners may call back into the drawer.
pub trait DrawerListener {
    /// Openness changed, during drags and settle frames alike.
    fn on_drawer_slide(&self, _openness: f32) {}

    fn on_drawer_open(&self) {}

    fn on_drawer_close(&self) {}

    fn on_drawer_state_changed(&self, _state: DrawerState, _will_show: bool) {}

    fn on_keyboard_dismiss_requested(&self) {}
}

type SlideCallback = Box<dyn Fn(f32)>;
type EventCallback = Box<dyn Fn()>;
type StateCallback = Box<dyn Fn(DrawerState, bool)>;

/// Closure-backed [`DrawerListener`] with every callback optional.
#[derive(Default)]
pub struct DrawerCallbacks {
    on_slide: Option<SlideCallback>,
    on_open: Option<EventCallback>,
    on_close: Option<EventCallback>,
    on_state_changed: Option<StateCallback>,
    on_dismiss_keyboard: Option<EventCallback>,
}

impl DrawerCallbacks {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_slide(mut self, callback: impl Fn(f32) + 'static) -> Self {
        self.on_slide = Some(Box::new(callback));
        self
    }

    pub fn on_open(mut self, callback: impl Fn() + 'static) -> Self {
        self.on_open = Some(Box::new(callback));
        self
    }

    pub fn on_close(mut self, callback: impl Fn() + 'static) -> Self {
        self.on_close = Some(Box::new(callback));
        self
    }

    pub fn on_state_changed(mut self, callback: impl Fn(DrawerState, bool) + 'static) -> Self {
        self.on_state_changed = Some(Box::new(callback));
        self
    }

    pub fn on_dismiss_keyboard(mut self, callback: impl Fn() + 'static) -> Self {
        self.on_dismiss_keyboard = Some(Box::new(callback));
        self
    }
}

impl DrawerListener for DrawerCallbacks {
    fn on_drawer_slide(&self, openness: f32) {
        if let Some(callback) = &self.on_slide {
            callback(openness);
        }
    }

    fn on_drawer_open(&self) {
        if let Some(callback) = &self.on_open {
            callback();
        }
    }

    fn on_drawer_close(&self) {
        if let Some(callback) = &self.on_close {
            callback();
        }
    }

    fn on_drawer_state_changed(&self, state: DrawerState, will_show: bool) {
        if let Some(callback) = &self.on_state_changed {
            callback(state, will_show);
        }
    }

    fn on_keyboard_dismiss_requested(&self) {
        if let Some(callback) = &self.on_dismiss_keyboard {
            callback();
        }
    }
}

/// One notification queued while the drawer's state is borrowed and
/// delivered once the borrow is released.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum DrawerNotification {
    Slide(f32),
    Opened,
    Closed,
    StateChanged(DrawerState, bool),
    DismissKeyboard,
}

impl DrawerNotification {
    pub(crate) fn deliver(self, listener: &dyn DrawerListener) {
        match self {
            DrawerNotification::Slide(openness) => listener.on_drawer_slide(openness),
            DrawerNotification::Opened => listener.on_drawer_open(),
            DrawerNotification::Closed => listener.on_drawer_close(),
            DrawerNotification::StateChanged(state, will_show) => {
                listener.on_drawer_state_changed(state, will_show)
            }
            DrawerNotification::DismissKeyboard => listener.on_keyboard_dismiss_requested(),
        }
    }
}
