use super::config::{DrawerConfig, DrawerConfigError, DrawerSide, KeyboardDismissMode, LockMode};
use super::geometry::DrawerGeometry;
use super::listener::{DrawerListener, DrawerNotification, DrawerState};
use super::release::decide_release;
use super::render::{edge_strip_width, layout_rects, DrawerRenderState, DrawerTree};
use drawerkit_animation::{Animatable, AnimationEndReason};
use drawerkit_core::{MutableState, RuntimeHandle, State};
use drawerkit_foundation::{
    DragEvent, DragGesture, Orientation, PointerEvent, PointerEventKind, TapEvent, TapGesture,
};
use drawerkit_ui_graphics::{Rect, Size};
use smallvec::SmallVec;
use std::cell::RefCell;
use std::rc::Rc;

/// Options for [`Drawer::open_drawer`] and [`Drawer::close_drawer`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DrawerAnimationOptions {
    /// Initial spring velocity in px/s along the x axis.
    pub velocity: Option<f32>,
}

impl DrawerAnimationOptions {
    pub fn with_velocity(velocity: f32) -> Self {
        Self {
            velocity: Some(velocity),
        }
    }
}

type Notifications = SmallVec<[DrawerNotification; 4]>;
type Listeners = SmallVec<[Rc<dyn DrawerListener>; 2]>;

struct DrawerInner<L> {
    config: DrawerConfig<L>,
    geometry: DrawerGeometry,
    container: Size,
    gesture_offset: MutableState<f32>,
    resting: Animatable<f32>,
    shown: bool,
    state: DrawerState,
    pan: DragGesture,
    tap: TapGesture,
    listeners: Listeners,
    last_openness: f32,
}

impl<L> DrawerInner<L> {
    fn position(&self) -> f32 {
        self.gesture_offset.get() + self.resting.value()
    }

    fn openness(&self) -> f32 {
        self.geometry.openness(self.position())
    }

    /// Slide notification if openness moved since the last one reported.
    fn slide_notification(&mut self) -> Option<DrawerNotification> {
        let openness = self.openness();
        if openness == self.last_openness {
            return None;
        }
        self.last_openness = openness;
        Some(DrawerNotification::Slide(openness))
    }

    fn layout(&self) -> (Rect, Rect) {
        let openness = self.openness();
        layout_rects(
            &self.geometry,
            self.geometry.translate_x(openness),
            edge_strip_width(self.shown, self.geometry.width(), self.config.edge_width),
            self.container,
        )
    }
}

fn deliver(listeners: &Listeners, notifications: &[DrawerNotification]) {
    for notification in notifications {
        for listener in listeners {
            notification.deliver(listener.as_ref());
        }
    }
}

/// A panel that slides in from a screen edge.
///
/// The drawer is a cheap-to-clone handle. Hosts feed it pointer events with
/// [`Drawer::on_pointer_event`], drain the runtime's frame callbacks to run the
/// settle spring, and draw from [`Drawer::render_state`] or
/// [`Drawer::compose`].
pub struct Drawer<L: 'static> {
    inner: Rc<RefCell<DrawerInner<L>>>,
}

impl<L: 'static> Clone for Drawer<L> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<L: 'static> Drawer<L> {
    /// `LockedOpen` drawers start open; every other lock mode starts closed.
    pub fn new(config: DrawerConfig<L>, runtime: RuntimeHandle) -> Result<Self, DrawerConfigError> {
        let geometry = DrawerGeometry::for_config(&config)?;
        let starts_open = config.lock_mode == LockMode::LockedOpen;
        let initial_position = geometry.target_position(starts_open);

        let resting = Animatable::new(initial_position, runtime.clone());
        let mut pan = DragGesture::new(Orientation::Horizontal);
        pan.set_enabled(config.lock_mode.allows_drag());

        log::debug!(
            "drawer created: side={:?} width={} lock={:?}",
            config.side,
            config.width,
            config.lock_mode
        );

        let inner = Rc::new(RefCell::new(DrawerInner {
            last_openness: geometry.openness(initial_position),
            config,
            geometry,
            container: Size::ZERO,
            gesture_offset: MutableState::with_runtime(0.0, runtime),
            resting: resting.clone(),
            shown: starts_open,
            state: DrawerState::Idle,
            pan,
            tap: TapGesture::new(),
            listeners: Listeners::new(),
        }));

        let weak = Rc::downgrade(&inner);
        resting.add_listener(move |_| {
            if let Some(inner) = weak.upgrade() {
                Self::publish_slide(&inner);
            }
        });

        Ok(Self { inner })
    }

    pub fn add_listener(&self, listener: Rc<dyn DrawerListener>) {
        self.inner.borrow_mut().listeners.push(listener);
    }

    pub fn open_drawer(&self, options: DrawerAnimationOptions) {
        Self::animate(&self.inner, None, true, options.velocity.unwrap_or(0.0));
    }

    pub fn close_drawer(&self, options: DrawerAnimationOptions) {
        Self::animate(&self.inner, None, false, options.velocity.unwrap_or(0.0));
    }

    /// Route one pointer event through the pan and edge-strip recognizers.
    ///
    /// Returns whether the drawer consumed the event.
    pub fn on_pointer_event(&self, event: &PointerEvent) -> bool {
        let (drag, tap) = {
            let mut inner = self.inner.borrow_mut();
            let (panel, strip) = inner.layout();
            let is_down = event.kind == PointerEventKind::Down;
            let (x, y) = (event.position.x, event.position.y);
            // No hit regions until the host has laid the drawer out.
            let laid_out = inner.container.width > 0.0 && inner.container.height > 0.0;
            if is_down && !laid_out {
                log::trace!("press at {:?} ignored before layout", event.position);
            }

            let in_regions = laid_out && (panel.contains(x, y) || strip.contains(x, y));
            let drag = if !is_down || in_regions {
                inner.pan.on_pointer_event(event)
            } else {
                None
            };

            let strip_armed = inner.shown && inner.config.lock_mode.allows_tap_to_close();
            let tap = inner
                .tap
                .on_pointer_event(event, laid_out && strip_armed && strip.contains(x, y));
            (drag, tap)
        };

        if let Some(drag) = drag {
            self.handle_drag(drag);
        }
        if let Some(TapEvent::Tapped { position }) = tap {
            let should_close = {
                let inner = self.inner.borrow();
                inner.shown && inner.config.lock_mode.allows_tap_to_close()
            };
            if should_close {
                log::debug!("edge strip tapped at {:?}, closing drawer", position);
                self.close_drawer(DrawerAnimationOptions::default());
            }
        }
        event.is_consumed()
    }

    fn handle_drag(&self, event: DragEvent) {
        match event {
            DragEvent::Started { start } => {
                let (resting, notifications, listeners) = {
                    let mut inner = self.inner.borrow_mut();
                    inner.state = DrawerState::Dragging;
                    let translation = inner.pan.translation();
                    inner.gesture_offset.set_value(translation);

                    let mut notifications = Notifications::new();
                    notifications.push(DrawerNotification::StateChanged(
                        DrawerState::Dragging,
                        inner.shown,
                    ));
                    if inner.config.keyboard_dismiss_mode == KeyboardDismissMode::OnDrag {
                        notifications.push(DrawerNotification::DismissKeyboard);
                    }
                    (inner.resting.clone(), notifications, inner.listeners.clone())
                };
                log::debug!("drawer drag started at {:?}", start);

                // The finger takes over from an in-flight settle where it is.
                if resting.is_running() {
                    resting.snapTo(resting.value());
                }
                deliver(&listeners, &notifications);
                Self::publish_slide(&self.inner);
            }
            DragEvent::Moved { translation } => {
                self.inner.borrow().gesture_offset.set_value(translation);
                Self::publish_slide(&self.inner);
            }
            DragEvent::Ended {
                translation,
                velocity,
            } => {
                let (from, should_open) = {
                    let inner = self.inner.borrow();
                    let decision =
                        decide_release(translation, velocity, inner.geometry.width(), inner.shown);
                    log::debug!(
                        "drawer released: translation={:.1} velocity={:.1} toss={:.1} flip={} open={}",
                        translation,
                        velocity,
                        decision.toss,
                        decision.should_flip,
                        decision.should_open
                    );
                    let from = inner
                        .geometry
                        .clamp_position(translation + inner.resting.value());
                    inner.gesture_offset.set_value(0.0);
                    (from, decision.should_open)
                };
                Self::animate(&self.inner, Some(from), should_open, velocity);
            }
            DragEvent::Cancelled { translation } => {
                let (from, shown) = {
                    let inner = self.inner.borrow();
                    let from = inner
                        .geometry
                        .clamp_position(translation + inner.resting.value());
                    inner.gesture_offset.set_value(0.0);
                    (from, inner.shown)
                };
                log::debug!("drawer drag cancelled, settling back to shown={}", shown);
                Self::animate(&self.inner, Some(from), shown, 0.0);
            }
        }
    }

    /// Start settling toward open or closed.
    ///
    /// The shown flag and the state/open/close notifications change here,
    /// before the spring has produced a single frame. Open and close are only
    /// reported when the shown flag actually flips.
    fn animate(
        inner: &Rc<RefCell<DrawerInner<L>>>,
        from: Option<f32>,
        will_show: bool,
        velocity: f32,
    ) {
        let (resting, spring, target, notifications, listeners) = {
            let mut state = inner.borrow_mut();
            let was_shown = state.shown;
            state.shown = will_show;
            state.state = DrawerState::Settling;
            let target = state.geometry.target_position(will_show);

            let mut notifications = Notifications::new();
            notifications.push(DrawerNotification::StateChanged(
                DrawerState::Settling,
                will_show,
            ));
            if was_shown != will_show {
                notifications.push(if will_show {
                    DrawerNotification::Opened
                } else {
                    DrawerNotification::Closed
                });
            }
            (
                state.resting.clone(),
                state.config.spring,
                target,
                notifications,
                state.listeners.clone(),
            )
        };

        log::debug!(
            "drawer {} toward {} from {:?} with velocity {:.1}",
            if will_show { "opening" } else { "closing" },
            target,
            from,
            velocity
        );

        if let Some(from) = from {
            resting.snapTo(from);
        }
        let weak = Rc::downgrade(inner);
        resting.animateToWithVelocity(
            target,
            spring,
            velocity,
            move |reason| {
                if reason == AnimationEndReason::Finished {
                    if let Some(inner) = weak.upgrade() {
                        Self::settle(&inner);
                    }
                }
            },
        );
        deliver(&listeners, &notifications);
    }

    fn settle(inner: &Rc<RefCell<DrawerInner<L>>>) {
        let (shown, listeners) = {
            let mut state = inner.borrow_mut();
            state.state = DrawerState::Idle;
            (state.shown, state.listeners.clone())
        };
        log::trace!("drawer settled, shown={}", shown);
        deliver(
            &listeners,
            &[DrawerNotification::StateChanged(DrawerState::Idle, shown)],
        );
    }

    fn publish_slide(inner: &Rc<RefCell<DrawerInner<L>>>) {
        let (notification, listeners) = {
            let mut state = inner.borrow_mut();
            (state.slide_notification(), state.listeners.clone())
        };
        if let Some(notification) = notification {
            deliver(&listeners, &[notification]);
        }
    }

    /// Change the lock mode, settling the drawer into the locked state.
    ///
    /// A drag in progress when drags become locked is cancelled.
    pub fn set_lock_mode(&self, lock_mode: LockMode) {
        let (from, target) = {
            let mut inner = self.inner.borrow_mut();
            if inner.config.lock_mode == lock_mode {
                return;
            }
            log::debug!("drawer lock mode {:?} -> {:?}", inner.config.lock_mode, lock_mode);
            inner.config.lock_mode = lock_mode;

            let drag_cancelled = !lock_mode.allows_drag() && inner.pan.is_active();
            let from = drag_cancelled.then(|| {
                let position = inner.pan.translation() + inner.resting.value();
                inner.gesture_offset.set_value(0.0);
                inner.geometry.clamp_position(position)
            });
            inner.pan.set_enabled(lock_mode.allows_drag());
            if !lock_mode.allows_tap_to_close() {
                inner.tap.reset();
            }

            let target = match lock_mode {
                LockMode::LockedOpen => true,
                LockMode::LockedClosed => false,
                LockMode::Unlocked => inner.shown,
            };
            let needs_settle = from.is_some() || target != inner.shown;
            (from, needs_settle.then_some(target))
        };

        if let Some(open) = target {
            Self::animate(&self.inner, from, open, 0.0);
        }
    }

    pub fn lock_mode(&self) -> LockMode {
        self.inner.borrow().config.lock_mode
    }

    /// Size of the area the drawer is laid out in; positions the right-side
    /// panel and sets the panel height. Presses are ignored while either
    /// dimension is zero.
    pub fn set_container_size(&self, size: Size) {
        self.inner.borrow_mut().container = size;
    }

    pub fn container_size(&self) -> Size {
        self.inner.borrow().container
    }

    pub fn side(&self) -> DrawerSide {
        self.inner.borrow().config.side
    }

    pub fn width(&self) -> f32 {
        self.inner.borrow().geometry.width()
    }

    pub fn openness(&self) -> f32 {
        self.inner.borrow().openness()
    }

    pub fn is_shown(&self) -> bool {
        self.inner.borrow().shown
    }

    pub fn state(&self) -> DrawerState {
        self.inner.borrow().state
    }

    pub fn is_settling(&self) -> bool {
        self.inner.borrow().resting.is_running()
    }

    pub fn gesture_offset(&self) -> f32 {
        self.inner.borrow().gesture_offset.get()
    }

    pub fn resting_position(&self) -> f32 {
        self.inner.borrow().resting.value()
    }

    pub fn gesture_offset_state(&self) -> State<f32> {
        self.inner.borrow().gesture_offset.as_state()
    }

    pub fn resting_position_state(&self) -> State<f32> {
        self.inner.borrow().resting.state()
    }

    /// Panel and edge-strip hit rectangles for the current frame.
    pub fn hit_regions(&self) -> (Rect, Rect) {
        self.inner.borrow().layout()
    }

    pub fn render_state(&self) -> DrawerRenderState {
        let inner = self.inner.borrow();
        DrawerRenderState::compute(
            inner.openness(),
            inner.shown,
            &inner.geometry,
            &inner.config,
            inner.container,
        )
    }

    /// Render the content and panel through the configured renderers.
    pub fn compose(&self) -> DrawerTree<L> {
        let (children, render_panel) = {
            let inner = self.inner.borrow();
            (
                Rc::clone(&inner.config.children),
                Rc::clone(&inner.config.render_panel),
            )
        };
        DrawerTree {
            content: children(),
            panel: render_panel(),
            render: self.render_state(),
        }
    }
}
