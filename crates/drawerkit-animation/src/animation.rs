//! Frame-driven spring animations.
//!
//! Method names use Compose's `animateTo`/`snapTo` spelling.

use std::cell::RefCell;
use std::rc::Rc;

use drawerkit_core::{FrameCallbackRegistration, MutableState, RuntimeHandle, State};
use smallvec::SmallVec;

/// Trait for types that can be linearly interpolated.
pub trait Lerp {
    fn lerp(&self, target: &Self, fraction: f32) -> Self;
}

impl Lerp for f32 {
    fn lerp(&self, target: &Self, fraction: f32) -> Self {
        self + (target - self) * fraction
    }
}

/// Trait for values that can participate in spring animations.
pub trait SpringScalar: Lerp + Clone {
    /// Convert the value to `f32` for physics calculations.
    fn to_f32(&self) -> f32;

    /// Compute the current progress between the start and target values.
    fn spring_progress(start: &Self, target: &Self, current: &Self) -> f32 {
        let start_val = start.to_f32();
        let target_val = target.to_f32();
        let current_val = current.to_f32();

        if (target_val - start_val).abs() < f32::EPSILON {
            1.0
        } else {
            (current_val - start_val) / (target_val - start_val)
        }
    }

    /// Determine whether the current value is close enough to the target to
    /// consider the spring finished.
    fn is_near_target(current: &Self, target: &Self, threshold: f32) -> bool {
        (current.to_f32() - target.to_f32()).abs() < threshold
    }
}

impl SpringScalar for f32 {
    fn to_f32(&self) -> f32 {
        *self
    }
}

/// Spring animation configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringSpec {
    /// Damping ratio. 1.0 = critically damped, < 1.0 = under-damped (bouncy), > 1.0 = over-damped.
    pub damping_ratio: f32,
    /// Stiffness constant. Higher values = faster animation.
    pub stiffness: f32,
    /// Velocity threshold (progress units per second) to stop animation.
    pub velocity_threshold: f32,
    /// Position threshold (value units) to stop animation.
    pub position_threshold: f32,
}

impl SpringSpec {
    pub fn default_spring() -> Self {
        Self {
            damping_ratio: 1.0,
            stiffness: 1500.0,
            velocity_threshold: 0.01,
            position_threshold: 0.001,
        }
    }

    pub fn bouncy() -> Self {
        Self {
            damping_ratio: 0.5,
            ..Self::default_spring()
        }
    }

    pub fn stiff() -> Self {
        Self {
            stiffness: 3000.0,
            ..Self::default_spring()
        }
    }

    /// No bounce, slower settle. Suited to panels that travel a few hundred pixels.
    pub fn medium_low() -> Self {
        Self {
            stiffness: 400.0,
            ..Self::default_spring()
        }
    }

    pub fn with_position_threshold(mut self, threshold: f32) -> Self {
        self.position_threshold = threshold;
        self
    }
}

impl Default for SpringSpec {
    fn default() -> Self {
        Self::default_spring()
    }
}

/// How an animation started with [`Animatable::animateToWithVelocity`] ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationEndReason {
    /// Reached the target.
    Finished,
    /// Superseded by another `animateTo` or a `snapTo`.
    Interrupted,
}

type EndCallback = Box<dyn FnOnce(AnimationEndReason) + 'static>;
type ValueListener<T> = Rc<dyn Fn(&T) + 'static>;

/// Generic animatable value holder.
///
/// Handles are cheap to clone and share the same animation.
pub struct Animatable<T: SpringScalar + 'static> {
    inner: Rc<RefCell<AnimatableInner<T>>>,
}

struct AnimatableInner<T: SpringScalar + 'static> {
    state: MutableState<T>,
    runtime: RuntimeHandle,
    current: T,
    /// Spring velocity in progress units per second.
    velocity: f32,
    start: T,
    target: T,
    spring: SpringSpec,
    last_frame_nanos: Option<u64>,
    registration: Option<FrameCallbackRegistration>,
    on_end: Option<EndCallback>,
    listeners: SmallVec<[ValueListener<T>; 2]>,
}

impl<T: SpringScalar + 'static> Animatable<T> {
    pub fn new(initial: T, runtime: RuntimeHandle) -> Self {
        let inner = AnimatableInner {
            state: MutableState::with_runtime(initial.clone(), runtime.clone()),
            runtime,
            current: initial.clone(),
            velocity: 0.0,
            start: initial.clone(),
            target: initial,
            spring: SpringSpec::default(),
            last_frame_nanos: None,
            registration: None,
            on_end: None,
            listeners: SmallVec::new(),
        };
        Self {
            inner: Rc::new(RefCell::new(inner)),
        }
    }

    /// Spring to the target value from rest.
    pub fn animateTo(&self, target: T, spring: SpringSpec) {
        self.animateToWithVelocity(target, spring, 0.0, |_| {});
    }

    /// Spring to `target`, seeded with `initial_velocity` in value units per
    /// second. `on_end` runs once, after the final value has been published,
    /// or with [`AnimationEndReason::Interrupted`] when superseded.
    pub fn animateToWithVelocity(
        &self,
        target: T,
        spring: SpringSpec,
        initial_velocity: f32,
        on_end: impl FnOnce(AnimationEndReason) + 'static,
    ) {
        let interrupted = {
            let mut inner = self.inner.borrow_mut();

            if let Some(registration) = inner.registration.take() {
                registration.cancel();
            }
            let interrupted = inner.on_end.take();

            inner.start = inner.current.clone();
            inner.target = target;
            inner.spring = spring;
            inner.last_frame_nanos = None;
            inner.velocity = progress_velocity(&inner.start, &inner.target, initial_velocity);
            inner.on_end = Some(Box::new(on_end));
            interrupted
        };

        if let Some(callback) = interrupted {
            callback(AnimationEndReason::Interrupted);
        }
        Self::schedule_frame(&self.inner);
    }

    /// Snap immediately to the target value without animating.
    pub fn snapTo(&self, target: T) {
        let interrupted = {
            let mut inner = self.inner.borrow_mut();
            if let Some(registration) = inner.registration.take() {
                registration.cancel();
            }
            inner.current = target.clone();
            inner.start = target.clone();
            inner.target = target.clone();
            inner.velocity = 0.0;
            inner.last_frame_nanos = None;
            inner.state.set_value(target);
            inner.on_end.take()
        };
        if let Some(callback) = interrupted {
            callback(AnimationEndReason::Interrupted);
        }
        self.notify_listeners();
    }

    pub fn value(&self) -> T {
        self.inner.borrow().current.clone()
    }

    pub fn target(&self) -> T {
        self.inner.borrow().target.clone()
    }

    /// Current spring velocity in value units per second.
    pub fn velocity(&self) -> f32 {
        let inner = self.inner.borrow();
        inner.velocity * (inner.target.to_f32() - inner.start.to_f32())
    }

    /// Spring used by the current or most recent animation.
    pub fn spring(&self) -> SpringSpec {
        self.inner.borrow().spring
    }

    pub fn is_running(&self) -> bool {
        self.inner.borrow().registration.is_some()
    }

    pub fn state(&self) -> State<T> {
        self.inner.borrow().state.as_state()
    }

    /// Register a listener called with every published value.
    pub fn add_listener(&self, listener: impl Fn(&T) + 'static) {
        self.inner.borrow_mut().listeners.push(Rc::new(listener));
    }

    fn notify_listeners(&self) {
        notify(&self.inner);
    }

    fn schedule_frame(this: &Rc<RefCell<AnimatableInner<T>>>) {
        let runtime = {
            let inner = this.borrow();
            if inner.registration.is_some() {
                return;
            }
            inner.runtime.clone()
        };
        let weak = Rc::downgrade(this);
        let registration = runtime.frame_clock().with_frame_nanos(move |time| {
            if let Some(strong) = weak.upgrade() {
                Self::on_frame(&strong, time);
            }
        });
        if registration.is_active() {
            this.borrow_mut().registration = Some(registration);
        } else {
            log::warn!("animation frame requested on a dropped runtime");
        }
    }

    fn on_frame(this: &Rc<RefCell<AnimatableInner<T>>>, frame_time_nanos: u64) {
        let mut schedule_next = false;
        let mut finished = None;
        let mut published = false;
        {
            let mut inner = this.borrow_mut();
            inner.registration = None;

            let spec = inner.spring;
            let last_frame = *inner.last_frame_nanos.get_or_insert(frame_time_nanos);
            let dt = frame_time_nanos.saturating_sub(last_frame) as f32 / 1_000_000_000.0;
            inner.last_frame_nanos = Some(frame_time_nanos);

            if dt == 0.0 {
                schedule_next = true;
            } else {
                // Semi-implicit Euler in progress space, target at 1.0.
                let stiffness = spec.stiffness;
                let damping = 2.0 * spec.damping_ratio * stiffness.sqrt();
                let timestep: f32 = 0.016;
                let mut simulated = 0.0f32;

                while simulated < dt {
                    let step = timestep.min(dt - simulated);
                    let current_progress = <T as SpringScalar>::spring_progress(
                        &inner.start,
                        &inner.target,
                        &inner.current,
                    );

                    let displacement = current_progress - 1.0;
                    let spring_force = -stiffness * displacement - damping * inner.velocity;

                    inner.velocity += spring_force * step;
                    let new_progress = current_progress + inner.velocity * step;
                    inner.current = inner
                        .start
                        .lerp(&inner.target, new_progress.clamp(-1.0, 2.0));

                    simulated += step;
                }

                let at_rest = inner.velocity.abs() < spec.velocity_threshold;
                let near_target = <T as SpringScalar>::is_near_target(
                    &inner.current,
                    &inner.target,
                    spec.position_threshold,
                );

                if at_rest && near_target {
                    inner.current = inner.target.clone();
                    inner.start = inner.target.clone();
                    inner.last_frame_nanos = None;
                    inner.velocity = 0.0;
                    finished = inner.on_end.take();
                } else {
                    schedule_next = true;
                }
                let value = inner.current.clone();
                inner.state.set_value(value);
                published = true;
            }
        }

        if schedule_next {
            Self::schedule_frame(this);
        }
        if published {
            notify(this);
        }
        if let Some(callback) = finished {
            callback(AnimationEndReason::Finished);
        }
    }
}

fn notify<T: SpringScalar + 'static>(this: &Rc<RefCell<AnimatableInner<T>>>) {
    let (value, listeners) = {
        let inner = this.borrow();
        (inner.current.clone(), inner.listeners.clone())
    };
    for listener in listeners {
        listener(&value);
    }
}

/// Convert a value-space velocity into progress units for a start/target pair.
fn progress_velocity<T: SpringScalar>(start: &T, target: &T, velocity: f32) -> f32 {
    let distance = target.to_f32() - start.to_f32();
    if distance.abs() < f32::EPSILON || !velocity.is_finite() {
        0.0
    } else {
        velocity / distance
    }
}

impl<T: SpringScalar + 'static> Clone for Animatable<T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

#[cfg(test)]
#[path = "tests/animation_tests.rs"]
mod tests;
