use crate::RuntimeHandle;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

struct StateCell<T> {
    value: RefCell<T>,
    version: Cell<u64>,
    runtime: RuntimeHandle,
}

/// Single-threaded observable value cell.
///
/// Every write bumps a version counter and asks the runtime for a frame, which
/// is how hosts learn that something they render from has changed.
pub struct MutableState<T> {
    inner: Rc<StateCell<T>>,
}

impl<T> Clone for MutableState<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T: Clone> MutableState<T> {
    pub fn with_runtime(value: T, runtime: RuntimeHandle) -> Self {
        Self {
            inner: Rc::new(StateCell {
                value: RefCell::new(value),
                version: Cell::new(0),
                runtime,
            }),
        }
    }

    pub fn get(&self) -> T {
        self.inner.value.borrow().clone()
    }

    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.inner.value.borrow())
    }

    pub fn set_value(&self, value: T) {
        self.inner.runtime.assert_ui_thread();
        *self.inner.value.borrow_mut() = value;
        self.mark_changed();
    }

    pub fn update<R>(&self, f: impl FnOnce(&mut T) -> R) -> R {
        self.inner.runtime.assert_ui_thread();
        let result = f(&mut self.inner.value.borrow_mut());
        self.mark_changed();
        result
    }

    /// Number of writes since creation.
    pub fn version(&self) -> u64 {
        self.inner.version.get()
    }

    pub fn as_state(&self) -> State<T> {
        State {
            inner: Rc::clone(&self.inner),
        }
    }

    fn mark_changed(&self) {
        self.inner.version.set(self.inner.version.get() + 1);
        self.inner.runtime.set_needs_frame(true);
    }
}

/// Read-only view of a [`MutableState`].
pub struct State<T> {
    inner: Rc<StateCell<T>>,
}

impl<T> Clone for State<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T: Clone> State<T> {
    pub fn get(&self) -> T {
        self.inner.value.borrow().clone()
    }

    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.inner.value.borrow())
    }

    pub fn version(&self) -> u64 {
        self.inner.version.get()
    }
}

impl<T: Clone + std::fmt::Debug> std::fmt::Debug for State<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("State").field(&*self.inner.value.borrow()).finish()
    }
}
