use alloc::boxed::Box;
use core::fmt::Debug;

/// Decides what happens to a value once its owning container no longer needs it;
/// i.e., when a tree node holding it is destroyed or its value is replaced, or when
/// a queue still holding it is torn down.
///
/// Every value stored in a container carries its own disposal, so that values with
/// different cleanup requirements can live side by side.
pub enum Disposal<T> {
    /// The value is owned by the container and is dropped in place.
    Drop,
    /// The value is moved into the callback, which is invoked exactly once.
    Callback(Box<dyn FnOnce(T)>),
    /// The resources behind the value are owned elsewhere; the value is forgotten
    /// and no destructor runs at all.
    Forget,
}

impl<T> Default for Disposal<T> {
    fn default() -> Self {
        Self::Drop
    }
}

impl<T> Disposal<T> {
    /// Creates a disposal invoking `f` with the value.
    ///
    /// # Examples
    ///
    /// ```
    /// use orx_refcount_col::*;
    /// use std::{cell::Cell, rc::Rc};
    ///
    /// let freed = Rc::new(Cell::new(0));
    /// let counter = freed.clone();
    ///
    /// let owned = Owned::new(42, Disposal::callback(move |x: i32| counter.set(counter.get() + x)));
    /// owned.dispose();
    ///
    /// assert_eq!(freed.get(), 42);
    /// ```
    pub fn callback<F>(f: F) -> Self
    where
        F: FnOnce(T) + 'static,
    {
        Self::Callback(Box::new(f))
    }

    /// Applies the disposal to the `value`.
    pub fn apply(self, value: T) {
        match self {
            Self::Drop => core::mem::drop(value),
            Self::Callback(f) => f(value),
            Self::Forget => core::mem::forget(value),
        }
    }
}

impl<T> Debug for Disposal<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Drop => write!(f, "Drop"),
            Self::Callback(_) => write!(f, "Callback"),
            Self::Forget => write!(f, "Forget"),
        }
    }
}

/// A value together with its [`Disposal`].
pub struct Owned<T> {
    value: T,
    disposal: Disposal<T>,
}

impl<T> Owned<T> {
    /// Pairs the `value` with its `disposal`.
    pub fn new(value: T, disposal: Disposal<T>) -> Self {
        Self { value, disposal }
    }

    /// Returns a reference to the value.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Returns a mutable reference to the value.
    pub fn value_mut(&mut self) -> &mut T {
        &mut self.value
    }

    /// Transfers the value to the caller; the disposal is discarded without being applied.
    pub fn into_value(self) -> T {
        self.value
    }

    /// Applies the disposal to the value.
    pub fn dispose(self) {
        self.disposal.apply(self.value)
    }
}

impl<T> From<T> for Owned<T> {
    fn from(value: T) -> Self {
        Self::new(value, Disposal::Drop)
    }
}

impl<T: Debug> Debug for Owned<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Owned")
            .field("value", &self.value)
            .field("disposal", &self.disposal)
            .finish()
    }
}
