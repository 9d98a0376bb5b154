//! Shared subsystem handles.
//!
//! Every subsystem is constructed exactly once at startup and then handed out as a [`Handle`] to
//! whatever needs it. Cloning a handle never creates a new subsystem; it produces another
//! reference to the same one, which [`Handle::ptr_eq`] can confirm.

use core::{
    cell::{Ref, RefCell, RefMut},
    fmt,
};
use std::rc::Rc;

/// A reference-counted, single-threaded handle to a subsystem.
pub struct Handle<T> {
    inner: Rc<RefCell<T>>,
}

impl<T> Handle<T> {
    /// Takes ownership of `subsystem` and returns the first handle to it.
    pub fn new(subsystem: T) -> Self {
        Self {
            inner: Rc::new(RefCell::new(subsystem)),
        }
    }

    /// Immutably borrows the subsystem.
    ///
    /// # Panics
    ///
    /// Panics if the subsystem is currently mutably borrowed.
    #[must_use]
    pub fn borrow(&self) -> Ref<'_, T> {
        self.inner.borrow()
    }

    /// Mutably borrows the subsystem.
    ///
    /// # Panics
    ///
    /// Panics if the subsystem is currently borrowed.
    #[must_use]
    pub fn borrow_mut(&self) -> RefMut<'_, T> {
        self.inner.borrow_mut()
    }

    /// Returns `true` if both handles refer to the same subsystem instance.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl<T> Clone for Handle<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Handle<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Handle").field(&self.inner).finish()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn clones_share_one_instance() {
        let first = Handle::new(5_u32);
        let second = first.clone();

        assert!(first.ptr_eq(&second));

        *second.borrow_mut() += 1;
        assert_eq!(*first.borrow(), 6);
    }

    #[test]
    fn separate_handles_are_distinct() {
        let a = Handle::new(0_u8);
        let b = Handle::new(0_u8);
        assert!(!a.ptr_eq(&b));
    }
}
