//! A shared pointer whose equality and hashing are done by address.

use std::{fmt, hash, ops::Deref, ptr, sync::Arc};

/// A shared pointer to a pooled value, compared and hashed by address.
///
/// Terms are hash-consed by the [`TermPool`](super::TermPool): adding a term that is already in
/// the pool returns the existing allocation. Two structurally equal terms built through the same
/// pool therefore always share an allocation, and comparing the addresses is enough to decide
/// equality.
///
/// Values allocated outside of a pool with [`Rc::new`] are only equal to their own clones.
///
/// # Examples
///
/// ```
/// # use normalizer::ast::Rc;
/// let a = Rc::new("p");
/// let b = Rc::new("p");
/// assert_ne!(a, b);
/// assert_eq!(a, a.clone());
/// ```
pub struct Rc<T: ?Sized>(Arc<T>);

impl<T> Rc<T> {
    pub fn new(value: T) -> Self {
        Self(Arc::new(value))
    }
}

impl<T: ?Sized> Clone for Rc<T> {
    fn clone(&self) -> Self {
        Self(Arc::clone(&self.0))
    }
}

impl<T: ?Sized> PartialEq for Rc<T> {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl<T: ?Sized> Eq for Rc<T> {}

impl<T: ?Sized> hash::Hash for Rc<T> {
    fn hash<H: hash::Hasher>(&self, state: &mut H) {
        ptr::hash(Arc::as_ptr(&self.0).cast::<()>(), state);
    }
}

impl<T: ?Sized> Deref for Rc<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.0
    }
}

impl<T: ?Sized + fmt::Debug> fmt::Debug for Rc<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Debug::fmt(&**self, f)
    }
}

impl<T: ?Sized + fmt::Display> fmt::Display for Rc<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(&**self, f)
    }
}
