//! Per-instance mutable storage for a wrapped native scalar.
//!
//! Only the compound assignment members write through a cell; every other
//! operation reads a snapshot and produces a fresh value.

use parking_lot::RwLock;
use std::fmt;

/// Interior-mutable slot holding one native scalar.
///
/// Guards are never held across a call back into dispatch, so reading an
/// operand and then writing the receiver is safe even when both are the
/// same object (`x += x`). Reads are recursive so an object can be
/// compared with itself.
pub struct ScalarCell<T>(RwLock<T>);

impl<T> ScalarCell<T> {
    pub fn new(value: T) -> Self {
        ScalarCell(RwLock::new(value))
    }

    /// Replace the stored scalar.
    pub fn set(&self, value: T) {
        *self.0.write() = value;
    }

    /// Run `f` against a shared borrow of the scalar.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.0.read_recursive())
    }

    /// Run `f` against an exclusive borrow of the scalar.
    pub fn update<R>(&self, f: impl FnOnce(&mut T) -> R) -> R {
        f(&mut self.0.write())
    }
}

impl<T: Copy> ScalarCell<T> {
    #[inline]
    pub fn get(&self) -> T {
        *self.0.read_recursive()
    }
}

/// Cloning snapshots the current scalar into an independent cell.
impl<T: Clone> Clone for ScalarCell<T> {
    fn clone(&self) -> Self {
        ScalarCell::new(self.with(T::clone))
    }
}

impl<T: fmt::Debug> fmt::Debug for ScalarCell<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.with(|v| fmt::Debug::fmt(v, f))
    }
}

#[cfg(test)]
mod tests;
