//! Growable coefficient storage.
//!
//! The store keeps an explicit capacity separate from the number of terms in
//! use, and grows by doubling when an append would overflow it.

use horner_rings::Coefficient;
use tracing::trace;

/// An owned, index-addressed coefficient buffer.
///
/// `slots.len()` is the capacity. Only the first `len` slots are in use;
/// every slot at or beyond `len` holds zero.
#[derive(Clone, Debug)]
pub(crate) struct CoeffStore<T> {
    slots: Vec<T>,
    len: usize,
}

impl<T: Coefficient> CoeffStore<T> {
    /// Creates an empty store with room for `capacity` terms.
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: vec![T::zero(); capacity],
            len: 0,
        }
    }

    /// Creates a store of `len` zero terms, sized exactly.
    pub(crate) fn zeroed(len: usize) -> Self {
        Self {
            slots: vec![T::zero(); len],
            len,
        }
    }

    /// Takes ownership of `values` as the in-use terms.
    pub(crate) fn from_vec(values: Vec<T>) -> Self {
        let len = values.len();
        Self { slots: values, len }
    }

    pub(crate) fn len(&self) -> usize {
        self.len
    }

    pub(crate) fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub(crate) fn as_slice(&self) -> &[T] {
        &self.slots[..self.len]
    }

    pub(crate) fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.slots[..self.len]
    }

    pub(crate) fn get(&self, index: usize) -> Option<&T> {
        self.as_slice().get(index)
    }

    pub(crate) fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.as_mut_slice().get_mut(index)
    }

    /// Appends a term, doubling the capacity first if the store is full.
    pub(crate) fn push(&mut self, value: T) {
        if self.len == self.slots.len() {
            self.grow();
        }
        self.slots[self.len] = value;
        self.len += 1;
    }

    /// Removes the last in-use term and zeroes its slot.
    pub(crate) fn pop(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        self.len -= 1;
        Some(std::mem::replace(&mut self.slots[self.len], T::zero()))
    }

    fn grow(&mut self) {
        let old_capacity = self.slots.len();
        let new_capacity = if old_capacity == 0 { 1 } else { old_capacity * 2 };
        trace!(old_capacity, new_capacity, "growing coefficient store");
        self.slots.resize(new_capacity, T::zero());
    }
}
