use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;
use core::mem;
use core::ops::{Index, IndexMut};

use crate::array_ptr::ArrayPtr;
use crate::error::SimpleVectorError;
use crate::iter::{SimpleVectorIter, SimpleVectorIterMut};
use crate::reserve::ReserveRequest;

/// A contiguous growable array backed by a single [`ArrayPtr`] buffer.
///
/// Slots `[len, capacity)` are allocated and hold leftover values (defaults
/// or elements that were popped, erased or cleared). They are never observable
/// through the public interface.
pub struct SimpleVector<T> {
    items: ArrayPtr<T>,
    size: usize,
}

impl<T> SimpleVector<T> {
    /// Creates an empty vector. Does not allocate.
    #[must_use]
    pub fn new() -> Self {
        Self {
            items: ArrayPtr::empty(),
            size: 0,
        }
    }

    /// Creates a vector of `size` clones of `value`, with capacity exactly `size`.
    #[must_use]
    pub fn from_elem(size: usize, value: T) -> Self
    where
        T: Clone,
    {
        let raw: Box<[T]> = core::iter::repeat(value).take(size).collect();
        Self {
            items: ArrayPtr::from_boxed(raw),
            size,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.size
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// The occupied range `[0, len)`.
    #[must_use]
    #[allow(clippy::indexing_slicing)] // len never exceeds capacity
    pub fn as_slice(&self) -> &[T] {
        &self.items.as_slice()[..self.size]
    }

    #[must_use]
    #[allow(clippy::indexing_slicing)] // len never exceeds capacity
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.items.as_mut_slice()[..self.size]
    }

    fn check_bounds(&self, index: usize) -> Result<(), SimpleVectorError> {
        if index >= self.size {
            Err(SimpleVectorError::IndexOutOfBounds {
                index,
                length: self.size,
            })
        } else {
            Ok(())
        }
    }

    /// Gets a reference to the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns `SimpleVectorError::IndexOutOfBounds` if `index >= len`.
    #[allow(clippy::indexing_slicing)] // Bounds checked above
    pub fn at(&self, index: usize) -> Result<&T, SimpleVectorError> {
        self.check_bounds(index)?;
        Ok(&self.items[index])
    }

    /// Gets a mutable reference to the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns `SimpleVectorError::IndexOutOfBounds` if `index >= len`.
    #[allow(clippy::indexing_slicing)] // Bounds checked above
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T, SimpleVectorError> {
        self.check_bounds(index)?;
        Ok(&mut self.items[index])
    }

    /// Sets the length to 0. Capacity and buffer contents are kept.
    pub fn clear(&mut self) {
        self.size = 0;
    }

    /// Drops the last element from the occupied range.
    ///
    /// The vacated slot keeps its value until it is overwritten.
    ///
    /// # Panics
    ///
    /// Panics in debug builds if the vector is empty.
    pub fn pop_back(&mut self) {
        debug_assert!(self.size > 0, "Cannot pop from empty vector");
        self.size = self.size.saturating_sub(1);
    }

    /// Checked variant of [`pop_back`](Self::pop_back).
    ///
    /// # Errors
    ///
    /// Returns `SimpleVectorError::EmptyVector` if the vector is empty.
    pub fn try_pop_back(&mut self) -> Result<(), SimpleVectorError> {
        if self.size == 0 {
            return Err(SimpleVectorError::EmptyVector);
        }
        self.size -= 1;
        Ok(())
    }

    /// Removes the element at `index`, shifting the tail one slot left.
    ///
    /// Returns the index of the element that followed the erased one, which
    /// equals the new length when the last element was erased.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len` (with a descriptive message in debug builds).
    pub fn erase(&mut self, index: usize) -> usize {
        debug_assert!(
            index < self.size,
            "Erase index {} out of bounds for vector of length {}",
            index,
            self.size
        );
        let size = self.size;
        self.items.as_mut_slice()[index..size].rotate_left(1);
        self.size -= 1;
        index
    }

    /// Checked variant of [`erase`](Self::erase).
    ///
    /// # Errors
    ///
    /// Returns `SimpleVectorError::IndexOutOfBounds` if `index >= len`.
    pub fn try_erase(&mut self, index: usize) -> Result<usize, SimpleVectorError> {
        self.check_bounds(index)?;
        Ok(self.erase(index))
    }

    /// Exchanges buffers, lengths and capacities with `other` in O(1).
    pub fn swap(&mut self, other: &mut Self) {
        self.items.swap(&mut other.items);
        mem::swap(&mut self.size, &mut other.size);
    }

    /// Moves the whole buffer out into a new vector.
    ///
    /// `self` is left empty with zero capacity.
    #[must_use]
    pub fn take(&mut self) -> Self {
        Self {
            items: ArrayPtr::from_boxed(self.items.release()),
            size: mem::replace(&mut self.size, 0),
        }
    }

    /// Replaces the contents of `self` with the buffer of `source`.
    ///
    /// The previous buffer of `self` is released and `source` is left empty
    /// with zero capacity.
    pub fn move_from(&mut self, source: &mut Self) {
        *self = source.take();
    }

    /// Returns an iterator over the occupied range.
    #[must_use]
    pub fn iter(&self) -> SimpleVectorIter<'_, T> {
        SimpleVectorIter::new(self.as_slice())
    }

    #[must_use]
    pub fn iter_mut(&mut self) -> SimpleVectorIterMut<'_, T> {
        SimpleVectorIterMut::new(self.as_mut_slice())
    }

    /// Returns an iterator over the occupied range, last element first.
    #[must_use]
    pub fn iter_rev(&self) -> core::iter::Rev<SimpleVectorIter<'_, T>> {
        self.iter().rev()
    }

    /// Surrenders the buffer, trimmed to the occupied range.
    pub(crate) fn into_vec(self) -> Vec<T> {
        let mut raw = self.items.into_boxed().into_vec();
        raw.truncate(self.size);
        raw
    }
}

impl<T: Default> SimpleVector<T> {
    /// Creates a vector of `size` default values, with capacity exactly `size`.
    #[must_use]
    pub fn with_size(size: usize) -> Self {
        Self {
            items: ArrayPtr::new(size),
            size,
        }
    }

    /// Creates an empty vector with room for at least `request.capacity()` elements.
    #[must_use]
    pub fn with_reserve(request: ReserveRequest) -> Self {
        let mut vector = Self::new();
        vector.reserve(request.capacity());
        vector
    }

    /// Moves the occupied range into a fresh buffer of `new_capacity` slots.
    ///
    /// The new buffer is committed only after every element is in place.
    #[allow(clippy::indexing_slicing)] // Both buffers hold at least `size` slots
    fn relocate(&mut self, new_capacity: usize) {
        debug_assert!(new_capacity >= self.size);
        let size = self.size;
        let mut fresh = ArrayPtr::new(new_capacity);
        fresh.as_mut_slice()[..size].swap_with_slice(&mut self.items.as_mut_slice()[..size]);
        self.items.swap(&mut fresh);
    }

    fn grown_capacity(&self) -> usize {
        match self.capacity() {
            0 => 1,
            capacity => capacity.saturating_mul(2),
        }
    }

    /// Changes the length to `new_size`.
    ///
    /// New elements are `T::default()`. When `new_size` exceeds the capacity
    /// the buffer grows to `max(2 * capacity, new_size)`.
    pub fn resize(&mut self, new_size: usize) {
        if new_size > self.capacity() {
            let doubled = self.capacity().saturating_mul(2);
            // fresh slots are already default
            self.relocate(doubled.max(new_size));
        } else if new_size > self.size {
            self.items.as_mut_slice()[self.size..new_size].fill_with(T::default);
        }
        self.size = new_size;
    }

    /// Grows the buffer to exactly `new_capacity` slots. No-op when the
    /// current capacity is already sufficient.
    pub fn reserve(&mut self, new_capacity: usize) {
        if new_capacity > self.capacity() {
            self.relocate(new_capacity);
        }
    }

    /// Appends `value`, doubling the capacity when full (0 grows to 1).
    #[allow(clippy::indexing_slicing)] // Capacity ensured by relocate
    pub fn push_back(&mut self, value: T) {
        if self.size == self.capacity() {
            self.relocate(self.grown_capacity());
        }
        self.items[self.size] = value;
        self.size += 1;
    }

    /// Removes the last element and returns it, leaving a default in its slot.
    pub fn pop(&mut self) -> Option<T> {
        if self.size == 0 {
            return None;
        }
        self.size -= 1;
        Some(mem::take(&mut self.items[self.size]))
    }

    /// Inserts `value` at `index`, shifting the tail one slot right.
    ///
    /// `index == len` appends. A full vector doubles its capacity (0 grows to 1).
    /// Returns a reference to the inserted element.
    ///
    /// # Panics
    ///
    /// Panics if `index > len` (with a descriptive message in debug builds).
    #[allow(clippy::indexing_slicing)] // Position asserted, capacity ensured above
    pub fn insert(&mut self, index: usize, value: T) -> &mut T {
        debug_assert!(
            index <= self.size,
            "Insertion index {} out of range for vector of length {}",
            index,
            self.size
        );
        let size = self.size;
        if self.capacity() <= size {
            if self.capacity() == 0 {
                self.push_back(value);
                return &mut self.items[0];
            }
            let mut fresh = ArrayPtr::new(self.capacity() * 2);
            let old = self.items.as_mut_slice();
            fresh.as_mut_slice()[..index].swap_with_slice(&mut old[..index]);
            fresh[index] = value;
            fresh.as_mut_slice()[index + 1..=size].swap_with_slice(&mut old[index..size]);
            self.items.swap(&mut fresh);
        } else {
            let buffer = self.items.as_mut_slice();
            buffer[index..=size].rotate_right(1);
            buffer[index] = value;
        }
        self.size += 1;
        &mut self.items[index]
    }

    /// Checked variant of [`insert`](Self::insert).
    ///
    /// # Errors
    ///
    /// Returns `SimpleVectorError::IndexOutOfBounds` if `index > len`.
    pub fn try_insert(&mut self, index: usize, value: T) -> Result<&mut T, SimpleVectorError> {
        if index > self.size {
            return Err(SimpleVectorError::IndexOutOfBounds {
                index,
                length: self.size,
            });
        }
        Ok(self.insert(index, value))
    }
}

impl<T: Clone + Default> SimpleVector<T> {
    /// Makes `self` an independent copy of `source`.
    ///
    /// The copy is built first and then swapped in, so a panicking `clone`
    /// leaves `self` untouched.
    pub fn assign(&mut self, source: &Self) {
        let mut copy = source.clone();
        self.swap(&mut copy);
    }
}

impl<T> Default for SimpleVector<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone + Default> Clone for SimpleVector<T> {
    /// Copies the occupied range into a buffer of the same capacity.
    #[allow(clippy::indexing_slicing)] // Same capacity as the source
    fn clone(&self) -> Self {
        let mut items = ArrayPtr::new(self.capacity());
        items.as_mut_slice()[..self.size].clone_from_slice(self.as_slice());
        Self {
            items,
            size: self.size,
        }
    }

    fn clone_from(&mut self, source: &Self) {
        self.assign(source);
    }
}

impl<T: fmt::Debug> fmt::Debug for SimpleVector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

impl<T> Index<usize> for SimpleVector<T> {
    type Output = T;

    /// Unchecked access; `index < len` is only asserted in debug builds.
    fn index(&self, index: usize) -> &T {
        debug_assert!(
            index < self.size,
            "Index {} out of bounds for vector of length {}",
            index,
            self.size
        );
        &self.items[index]
    }
}

impl<T> IndexMut<usize> for SimpleVector<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        debug_assert!(
            index < self.size,
            "Index {} out of bounds for vector of length {}",
            index,
            self.size
        );
        &mut self.items[index]
    }
}

impl<T: Default> From<ReserveRequest> for SimpleVector<T> {
    fn from(request: ReserveRequest) -> Self {
        Self::with_reserve(request)
    }
}

impl<T, const N: usize> From<[T; N]> for SimpleVector<T> {
    fn from(values: [T; N]) -> Self {
        let raw: Box<[T]> = Box::new(values);
        Self {
            items: ArrayPtr::from_boxed(raw),
            size: N,
        }
    }
}

impl<T: Clone> From<&[T]> for SimpleVector<T> {
    fn from(values: &[T]) -> Self {
        Self {
            items: ArrayPtr::from_boxed(Box::from(values)),
            size: values.len(),
        }
    }
}

impl<T> From<Vec<T>> for SimpleVector<T> {
    fn from(values: Vec<T>) -> Self {
        let size = values.len();
        Self {
            items: ArrayPtr::from_boxed(values.into_boxed_slice()),
            size,
        }
    }
}

impl<T> From<SimpleVector<T>> for Vec<T> {
    fn from(vector: SimpleVector<T>) -> Self {
        vector.into_vec()
    }
}

impl<T> FromIterator<T> for SimpleVector<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<Vec<T>>())
    }
}

impl<T: Default> Extend<T> for SimpleVector<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push_back(value);
        }
    }
}

impl<T> AsRef<[T]> for SimpleVector<T> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> AsMut<[T]> for SimpleVector<T> {
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}
