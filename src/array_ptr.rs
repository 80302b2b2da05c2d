use alloc::boxed::Box;
use core::ops::{Index, IndexMut};

/// Single-owner handle to a fixed-size heap array.
///
/// Every slot always holds a valid `T`. A handle of length zero owns an empty
/// buffer and performs no allocation.
#[derive(Debug)]
pub struct ArrayPtr<T> {
    raw: Box<[T]>,
}

impl<T> ArrayPtr<T> {
    /// Creates a handle that owns no storage.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            raw: Box::default(),
        }
    }

    /// Allocates `size` slots, each holding `T::default()`.
    ///
    /// Returns an empty handle without allocating when `size` is 0.
    #[must_use]
    pub fn new(size: usize) -> Self
    where
        T: Default,
    {
        if size == 0 {
            return Self::empty();
        }
        Self {
            raw: (0..size).map(|_| T::default()).collect(),
        }
    }

    /// Takes ownership of an already populated buffer.
    #[must_use]
    pub fn from_boxed(raw: Box<[T]>) -> Self {
        Self { raw }
    }

    /// Number of allocated slots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.raw.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.raw
    }

    #[must_use]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.raw
    }

    /// Exchanges the owned buffers of two handles without touching elements.
    pub fn swap(&mut self, other: &mut Self) {
        core::mem::swap(&mut self.raw, &mut other.raw);
    }

    /// Hands out the owned buffer and leaves this handle empty.
    #[must_use]
    pub fn release(&mut self) -> Box<[T]> {
        core::mem::take(&mut self.raw)
    }

    #[must_use]
    pub fn into_boxed(self) -> Box<[T]> {
        self.raw
    }
}

impl<T> Default for ArrayPtr<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> Index<usize> for ArrayPtr<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.raw[index]
    }
}

impl<T> IndexMut<usize> for ArrayPtr<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.raw[index]
    }
}
