use core::slice;

use crate::core::SimpleVector;

/// Iterator over the occupied range of a `SimpleVector`
///
/// This iterator implements `Clone`.
#[derive(Clone, Debug)]
pub struct SimpleVectorIter<'a, T> {
    inner: slice::Iter<'a, T>,
}

impl<'a, T> SimpleVectorIter<'a, T> {
    pub(crate) fn new(occupied: &'a [T]) -> Self {
        Self {
            inner: occupied.iter(),
        }
    }
}

impl<'a, T> Iterator for SimpleVectorIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for SimpleVectorIter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<T> ExactSizeIterator for SimpleVectorIter<'_, T> {}

impl<'a, T> IntoIterator for &'a SimpleVector<T> {
    type Item = &'a T;
    type IntoIter = SimpleVectorIter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Mutable iterator over the occupied range of a `SimpleVector`
#[derive(Debug)]
pub struct SimpleVectorIterMut<'a, T> {
    inner: slice::IterMut<'a, T>,
}

impl<'a, T> SimpleVectorIterMut<'a, T> {
    pub(crate) fn new(occupied: &'a mut [T]) -> Self {
        Self {
            inner: occupied.iter_mut(),
        }
    }
}

impl<'a, T> Iterator for SimpleVectorIterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for SimpleVectorIterMut<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<T> ExactSizeIterator for SimpleVectorIterMut<'_, T> {}

impl<'a, T> IntoIterator for &'a mut SimpleVector<T> {
    type Item = &'a mut T;
    type IntoIter = SimpleVectorIterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

/// Owning iterator over the elements of a `SimpleVector`
///
/// Leftover slots past the occupied range are dropped up front.
#[derive(Debug)]
pub struct SimpleVectorIntoIter<T> {
    inner: alloc::vec::IntoIter<T>,
}

impl<T> Iterator for SimpleVectorIntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for SimpleVectorIntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<T> ExactSizeIterator for SimpleVectorIntoIter<T> {}

impl<T> IntoIterator for SimpleVector<T> {
    type Item = T;
    type IntoIter = SimpleVectorIntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        SimpleVectorIntoIter {
            inner: self.into_vec().into_iter(),
        }
    }
}
