use core::cmp::Ordering;
use core::hash::{Hash, Hasher};

use crate::core::SimpleVector;

// Comparisons only look at the occupied range; capacity is ignored.

impl<T: PartialEq> PartialEq for SimpleVector<T> {
    fn eq(&self, other: &Self) -> bool {
        core::ptr::eq(self, other) || self.as_slice() == other.as_slice()
    }
}

impl<T: Eq> Eq for SimpleVector<T> {}

macro_rules! impl_slice_eq {
    ([$($vars:tt)*] $rhs:ty) => {
        impl<$($vars)* T, U> PartialEq<$rhs> for SimpleVector<T>
        where
            T: PartialEq<U>,
        {
            #[inline]
            fn eq(&self, other: &$rhs) -> bool {
                self.as_slice() == &other[..]
            }
        }
    };
}

impl_slice_eq! { [] [U] }
impl_slice_eq! { ['a,] &'a [U] }
impl_slice_eq! { [const N: usize,] [U; N] }
impl_slice_eq! { ['a, const N: usize,] &'a [U; N] }

impl<T: PartialOrd> PartialOrd for SimpleVector<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.as_slice().partial_cmp(other.as_slice())
    }
}

impl<T: Ord> Ord for SimpleVector<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_slice().cmp(other.as_slice())
    }
}

impl<T: Hash> Hash for SimpleVector<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state);
    }
}
