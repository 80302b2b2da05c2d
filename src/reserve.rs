/// Capacity hint that selects the reserving constructor of a
/// [`SimpleVector`](crate::SimpleVector).
///
/// ```
/// # use simple_vector::{reserve, SimpleVector};
/// let v: SimpleVector<u8> = SimpleVector::from(reserve(16));
/// assert_eq!(v.len(), 0);
/// assert_eq!(v.capacity(), 16);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReserveRequest {
    capacity: usize,
}

impl ReserveRequest {
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self { capacity }
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

/// Builds a [`ReserveRequest`] for `capacity` slots.
#[must_use]
pub fn reserve(capacity: usize) -> ReserveRequest {
    ReserveRequest::new(capacity)
}
