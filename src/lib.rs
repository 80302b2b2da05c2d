#![cfg_attr(not(test), no_std)]

//! `SimpleVector`: a contiguous growable array built on a single-owner buffer handle.
//!
//! `SimpleVector<T>` owns exactly one [`ArrayPtr`] buffer. The first `len` slots
//! hold the elements; the remaining `capacity - len` slots are allocated but
//! carry no meaning. Every structural change goes through one of two moves:
//! replacing the buffer with a bigger one, or shifting elements inside the
//! current buffer.
//!
//! This crate is `no_std` compatible and only needs `alloc`.
//!
//! # Growth
//!
//! - `push_back()` and `insert()` double the capacity when the vector is full,
//!   starting from 1 for an empty buffer.
//! - `resize(n)` grows to `max(2 * capacity, n)` when `n` exceeds the capacity.
//! - `reserve(n)` grows to exactly `n`, and never shrinks.
//! - `clear()`, `pop_back()`, `erase()` and shrinking `resize()` never release storage.
//!
//! A new buffer is adopted only after all elements have been moved into it.
//!
//! ```
//! use simple_vector::{reserve, SimpleVector};
//!
//! let mut v: SimpleVector<i32> = SimpleVector::from(reserve(4));
//! assert_eq!((v.len(), v.capacity()), (0, 4));
//!
//! v.push_back(1);
//! v.push_back(2);
//! assert_eq!(v, [1, 2]);
//!
//! v.insert(1, 9);
//! assert_eq!(v, [1, 9, 2]);
//!
//! v.erase(0);
//! assert_eq!(v, [9, 2]);
//! assert_eq!(v.capacity(), 4);
//! ```
//!
//! # Element Access
//!
//! Indexing with `v[i]` is the unchecked form: `i < len` is a precondition that
//! is only asserted in debug builds. `at()` and `at_mut()` are checked and
//! report an error instead:
//!
//! ```
//! # use simple_vector::{simple_vector, SimpleVectorError};
//! let mut v = simple_vector![10, 20];
//!
//! *v.at_mut(1).unwrap() += 1;
//! assert_eq!(v[1], 21);
//! assert_eq!(
//!     v.at(2),
//!     Err(SimpleVectorError::IndexOutOfBounds { index: 2, length: 2 })
//! );
//! ```
//!
//! # Ownership Transfer
//!
//! `take()` and `move_from()` hand over the whole buffer. The source is left
//! with zero length and zero capacity:
//!
//! ```
//! # use simple_vector::simple_vector;
//! let mut source = simple_vector![1, 2, 3];
//! let target = source.take();
//!
//! assert_eq!(target, [1, 2, 3]);
//! assert_eq!((source.len(), source.capacity()), (0, 0));
//! ```
//!
//! # Comparison
//!
//! Equality and ordering only consider the occupied range. Ordering is
//! lexicographic:
//!
//! ```
//! # use simple_vector::simple_vector;
//! assert!(simple_vector![1, 2] < simple_vector![1, 2, 3]);
//! assert!(simple_vector![1, 3] > simple_vector![1, 2, 9]);
//! ```

extern crate alloc;

mod array_ptr;
mod cmp;
mod core;
mod error;
mod iter;
mod macros;
mod reserve;

// Re-export public types and traits
pub use crate::array_ptr::ArrayPtr;
pub use crate::core::SimpleVector;
pub use crate::error::SimpleVectorError;
pub use crate::iter::{SimpleVectorIntoIter, SimpleVectorIter, SimpleVectorIterMut};
pub use crate::reserve::{reserve, ReserveRequest};
