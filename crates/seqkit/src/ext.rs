// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! # Method-Call Syntax
//!
//! `SequenceExt` exposes the read-only operations as methods on any slice,
//! and through deref on `Vec<T>` and arrays. Every method forwards to the
//! free function of the same name.
//!
//! `concat` and the mutating operations are not part of the trait: slices
//! and vectors already define inherent `concat`, `push`, and `pop`, and
//! inherent methods would shadow the trait. The projection is called
//! `map_to` for the same reason, because arrays have an inherent `map`.
//!
//! ```rust
//! use seqkit::SequenceExt;
//!
//! let s = vec![1, 2, 3, 4, 5];
//! assert_eq!(s.at(-1), Ok(&5));
//! assert_eq!(s.find_index(|e, _, _| e % 2 == 0), 1);
//! assert_eq!(s.filter(|e, _, _| *e > 2), vec![3, 4, 5]);
//! assert_eq!(s.reduce(0, |acc, e, _, _| acc + e), 15);
//! ```

use crate::error::IndexOutOfRangeError;
use crate::{access, search, transform};
use num_traits::{PrimInt, Signed};

/// Read-only sequence operations in method form.
pub trait SequenceExt<T> {
    /// See [`access::at`].
    fn at<I>(&self, index: I) -> Result<&T, IndexOutOfRangeError<I>>
    where
        I: PrimInt + Signed;

    /// See [`search::find`].
    fn find<F>(&self, predicate: F) -> Option<&T>
    where
        F: FnMut(&T, usize, &[T]) -> bool;

    /// See [`search::find_index`].
    fn find_index<F>(&self, predicate: F) -> isize
    where
        F: FnMut(&T, usize, &[T]) -> bool;

    /// See [`search::find_last`].
    fn find_last<F>(&self, predicate: F) -> Option<&T>
    where
        F: FnMut(&T, usize, &[T]) -> bool;

    /// See [`search::find_last_index`].
    fn find_last_index<F>(&self, predicate: F) -> isize
    where
        F: FnMut(&T, usize, &[T]) -> bool;

    /// See [`search::some`].
    fn some<F>(&self, predicate: F) -> bool
    where
        F: FnMut(&T, usize, &[T]) -> bool;

    /// See [`search::every`].
    fn every<F>(&self, predicate: F) -> bool
    where
        F: FnMut(&T, usize, &[T]) -> bool;

    /// See [`search::includes`].
    fn includes(&self, target: &T) -> bool
    where
        T: PartialEq;

    /// See [`transform::for_each`].
    fn for_each<F>(&self, action: F)
    where
        F: FnMut(&T, usize, &[T]);

    /// See [`transform::filter`].
    fn filter<F>(&self, predicate: F) -> Vec<T>
    where
        T: Clone,
        F: FnMut(&T, usize, &[T]) -> bool;

    /// See [`transform::map`].
    fn map_to<V, F>(&self, projector: F) -> Vec<V>
    where
        F: FnMut(&T, usize, &[T]) -> V;

    /// See [`transform::map_filter`].
    fn map_filter<V, F>(&self, projector: F) -> Vec<V>
    where
        F: FnMut(&T, usize, &[T]) -> Option<V>;

    /// See [`transform::reduce`].
    fn reduce<A, F>(&self, initial: A, accumulator: F) -> A
    where
        F: FnMut(A, &T, usize, &[T]) -> A;
}

impl<T> SequenceExt<T> for [T] {
    #[inline]
    fn at<I>(&self, index: I) -> Result<&T, IndexOutOfRangeError<I>>
    where
        I: PrimInt + Signed,
    {
        access::at(self, index)
    }

    #[inline]
    fn find<F>(&self, predicate: F) -> Option<&T>
    where
        F: FnMut(&T, usize, &[T]) -> bool,
    {
        search::find(self, predicate)
    }

    #[inline]
    fn find_index<F>(&self, predicate: F) -> isize
    where
        F: FnMut(&T, usize, &[T]) -> bool,
    {
        search::find_index(self, predicate)
    }

    #[inline]
    fn find_last<F>(&self, predicate: F) -> Option<&T>
    where
        F: FnMut(&T, usize, &[T]) -> bool,
    {
        search::find_last(self, predicate)
    }

    #[inline]
    fn find_last_index<F>(&self, predicate: F) -> isize
    where
        F: FnMut(&T, usize, &[T]) -> bool,
    {
        search::find_last_index(self, predicate)
    }

    #[inline]
    fn some<F>(&self, predicate: F) -> bool
    where
        F: FnMut(&T, usize, &[T]) -> bool,
    {
        search::some(self, predicate)
    }

    #[inline]
    fn every<F>(&self, predicate: F) -> bool
    where
        F: FnMut(&T, usize, &[T]) -> bool,
    {
        search::every(self, predicate)
    }

    #[inline]
    fn includes(&self, target: &T) -> bool
    where
        T: PartialEq,
    {
        search::includes(self, target)
    }

    #[inline]
    fn for_each<F>(&self, action: F)
    where
        F: FnMut(&T, usize, &[T]),
    {
        transform::for_each(self, action)
    }

    #[inline]
    fn filter<F>(&self, predicate: F) -> Vec<T>
    where
        T: Clone,
        F: FnMut(&T, usize, &[T]) -> bool,
    {
        transform::filter(self, predicate)
    }

    #[inline]
    fn map_to<V, F>(&self, projector: F) -> Vec<V>
    where
        F: FnMut(&T, usize, &[T]) -> V,
    {
        transform::map(self, projector)
    }

    #[inline]
    fn map_filter<V, F>(&self, projector: F) -> Vec<V>
    where
        F: FnMut(&T, usize, &[T]) -> Option<V>,
    {
        transform::map_filter(self, projector)
    }

    #[inline]
    fn reduce<A, F>(&self, initial: A, accumulator: F) -> A
    where
        F: FnMut(A, &T, usize, &[T]) -> A,
    {
        transform::reduce(self, initial, accumulator)
    }
}
