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

//! # Indexed Access and Concatenation
//!
//! Read-only entry points that address elements by position or join two
//! sequences into a fresh one. Neither function modifies its inputs.

use crate::error::IndexOutOfRangeError;
use crate::num::resolve_index;
use num_traits::{PrimInt, Signed};

/// Returns a reference to the element at `index`.
///
/// Negative indices count from the end: `-1` is the last element, `-len`
/// the first. The wrap is applied once, so anything below `-len` is out of
/// range, as is anything at or beyond `len`.
///
/// # Errors
///
/// Returns [`IndexOutOfRangeError`] if the resolved position does not
/// address an element. On an empty sequence every index fails.
///
/// # Examples
///
/// ```rust
/// let s = [1, 2, 3, 4, 5];
/// assert_eq!(seqkit::at(&s, 0), Ok(&1));
/// assert_eq!(seqkit::at(&s, -1), Ok(&5));
/// assert!(seqkit::at(&s, -6).is_err());
/// assert!(seqkit::at(&s, 5).is_err());
/// ```
#[inline]
pub fn at<T, I>(seq: &[T], index: I) -> Result<&T, IndexOutOfRangeError<I>>
where
    I: PrimInt + Signed,
{
    resolve_index(seq.len(), index)
        .and_then(|i| seq.get(i))
        .ok_or_else(|| IndexOutOfRangeError::new(index, seq.len()))
}

/// Returns a new vector holding the elements of `first` followed by the
/// elements of `second`.
///
/// The result is allocated with room for exactly `first.len() + second.len()`
/// elements before anything is copied.
///
/// # Examples
///
/// ```rust
/// let a = vec![1, 2];
/// let b = vec![3, 4, 5];
/// let joined = seqkit::concat(&a, &b);
///
/// assert_eq!(joined, vec![1, 2, 3, 4, 5]);
/// assert_eq!(a, vec![1, 2]);
/// assert_eq!(b, vec![3, 4, 5]);
/// ```
#[inline]
pub fn concat<T>(first: &[T], second: &[T]) -> Vec<T>
where
    T: Clone,
{
    let mut result = Vec::with_capacity(first.len() + second.len());
    result.extend_from_slice(first);
    result.extend_from_slice(second);
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{Rng, SeedableRng, rngs::StdRng};

    #[test]
    fn test_at_positive_and_negative() {
        let s = [1, 2, 3, 4, 5];
        assert_eq!(at(&s, 0_i32), Ok(&1));
        assert_eq!(at(&s, 4_i32), Ok(&5));
        assert_eq!(at(&s, -1_i32), Ok(&5));
        assert_eq!(at(&s, -5_i32), Ok(&1));
    }

    #[test]
    fn test_at_out_of_range() {
        let s = [1, 2, 3, 4, 5];
        assert_eq!(at(&s, -6_i32), Err(IndexOutOfRangeError::new(-6, 5)));
        assert_eq!(at(&s, 5_i32), Err(IndexOutOfRangeError::new(5, 5)));
        assert!(at(&s, i64::MIN).is_err());
        assert!(at(&s, i64::MAX).is_err());
    }

    #[test]
    fn test_at_empty_fails_for_every_index() {
        let s: [u8; 0] = [];
        for idx in -3_i16..=3 {
            let err = at(&s, idx).unwrap_err();
            assert_eq!(err.index(), idx);
            assert_eq!(err.sequence_len(), 0);
        }
    }

    #[test]
    fn test_at_negative_matches_positive_randomized() {
        let mut rng = StdRng::seed_from_u64(0x5EED);
        for _ in 0..200 {
            let len = rng.random_range(1..64);
            let s: Vec<u32> = (0..len).map(|_| rng.random()).collect();
            let i = rng.random_range(0..len) as isize;
            let n = s.len() as isize;
            assert!(at(&s, i).is_ok());
            assert_eq!(at(&s, i).ok(), at(&s, i - n).ok());
        }
    }

    #[test]
    fn test_at_works_with_small_index_types() {
        let s: Vec<usize> = (0..300).collect();
        assert_eq!(at(&s, -1_i8), Ok(&299));
        assert_eq!(at(&s, i8::MIN), Ok(&172));
        assert_eq!(at(&s, i8::MAX), Ok(&127));
    }

    #[test]
    fn test_at_zero_sized_elements_beyond_isize_max() {
        let mut s: Vec<()> = Vec::new();
        // SAFETY: `()` is zero-sized, so an empty Vec already has capacity
        // `usize::MAX` and every element is trivially initialized.
        unsafe { s.set_len(usize::MAX) };
        assert_eq!(at(&s, -1_isize), Ok(&()));
        assert_eq!(at(&s, isize::MIN), Ok(&()));
        assert_eq!(at(&s, isize::MAX), Ok(&()));
        assert!(at(&s, usize::MAX as i128).is_err());
    }

    #[test]
    fn test_concat_order_and_capacity() {
        let a = vec!["a".to_string(), "b".to_string()];
        let b = vec!["c".to_string()];
        let joined = concat(&a, &b);

        assert_eq!(joined, ["a", "b", "c"]);
        assert_eq!(joined.capacity(), 3);
        assert_eq!(a, ["a", "b"]);
        assert_eq!(b, ["c"]);
    }

    #[test]
    fn test_concat_with_empty_sides() {
        let empty: Vec<i32> = Vec::new();
        assert_eq!(concat(&empty, &empty), Vec::<i32>::new());
        assert_eq!(concat(&[1, 2], &empty), vec![1, 2]);
        assert_eq!(concat(&empty, &[1, 2]), vec![1, 2]);
    }

    #[test]
    fn test_concat_splits_back_into_inputs_randomized() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..100 {
            let a: Vec<i64> = (0..rng.random_range(0..20)).map(|_| rng.random()).collect();
            let b: Vec<i64> = (0..rng.random_range(0..20)).map(|_| rng.random()).collect();
            let joined = concat(&a, &b);

            assert_eq!(joined.len(), a.len() + b.len());
            let (head, tail) = joined.split_at(a.len());
            assert_eq!(head, &a[..]);
            assert_eq!(tail, &b[..]);
        }
    }
}
