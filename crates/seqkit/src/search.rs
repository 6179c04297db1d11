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

//! # Linear Search
//!
//! Predicate-driven scans over a borrowed sequence. Every predicate receives
//! the element, its index, and the full input slice, and is called in strict
//! index order: ascending for the forward searches, descending for the
//! `*_last*` variants. All scans stop at the first decisive answer.
//!
//! Missing matches are reported through `Option` by the element and position
//! searches, and through the [`NOT_FOUND`](crate::num::NOT_FOUND) sentinel by
//! the `*_index` searches.

use crate::num::position_to_sentinel;

/// Returns the position of the first element matching `predicate`.
///
/// # Examples
///
/// ```rust
/// let s = [1, 2, 3, 4, 5];
/// assert_eq!(seqkit::find_position(&s, |e, _, _| e % 2 == 0), Some(1));
/// assert_eq!(seqkit::find_position(&s, |e, _, _| *e > 9), None);
/// ```
#[inline]
pub fn find_position<T, F>(seq: &[T], mut predicate: F) -> Option<usize>
where
    F: FnMut(&T, usize, &[T]) -> bool,
{
    seq.iter()
        .enumerate()
        .find_map(|(i, elem)| predicate(elem, i, seq).then_some(i))
}

/// Returns the position of the last element matching `predicate`, scanning
/// from the back.
///
/// # Examples
///
/// ```rust
/// let s = [1, 2, 3, 4, 5];
/// assert_eq!(seqkit::find_last_position(&s, |e, _, _| e % 2 == 0), Some(3));
/// ```
#[inline]
pub fn find_last_position<T, F>(seq: &[T], mut predicate: F) -> Option<usize>
where
    F: FnMut(&T, usize, &[T]) -> bool,
{
    seq.iter()
        .enumerate()
        .rev()
        .find_map(|(i, elem)| predicate(elem, i, seq).then_some(i))
}

/// Returns the index of the first element matching `predicate`, or
/// [`NOT_FOUND`](crate::num::NOT_FOUND) (`-1`).
///
/// The result is an `isize`, so a match at a position above `isize::MAX`
/// (only reachable with zero-sized elements) is also reported as
/// `NOT_FOUND`. Use [`find_position`] when such lengths are possible.
///
/// # Examples
///
/// ```rust
/// let s = [1, 2, 3, 4, 5];
/// assert_eq!(seqkit::find_index(&s, |e, _, _| e % 2 == 0), 1);
/// assert_eq!(seqkit::find_index(&s, |e, _, _| *e > 9), seqkit::NOT_FOUND);
/// ```
#[inline]
pub fn find_index<T, F>(seq: &[T], predicate: F) -> isize
where
    F: FnMut(&T, usize, &[T]) -> bool,
{
    position_to_sentinel(find_position(seq, predicate))
}

/// Returns the index of the last element matching `predicate`, or
/// [`NOT_FOUND`](crate::num::NOT_FOUND) (`-1`).
///
/// The result is an `isize`, so a match at a position above `isize::MAX`
/// (only reachable with zero-sized elements) is also reported as
/// `NOT_FOUND`. Use [`find_last_position`] when such lengths are possible.
///
/// # Examples
///
/// ```rust
/// let s = [1, 2, 3, 4, 5];
/// assert_eq!(seqkit::find_last_index(&s, |e, _, _| e % 2 == 0), 3);
/// ```
#[inline]
pub fn find_last_index<T, F>(seq: &[T], predicate: F) -> isize
where
    F: FnMut(&T, usize, &[T]) -> bool,
{
    position_to_sentinel(find_last_position(seq, predicate))
}

/// Returns the first element matching `predicate`.
///
/// # Examples
///
/// ```rust
/// let words = ["tide", "quay", "berth"];
/// assert_eq!(seqkit::find(&words, |w, _, _| w.len() > 4), Some(&"berth"));
/// ```
#[inline]
pub fn find<T, F>(seq: &[T], predicate: F) -> Option<&T>
where
    F: FnMut(&T, usize, &[T]) -> bool,
{
    find_position(seq, predicate).and_then(|i| seq.get(i))
}

/// Returns the last element matching `predicate`.
#[inline]
pub fn find_last<T, F>(seq: &[T], predicate: F) -> Option<&T>
where
    F: FnMut(&T, usize, &[T]) -> bool,
{
    find_last_position(seq, predicate).and_then(|i| seq.get(i))
}

/// Returns `true` if at least one element matches `predicate`.
///
/// Stops at the first match. Always `false` for an empty sequence.
///
/// # Examples
///
/// ```rust
/// assert!(seqkit::some(&[1, 2, 3], |e, _, _| *e == 2));
/// assert!(!seqkit::some(&[] as &[i32], |_, _, _| true));
/// ```
#[inline]
pub fn some<T, F>(seq: &[T], mut predicate: F) -> bool
where
    F: FnMut(&T, usize, &[T]) -> bool,
{
    seq.iter()
        .enumerate()
        .any(|(i, elem)| predicate(elem, i, seq))
}

/// Returns `true` if every element matches `predicate`.
///
/// Stops at the first mismatch. Always `true` for an empty sequence.
///
/// # Examples
///
/// ```rust
/// assert!(seqkit::every(&[2, 4, 6], |e, _, _| e % 2 == 0));
/// assert!(seqkit::every(&[] as &[i32], |_, _, _| false));
/// ```
#[inline]
pub fn every<T, F>(seq: &[T], mut predicate: F) -> bool
where
    F: FnMut(&T, usize, &[T]) -> bool,
{
    seq.iter()
        .enumerate()
        .all(|(i, elem)| predicate(elem, i, seq))
}

/// Returns `true` if some element equals `target`.
///
/// # Examples
///
/// ```rust
/// assert!(seqkit::includes(&["a", "b"], &"b"));
/// assert!(!seqkit::includes(&["a", "b"], &"c"));
/// ```
#[inline]
pub fn includes<T>(seq: &[T], target: &T) -> bool
where
    T: PartialEq,
{
    seq.iter().any(|elem| elem == target)
}
