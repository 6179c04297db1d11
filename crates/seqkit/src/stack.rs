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

//! # Stack and Queue Mutation
//!
//! The only operations allowed to change a caller's sequence. Each takes the
//! vector by mutable reference and rewrites it in place. Removing from an
//! empty vector is not an error: it yields `None` and leaves the vector
//! untouched.

/// Removes the last element and returns it, or `None` if `seq` is empty.
///
/// # Examples
///
/// ```rust
/// let mut s = vec![1, 2, 3];
/// assert_eq!(seqkit::pop(&mut s), Some(3));
/// assert_eq!(s, vec![1, 2]);
///
/// let mut empty: Vec<i32> = Vec::new();
/// assert_eq!(seqkit::pop(&mut empty), None);
/// ```
#[inline]
pub fn pop<T>(seq: &mut Vec<T>) -> Option<T> {
    seq.pop()
}

/// Appends every element of `elems` to the end of `seq`, in iteration order.
///
/// An empty `elems` leaves `seq` unchanged.
///
/// # Examples
///
/// ```rust
/// let mut s = vec![1];
/// seqkit::push(&mut s, [2, 3]);
/// assert_eq!(s, vec![1, 2, 3]);
/// ```
#[inline]
pub fn push<T, I>(seq: &mut Vec<T>, elems: I)
where
    I: IntoIterator<Item = T>,
{
    seq.extend(elems);
}

/// Removes the first element and returns it, or `None` if `seq` is empty.
///
/// The remaining elements move down by one position, so this is `O(n)`.
///
/// # Examples
///
/// ```rust
/// let mut s = vec![1, 2, 3];
/// assert_eq!(seqkit::shift(&mut s), Some(1));
/// assert_eq!(s, vec![2, 3]);
/// ```
#[inline]
pub fn shift<T>(seq: &mut Vec<T>) -> Option<T> {
    if seq.is_empty() {
        return None;
    }
    Some(seq.remove(0))
}

/// Inserts every element of `elems` at the front of `seq`, keeping their
/// relative order.
///
/// If `elems` yields nothing, `seq` is neither reallocated nor touched.
///
/// # Examples
///
/// ```rust
/// let mut s = vec![3, 4];
/// seqkit::unshift(&mut s, [1, 2]);
/// assert_eq!(s, vec![1, 2, 3, 4]);
///
/// seqkit::unshift(&mut s, std::iter::empty());
/// assert_eq!(s, vec![1, 2, 3, 4]);
/// ```
pub fn unshift<T, I>(seq: &mut Vec<T>, elems: I)
where
    I: IntoIterator<Item = T>,
{
    let mut elems = elems.into_iter().peekable();
    if elems.peek().is_none() {
        return;
    }
    seq.splice(0..0, elems);
}
