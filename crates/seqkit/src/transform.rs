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

//! # Traversal and Transformation
//!
//! Single-pass traversals in ascending index order. The collecting
//! operations are built on [`for_each`]; [`reduce`] threads its accumulator
//! through a plain fold. Callbacks see the element, its index, and the
//! original input slice. Results are collected into fresh vectors the
//! callbacks never observe.

/// Invokes `action` once per element, in ascending index order.
///
/// # Examples
///
/// ```rust
/// let mut seen = Vec::new();
/// seqkit::for_each(&["a", "b"], |e, i, _| seen.push(format!("{i}:{e}")));
/// assert_eq!(seen, ["0:a", "1:b"]);
/// ```
#[inline]
pub fn for_each<T, F>(seq: &[T], mut action: F)
where
    F: FnMut(&T, usize, &[T]),
{
    for (i, elem) in seq.iter().enumerate() {
        action(elem, i, seq);
    }
}

/// Returns the elements matching `predicate`, cloned, in their original
/// order.
///
/// # Examples
///
/// ```rust
/// let s = [1, 2, 3, 4, 5];
/// assert_eq!(seqkit::filter(&s, |e, _, _| *e > 2), vec![3, 4, 5]);
/// ```
#[inline]
pub fn filter<T, F>(seq: &[T], mut predicate: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T, usize, &[T]) -> bool,
{
    let mut result = Vec::with_capacity(seq.len());
    for_each(seq, |elem, i, full| {
        if predicate(elem, i, full) {
            result.push(elem.clone());
        }
    });
    result
}

/// Returns a vector of the same length as `seq` where position `i` holds
/// `projector(&seq[i], i, seq)`.
///
/// # Examples
///
/// ```rust
/// let s = [1, 2, 3];
/// assert_eq!(seqkit::map(&s, |e, i, _| e * 10 + i as i32), vec![10, 21, 32]);
/// ```
#[inline]
pub fn map<T, V, F>(seq: &[T], mut projector: F) -> Vec<V>
where
    F: FnMut(&T, usize, &[T]) -> V,
{
    let mut result = Vec::with_capacity(seq.len());
    for_each(seq, |elem, i, full| result.push(projector(elem, i, full)));
    result
}

/// Projects and filters in one pass.
///
/// `projector` returns `Some(value)` to keep a transformed value or `None`
/// to drop the element. Kept values appear in the original relative order,
/// and the index passed to `projector` is always the index in `seq`.
///
/// # Examples
///
/// ```rust
/// let s = [1, 2, 3, 4, 5];
/// let halves = seqkit::map_filter(&s, |e, _, _| (e % 2 == 0).then(|| e / 2));
/// assert_eq!(halves, vec![1, 2]);
/// ```
#[inline]
pub fn map_filter<T, V, F>(seq: &[T], mut projector: F) -> Vec<V>
where
    F: FnMut(&T, usize, &[T]) -> Option<V>,
{
    let mut result = Vec::with_capacity(seq.len());
    for_each(seq, |elem, i, full| {
        if let Some(value) = projector(elem, i, full) {
            result.push(value);
        }
    });
    result
}

/// Folds `seq` from left to right, starting at `initial`.
///
/// Returns `initial` untouched when `seq` is empty.
///
/// # Examples
///
/// ```rust
/// let s = [1, 2, 3, 4, 5];
/// assert_eq!(seqkit::reduce(&s, 0, |acc, e, _, _| acc + e), 15);
/// ```
#[inline]
pub fn reduce<T, A, F>(seq: &[T], initial: A, mut accumulator: F) -> A
where
    F: FnMut(A, &T, usize, &[T]) -> A,
{
    seq.iter()
        .enumerate()
        .fold(initial, |acc, (i, elem)| accumulator(acc, elem, i, seq))
}
