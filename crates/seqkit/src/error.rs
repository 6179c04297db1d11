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

//! Error types reported by the sequence operations.
//!
//! Only bounds violations are errors. Empty sequences and missing matches
//! are ordinary outcomes and are reported through `Option` or the
//! `NOT_FOUND` sentinel instead.

/// Returned by [`at`](crate::access::at) when an index does not address an
/// element, even after a negative index has been wrapped from the end.
///
/// The error keeps the index exactly as the caller passed it, so it can be
/// reported without reconstructing the original request.
///
/// # Examples
///
/// ```rust
/// # use seqkit::error::IndexOutOfRangeError;
/// let err = seqkit::at(&[1, 2, 3], -4_i32).unwrap_err();
/// assert_eq!(err, IndexOutOfRangeError::new(-4, 3));
/// assert_eq!(err.to_string(), "index -4 out of range for sequence of length 3");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IndexOutOfRangeError<I> {
    index: I,
    len: usize,
}

impl<I> IndexOutOfRangeError<I> {
    /// Creates a new error for `index` against a sequence of length `len`.
    #[inline]
    pub const fn new(index: I, len: usize) -> Self {
        Self { index, len }
    }

    /// Returns the length of the sequence at the time of the access.
    #[inline]
    pub const fn sequence_len(&self) -> usize {
        self.len
    }
}

impl<I> IndexOutOfRangeError<I>
where
    I: Copy,
{
    /// Returns the index as it was requested.
    #[inline]
    pub const fn index(&self) -> I {
        self.index
    }
}

impl<I> std::fmt::Display for IndexOutOfRangeError<I>
where
    I: std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "index {} out of range for sequence of length {}",
            self.index, self.len
        )
    }
}

impl<I> std::error::Error for IndexOutOfRangeError<I>
where
    I: std::fmt::Debug + std::fmt::Display,
{
}
