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

//! # Index Arithmetic
//!
//! Signed index resolution shared by the sequence operations. Indices may be
//! any primitive signed integer; negative values count from the end of the
//! sequence, so `-1` addresses the last element.
//!
//! The module also defines the `-1` sentinel returned by the index-producing
//! searches when nothing matches.

use num_traits::{PrimInt, Signed};

/// Sentinel returned by [`find_index`](crate::search::find_index) and
/// [`find_last_index`](crate::search::find_last_index) when no element
/// matches. No valid position can be negative, so it never collides.
pub const NOT_FOUND: isize = -1;

/// Resolves a possibly negative `index` against a sequence of length `len`.
///
/// A negative index is shifted by `len` exactly once. Returns `None` if the
/// resolved position is still negative or is `>= len`. The shift is done in
/// unsigned arithmetic, so lengths above `isize::MAX` (possible for
/// zero-sized element types) resolve correctly.
///
/// # Examples
///
/// ```rust
/// # use seqkit::num::resolve_index;
/// assert_eq!(resolve_index(5, 0_i32), Some(0));
/// assert_eq!(resolve_index(5, -1_i32), Some(4));
/// assert_eq!(resolve_index(5, -5_i32), Some(0));
/// assert_eq!(resolve_index(5, -6_i32), None);
/// assert_eq!(resolve_index(5, 5_i32), None);
/// assert_eq!(resolve_index(0, 0_i32), None);
/// ```
#[inline]
pub fn resolve_index<I>(len: usize, index: I) -> Option<usize>
where
    I: PrimInt + Signed,
{
    // Every primitive signed integer widens losslessly into i128
    let raw = index.to_i128()?;
    let resolved = if raw < 0 {
        len.checked_sub(usize::try_from(raw.unsigned_abs()).ok()?)?
    } else {
        usize::try_from(raw).ok()?
    };
    (resolved < len).then_some(resolved)
}

/// Converts an optional position into the sentinel form used by the
/// `*_index` searches. Positions above `isize::MAX` also map to `NOT_FOUND`.
#[inline]
pub(crate) fn position_to_sentinel(position: Option<usize>) -> isize {
    position
        .and_then(|p| isize::try_from(p).ok())
        .unwrap_or(NOT_FOUND)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_index_positive() {
        assert_eq!(resolve_index(3, 0_i64), Some(0));
        assert_eq!(resolve_index(3, 2_i64), Some(2));
        assert_eq!(resolve_index(3, 3_i64), None);
    }

    #[test]
    fn test_resolve_index_negative_wraps_once() {
        assert_eq!(resolve_index(3, -1_i64), Some(2));
        assert_eq!(resolve_index(3, -3_i64), Some(0));
        // A second wrap is never applied
        assert_eq!(resolve_index(3, -4_i64), None);
        assert_eq!(resolve_index(3, -7_i64), None);
    }

    #[test]
    fn test_resolve_index_empty_rejects_everything() {
        for idx in [-2_i32, -1, 0, 1, 2] {
            assert_eq!(resolve_index(0, idx), None);
        }
    }

    #[test]
    fn test_resolve_index_extreme_values() {
        assert_eq!(resolve_index(10, isize::MIN), None);
        assert_eq!(resolve_index(10, isize::MAX), None);
        assert_eq!(resolve_index(10, i128::MIN), None);
        assert_eq!(resolve_index(10, i128::MAX), None);
        assert_eq!(resolve_index(10, i8::MIN), None);
        assert_eq!(resolve_index(200, i8::MIN), Some(72));
    }

    #[test]
    fn test_resolve_index_huge_len() {
        assert_eq!(resolve_index(usize::MAX, -1_isize), Some(usize::MAX - 1));
        assert_eq!(
            resolve_index(usize::MAX, isize::MIN),
            Some(usize::MAX - isize::MIN.unsigned_abs())
        );

        let len = usize::MAX as i128;
        assert_eq!(resolve_index(usize::MAX, len - 1), Some(usize::MAX - 1));
        assert_eq!(resolve_index(usize::MAX, len), None);
        assert_eq!(resolve_index(usize::MAX, -len), Some(0));
        assert_eq!(resolve_index(usize::MAX, -len - 1), None);
    }

    #[test]
    fn test_position_to_sentinel() {
        assert_eq!(position_to_sentinel(None), NOT_FOUND);
        assert_eq!(position_to_sentinel(Some(0)), 0);
        assert_eq!(position_to_sentinel(Some(41)), 41);
    }

    #[test]
    fn test_position_to_sentinel_unrepresentable() {
        // Positions beyond isize::MAX have no sentinel form
        assert_eq!(position_to_sentinel(Some(usize::MAX)), NOT_FOUND);
        assert_eq!(position_to_sentinel(Some(isize::MAX as usize)), isize::MAX);
    }
}
