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

//! # Seqkit
//!
//! Generic helpers for ordered, indexable sequences: signed indexing,
//! concatenation, stack and queue mutation, predicate search, and the usual
//! traversal family (`for_each`, `filter`, `map`, `map_filter`, `reduce`).
//!
//! Read-only operations borrow a slice `&[T]` and never modify it. The four
//! mutating operations (`push`, `pop`, `shift`, `unshift`) take `&mut Vec<T>`.
//! Every callback receives the element, its index, and the full input slice.
//!
//! ## Modules
//!
//! - `access`: `at` with negative indices counted from the end, and `concat`.
//! - `stack`: `push`, `pop`, `shift`, `unshift`.
//! - `search`: `find`, `find_index`, `find_last`, `find_last_index`, their
//!   `Option<usize>` counterparts, `some`, `every`, `includes`.
//! - `transform`: `for_each`, `filter`, `map`, `map_filter`, `reduce`.
//! - `ext`: `SequenceExt`, the read-only operations in method form.
//! - `num`: index resolution and the `NOT_FOUND` sentinel.
//! - `error`: `IndexOutOfRangeError`.
//!
//! ## Failure Model
//!
//! Nothing in this crate panics. An out-of-range `at` is an
//! [`IndexOutOfRangeError`]. Empty sequences and missing matches are expected
//! outcomes: `pop`, `shift`, `find`, and `find_last` return `None`, while
//! `find_index` and `find_last_index` return [`NOT_FOUND`] (`-1`).
//!
//! ## Usage
//!
//! ```rust
//! let s = vec![1, 2, 3, 4, 5];
//!
//! assert_eq!(seqkit::find_index(&s, |e, _, _| e % 2 == 0), 1);
//! assert_eq!(seqkit::find_last_index(&s, |e, _, _| e % 2 == 0), 3);
//! assert_eq!(seqkit::filter(&s, |e, _, _| *e > 2), vec![3, 4, 5]);
//! assert_eq!(seqkit::reduce(&s, 0, |acc, e, _, _| acc + e), 15);
//! assert_eq!(seqkit::at(&s, -1), Ok(&5));
//! assert!(seqkit::at(&s, -6).is_err());
//! ```

pub mod access;
pub mod error;
pub mod ext;
pub mod num;
pub mod search;
pub mod stack;
pub mod transform;

pub use access::{at, concat};
pub use error::IndexOutOfRangeError;
pub use ext::SequenceExt;
pub use num::{NOT_FOUND, resolve_index};
pub use search::{
    every, find, find_index, find_last, find_last_index, find_last_position, find_position,
    includes, some,
};
pub use stack::{pop, push, shift, unshift};
pub use transform::{filter, for_each, map, map_filter, reduce};
