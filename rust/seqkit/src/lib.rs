//! Bounds-safe, functional-style operations over immutable shared sequences.
//!
//! [`SequenceExt`] extends [`SharedVec`] with:
//!
//! - **Safe access**: [`safe_get`](SequenceExt::safe_get) and
//!   [`subrange`](SequenceExt::subrange) degrade to `None` / an empty
//!   sequence instead of panicking on bad indices.
//! - **Concatenation**: [`concat_parts`](SequenceExt::concat_parts) and
//!   [`concat_seq`](SequenceExt::concat_seq) splice sequence arguments one
//!   level deep (see [`Part`], [`Nested`] and [`Splice`]).
//! - **Traversal**: [`find`](SequenceExt::find), [`each`](SequenceExt::each),
//!   [`map`](SequenceExt::map), [`filter`](SequenceExt::filter) and
//!   [`join_with`](SequenceExt::join_with), each with a `try_` form for
//!   fallible callbacks.
//!
//! No operation mutates its receiver. Every producing operation returns a
//! new [`SharedVec`]; sub-sequences share storage with their source, other
//! results own fresh storage.
//!
//! ```
//! use seqkit::{SequenceExt, SharedVec};
//!
//! let seq = SharedVec::from([1, 2, 3, 4]);
//! assert_eq!(seq.safe_get(9), None);
//! assert_eq!(seq.subrange(1, 2), [2, 3]);
//! assert_eq!(seq.map(|x, i| x * 10 + i as i32), [10, 21, 32, 43]);
//! assert_eq!(seq.filter(|x| x % 2 == 0).join_with("/", |x| *x), "2/4");
//! ```

use std::fmt::Display;
use std::ops::RangeBounds;

pub mod access;
pub mod concat;
pub mod join;
pub mod traverse;


pub use concat::{Nested, Part, Splice};
pub use seqkit_common::{Result, error::Error, error::ErrorKind};
pub use seqkit_shared_vec::SharedVec;

/// Safe access, one-level-flattening concatenation and functional traversal
/// over an immutable sequence.
pub trait SequenceExt<T> {
    /// Returns the element at `index`, or `None` if `index >= len`.
    fn safe_get(&self, index: usize) -> Option<&T>;

    /// Strict form of [`safe_get`](SequenceExt::safe_get): out-of-range
    /// indices yield `ErrorKind::IndexOutOfRange`.
    fn get_checked(&self, index: usize) -> Result<&T>;

    /// Returns elements `from..=to` (both inclusive), or an empty sequence
    /// if the range is reversed, reaches past the end, or the receiver is
    /// empty. The result shares the receiver's storage.
    fn subrange(&self, from: usize, to: usize) -> SharedVec<T>;

    /// Strict form of [`subrange`](SequenceExt::subrange).
    fn subrange_checked(&self, from: usize, to: usize) -> Result<SharedVec<T>>;

    /// Like [`subrange`](SequenceExt::subrange) but takes a standard
    /// (exclusive-end) range.
    fn slice_lenient<R: RangeBounds<usize>>(&self, range: R) -> SharedVec<T>;

    /// Returns the receiver followed by each part in order. `Part::Many`
    /// arguments are spliced element by element, one level deep.
    ///
    /// ```
    /// use seqkit::{Part, SequenceExt, SharedVec};
    ///
    /// let seq = SharedVec::from([1, 2]);
    /// let out = seq.concat_parts([Part::One(3), Part::Many(SharedVec::from([4, 5]))]);
    /// assert_eq!(out, [1, 2, 3, 4, 5]);
    /// ```
    fn concat_parts<S, I>(&self, parts: I) -> SharedVec<T>
    where
        T: Clone,
        S: Splice<T>,
        I: IntoIterator<Item = S>;

    /// Returns the receiver followed by the elements of `other`, each spliced
    /// one level deep.
    ///
    /// ```
    /// use seqkit::{Nested, SequenceExt, SharedVec};
    ///
    /// let n = Nested::leaf;
    /// let seq = SharedVec::from([n(1), n(2)]);
    /// let other = SharedVec::from([Nested::seq([n(3), Nested::seq([n(4)])])]);
    /// assert_eq!(seq.concat_seq(&other), [n(1), n(2), n(3), Nested::seq([n(4)])]);
    /// ```
    fn concat_seq<S>(&self, other: &SharedVec<S>) -> SharedVec<T>
    where
        T: Clone,
        S: Splice<T>;

    /// Returns the first element matching `predicate`, evaluating it on no
    /// element past the match.
    fn find<P>(&self, predicate: P) -> Option<&T>
    where
        P: FnMut(&T) -> bool;

    fn try_find<E, P>(&self, predicate: P) -> std::result::Result<Option<&T>, E>
    where
        P: FnMut(&T) -> std::result::Result<bool, E>;

    /// Calls `f` on every element, in order.
    fn each<F>(&self, f: F)
    where
        F: FnMut(&T);

    /// Calls `f` on elements in order, stopping at the first error.
    ///
    /// Side effects of `f` on elements preceding the failing one are not
    /// undone.
    fn try_each<E, F>(&self, f: F) -> std::result::Result<(), E>
    where
        F: FnMut(&T) -> std::result::Result<(), E>;

    /// Returns `f(element, index)` for every element, in order.
    fn map<R, F>(&self, f: F) -> SharedVec<R>
    where
        F: FnMut(&T, usize) -> R;

    fn try_map<R, E, F>(&self, f: F) -> std::result::Result<SharedVec<R>, E>
    where
        F: FnMut(&T, usize) -> std::result::Result<R, E>;

    /// Returns the matching elements in order; empty (never absent) when
    /// nothing matches.
    fn filter<P>(&self, predicate: P) -> SharedVec<T>
    where
        T: Clone,
        P: FnMut(&T) -> bool;

    fn try_filter<E, P>(&self, predicate: P) -> std::result::Result<SharedVec<T>, E>
    where
        T: Clone,
        P: FnMut(&T) -> std::result::Result<bool, E>;

    /// Formats each element and joins the pieces with `separator` between
    /// neighbours. Empty input gives `""`.
    fn join_with<S, F>(&self, separator: &str, formatter: F) -> String
    where
        S: Display,
        F: FnMut(&T) -> S;

    fn try_join_with<S, E, F>(
        &self,
        separator: &str,
        formatter: F,
    ) -> std::result::Result<String, E>
    where
        S: Display,
        F: FnMut(&T) -> std::result::Result<S, E>;
}

impl<T> SequenceExt<T> for SharedVec<T> {
    #[inline]
    fn safe_get(&self, index: usize) -> Option<&T> {
        access::safe_get(self, index)
    }

    fn get_checked(&self, index: usize) -> Result<&T> {
        access::get_checked(self, index)
    }

    fn subrange(&self, from: usize, to: usize) -> SharedVec<T> {
        access::subrange(self, from, to)
    }

    fn subrange_checked(&self, from: usize, to: usize) -> Result<SharedVec<T>> {
        access::subrange_checked(self, from, to)
    }

    fn slice_lenient<R: RangeBounds<usize>>(&self, range: R) -> SharedVec<T> {
        access::slice_lenient(self, range)
    }

    fn concat_parts<S, I>(&self, parts: I) -> SharedVec<T>
    where
        T: Clone,
        S: Splice<T>,
        I: IntoIterator<Item = S>,
    {
        concat::concat_parts(self, parts)
    }

    fn concat_seq<S>(&self, other: &SharedVec<S>) -> SharedVec<T>
    where
        T: Clone,
        S: Splice<T>,
    {
        concat::concat_seq(self, other)
    }

    fn find<P>(&self, predicate: P) -> Option<&T>
    where
        P: FnMut(&T) -> bool,
    {
        traverse::find(self, predicate)
    }

    fn try_find<E, P>(&self, predicate: P) -> std::result::Result<Option<&T>, E>
    where
        P: FnMut(&T) -> std::result::Result<bool, E>,
    {
        traverse::try_find(self, predicate)
    }

    fn each<F>(&self, f: F)
    where
        F: FnMut(&T),
    {
        traverse::each(self, f)
    }

    fn try_each<E, F>(&self, f: F) -> std::result::Result<(), E>
    where
        F: FnMut(&T) -> std::result::Result<(), E>,
    {
        traverse::try_each(self, f)
    }

    fn map<R, F>(&self, f: F) -> SharedVec<R>
    where
        F: FnMut(&T, usize) -> R,
    {
        traverse::map(self, f)
    }

    fn try_map<R, E, F>(&self, f: F) -> std::result::Result<SharedVec<R>, E>
    where
        F: FnMut(&T, usize) -> std::result::Result<R, E>,
    {
        traverse::try_map(self, f)
    }

    fn filter<P>(&self, predicate: P) -> SharedVec<T>
    where
        T: Clone,
        P: FnMut(&T) -> bool,
    {
        traverse::filter(self, predicate)
    }

    fn try_filter<E, P>(&self, predicate: P) -> std::result::Result<SharedVec<T>, E>
    where
        T: Clone,
        P: FnMut(&T) -> std::result::Result<bool, E>,
    {
        traverse::try_filter(self, predicate)
    }

    fn join_with<S, F>(&self, separator: &str, formatter: F) -> String
    where
        S: Display,
        F: FnMut(&T) -> S,
    {
        join::join_with(self, separator, formatter)
    }

    fn try_join_with<S, E, F>(
        &self,
        separator: &str,
        formatter: F,
    ) -> std::result::Result<String, E>
    where
        S: Display,
        F: FnMut(&T) -> std::result::Result<S, E>,
    {
        join::try_join_with(self, separator, formatter)
    }
}
