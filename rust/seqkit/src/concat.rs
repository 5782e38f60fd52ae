//! Concatenation with one level of flattening.
//!
//! Arguments are spliced into the result through the [`Splice`] trait: an
//! argument either contributes itself as one element or contributes each
//! element of a sequence it carries. Sequences nested deeper than that are
//! appended as elements, never flattened further.

use seqkit_shared_vec::SharedVec;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An argument that knows how it lands in a sequence of `T`.
pub trait Splice<T> {
    /// Number of elements this argument contributes.
    fn spliced_len(&self) -> usize;

    /// Appends this argument's contribution to `out`, consuming it.
    fn splice_into(self, out: &mut Vec<T>)
    where
        Self: Sized;

    /// Appends clones of this argument's contribution to `out`.
    fn splice_cloned_into(&self, out: &mut Vec<T>);
}

/// A concatenation argument: a single element, or a sequence whose elements
/// are spliced in individually.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Part<T> {
    One(T),
    Many(SharedVec<T>),
}

impl<T> From<SharedVec<T>> for Part<T> {
    fn from(seq: SharedVec<T>) -> Self {
        Part::Many(seq)
    }
}

impl<T: Clone> Splice<T> for Part<T> {
    fn spliced_len(&self) -> usize {
        match self {
            Part::One(_) => 1,
            Part::Many(seq) => seq.len(),
        }
    }

    fn splice_into(self, out: &mut Vec<T>) {
        match self {
            Part::One(elem) => out.push(elem),
            Part::Many(seq) => out.extend(seq),
        }
    }

    fn splice_cloned_into(&self, out: &mut Vec<T>) {
        match self {
            Part::One(elem) => out.push(elem.clone()),
            Part::Many(seq) => out.extend_from_slice(seq),
        }
    }
}

/// An element of a heterogeneous sequence that may itself hold a sequence of
/// the same element family.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Nested<T> {
    Leaf(T),
    Seq(SharedVec<Nested<T>>),
}

impl<T> Nested<T> {
    pub fn leaf(value: T) -> Self {
        Nested::Leaf(value)
    }

    /// Wraps the given elements into a nested sequence element.
    pub fn seq(items: impl IntoIterator<Item = Nested<T>>) -> Self {
        Nested::Seq(items.into_iter().collect())
    }

    pub fn as_leaf(&self) -> Option<&T> {
        match self {
            Nested::Leaf(value) => Some(value),
            Nested::Seq(_) => None,
        }
    }

    pub fn as_seq(&self) -> Option<&SharedVec<Nested<T>>> {
        match self {
            Nested::Leaf(_) => None,
            Nested::Seq(seq) => Some(seq),
        }
    }

    pub fn is_seq(&self) -> bool {
        matches!(self, Nested::Seq(_))
    }
}

impl<T: Clone> Splice<Nested<T>> for Nested<T> {
    fn spliced_len(&self) -> usize {
        match self {
            Nested::Leaf(_) => 1,
            Nested::Seq(seq) => seq.len(),
        }
    }

    fn splice_into(self, out: &mut Vec<Nested<T>>) {
        match self {
            Nested::Leaf(_) => out.push(self),
            Nested::Seq(seq) => out.extend(seq),
        }
    }

    fn splice_cloned_into(&self, out: &mut Vec<Nested<T>>) {
        match self {
            Nested::Leaf(_) => out.push(self.clone()),
            Nested::Seq(seq) => out.extend_from_slice(seq),
        }
    }
}

/// Returns `seq` followed by every part, each spliced one level deep.
pub fn concat_parts<T, S, I>(seq: &SharedVec<T>, parts: I) -> SharedVec<T>
where
    T: Clone,
    S: Splice<T>,
    I: IntoIterator<Item = S>,
{
    let parts = parts.into_iter();
    let mut out = Vec::with_capacity(seq.len() + parts.size_hint().0);
    out.extend_from_slice(seq);
    for part in parts {
        part.splice_into(&mut out);
    }
    log::debug!("concat_parts: {} + {} elements", seq.len(), out.len() - seq.len());
    SharedVec::from_vec(out)
}

/// Returns `seq` followed by the elements of `other`, each spliced one
/// level deep.
pub fn concat_seq<T, S>(seq: &SharedVec<T>, other: &SharedVec<S>) -> SharedVec<T>
where
    T: Clone,
    S: Splice<T>,
{
    let extra: usize = other.iter().map(<S as Splice<T>>::spliced_len).sum();
    let mut out = Vec::with_capacity(seq.len() + extra);
    out.extend_from_slice(seq);
    for item in other {
        item.splice_cloned_into(&mut out);
    }
    log::debug!("concat_seq: {} + {extra} elements", seq.len());
    SharedVec::from_vec(out)
}

/// Concatenates single elements and sequences onto a sequence.
///
/// Each argument is tagged `one` (appended as a single element) or `many`
/// (a [`SharedVec`] spliced element by element).
///
/// ```
/// use seqkit::{SharedVec, concat_parts};
///
/// let base = SharedVec::from([1, 2]);
/// let tail = SharedVec::from([4, 5]);
/// let all = concat_parts!(base; one 3, many tail);
/// assert_eq!(all, [1, 2, 3, 4, 5]);
/// ```
#[macro_export]
macro_rules! concat_parts {
    (@part one $arg:expr) => {
        $crate::Part::One($arg)
    };
    (@part many $arg:expr) => {
        $crate::Part::Many($arg)
    };
    ($seq:expr; $($kind:ident $arg:expr),+ $(,)?) => {
        $crate::SequenceExt::concat_parts(
            &$seq,
            [$($crate::concat_parts!(@part $kind $arg)),+],
        )
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaf(v: i32) -> Nested<i32> {
        Nested::leaf(v)
    }

    #[test]
    fn concat_parts_flattens_one_level() {
        let seq = SharedVec::from([1, 2]);
        let result = concat_parts(
            &seq,
            [
                Part::One(3),
                Part::Many(SharedVec::from([4, 5])),
                Part::One(6),
            ],
        );
        assert_eq!(result, [1, 2, 3, 4, 5, 6]);
        assert_eq!(seq, [1, 2]);
    }

    #[test]
    fn concat_parts_without_arguments_copies_receiver() {
        let seq = SharedVec::from([1, 2]);
        let result = concat_parts(&seq, Vec::<Part<i32>>::new());
        assert_eq!(result, seq);
        assert!(!result.shares_storage(&seq));
    }

    #[test]
    fn concat_parts_nested_flattens_once() {
        let seq = SharedVec::from([leaf(1), leaf(2)]);
        let inner = Nested::seq([leaf(4)]);
        let result = concat_parts(
            &seq,
            [Nested::seq([leaf(3), inner.clone()]), leaf(5)],
        );
        assert_eq!(result, [leaf(1), leaf(2), leaf(3), inner, leaf(5)]);
        assert_eq!(seq.len(), 2);
    }

    #[test]
    fn concat_parts_with_empty_sequence_part() {
        let seq = SharedVec::from([1]);
        let result = concat_parts(&seq, [Part::Many(SharedVec::empty()), Part::One(2)]);
        assert_eq!(result, [1, 2]);
    }

    #[test]
    fn concat_parts_macro() {
        let seq = SharedVec::from(["a"]);
        let tail = SharedVec::from(["c", "d"]);
        let result = concat_parts!(seq; one "b", many tail.clone(), one "e");
        assert_eq!(result, ["a", "b", "c", "d", "e"]);
        assert_eq!(tail.len(), 2);
    }

    #[test]
    fn concat_seq_with_parts() {
        let seq = SharedVec::from([1, 2]);
        let other = SharedVec::from([Part::Many(SharedVec::from([3, 4])), Part::One(5)]);
        assert_eq!(concat_seq(&seq, &other), [1, 2, 3, 4, 5]);
        assert_eq!(other.len(), 2);
    }

    #[test]
    fn concat_seq_nested_flattens_once() {
        let seq = SharedVec::from([leaf(1), leaf(2)]);
        let other = SharedVec::from([Nested::seq([leaf(3), leaf(4)]), leaf(5)]);
        let result = concat_seq(&seq, &other);
        assert_eq!(result, [leaf(1), leaf(2), leaf(3), leaf(4), leaf(5)]);
    }

    #[test]
    fn concat_seq_nested_keeps_deeper_levels() {
        let seq = SharedVec::from([leaf(1), leaf(2)]);
        let inner = Nested::seq([leaf(4)]);
        let other = SharedVec::from([Nested::seq([leaf(3), inner.clone()])]);
        let result = concat_seq(&seq, &other);
        assert_eq!(result, [leaf(1), leaf(2), leaf(3), inner]);
        assert!(result[3].is_seq());
        assert_eq!(result[2].as_leaf(), Some(&3));
        assert_eq!(result[3].as_seq(), Some(&SharedVec::from([leaf(4)])));
        assert_eq!(result[2].as_seq(), None);
    }

    #[test]
    fn concat_seq_empty_inputs() {
        let empty = SharedVec::<Nested<i32>>::empty();
        assert!(concat_seq(&empty, &empty).is_empty());
        let seq = SharedVec::from([leaf(1)]);
        assert_eq!(concat_seq(&seq, &empty), seq);
        assert_eq!(concat_seq(&empty, &seq), seq);
    }

    #[test]
    fn spliced_len_counts_contribution() {
        assert_eq!(Part::One(1).spliced_len(), 1);
        assert_eq!(Part::Many(SharedVec::from([1, 2, 3])).spliced_len(), 3);
        assert_eq!(Nested::seq([leaf(1), leaf(2)]).spliced_len(), 2);
        assert_eq!(leaf(1).spliced_len(), 1);
    }
}
