//! Bounds-safe element access and sub-sequence extraction.
//!
//! The lenient functions never fail: an out-of-range index yields `None`, an
//! invalid range yields an empty sequence. The `*_checked` variants report the
//! same conditions as errors for callers that treat them as bugs.

use std::ops::{Range, RangeBounds};

use seqkit_common::{Result, error::Error, verify_arg, verify_op};
use seqkit_shared_vec::SharedVec;

/// Returns the element at `index`, or `None` when `index >= seq.len()`.
#[inline]
pub fn safe_get<T>(seq: &SharedVec<T>, index: usize) -> Option<&T> {
    seq.get(index)
}

/// Returns the element at `index`, or `ErrorKind::IndexOutOfRange`.
pub fn get_checked<T>(seq: &SharedVec<T>, index: usize) -> Result<&T> {
    seq.get(index).ok_or_else(|| {
        log::trace!("index {index} out of range for length {}", seq.len());
        Error::index_out_of_range(index, seq.len())
    })
}

/// Returns the elements `from..=to` as a view sharing `seq`'s storage.
///
/// `to` is the last included index. A reversed range, a `to` at or past the
/// end, or an empty `seq` produce an empty sequence.
pub fn subrange<T>(seq: &SharedVec<T>, from: usize, to: usize) -> SharedVec<T> {
    match inclusive_window(seq.len(), from, to) {
        Some(window) => seq.slice(window),
        None => {
            log::trace!(
                "subrange {from}..={to} rejected for length {}, returning empty",
                seq.len()
            );
            SharedVec::empty()
        }
    }
}

/// Strict form of [`subrange`].
///
/// Fails with `InvalidOperation` on an empty sequence and with
/// `InvalidArgument` when `from > to` or `to >= seq.len()`.
pub fn subrange_checked<T>(seq: &SharedVec<T>, from: usize, to: usize) -> Result<SharedVec<T>> {
    verify_op!(subrange, !seq.is_empty());
    verify_arg!(from, from <= to);
    verify_arg!(to, to < seq.len());
    Ok(seq.slice(from..=to))
}

/// Lenient slicing with standard range syntax (exclusive `end`).
///
/// Any range that [`SharedVec::slice`] would panic on produces an empty
/// sequence instead.
pub fn slice_lenient<T, R>(seq: &SharedVec<T>, range: R) -> SharedVec<T>
where
    R: RangeBounds<usize>,
{
    match seq.try_slice(range) {
        Some(slice) => slice,
        None => {
            log::trace!("slice rejected for length {}, returning empty", seq.len());
            SharedVec::empty()
        }
    }
}

fn inclusive_window(len: usize, from: usize, to: usize) -> Option<Range<usize>> {
    (from <= to && to < len).then(|| from..to + 1)
}
