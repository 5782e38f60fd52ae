//! In-order traversal primitives: find, each, map and filter.
//!
//! Each primitive has a `try_` form whose callback returns `Result<_, E>`.
//! The first `Err` stops the traversal and is returned unchanged; no partial
//! sequence is produced. [`try_each`] is the exception in spirit only: any
//! side effects its callback performed on earlier elements have already
//! happened by the time the error is returned.

use seqkit_shared_vec::SharedVec;

/// Returns the first element matching `predicate`.
///
/// The predicate is not invoked on elements after the first match.
pub fn find<T, P>(seq: &SharedVec<T>, mut predicate: P) -> Option<&T>
where
    P: FnMut(&T) -> bool,
{
    seq.iter().find(|item| predicate(*item))
}

pub fn try_find<T, E, P>(seq: &SharedVec<T>, mut predicate: P) -> Result<Option<&T>, E>
where
    P: FnMut(&T) -> Result<bool, E>,
{
    for item in seq {
        if predicate(item)? {
            return Ok(Some(item));
        }
    }
    Ok(None)
}

/// Invokes `f` on every element in order.
pub fn each<T, F>(seq: &SharedVec<T>, f: F)
where
    F: FnMut(&T),
{
    seq.iter().for_each(f)
}

/// Invokes `f` on elements in order until it fails.
///
/// On error, `f` has already run on every element before the failing one.
pub fn try_each<T, E, F>(seq: &SharedVec<T>, mut f: F) -> Result<(), E>
where
    F: FnMut(&T) -> Result<(), E>,
{
    for item in seq {
        f(item)?;
    }
    Ok(())
}

/// Returns a sequence of `f(element, index)` for every element.
pub fn map<T, R, F>(seq: &SharedVec<T>, mut f: F) -> SharedVec<R>
where
    F: FnMut(&T, usize) -> R,
{
    seq.iter()
        .enumerate()
        .map(|(index, item)| f(item, index))
        .collect()
}

pub fn try_map<T, R, E, F>(seq: &SharedVec<T>, mut f: F) -> Result<SharedVec<R>, E>
where
    F: FnMut(&T, usize) -> Result<R, E>,
{
    seq.iter()
        .enumerate()
        .map(|(index, item)| f(item, index))
        .collect::<Result<Vec<_>, E>>()
        .map(SharedVec::from_vec)
}

/// Returns the elements matching `predicate`, in their original order.
///
/// Always returns a sequence; when nothing matches it is empty.
pub fn filter<T, P>(seq: &SharedVec<T>, mut predicate: P) -> SharedVec<T>
where
    T: Clone,
    P: FnMut(&T) -> bool,
{
    seq.iter().filter(|item| predicate(*item)).cloned().collect()
}

pub fn try_filter<T, E, P>(seq: &SharedVec<T>, mut predicate: P) -> Result<SharedVec<T>, E>
where
    T: Clone,
    P: FnMut(&T) -> Result<bool, E>,
{
    let mut out = Vec::new();
    for item in seq {
        if predicate(item)? {
            out.push(item.clone());
        }
    }
    Ok(SharedVec::from_vec(out))
}
