//! An immutable, cheaply cloneable and sliceable shared sequence.
//!
//! [`SharedVec`] owns its elements through an `Arc<[T]>` and exposes a window
//! (`offset`, `len`) into that storage. Cloning and slicing never copy
//! elements; they only bump the reference count. Producing a sequence with
//! different contents (concatenation, transformation) always allocates new
//! storage, so no value ever observes a change to another.

use std::borrow::Borrow;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Bound, Deref, Range, RangeBounds};
use std::sync::Arc;

#[cfg(feature = "serde")]
mod serde_impls;

/// An immutable, cheaply cloneable, sliceable sequence of `T`.
///
/// Equality, ordering and hashing are element-wise. Use [`SharedVec::ptr_eq`]
/// to test whether two values are views of the same storage window.
pub struct SharedVec<T> {
    storage: Arc<[T]>,
    offset: usize,
    len: usize,
}

impl<T> Clone for SharedVec<T> {
    fn clone(&self) -> Self {
        SharedVec {
            storage: Arc::clone(&self.storage),
            offset: self.offset,
            len: self.len,
        }
    }
}

impl<T> SharedVec<T> {
    /// Returns an empty sequence.
    pub fn empty() -> Self {
        SharedVec::from_vec(Vec::new())
    }

    /// Creates a sequence holding a single element.
    pub fn from_elem(elem: T) -> Self {
        SharedVec::from_vec(vec![elem])
    }

    /// Creates a sequence that takes ownership of `vec`.
    pub fn from_vec(vec: Vec<T>) -> Self {
        SharedVec::from_arc(vec.into())
    }

    /// Creates a sequence viewing all of `storage`.
    pub fn from_arc(storage: Arc<[T]>) -> Self {
        let len = storage.len();
        SharedVec {
            storage,
            offset: 0,
            len,
        }
    }

    /// Creates a sequence by cloning the elements of `slice`.
    pub fn from_slice(slice: &[T]) -> Self
    where
        T: Clone,
    {
        SharedVec::from_arc(Arc::from(slice))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the element at `index`, or `None` if it is out of bounds.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.as_slice().get(index)
    }

    #[inline]
    pub fn first(&self) -> Option<&T> {
        self.as_slice().first()
    }

    #[inline]
    pub fn last(&self) -> Option<&T> {
        self.as_slice().last()
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.storage[self.offset..self.offset + self.len]
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    /// Returns `true` if both values view the same window of the same storage.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.storage, &other.storage)
            && self.offset == other.offset
            && self.len == other.len
    }

    /// Returns `true` if both values are backed by the same allocation,
    /// regardless of the window each one views.
    pub fn shares_storage(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.storage, &other.storage)
    }

    /// Returns a sub-sequence sharing this sequence's storage.
    ///
    /// # Panics
    ///
    /// Panics if the range is out of bounds. See [`SharedVec::try_slice`]
    /// for a non-panicking version.
    pub fn slice<R>(&self, range: R) -> Self
    where
        R: RangeBounds<usize>,
    {
        match self.try_slice(range) {
            Some(slice) => slice,
            None => panic!("slice out of bounds"),
        }
    }

    /// Returns a sub-sequence sharing this sequence's storage, or `None`
    /// if the range is reversed or extends past the end.
    pub fn try_slice<R>(&self, range: R) -> Option<Self>
    where
        R: RangeBounds<usize>,
    {
        let Range { start, end } = self.resolve(range)?;
        if start > end || end > self.len {
            return None;
        }
        Some(SharedVec {
            storage: Arc::clone(&self.storage),
            offset: self.offset + start,
            len: end - start,
        })
    }

    fn resolve<R>(&self, range: R) -> Option<Range<usize>>
    where
        R: RangeBounds<usize>,
    {
        let start = match range.start_bound() {
            Bound::Included(&n) => n,
            Bound::Excluded(&n) => n.checked_add(1)?,
            Bound::Unbounded => 0,
        };
        let end = match range.end_bound() {
            Bound::Included(&n) => n.checked_add(1)?,
            Bound::Excluded(&n) => n,
            Bound::Unbounded => self.len,
        };
        Some(start..end)
    }

    /// Copies the viewed elements into a new `Vec`.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.as_slice().to_vec()
    }
}

impl<T> Deref for SharedVec<T> {
    type Target = [T];

    #[inline]
    fn deref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> std::ops::Index<usize> for SharedVec<T> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.as_slice()[index]
    }
}

impl<T> AsRef<[T]> for SharedVec<T> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> Borrow<[T]> for SharedVec<T> {
    fn borrow(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T: fmt::Debug> fmt::Debug for SharedVec<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for SharedVec<T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq> Eq for SharedVec<T> {}

impl<T: PartialEq> PartialEq<[T]> for SharedVec<T> {
    fn eq(&self, other: &[T]) -> bool {
        self.as_slice() == other
    }
}

impl<T: PartialEq, const N: usize> PartialEq<[T; N]> for SharedVec<T> {
    fn eq(&self, other: &[T; N]) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: PartialEq> PartialEq<Vec<T>> for SharedVec<T> {
    fn eq(&self, other: &Vec<T>) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: PartialOrd> PartialOrd for SharedVec<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.as_slice().partial_cmp(other.as_slice())
    }
}

impl<T: Ord> Ord for SharedVec<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_slice().cmp(other.as_slice())
    }
}

impl<T: Hash> Hash for SharedVec<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state)
    }
}

impl<T> Default for SharedVec<T> {
    fn default() -> Self {
        SharedVec::empty()
    }
}

impl<T> From<Vec<T>> for SharedVec<T> {
    fn from(vec: Vec<T>) -> Self {
        SharedVec::from_vec(vec)
    }
}

impl<T> From<Arc<[T]>> for SharedVec<T> {
    fn from(storage: Arc<[T]>) -> Self {
        SharedVec::from_arc(storage)
    }
}

impl<T: Clone> From<&[T]> for SharedVec<T> {
    fn from(slice: &[T]) -> Self {
        SharedVec::from_slice(slice)
    }
}

impl<T, const N: usize> From<[T; N]> for SharedVec<T> {
    fn from(array: [T; N]) -> Self {
        SharedVec::from_vec(Vec::from(array))
    }
}

impl<T> FromIterator<T> for SharedVec<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        SharedVec::from_arc(iter.into_iter().collect())
    }
}

impl<'a, T> IntoIterator for &'a SharedVec<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

/// By-value iterator over a [`SharedVec`], cloning each element out of the
/// shared storage.
#[derive(Clone)]
pub struct IntoIter<T> {
    storage: Arc<[T]>,
    pos: usize,
    end: usize,
}

impl<T: Clone> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.pos < self.end {
            let item = self.storage[self.pos].clone();
            self.pos += 1;
            Some(item)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.end - self.pos;
        (remaining, Some(remaining))
    }
}

impl<T: Clone> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> {
        if self.pos < self.end {
            self.end -= 1;
            Some(self.storage[self.end].clone())
        } else {
            None
        }
    }
}

impl<T: Clone> ExactSizeIterator for IntoIter<T> {}

impl<T: Clone> IntoIterator for SharedVec<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            pos: self.offset,
            end: self.offset + self.len,
            storage: self.storage,
        }
    }
}
