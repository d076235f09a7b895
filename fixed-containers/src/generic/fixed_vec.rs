//! Fixed-capacity sequence for allocation-free environments.
//!
//! This module provides [`BasicFixedVec`], a vector-like container over a fixed
//! [`Storage`] whose element transfers go through a [`TransferPolicy`], and the
//! [`FixedVec`] alias that pairs it with inline [`ArrayStore`] storage.
//!
//! Every capacity check runs before any slot is touched: an operation that
//! returns an error leaves the container exactly as it found it.

use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::marker::PhantomData;
use core::mem;
use core::ops::{Index, IndexMut, Range};

use tracing::{debug, trace};

use crate::error::CollectionError;
use crate::generic::storage::{ArrayStore, Storage};
use crate::generic::transfer::{CloneTransfer, TransferPolicy};
use crate::precondition;

/// A bounded, order-preserving sequence over a fixed slot store.
///
/// `BasicFixedVec` keeps `len <= S::CAPACITY` at all times. Elements live in
/// slots `[0, len)` in caller-defined order; slots past `len` are never read
/// through the public API.
///
/// # Type Parameters
///
/// * `S` - The backing store. Its `CAPACITY` is the hard bound.
/// * `P` - The transfer policy used for every copy, shift, fill and erase.
///
/// Most code uses the [`FixedVec`] alias instead of naming a store.
pub struct BasicFixedVec<S, P = CloneTransfer> {
    store: S,
    len: usize,
    _policy: PhantomData<fn() -> P>,
}

/// A [`BasicFixedVec`] with `N` inline slots of `T`.
///
/// # Examples
///
/// ```rust
/// use fixed_containers::generic::fixed_vec::FixedVec;
///
/// let mut list: FixedVec<u32, 4> = FixedVec::new();
///
/// list.push_back(10).unwrap();
/// list.push_back(20).unwrap();
/// list.insert(1, 15).unwrap();
/// assert_eq!(list.as_slice(), &[10, 15, 20]);
///
/// assert_eq!(list.pop_back(), Some(20));
/// assert_eq!(list.len(), 2);
/// ```
pub type FixedVec<T, const N: usize, P = CloneTransfer> = BasicFixedVec<ArrayStore<T, N>, P>;

impl<S: Storage + Default, P> Default for BasicFixedVec<S, P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Storage + Default, P> BasicFixedVec<S, P> {
    /// Creates a new, empty sequence.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fixed_containers::generic::fixed_vec::FixedVec;
    ///
    /// let list: FixedVec<u32, 10> = FixedVec::new();
    /// assert!(list.is_empty());
    /// assert_eq!(list.capacity(), 10);
    /// ```
    pub fn new() -> Self {
        Self {
            store: S::default(),
            len: 0,
            _policy: PhantomData,
        }
    }

    /// Creates a sequence of `len` default-valued elements.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::CapacityExceeded`] if `len > capacity`.
    pub fn with_len(len: usize) -> Result<Self, CollectionError> {
        let mut list = Self::new();
        list.ensure_room(len)?;
        list.len = len;
        Ok(list)
    }
}

impl<S, P> BasicFixedVec<S, P>
where
    S: Storage + Default,
    P: TransferPolicy<S::Item>,
{
    /// Creates a sequence holding `len` copies of `value`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fixed_containers::generic::fixed_vec::FixedVec;
    ///
    /// let list: FixedVec<i32, 10> = FixedVec::from_elem(6, &7).unwrap();
    /// assert_eq!(list.as_slice(), &[7, 7, 7, 7, 7, 7]);
    ///
    /// assert!(FixedVec::<i32, 3>::from_elem(4, &7).is_err());
    /// ```
    pub fn from_elem(len: usize, value: &S::Item) -> Result<Self, CollectionError> {
        let mut list = Self::new();
        list.insert_n(0, len, value)?;
        Ok(list)
    }

    /// Creates a sequence by copying `slice`.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::CapacityExceeded`] if the slice is longer than
    /// the capacity. Unlike a truncating copy, nothing is silently dropped.
    pub fn from_slice(slice: &[S::Item]) -> Result<Self, CollectionError> {
        let mut list = Self::new();
        list.insert_slice(0, slice)?;
        Ok(list)
    }

    /// Creates a sequence from a single-pass iterator.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fixed_containers::generic::fixed_vec::FixedVec;
    ///
    /// let list: FixedVec<u32, 3> = FixedVec::try_from_iter(0..3).unwrap();
    /// assert_eq!(list.as_slice(), &[0, 1, 2]);
    ///
    /// assert!(FixedVec::<u32, 3>::try_from_iter(0..10).is_err());
    /// ```
    pub fn try_from_iter<I>(iter: I) -> Result<Self, CollectionError>
    where
        I: IntoIterator<Item = S::Item>,
    {
        let mut list = Self::new();
        for item in iter {
            list.push_back(item)?;
        }
        Ok(list)
    }

    /// Copies the active elements of a sequence with a possibly different
    /// capacity or policy.
    pub fn try_from_fixed<S2, P2>(other: &BasicFixedVec<S2, P2>) -> Result<Self, CollectionError>
    where
        S2: Storage<Item = S::Item>,
    {
        Self::from_slice(other.as_slice())
    }

    /// Moves the active elements out of `other` into a new sequence and leaves
    /// `other` empty.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::CapacityExceeded`] if `other` holds more
    /// elements than this capacity allows; `other` is left untouched.
    pub fn take_from<S2, P2>(other: &mut BasicFixedVec<S2, P2>) -> Result<Self, CollectionError>
    where
        S2: Storage<Item = S::Item>,
        P2: TransferPolicy<S::Item>,
    {
        let mut list = Self::new();
        let count = other.len;
        list.ensure_room(count)?;
        P::move_into(
            &mut list.store.slots_mut()[..count],
            &mut other.store.slots_mut()[..count],
        );
        list.len = count;
        other.clear();
        Ok(list)
    }
}

impl<S: Storage, P> BasicFixedVec<S, P> {
    /// Wraps an existing store, treating its first `len` slots as active.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::CapacityExceeded`] if `len > S::CAPACITY`.
    pub fn from_store(store: S, len: usize) -> Result<Self, CollectionError> {
        let list = Self {
            store,
            len: 0,
            _policy: PhantomData,
        };
        list.ensure_room(len)?;
        Ok(Self { len, ..list })
    }

    /// Returns the number of elements in the sequence.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the sequence contains no elements.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns `true` if no further element fits.
    pub fn is_full(&self) -> bool {
        self.len == S::CAPACITY
    }

    /// The fixed bound, identical for every value of this type.
    pub const fn capacity(&self) -> usize {
        S::CAPACITY
    }

    /// Alias of [`capacity`](Self::capacity) usable without an instance.
    pub const fn max_size() -> usize {
        S::CAPACITY
    }

    pub fn remaining_capacity(&self) -> usize {
        S::CAPACITY - self.len
    }

    /// Returns a slice containing all elements in the sequence.
    pub fn as_slice(&self) -> &[S::Item] {
        &self.store.slots()[..self.len]
    }

    /// Returns a mutable slice containing all elements in the sequence.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fixed_containers::generic::fixed_vec::FixedVec;
    ///
    /// let mut list: FixedVec<u32, 5> = FixedVec::from_slice(&[1, 2]).unwrap();
    /// list.as_mut_slice()[0] = 10;
    /// assert_eq!(list.as_slice(), &[10, 2]);
    /// ```
    pub fn as_mut_slice(&mut self) -> &mut [S::Item] {
        let len = self.len;
        &mut self.store.slots_mut()[..len]
    }

    pub fn iter(&self) -> core::slice::Iter<'_, S::Item> {
        self.as_slice().iter()
    }

    pub fn iter_mut(&mut self) -> core::slice::IterMut<'_, S::Item> {
        self.as_mut_slice().iter_mut()
    }

    pub fn get(&self, index: usize) -> Option<&S::Item> {
        self.as_slice().get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut S::Item> {
        self.as_mut_slice().get_mut(index)
    }

    /// Bounds-checked access that reports the failure instead of panicking.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::OutOfRange`] if `index >= len`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fixed_containers::error::CollectionError;
    /// use fixed_containers::generic::fixed_vec::FixedVec;
    ///
    /// let list: FixedVec<u8, 4> = FixedVec::from_slice(&[5, 6]).unwrap();
    /// assert_eq!(list.at(1), Ok(&6));
    /// assert_eq!(list.at(2), Err(CollectionError::OutOfRange { index: 2, len: 2 }));
    /// ```
    pub fn at(&self, index: usize) -> Result<&S::Item, CollectionError> {
        self.check_index(index)?;
        Ok(&self.store.slots()[index])
    }

    pub fn at_mut(&mut self, index: usize) -> Result<&mut S::Item, CollectionError> {
        self.check_index(index)?;
        Ok(&mut self.store.slots_mut()[index])
    }

    /// The first element (front), if any.
    pub fn first(&self) -> Option<&S::Item> {
        self.as_slice().first()
    }

    /// The last element (back), if any.
    pub fn last(&self) -> Option<&S::Item> {
        self.as_slice().last()
    }

    /// Borrows the backing store, including slots past `len`.
    pub fn store(&self) -> &S {
        &self.store
    }

    fn check_index(&self, index: usize) -> Result<(), CollectionError> {
        if index < self.len {
            Ok(())
        } else {
            debug!(index, len = self.len, "fixed vec index out of range");
            Err(CollectionError::OutOfRange {
                index,
                len: self.len,
            })
        }
    }

    /// Fails unless `additional` more elements fit.
    fn ensure_room(&self, additional: usize) -> Result<(), CollectionError> {
        if additional > S::CAPACITY - self.len {
            debug!(
                len = self.len,
                additional,
                capacity = S::CAPACITY,
                "fixed vec capacity exceeded"
            );
            return Err(CollectionError::CapacityExceeded {
                requested: self.len.saturating_add(additional),
                capacity: S::CAPACITY,
            });
        }
        Ok(())
    }

    fn ensure_fits(&self, len: usize) -> Result<(), CollectionError> {
        if len > S::CAPACITY {
            debug!(len, capacity = S::CAPACITY, "fixed vec capacity exceeded");
            return Err(CollectionError::CapacityExceeded {
                requested: len,
                capacity: S::CAPACITY,
            });
        }
        Ok(())
    }
}

impl<S, P> BasicFixedVec<S, P>
where
    S: Storage,
    P: TransferPolicy<S::Item>,
{
    /// Checks capacity, then shifts `[pos, len)` right by `count` slots.
    ///
    /// On success the slots `[pos, pos + count)` are moved-from and waiting to
    /// be assigned, and `len` already includes them.
    fn open_gap(&mut self, pos: usize, count: usize) -> Result<(), CollectionError> {
        precondition!(
            pos <= self.len,
            "insert position {} is past the end (length {})",
            pos,
            self.len
        );
        self.ensure_room(count)?;

        let len = self.len;
        if count > 0 && pos < len {
            trace!(pos, count, len, "shifting tail right");
            P::move_within(self.store.slots_mut(), pos..len, pos + count);
        }
        self.len += count;
        Ok(())
    }

    /// Appends an element to the back of the sequence.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::CapacityExceeded`] if the sequence is full.
    /// The sequence is unchanged and `item` is dropped.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fixed_containers::generic::fixed_vec::FixedVec;
    ///
    /// let mut list: FixedVec<u32, 2> = FixedVec::new();
    /// assert!(list.push_back(1).is_ok());
    /// assert!(list.push_back(2).is_ok());
    /// assert!(list.push_back(3).is_err()); // Sequence is full
    /// assert_eq!(list.as_slice(), &[1, 2]);
    /// ```
    pub fn push_back(&mut self, item: S::Item) -> Result<(), CollectionError> {
        self.ensure_room(1)?;
        let len = self.len;
        P::assign(&mut self.store.slots_mut()[len], item);
        self.len += 1;
        Ok(())
    }

    /// Appends the value produced by `make`, which only runs once the capacity
    /// check has passed.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fixed_containers::generic::fixed_vec::FixedVec;
    ///
    /// let mut names: FixedVec<String, 1> = FixedVec::new();
    /// names.emplace_back(|| "first".repeat(2)).unwrap();
    ///
    /// let mut built = false;
    /// assert!(names.emplace_back(|| { built = true; String::new() }).is_err());
    /// assert!(!built);
    /// ```
    pub fn emplace_back<F>(&mut self, make: F) -> Result<&mut S::Item, CollectionError>
    where
        F: FnOnce() -> S::Item,
    {
        self.ensure_room(1)?;
        let len = self.len;
        let slot = &mut self.store.slots_mut()[len];
        P::assign(slot, make());
        self.len += 1;
        Ok(slot)
    }

    /// Inserts `item` at `pos`, shifting the tail right. Returns `pos`.
    ///
    /// `pos` must be in `[0, len]`; anything else is a precondition violation.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::CapacityExceeded`] if the sequence is full.
    pub fn insert(&mut self, pos: usize, item: S::Item) -> Result<usize, CollectionError> {
        self.open_gap(pos, 1)?;
        P::assign(&mut self.store.slots_mut()[pos], item);
        Ok(pos)
    }

    /// Inserts the value produced by `make` at `pos`. `make` only runs once
    /// the capacity check has passed.
    pub fn emplace<F>(&mut self, pos: usize, make: F) -> Result<usize, CollectionError>
    where
        F: FnOnce() -> S::Item,
    {
        self.open_gap(pos, 1)?;
        P::assign(&mut self.store.slots_mut()[pos], make());
        Ok(pos)
    }

    /// Inserts `count` copies of `value` at `pos`. Returns `pos`.
    pub fn insert_n(
        &mut self,
        pos: usize,
        count: usize,
        value: &S::Item,
    ) -> Result<usize, CollectionError> {
        self.open_gap(pos, count)?;
        P::fill(&mut self.store.slots_mut()[pos..pos + count], value);
        Ok(pos)
    }

    /// Inserts a copy of `items` at `pos` with one shift and one bulk copy.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fixed_containers::generic::fixed_vec::FixedVec;
    ///
    /// let mut list: FixedVec<i32, 10> = FixedVec::from_elem(6, &7).unwrap();
    /// list.insert_slice(3, &[1, 2, 3]).unwrap();
    /// assert_eq!(list.as_slice(), &[7, 7, 7, 1, 2, 3, 7, 7, 7]);
    /// ```
    pub fn insert_slice(&mut self, pos: usize, items: &[S::Item]) -> Result<usize, CollectionError> {
        let count = items.len();
        self.open_gap(pos, count)?;
        P::copy(&mut self.store.slots_mut()[pos..pos + count], items);
        Ok(pos)
    }

    /// Inserts the items of an exact-size iterator at `pos`.
    ///
    /// The reported length is checked against the capacity up front and the
    /// tail is shifted once, so the cost is linear in the tail plus the items.
    pub fn insert_exact<I>(&mut self, pos: usize, items: I) -> Result<usize, CollectionError>
    where
        I: IntoIterator<Item = S::Item>,
        I::IntoIter: ExactSizeIterator,
    {
        let items = items.into_iter();
        let count = items.len();
        self.open_gap(pos, count)?;
        for (slot, item) in self.store.slots_mut()[pos..pos + count]
            .iter_mut()
            .zip(items)
        {
            P::assign(slot, item);
        }
        Ok(pos)
    }

    /// Inserts the items of a single-pass iterator at `pos`, one at a time.
    ///
    /// Each item shifts the tail on its own. If the sequence fills up part of
    /// the way through, the items inserted so far are erased again before the
    /// error is returned, so no partial insert is ever observable.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fixed_containers::generic::fixed_vec::FixedVec;
    ///
    /// let mut list: FixedVec<u32, 4> = FixedVec::from_slice(&[1, 4]).unwrap();
    /// list.insert_iter(1, (2..4).filter(|_| true)).unwrap();
    /// assert_eq!(list.as_slice(), &[1, 2, 3, 4]);
    ///
    /// assert!(list.insert_iter(0, [9].into_iter().cycle()).is_err());
    /// assert_eq!(list.as_slice(), &[1, 2, 3, 4]);
    /// ```
    pub fn insert_iter<I>(&mut self, pos: usize, items: I) -> Result<usize, CollectionError>
    where
        I: IntoIterator<Item = S::Item>,
    {
        precondition!(
            pos <= self.len,
            "insert position {} is past the end (length {})",
            pos,
            self.len
        );
        let mut at = pos;
        for item in items {
            if let Err(err) = self.insert(at, item) {
                self.erase(pos..at);
                return Err(err);
            }
            at += 1;
        }
        Ok(pos)
    }

    /// Removes `range`, shifting the tail left, and returns `range.start`.
    ///
    /// The range must lie within `[0, len]`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fixed_containers::generic::fixed_vec::FixedVec;
    ///
    /// let mut list: FixedVec<i32, 10> = FixedVec::from_slice(&[7, 7, 7, 1, 2, 3, 7, 7, 7]).unwrap();
    /// list.erase(2..4);
    /// assert_eq!(list.as_slice(), &[7, 7, 2, 3, 7, 7, 7]);
    /// ```
    pub fn erase(&mut self, range: Range<usize>) -> usize {
        precondition!(
            range.start <= range.end && range.end <= self.len,
            "erase range {}..{} is invalid for length {}",
            range.start,
            range.end,
            self.len
        );
        let len = self.len;
        let end = range.end.min(len);
        let start = range.start.min(end);
        let count = end - start;
        if count == 0 {
            return start;
        }

        let slots = self.store.slots_mut();
        if end < len {
            trace!(start, count, len, "shifting tail left");
            P::move_within(slots, end..len, start);
        }
        P::destroy(&mut slots[len - count..len]);
        self.len -= count;
        start
    }

    /// Removes the single element at `index` and returns `index`.
    pub fn erase_at(&mut self, index: usize) -> usize {
        precondition!(
            index < self.len,
            "erase index {} is out of range for length {}",
            index,
            self.len
        );
        self.erase(index..index.saturating_add(1))
    }

    /// Removes every element.
    pub fn clear(&mut self) {
        self.erase(0..self.len);
    }

    /// Shortens the sequence to `len`; no-op if it is already shorter.
    pub fn truncate(&mut self, len: usize) {
        if len < self.len {
            self.erase(len..self.len);
        }
    }

    /// Replaces the contents with `count` copies of `value`.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::CapacityExceeded`] if `count > capacity`; the
    /// old contents are kept.
    pub fn assign_n(&mut self, count: usize, value: &S::Item) -> Result<(), CollectionError> {
        self.ensure_fits(count)?;
        self.clear();
        self.insert_n(0, count, value)?;
        Ok(())
    }

    /// Replaces the contents with a copy of `items`.
    pub fn assign_slice(&mut self, items: &[S::Item]) -> Result<(), CollectionError> {
        self.ensure_fits(items.len())?;
        self.clear();
        self.insert_slice(0, items)?;
        Ok(())
    }

    /// Replaces the contents with the items of an exact-size iterator.
    pub fn assign_iter<I>(&mut self, items: I) -> Result<(), CollectionError>
    where
        I: IntoIterator<Item = S::Item>,
        I::IntoIter: ExactSizeIterator,
    {
        let items = items.into_iter();
        self.ensure_fits(items.len())?;
        self.clear();
        self.insert_exact(0, items)?;
        Ok(())
    }

    /// Replaces the contents with a copy of another sequence's elements.
    pub fn assign_from<S2, P2>(&mut self, other: &BasicFixedVec<S2, P2>) -> Result<(), CollectionError>
    where
        S2: Storage<Item = S::Item>,
    {
        self.assign_slice(other.as_slice())
    }

    /// Appends every item, or nothing at all if they do not fit.
    pub fn try_extend<I>(&mut self, items: I) -> Result<(), CollectionError>
    where
        I: IntoIterator<Item = S::Item>,
    {
        let len = self.len;
        for item in items {
            if let Err(err) = self.push_back(item) {
                self.truncate(len);
                return Err(err);
            }
        }
        Ok(())
    }

    /// Resizes to `len`, truncating or appending copies of `value`.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::CapacityExceeded`] if `len > capacity`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fixed_containers::generic::fixed_vec::FixedVec;
    ///
    /// let mut list: FixedVec<i32, 20> = FixedVec::from_slice(&[7, 4, 7, 1]).unwrap();
    /// list.resize(6, 5).unwrap();
    /// assert_eq!(list.as_slice(), &[7, 4, 7, 1, 5, 5]);
    ///
    /// list.resize(3, 0).unwrap();
    /// assert_eq!(list.as_slice(), &[7, 4, 7]);
    /// ```
    pub fn resize(&mut self, len: usize, value: S::Item) -> Result<(), CollectionError> {
        self.ensure_fits(len)?;
        let current = self.len;
        if len < current {
            self.erase(len..current);
        } else if len > current {
            self.insert_n(current, len - current, &value)?;
        }
        Ok(())
    }

    /// Exchanges contents and lengths with another sequence, which may have a
    /// different capacity and policy.
    ///
    /// The common prefix is swapped element by element; the remainder of the
    /// longer side is moved across using the receiving side's policy.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::IncompatibleSwap`] unless
    /// `other.len() < self.capacity()` and `self.len() < other.capacity()`.
    /// Both comparisons are strict, so a side whose length equals the other's
    /// capacity is rejected. Neither sequence is touched on failure.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fixed_containers::generic::fixed_vec::FixedVec;
    ///
    /// let mut small: FixedVec<u8, 10> = FixedVec::from_elem(6, &1).unwrap();
    /// let mut large: FixedVec<u8, 50> = FixedVec::from_elem(9, &2).unwrap();
    ///
    /// small.swap_with(&mut large).unwrap();
    /// assert_eq!(small.as_slice(), &[2; 9]);
    /// assert_eq!(large.as_slice(), &[1; 6]);
    /// ```
    pub fn swap_with<S2, P2>(&mut self, other: &mut BasicFixedVec<S2, P2>) -> Result<(), CollectionError>
    where
        S2: Storage<Item = S::Item>,
        P2: TransferPolicy<S::Item>,
    {
        if !(other.len < S::CAPACITY && self.len < S2::CAPACITY) {
            debug!(
                len = self.len,
                capacity = S::CAPACITY,
                other_len = other.len,
                other_capacity = S2::CAPACITY,
                "fixed vec swap rejected"
            );
            return Err(CollectionError::IncompatibleSwap {
                len: self.len,
                capacity: S::CAPACITY,
                other_len: other.len,
                other_capacity: S2::CAPACITY,
            });
        }

        let (len, other_len) = (self.len, other.len);
        let common = len.min(other_len);
        self.store.slots_mut()[..common].swap_with_slice(&mut other.store.slots_mut()[..common]);

        if other_len > len {
            P::move_into(
                &mut self.store.slots_mut()[common..other_len],
                &mut other.store.slots_mut()[common..other_len],
            );
        } else if len > other_len {
            P2::move_into(
                &mut other.store.slots_mut()[common..len],
                &mut self.store.slots_mut()[common..len],
            );
        }

        mem::swap(&mut self.len, &mut other.len);
        Ok(())
    }
}

impl<S, P> BasicFixedVec<S, P>
where
    S: Storage,
    S::Item: Default,
    P: TransferPolicy<S::Item>,
{
    /// Removes and returns the last element.
    ///
    /// Popping an empty sequence is a precondition violation; with checks
    /// compiled out it returns `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fixed_containers::generic::fixed_vec::FixedVec;
    ///
    /// let mut list: FixedVec<u32, 5> = FixedVec::new();
    /// list.push_back(42).unwrap();
    /// assert_eq!(list.pop_back(), Some(42));
    /// assert!(list.is_empty());
    /// ```
    pub fn pop_back(&mut self) -> Option<S::Item> {
        precondition!(self.len > 0, "pop_back on an empty sequence");
        let last = self.len.checked_sub(1)?;
        let slots = self.store.slots_mut();
        let item = mem::take(&mut slots[last]);
        P::destroy(&mut slots[last..last + 1]);
        self.len = last;
        Some(item)
    }

    /// Removes and returns the element at `index`, shifting the tail left.
    pub fn remove(&mut self, index: usize) -> S::Item {
        precondition!(
            index < self.len,
            "remove index {} is out of range for length {}",
            index,
            self.len
        );
        let item = mem::take(&mut self.store.slots_mut()[index]);
        self.erase(index..index + 1);
        item
    }

    /// Resizes to `len`, appending `S::Item::default()` values.
    pub fn resize_default(&mut self, len: usize) -> Result<(), CollectionError> {
        self.resize(len, S::Item::default())
    }
}

impl<S, P> Clone for BasicFixedVec<S, P>
where
    S: Storage + Default,
    P: TransferPolicy<S::Item>,
{
    fn clone(&self) -> Self {
        let mut list = Self::new();
        P::copy(&mut list.store.slots_mut()[..self.len], self.as_slice());
        list.len = self.len;
        list
    }
}

impl<S, P> TryFrom<&[S::Item]> for BasicFixedVec<S, P>
where
    S: Storage + Default,
    P: TransferPolicy<S::Item>,
{
    type Error = CollectionError;

    fn try_from(slice: &[S::Item]) -> Result<Self, Self::Error> {
        Self::from_slice(slice)
    }
}

impl<S: Storage, P> fmt::Debug for BasicFixedVec<S, P>
where
    S::Item: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<S: Storage, P> Index<usize> for BasicFixedVec<S, P> {
    type Output = S::Item;

    fn index(&self, index: usize) -> &S::Item {
        precondition!(
            index < self.len,
            "index {} is out of range for length {}",
            index,
            self.len
        );
        &self.store.slots()[index]
    }
}

impl<S: Storage, P> IndexMut<usize> for BasicFixedVec<S, P> {
    fn index_mut(&mut self, index: usize) -> &mut S::Item {
        precondition!(
            index < self.len,
            "index {} is out of range for length {}",
            index,
            self.len
        );
        &mut self.store.slots_mut()[index]
    }
}

impl<S: Storage, P> AsRef<[S::Item]> for BasicFixedVec<S, P> {
    fn as_ref(&self) -> &[S::Item] {
        self.as_slice()
    }
}

impl<S: Storage, P> AsMut<[S::Item]> for BasicFixedVec<S, P> {
    fn as_mut(&mut self) -> &mut [S::Item] {
        self.as_mut_slice()
    }
}

impl<'a, S: Storage, P> IntoIterator for &'a BasicFixedVec<S, P> {
    type Item = &'a S::Item;
    type IntoIter = core::slice::Iter<'a, S::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, S: Storage, P> IntoIterator for &'a mut BasicFixedVec<S, P> {
    type Item = &'a mut S::Item;
    type IntoIter = core::slice::IterMut<'a, S::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<S, P, S2, P2> PartialEq<BasicFixedVec<S2, P2>> for BasicFixedVec<S, P>
where
    S: Storage,
    S2: Storage,
    S::Item: PartialEq<S2::Item>,
{
    fn eq(&self, other: &BasicFixedVec<S2, P2>) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<S, P> Eq for BasicFixedVec<S, P>
where
    S: Storage,
    S::Item: Eq,
{
}

impl<S, P, U> PartialEq<[U]> for BasicFixedVec<S, P>
where
    S: Storage,
    S::Item: PartialEq<U>,
{
    fn eq(&self, other: &[U]) -> bool {
        self.as_slice() == other
    }
}

impl<S, P, U, const M: usize> PartialEq<[U; M]> for BasicFixedVec<S, P>
where
    S: Storage,
    S::Item: PartialEq<U>,
{
    fn eq(&self, other: &[U; M]) -> bool {
        self.as_slice() == &other[..]
    }
}

/// Lexicographic ordering; a strict prefix orders first.
impl<S, P, S2, P2> PartialOrd<BasicFixedVec<S2, P2>> for BasicFixedVec<S, P>
where
    S: Storage,
    S2: Storage<Item = S::Item>,
    S::Item: PartialOrd,
{
    fn partial_cmp(&self, other: &BasicFixedVec<S2, P2>) -> Option<Ordering> {
        self.as_slice().partial_cmp(other.as_slice())
    }
}

impl<S, P> Ord for BasicFixedVec<S, P>
where
    S: Storage,
    S::Item: Ord,
{
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_slice().cmp(other.as_slice())
    }
}

impl<S, P> Hash for BasicFixedVec<S, P>
where
    S: Storage,
    S::Item: Hash,
{
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generic::transfer::PodTransfer;

    #[test]
    fn test_default_is_empty() {
        let list = FixedVec::<u32, 4>::default();
        assert_eq!(list.len(), 0);
        assert!(list.is_empty());
        assert_eq!(FixedVec::<u32, 4>::max_size(), 4);
    }

    #[test]
    fn test_with_len_fills_defaults() {
        let list = FixedVec::<u32, 4>::with_len(3).unwrap();
        assert_eq!(list.as_slice(), &[0, 0, 0]);
        assert_eq!(
            FixedVec::<u32, 4>::with_len(5).unwrap_err(),
            CollectionError::CapacityExceeded {
                requested: 5,
                capacity: 4
            }
        );
    }

    #[test]
    fn test_push_past_capacity_leaves_contents() {
        let mut list = FixedVec::<u32, 2>::new();
        list.push_back(1).unwrap();
        list.push_back(2).unwrap();
        let err = list.push_back(3).unwrap_err();
        assert!(err.is_capacity_exceeded());
        assert_eq!(list.len(), 2);
        assert_eq!(list.as_slice(), &[1, 2]);
        assert!(list.is_full());
    }

    #[test]
    fn test_push_pop_round_trip() {
        let mut list = FixedVec::<String, 4>::try_from_iter(["a", "b"].map(String::from)).unwrap();
        list.push_back("c".to_string()).unwrap();
        assert_eq!(list.pop_back().as_deref(), Some("c"));
        assert_eq!(list, ["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn test_pop_back_releases_slot() {
        let mut list = FixedVec::<String, 2>::new();
        list.push_back("owned".to_string()).unwrap();
        list.pop_back();
        assert_eq!(list.store().slots()[0], "");
    }

    #[cfg(any(debug_assertions, feature = "checked"))]
    #[test]
    #[should_panic(expected = "pop_back on an empty sequence")]
    fn test_pop_back_empty_panics_when_checked() {
        let mut list = FixedVec::<u8, 2>::new();
        list.pop_back();
    }

    #[cfg(any(debug_assertions, feature = "checked"))]
    #[test]
    #[should_panic(expected = "index 2 is out of range for length 2")]
    fn test_index_past_len_panics_when_checked() {
        let list = FixedVec::<u8, 8>::from_slice(&[1, 2]).unwrap();
        let _ = list[2];
    }

    #[cfg(any(debug_assertions, feature = "checked"))]
    #[test]
    #[should_panic(expected = "insert position 3 is past the end")]
    fn test_insert_past_end_panics_when_checked() {
        let mut list = FixedVec::<u8, 8>::from_slice(&[1, 2]).unwrap();
        let _ = list.insert(3, 9);
    }

    #[test]
    fn test_index_and_index_mut() {
        let mut list = FixedVec::<u8, 8>::from_slice(&[1, 2, 3]).unwrap();
        list[1] = 20;
        assert_eq!(list[1], 20);
        assert_eq!(list.get(3), None);
        *list.at_mut(0).unwrap() = 10;
        assert_eq!(list.as_slice(), &[10, 20, 3]);
        assert_eq!(list.first(), Some(&10));
        assert_eq!(list.last(), Some(&3));
    }

    #[test]
    fn test_insert_and_erase_scenario() {
        let mut list = FixedVec::<i32, 10>::from_elem(6, &7).unwrap();
        assert_eq!(list.as_slice(), &[7, 7, 7, 7, 7, 7]);

        assert_eq!(list.insert_slice(3, &[1, 2, 3]).unwrap(), 3);
        assert_eq!(list.as_slice(), &[7, 7, 7, 1, 2, 3, 7, 7, 7]);

        assert_eq!(list.erase(2..4), 2);
        assert_eq!(list.as_slice(), &[7, 7, 2, 3, 7, 7, 7]);
        assert_eq!(list.len(), 7);
    }

    #[test]
    fn test_mixed_capacity_scenario() {
        let mut list = FixedVec::<i32, 100>::from_elem(6, &7).unwrap();
        let other = FixedVec::<i32, 50>::from_slice(&[4, 5, 10]).unwrap();

        list.insert_slice(3, &[1, 2, 3]).unwrap();
        list.insert_slice(1, &other.as_slice()[..2]).unwrap();
        assert_eq!(list.as_slice(), &[7, 4, 5, 7, 7, 1, 2, 3, 7, 7, 7]);

        list.erase(2..4);
        assert_eq!(list.as_slice(), &[7, 4, 7, 1, 2, 3, 7, 7, 7]);

        let smaller = FixedVec::<i32, 50>::try_from_fixed(&list).unwrap();
        let is_less = (list < smaller) as i32;
        list.push_back(is_less).unwrap();
        assert_eq!(list.as_slice(), &[7, 4, 7, 1, 2, 3, 7, 7, 7, 0]);

        list.resize(12, 5).unwrap();
        assert_eq!(list.as_slice(), &[7, 4, 7, 1, 2, 3, 7, 7, 7, 0, 5, 5]);

        list.resize_default(11).unwrap();
        let expected = FixedVec::<i32, 20>::from_slice(&[7, 4, 7, 1, 2, 3, 7, 7, 7, 0, 5]).unwrap();
        assert_eq!(list, expected);
    }

    #[test]
    fn test_insert_into_descending_sequence() {
        let mut list = FixedVec::<i32, 10>::with_len(7).unwrap();
        for (slot, value) in list.iter_mut().rev().zip(0..) {
            *slot = value;
        }
        assert_eq!(list.as_slice(), &[6, 5, 4, 3, 2, 1, 0]);

        list.insert_exact(2, [101, 102, 103]).unwrap();
        assert_eq!(list.as_slice(), &[6, 5, 101, 102, 103, 4, 3, 2, 1, 0]);
        assert!(list.is_full());
    }

    #[test]
    fn test_insert_over_capacity_is_atomic() {
        let mut list = FixedVec::<u8, 4>::from_slice(&[1, 2, 3]).unwrap();
        let err = list.insert_slice(1, &[8, 9]).unwrap_err();
        assert_eq!(
            err,
            CollectionError::CapacityExceeded {
                requested: 5,
                capacity: 4
            }
        );
        assert_eq!(list.as_slice(), &[1, 2, 3]);

        assert!(list.insert_n(0, 2, &0).is_err());
        assert!(list.insert_exact(3, [4, 5]).is_err());
        assert_eq!(list.as_slice(), &[1, 2, 3]);
    }

    #[test]
    fn test_insert_iter_rolls_back_on_overflow() {
        let mut list = FixedVec::<u8, 5>::from_slice(&[1, 2, 3]).unwrap();
        let err = list.insert_iter(1, [7, 8, 9]).unwrap_err();
        assert!(err.is_capacity_exceeded());
        assert_eq!(list.as_slice(), &[1, 2, 3]);

        list.insert_iter(3, [4, 5]).unwrap();
        assert_eq!(list.as_slice(), &[1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_emplace_inserts_lazily() {
        let mut list = FixedVec::<String, 3>::new();
        list.emplace_back(|| "b".to_string()).unwrap().push('!');
        list.emplace(0, || "a".to_string()).unwrap();
        assert_eq!(list, ["a".to_string(), "b!".to_string()]);
    }

    #[test]
    fn test_remove_and_truncate() {
        let mut list = FixedVec::<char, 6>::try_from_iter("abcde".chars()).unwrap();
        assert_eq!(list.remove(1), 'b');
        assert_eq!(list.as_slice(), &['a', 'c', 'd', 'e']);

        list.truncate(10);
        assert_eq!(list.len(), 4);
        list.truncate(2);
        assert_eq!(list.as_slice(), &['a', 'c']);

        list.clear();
        assert!(list.is_empty());
    }

    #[test]
    fn test_erase_empty_range_is_noop() {
        let mut list = FixedVec::<u8, 4>::from_slice(&[1, 2]).unwrap();
        assert_eq!(list.erase(1..1), 1);
        assert_eq!(list.as_slice(), &[1, 2]);

        assert_eq!(list.erase_at(0), 0);
        assert_eq!(list.as_slice(), &[2]);
    }

    #[test]
    fn test_erase_destroys_trailing_slots() {
        let mut list = FixedVec::<u8, 4, PodTransfer>::from_slice(&[1, 2, 3, 4]).unwrap();
        list.erase(0..2);
        assert_eq!(list.as_slice(), &[3, 4]);
        assert_eq!(list.store().slots(), &[3, 4, 0, 0]);
    }

    #[test]
    fn test_assign_variants() {
        let mut list = FixedVec::<u16, 4>::from_slice(&[1, 2, 3]).unwrap();
        list.assign_n(2, &9).unwrap();
        assert_eq!(list.as_slice(), &[9, 9]);

        assert!(list.assign_slice(&[1, 2, 3, 4, 5]).is_err());
        assert_eq!(list.as_slice(), &[9, 9]);

        list.assign_iter([5u16, 6, 7].into_iter()).unwrap();
        assert_eq!(list.as_slice(), &[5, 6, 7]);

        let source = FixedVec::<u16, 64>::from_slice(&[42]).unwrap();
        list.assign_from(&source).unwrap();
        assert_eq!(list, source);
    }

    #[test]
    fn test_try_extend_all_or_nothing() {
        let mut list = FixedVec::<u8, 4>::from_slice(&[1]).unwrap();
        assert!(list.try_extend([2, 3, 4, 5]).is_err());
        assert_eq!(list.as_slice(), &[1]);
        list.try_extend([2, 3]).unwrap();
        assert_eq!(list.as_slice(), &[1, 2, 3]);
    }

    #[test]
    fn test_resize_past_capacity_fails() {
        let mut list = FixedVec::<u8, 4>::from_slice(&[1, 2]).unwrap();
        assert!(list.resize(5, 0).is_err());
        assert_eq!(list.as_slice(), &[1, 2]);
    }

    #[test]
    fn test_swap_different_capacities() {
        let mut small = FixedVec::<u32, 10>::from_elem(6, &1).unwrap();
        let mut large = FixedVec::<u32, 50>::try_from_iter(100..109).unwrap();

        small.swap_with(&mut large).unwrap();
        assert_eq!(small.len(), 9);
        assert_eq!(small.as_slice(), &[100, 101, 102, 103, 104, 105, 106, 107, 108]);
        assert_eq!(large.as_slice(), &[1, 1, 1, 1, 1, 1]);

        large.swap_with(&mut small).unwrap();
        assert_eq!(small.as_slice(), &[1, 1, 1, 1, 1, 1]);
        assert_eq!(large.len(), 9);
    }

    #[test]
    fn test_swap_rejected_when_not_fitting() {
        let mut small = FixedVec::<u32, 4>::from_slice(&[1, 2]).unwrap();
        let mut large = FixedVec::<u32, 16>::try_from_iter(0..6).unwrap();

        let err = small.swap_with(&mut large).unwrap_err();
        assert_eq!(
            err,
            CollectionError::IncompatibleSwap {
                len: 2,
                capacity: 4,
                other_len: 6,
                other_capacity: 16
            }
        );
        assert_eq!(small.as_slice(), &[1, 2]);
        assert_eq!(large.len(), 6);
    }

    #[test]
    fn test_swap_boundary_uses_strict_comparison() {
        // A length equal to the other side's capacity is rejected.
        let mut left = FixedVec::<u8, 3>::from_slice(&[1, 2, 3]).unwrap();
        let mut right = FixedVec::<u8, 3>::from_slice(&[4]).unwrap();
        assert!(left.swap_with(&mut right).is_err());

        let mut left = FixedVec::<u8, 3>::from_slice(&[1, 2]).unwrap();
        left.swap_with(&mut right).unwrap();
        assert_eq!(left.as_slice(), &[4]);
        assert_eq!(right.as_slice(), &[1, 2]);
    }

    #[test]
    fn test_swap_across_policies() {
        let mut pod = FixedVec::<u8, 8, PodTransfer>::from_slice(b"abc").unwrap();
        let mut plain = FixedVec::<u8, 8>::from_slice(b"wxyz_").unwrap();
        pod.swap_with(&mut plain).unwrap();
        assert_eq!(pod.as_slice(), b"wxyz_");
        assert_eq!(plain.as_slice(), b"abc");
    }

    #[test]
    fn test_take_from_empties_source() {
        let mut source = FixedVec::<String, 8>::try_from_iter(["x", "y"].map(String::from)).unwrap();
        let taken = FixedVec::<String, 2>::take_from(&mut source).unwrap();
        assert_eq!(taken, ["x".to_string(), "y".to_string()]);
        assert!(source.is_empty());

        let mut too_long = FixedVec::<u8, 8>::from_slice(&[1, 2, 3]).unwrap();
        assert!(FixedVec::<u8, 2>::take_from(&mut too_long).is_err());
        assert_eq!(too_long.len(), 3);
    }

    #[test]
    fn test_clone_copies_active_elements() {
        let list = FixedVec::<String, 4>::try_from_iter(["one"].map(String::from)).unwrap();
        let copy = list.clone();
        assert_eq!(copy, list);
        assert_eq!(copy.store().slots()[1], "");
    }

    #[test]
    fn test_comparison_across_capacities() {
        let a = FixedVec::<i32, 10>::from_slice(&[1, 2]).unwrap();
        let b = FixedVec::<i32, 30>::from_slice(&[1, 2, 3]).unwrap();
        let c = FixedVec::<i32, 5, PodTransfer>::from_slice(&[1, 2, 4]).unwrap();
        assert!(a < b);
        assert!(b < c);
        assert!(a != b);
        assert_eq!(a, FixedVec::<i32, 2>::from_slice(&[1, 2]).unwrap());
        assert_eq!(a.cmp(&a.clone()), Ordering::Equal);
    }

    #[test]
    fn test_from_store_and_try_from() {
        let list = FixedVec::<u8, 3>::from_store(ArrayStore::from_array([4, 5, 6]), 2).unwrap();
        assert_eq!(list.as_slice(), &[4, 5]);
        assert!(FixedVec::<u8, 3>::from_store(ArrayStore::from_array([0; 3]), 4).is_err());

        let list = FixedVec::<u8, 3>::try_from(&[1u8, 2][..]).unwrap();
        assert_eq!(format!("{list:?}"), "[1, 2]");
    }

    #[test]
    fn test_iterators() {
        let mut list = FixedVec::<u32, 3>::from_slice(&[1, 2]).unwrap();
        for x in &mut list {
            *x *= 10;
        }
        let collected: Vec<_> = (&list).into_iter().copied().collect();
        assert_eq!(collected, vec![10, 20]);
        assert_eq!(list.iter().rev().next(), Some(&20));
    }
}
