//! Sorted, duplicate-free container over a bounded sequence.
//!
//! This module provides [`SortedUnique`], which keeps the elements of a
//! [`BasicFixedVec`] strictly ascending under a [`Compare`] applied to a
//! [`KeyOf`] projection, plus the [`FixedSet`] and [`FixedMap`] aliases.
//!
//! Lookups are binary searches over the stored order. Inserts search for the
//! slot first and only then delegate to the sequence, so uniqueness holds by
//! construction rather than by deduplicating afterwards.

use core::fmt;
use core::marker::PhantomData;
use core::ops::Range;

use crate::error::CollectionError;
use crate::generic::fixed_vec::BasicFixedVec;
use crate::generic::ordering::{Compare, First, Identity, KeyOf, NaturalOrder};
use crate::generic::storage::{ArrayStore, Storage};
use crate::generic::transfer::{CloneTransfer, TransferPolicy};

/// Outcome of [`SortedUnique::insert`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Insertion {
    /// The value was new and now sits at this index.
    Inserted(usize),
    /// An element with an equivalent key already sits at this index; nothing
    /// changed.
    AlreadyPresent(usize),
}

impl Insertion {
    pub fn index(self) -> usize {
        match self {
            Insertion::Inserted(index) | Insertion::AlreadyPresent(index) => index,
        }
    }

    pub fn is_inserted(self) -> bool {
        matches!(self, Insertion::Inserted(_))
    }
}

/// An ordered, duplicate-free container with a fixed capacity.
///
/// Elements in `[0, len)` are strictly ascending under
/// `compare.less(X::key_of(a), X::key_of(b))`, and no two elements have
/// equivalent keys. Every successful mutation restores both properties; a
/// failed one leaves the container untouched.
///
/// # Type Parameters
///
/// * `S` - The backing store of the underlying sequence.
/// * `X` - The key projection ([`Identity`] for sets, [`First`] for maps).
/// * `C` - The strict weak ordering over keys.
/// * `P` - The transfer policy of the underlying sequence.
pub struct SortedUnique<S, X, C = NaturalOrder, P = CloneTransfer> {
    seq: BasicFixedVec<S, P>,
    compare: C,
    _key: PhantomData<fn() -> X>,
}

/// A sorted set of at most `N` values.
///
/// # Examples
///
/// ```rust
/// use fixed_containers::generic::sorted_unique::{FixedSet, Insertion};
///
/// let mut set: FixedSet<i32, 8> = FixedSet::new();
/// for value in [5, 3, 5, 1, 4] {
///     set.insert(value).unwrap();
/// }
/// assert_eq!(set.as_slice(), &[1, 3, 4, 5]);
/// assert_eq!(set.insert(5).unwrap(), Insertion::AlreadyPresent(3));
/// ```
pub type FixedSet<T, const N: usize, C = NaturalOrder> = SortedUnique<ArrayStore<T, N>, Identity, C>;

/// A sorted map of at most `N` key/value pairs, ordered by key.
///
/// # Examples
///
/// ```rust
/// use fixed_containers::generic::sorted_unique::FixedMap;
///
/// let mut prices: FixedMap<&str, u64, 4> = FixedMap::new();
/// prices.insert(("sats", 1)).unwrap();
/// prices.insert(("btc", 100_000_000)).unwrap();
///
/// assert_eq!(prices.get_value(&"sats"), Some(&1));
/// assert_eq!(prices.keys().copied().collect::<Vec<_>>(), vec!["btc", "sats"]);
/// ```
pub type FixedMap<K, V, const N: usize, C = NaturalOrder> =
    SortedUnique<ArrayStore<(K, V), N>, First, C>;

impl<S, X, C, P> Default for SortedUnique<S, X, C, P>
where
    S: Storage + Default,
    C: Default,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<S, X, C, P> SortedUnique<S, X, C, P>
where
    S: Storage + Default,
{
    /// Creates an empty container with a default-constructed comparator.
    pub fn new() -> Self
    where
        C: Default,
    {
        Self::with_compare(C::default())
    }

    /// Creates an empty container ordered by `compare`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fixed_containers::generic::ordering::ReverseOrder;
    /// use fixed_containers::generic::sorted_unique::FixedSet;
    ///
    /// let mut set = FixedSet::<u8, 4, ReverseOrder>::with_compare(ReverseOrder);
    /// set.insert(1).unwrap();
    /// set.insert(9).unwrap();
    /// assert_eq!(set.as_slice(), &[9, 1]);
    /// ```
    pub fn with_compare(compare: C) -> Self {
        Self {
            seq: BasicFixedVec::new(),
            compare,
            _key: PhantomData,
        }
    }
}

impl<S, X, C, P> SortedUnique<S, X, C, P>
where
    S: Storage + Default,
    X: KeyOf<S::Item>,
    C: Compare<X::Key>,
    P: TransferPolicy<S::Item>,
{
    /// Builds a container by inserting every item in turn; later duplicates
    /// are skipped.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::CapacityExceeded`] once more distinct keys
    /// arrive than the capacity allows.
    pub fn try_from_iter<I>(items: I) -> Result<Self, CollectionError>
    where
        I: IntoIterator<Item = S::Item>,
        C: Default,
    {
        Self::try_from_iter_with(items, C::default())
    }

    pub fn try_from_iter_with<I>(items: I, compare: C) -> Result<Self, CollectionError>
    where
        I: IntoIterator<Item = S::Item>,
    {
        let mut set = Self::with_compare(compare);
        for item in items {
            set.insert(item)?;
        }
        Ok(set)
    }
}

impl<S: Storage, X, C, P> SortedUnique<S, X, C, P> {
    pub fn len(&self) -> usize {
        self.seq.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seq.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.seq.is_full()
    }

    pub const fn capacity(&self) -> usize {
        S::CAPACITY
    }

    /// The elements in ascending key order.
    pub fn as_slice(&self) -> &[S::Item] {
        self.seq.as_slice()
    }

    /// Iterates in ascending key order; `.rev()` walks it descending.
    pub fn iter(&self) -> core::slice::Iter<'_, S::Item> {
        self.seq.iter()
    }

    /// The element with the smallest key.
    pub fn first(&self) -> Option<&S::Item> {
        self.seq.first()
    }

    /// The element with the largest key.
    pub fn last(&self) -> Option<&S::Item> {
        self.seq.last()
    }

    /// Read-only view of the underlying sequence.
    pub fn as_sequence(&self) -> &BasicFixedVec<S, P> {
        &self.seq
    }

    pub fn key_compare(&self) -> &C {
        &self.compare
    }
}

impl<S, X, C, P> SortedUnique<S, X, C, P>
where
    S: Storage,
    X: KeyOf<S::Item>,
    C: Compare<X::Key>,
{
    /// Index of the first element whose key is not less than `key`.
    ///
    /// Every element before the returned index has a key less than `key`;
    /// every element from it onward does not.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fixed_containers::generic::sorted_unique::FixedSet;
    ///
    /// let set: FixedSet<u32, 8> = FixedSet::try_from_iter([10, 20, 30]).unwrap();
    /// assert_eq!(set.lower_bound(&20), 1);
    /// assert_eq!(set.lower_bound(&25), 2);
    /// assert_eq!(set.lower_bound(&99), 3);
    /// ```
    pub fn lower_bound(&self, key: &X::Key) -> usize {
        self.as_slice()
            .partition_point(|item| self.compare.less(X::key_of(item), key))
    }

    /// Index of the first element whose key is strictly greater than `key`.
    pub fn upper_bound(&self, key: &X::Key) -> usize {
        self.as_slice()
            .partition_point(|item| !self.compare.less(key, X::key_of(item)))
    }

    /// The index range of elements equivalent to `key`; at most one long.
    pub fn equal_range(&self, key: &X::Key) -> Range<usize> {
        let start = self.lower_bound(key);
        match self.as_slice().get(start) {
            Some(item) if !self.compare.less(key, X::key_of(item)) => start..start + 1,
            _ => start..start,
        }
    }

    /// Index of the element equivalent to `key`, if present.
    pub fn find(&self, key: &X::Key) -> Option<usize> {
        let range = self.equal_range(key);
        (!range.is_empty()).then_some(range.start)
    }

    pub fn get(&self, key: &X::Key) -> Option<&S::Item> {
        self.find(key).map(|index| &self.as_slice()[index])
    }

    pub fn contains(&self, key: &X::Key) -> bool {
        self.find(key).is_some()
    }
}

impl<S, X, C, P> SortedUnique<S, X, C, P>
where
    S: Storage,
    X: KeyOf<S::Item>,
    C: Compare<X::Key>,
    P: TransferPolicy<S::Item>,
{
    /// Inserts `item` at its sorted position unless an equivalent key exists.
    ///
    /// The lookup runs first, so inserting a key that is already present
    /// succeeds with [`Insertion::AlreadyPresent`] even when the container is
    /// full.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::CapacityExceeded`] if the key is new and the
    /// container is full.
    pub fn insert(&mut self, item: S::Item) -> Result<Insertion, CollectionError> {
        let key = X::key_of(&item);
        let index = self.lower_bound(key);
        if let Some(existing) = self.as_slice().get(index) {
            if !self.compare.less(key, X::key_of(existing)) {
                return Ok(Insertion::AlreadyPresent(index));
            }
        }
        self.seq.insert(index, item)?;
        Ok(Insertion::Inserted(index))
    }

    /// Removes every element.
    pub fn clear(&mut self) {
        self.seq.clear();
    }

    /// Keeps only the elements for which `keep` returns `true`, in order.
    pub fn retain<F>(&mut self, mut keep: F)
    where
        F: FnMut(&S::Item) -> bool,
    {
        let mut index = 0;
        while index < self.seq.len() {
            if keep(&self.seq[index]) {
                index += 1;
            } else {
                self.seq.erase(index..index + 1);
            }
        }
    }
}

impl<S, X, C, P> SortedUnique<S, X, C, P>
where
    S: Storage,
    S::Item: Default,
    X: KeyOf<S::Item>,
    C: Compare<X::Key>,
    P: TransferPolicy<S::Item>,
{
    /// Removes and returns the element equivalent to `key`, or `None` if no
    /// such element exists.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fixed_containers::generic::sorted_unique::FixedSet;
    ///
    /// let mut set: FixedSet<u32, 4> = FixedSet::try_from_iter([3, 1, 2]).unwrap();
    /// assert_eq!(set.erase(&2), Some(2));
    /// assert_eq!(set.erase(&2), None);
    /// assert_eq!(set.as_slice(), &[1, 3]);
    /// ```
    pub fn erase(&mut self, key: &X::Key) -> Option<S::Item> {
        let index = self.find(key)?;
        Some(self.seq.remove(index))
    }

    /// Removes and returns the element at `index`.
    pub fn erase_at(&mut self, index: usize) -> S::Item {
        self.seq.remove(index)
    }
}

impl<K, V, const N: usize, C, P> SortedUnique<ArrayStore<(K, V), N>, First, C, P>
where
    C: Compare<K>,
{
    /// The value stored under `key`.
    pub fn get_value(&self, key: &K) -> Option<&V> {
        self.get(key).map(|(_, value)| value)
    }

    /// Mutable access to the value stored under `key`. Keys stay immutable.
    pub fn get_value_mut(&mut self, key: &K) -> Option<&mut V> {
        let index = self.find(key)?;
        Some(&mut self.seq.as_mut_slice()[index].1)
    }

    pub fn keys(&self) -> impl DoubleEndedIterator<Item = &K> + '_ {
        self.iter().map(|(key, _)| key)
    }

    pub fn values(&self) -> impl DoubleEndedIterator<Item = &V> + '_ {
        self.iter().map(|(_, value)| value)
    }
}

impl<K, V, const N: usize, C, P> SortedUnique<ArrayStore<(K, V), N>, First, C, P>
where
    C: Compare<K>,
    P: TransferPolicy<(K, V)>,
{
    /// Inserts `(key, value)`, or overwrites the value if `key` is present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fixed_containers::generic::sorted_unique::{FixedMap, Insertion};
    ///
    /// let mut map: FixedMap<u8, char, 2> = FixedMap::new();
    /// assert_eq!(map.insert_or_assign(2, 'b').unwrap(), Insertion::Inserted(0));
    /// assert_eq!(map.insert_or_assign(2, 'B').unwrap(), Insertion::AlreadyPresent(0));
    /// assert_eq!(map.get_value(&2), Some(&'B'));
    /// ```
    pub fn insert_or_assign(&mut self, key: K, value: V) -> Result<Insertion, CollectionError> {
        if let Some(index) = self.find(&key) {
            self.seq.as_mut_slice()[index].1 = value;
            return Ok(Insertion::AlreadyPresent(index));
        }
        self.insert((key, value))
    }
}

impl<S, X, C, P> Clone for SortedUnique<S, X, C, P>
where
    S: Storage + Default,
    C: Clone,
    P: TransferPolicy<S::Item>,
{
    fn clone(&self) -> Self {
        Self {
            seq: self.seq.clone(),
            compare: self.compare.clone(),
            _key: PhantomData,
        }
    }
}

impl<S: Storage, X, C, P> fmt::Debug for SortedUnique<S, X, C, P>
where
    S::Item: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<S, X, C, P, S2, X2, C2, P2> PartialEq<SortedUnique<S2, X2, C2, P2>> for SortedUnique<S, X, C, P>
where
    S: Storage,
    S2: Storage,
    S::Item: PartialEq<S2::Item>,
{
    fn eq(&self, other: &SortedUnique<S2, X2, C2, P2>) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<S, X, C, P> Eq for SortedUnique<S, X, C, P>
where
    S: Storage,
    S::Item: Eq,
{
}

impl<'a, S: Storage, X, C, P> IntoIterator for &'a SortedUnique<S, X, C, P> {
    type Item = &'a S::Item;
    type IntoIter = core::slice::Iter<'a, S::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
