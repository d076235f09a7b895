//! Fixed-length slot storage underneath the bounded containers.
//!
//! This module provides the [`Storage`] trait, the contract a backing store has
//! to satisfy to sit under a [`BasicFixedVec`], and [`ArrayStore`], the inline
//! `[T; N]` implementation used by the [`FixedVec`] alias.
//!
//! A store never grows and never allocates. Every slot always holds a live
//! value; slots past a container's active length keep whatever the last
//! transfer left there and are never observed through the public API.
//!
//! [`BasicFixedVec`]: crate::generic::fixed_vec::BasicFixedVec
//! [`FixedVec`]: crate::generic::fixed_vec::FixedVec

use core::ops::{Index, IndexMut};

/// Fixed-capacity indexed slot storage.
///
/// Implementors expose the full `CAPACITY`-slot extent; bounds checking against
/// a container's active length is the container's job, not the store's.
///
/// # Examples
///
/// ```rust
/// use fixed_containers::generic::storage::{ArrayStore, Storage};
///
/// let mut store: ArrayStore<u8, 4> = ArrayStore::new();
/// store.slots_mut()[2] = 9;
///
/// assert_eq!(<ArrayStore<u8, 4> as Storage>::CAPACITY, 4);
/// assert_eq!(store.slots(), &[0, 0, 9, 0]);
/// ```
pub trait Storage {
    /// Element type held in each slot.
    type Item;

    /// Number of slots, fixed at the type level.
    const CAPACITY: usize;

    /// All `CAPACITY` slots, active or not.
    fn slots(&self) -> &[Self::Item];

    /// All `CAPACITY` slots, mutably.
    fn slots_mut(&mut self) -> &mut [Self::Item];
}

/// Inline storage of `N` slots of `T`.
///
/// # Type Parameters
///
/// * `T` - The slot type. Must implement `Default` so every slot starts live.
/// * `N` - The number of slots (compile-time constant).
#[derive(Clone, Copy, Debug)]
pub struct ArrayStore<T, const N: usize> {
    slots: [T; N],
}

impl<T: Default, const N: usize> Default for ArrayStore<T, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Default, const N: usize> ArrayStore<T, N> {
    /// Creates a store with every slot set to `T::default()`.
    pub fn new() -> Self {
        Self {
            slots: core::array::from_fn(|_| T::default()),
        }
    }
}

impl<T, const N: usize> ArrayStore<T, N> {
    /// Wraps an existing array; every element becomes a slot.
    pub const fn from_array(slots: [T; N]) -> Self {
        Self { slots }
    }

    /// Number of slots.
    pub const fn capacity(&self) -> usize {
        N
    }

    pub fn into_array(self) -> [T; N] {
        self.slots
    }
}

impl<T, const N: usize> Storage for ArrayStore<T, N> {
    type Item = T;

    const CAPACITY: usize = N;

    fn slots(&self) -> &[T] {
        &self.slots
    }

    fn slots_mut(&mut self) -> &mut [T] {
        &mut self.slots
    }
}

impl<T, const N: usize> Index<usize> for ArrayStore<T, N> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.slots[index]
    }
}

impl<T, const N: usize> IndexMut<usize> for ArrayStore<T, N> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.slots[index]
    }
}
