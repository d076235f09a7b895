//! # Fixed Containers
//!
//! Fixed-capacity sequence, set and map containers that never touch the heap.
//!
//! Every container stores its elements inline, so its size is known at compile time and
//! every operation is a bounded, deterministic, in-place mutation. Growing past the bound
//! is a reported error, never a silent reallocation.
//!
//! ## Features
//!
//! ### Containers
//!
//! - **[`FixedVec<T, N, P>`]** – vector-like sequence of at most `N` elements
//! - **[`FixedSet<T, N, C>`]** – strictly ascending, duplicate-free set kept sorted by binary search
//! - **[`FixedMap<K, V, N, C>`]** – the same over `(key, value)` pairs, ordered by key
//!
//! ### Building Blocks
//!
//! - **[`Storage`]** / **[`ArrayStore<T, N>`]** – the fixed slot store under a sequence
//! - **[`TransferPolicy<T>`]** – how elements are copied, moved, filled and retired;
//!   [`CloneTransfer`] by default, [`PodTransfer`] for `bytemuck::Pod` bulk byte copies
//! - **[`KeyOf`]** / **[`Compare`]** – key projection and strict weak ordering for the sorted containers
//!
//! ## Failure Model
//!
//! - **Capacity** – operations that would exceed the bound return
//!   [`CollectionError::CapacityExceeded`] and leave the container unchanged.
//! - **Caller contract** – invalid indices or positions, popping an empty sequence and other
//!   misuse panic when `debug_assertions` are on or the `checked` feature is enabled. With
//!   checks compiled out the result is unspecified (but memory safe).
//!
//! ## Cargo Features
//!
//! - `checked` – keep precondition checks in optimised builds
//! - `serde` – `Serialize`/`Deserialize` for the sequence and the sorted containers
//!
//! ## Quick Examples
//!
//! ### Using FixedVec
//!
//! ```rust
//! use fixed_containers::generic::fixed_vec::FixedVec;
//!
//! // A sequence that can hold up to 10 `i32`s without heap allocation
//! let mut list: FixedVec<i32, 10> = FixedVec::from_elem(6, &7).unwrap();
//!
//! list.insert_slice(3, &[1, 2, 3]).unwrap();
//! assert_eq!(list.as_slice(), &[7, 7, 7, 1, 2, 3, 7, 7, 7]);
//!
//! list.erase(2..4);
//! assert_eq!(list.as_slice(), &[7, 7, 2, 3, 7, 7, 7]);
//!
//! // Exceeding the bound is an error, not a reallocation
//! assert!(list.insert_n(0, 4, &0).is_err());
//! assert_eq!(list.len(), 7);
//! ```
//!
//! ### Using FixedSet
//!
//! ```rust
//! use fixed_containers::generic::sorted_unique::{FixedSet, Insertion};
//!
//! let mut set: FixedSet<u32, 8> = FixedSet::new();
//!
//! set.insert(5).unwrap();
//! set.insert(3).unwrap();
//! assert_eq!(set.insert(5).unwrap(), Insertion::AlreadyPresent(1));
//! assert_eq!(set.as_slice(), &[3, 5]);
//! assert!(set.contains(&3));
//! ```
//!
//! ### Using FixedMap
//!
//! ```rust
//! use fixed_containers::generic::sorted_unique::FixedMap;
//!
//! let mut balances: FixedMap<u64, u64, 4> = FixedMap::new();
//!
//! balances.insert_or_assign(7, 1_000).unwrap();
//! balances.insert_or_assign(2, 50).unwrap();
//! *balances.get_value_mut(&7).unwrap() += 1;
//!
//! assert_eq!(balances.get_value(&7), Some(&1_001));
//! assert_eq!(balances.keys().copied().collect::<Vec<_>>(), vec![2, 7]);
//! ```
//!
//! ### Plugging in a Transfer Policy
//!
//! ```rust
//! use fixed_containers::generic::fixed_vec::FixedVec;
//! use fixed_containers::generic::transfer::PodTransfer;
//!
//! // Byte buffers shift and copy with single memory operations
//! let mut line: FixedVec<u8, 32, PodTransfer> = FixedVec::from_slice(&b"world"[..]).unwrap();
//! line.insert_slice(0, b"hello ").unwrap();
//! assert_eq!(line.as_slice(), b"hello world");
//! ```
//!
//! [`FixedVec<T, N, P>`]: generic::fixed_vec::FixedVec
//! [`FixedSet<T, N, C>`]: generic::sorted_unique::FixedSet
//! [`FixedMap<K, V, N, C>`]: generic::sorted_unique::FixedMap
//! [`Storage`]: generic::storage::Storage
//! [`ArrayStore<T, N>`]: generic::storage::ArrayStore
//! [`TransferPolicy<T>`]: generic::transfer::TransferPolicy
//! [`CloneTransfer`]: generic::transfer::CloneTransfer
//! [`PodTransfer`]: generic::transfer::PodTransfer
//! [`KeyOf`]: generic::ordering::KeyOf
//! [`Compare`]: generic::ordering::Compare
//! [`CollectionError::CapacityExceeded`]: error::CollectionError::CapacityExceeded

pub mod error;
pub mod generic;
pub mod macros;

pub mod prelude {
    pub use crate::error::CollectionError;
    pub use crate::generic::fixed_vec::{BasicFixedVec, FixedVec};
    pub use crate::generic::ordering::{
        Compare, First, FnCompare, Identity, KeyOf, NaturalOrder, ReverseOrder,
    };
    pub use crate::generic::sorted_unique::{FixedMap, FixedSet, Insertion, SortedUnique};
    pub use crate::generic::storage::{ArrayStore, Storage};
    pub use crate::generic::transfer::{CloneTransfer, PodTransfer, TransferPolicy};
}
