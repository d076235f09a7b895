//! `serde` support, enabled by the `serde` feature.
//!
//! Both containers serialize as plain sequences of their active elements.
//! Deserializing enforces the capacity bound, and a [`SortedUnique`] rejects
//! input that carries the same key twice.

use core::fmt;
use core::marker::PhantomData;

use serde::de::{self, Deserialize, Deserializer, SeqAccess, Visitor};
use serde::ser::{Serialize, Serializer};

use crate::generic::fixed_vec::BasicFixedVec;
use crate::generic::ordering::{Compare, KeyOf};
use crate::generic::sorted_unique::{Insertion, SortedUnique};
use crate::generic::storage::Storage;
use crate::generic::transfer::TransferPolicy;

impl<S, P> Serialize for BasicFixedVec<S, P>
where
    S: Storage,
    S::Item: Serialize,
{
    fn serialize<Ser: Serializer>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error> {
        serializer.collect_seq(self.iter())
    }
}

struct FixedVecVisitor<S, P>(PhantomData<fn() -> (S, P)>);

impl<'de, S, P> Visitor<'de> for FixedVecVisitor<S, P>
where
    S: Storage + Default,
    S::Item: Deserialize<'de>,
    P: TransferPolicy<S::Item>,
{
    type Value = BasicFixedVec<S, P>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "a sequence of at most {} elements", S::CAPACITY)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
        let mut list = BasicFixedVec::new();
        while let Some(item) = seq.next_element()? {
            list.push_back(item).map_err(<A::Error as de::Error>::custom)?;
        }
        Ok(list)
    }
}

impl<'de, S, P> Deserialize<'de> for BasicFixedVec<S, P>
where
    S: Storage + Default,
    S::Item: Deserialize<'de>,
    P: TransferPolicy<S::Item>,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_seq(FixedVecVisitor(PhantomData))
    }
}

impl<S, X, C, P> Serialize for SortedUnique<S, X, C, P>
where
    S: Storage,
    S::Item: Serialize,
{
    fn serialize<Ser: Serializer>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error> {
        serializer.collect_seq(self.iter())
    }
}

struct SortedUniqueVisitor<S, X, C, P>(PhantomData<fn() -> (S, X, C, P)>);

impl<'de, S, X, C, P> Visitor<'de> for SortedUniqueVisitor<S, X, C, P>
where
    S: Storage + Default,
    S::Item: Deserialize<'de>,
    X: KeyOf<S::Item>,
    C: Compare<X::Key> + Default,
    P: TransferPolicy<S::Item>,
{
    type Value = SortedUnique<S, X, C, P>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "a sequence of at most {} distinct keys", S::CAPACITY)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
        let mut set = SortedUnique::new();
        while let Some(item) = seq.next_element()? {
            match set.insert(item).map_err(<A::Error as de::Error>::custom)? {
                Insertion::Inserted(_) => {}
                Insertion::AlreadyPresent(index) => {
                    return Err(de::Error::custom(format_args!(
                        "duplicate key (equivalent to element {index})"
                    )));
                }
            }
        }
        Ok(set)
    }
}

impl<'de, S, X, C, P> Deserialize<'de> for SortedUnique<S, X, C, P>
where
    S: Storage + Default,
    S::Item: Deserialize<'de>,
    X: KeyOf<S::Item>,
    C: Compare<X::Key> + Default,
    P: TransferPolicy<S::Item>,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_seq(SortedUniqueVisitor(PhantomData))
    }
}
